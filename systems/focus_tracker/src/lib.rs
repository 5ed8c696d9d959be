#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure focus tracking system that turns raw activation signals into commands.
//!
//! The tracker remembers the activation it last reported and forwards only
//! transitions as [`Command::ActivationChanged`]; repeated signals are dropped.

use reverse_brainrot_core::{Command, Event};
use tracing::{debug, trace};

/// Focus tracking system that forwards activation transitions.
#[derive(Debug, Clone)]
pub struct FocusTracker {
    reported: bool,
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTracker {
    /// Creates a tracker that assumes the window starts focused.
    #[must_use]
    pub const fn new() -> Self {
        Self { reported: true }
    }

    /// Activation most recently reported to the world.
    #[must_use]
    pub const fn reported(&self) -> bool {
        self.reported
    }

    /// Consumes world events and the raw activation signal to emit commands.
    ///
    /// World events keep the tracker aligned with the authoritative focus
    /// flag. A signal that repeats the known activation is dropped.
    pub fn handle(&mut self, events: &[Event], signal: Option<bool>, out: &mut Vec<Command>) {
        for event in events {
            if let Event::FocusChanged { focused } = event {
                self.reported = *focused;
            }
        }

        let Some(active) = signal else {
            return;
        };

        if active == self.reported {
            trace!(active, "ignoring repeated activation signal");
            return;
        }

        debug!(
            active,
            "window {}",
            if active { "activated" } else { "deactivated" }
        );
        self.reported = active;
        out.push(Command::ActivationChanged { active });
    }
}
