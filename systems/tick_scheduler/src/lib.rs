#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure scheduling system that converts frame time into whole-second ticks.

use std::time::Duration;

use reverse_brainrot_core::{Command, Event, TICK_INTERVAL};
use tracing::debug;

/// Accumulates elapsed time and emits [`Command::Tick`] once per second.
///
/// Missed seconds are coalesced: a frame that delivers several seconds at
/// once still produces a single tick, the way a periodic desktop timer
/// resumes after the process was stalled.
#[derive(Debug, Default)]
pub struct TickScheduler {
    accumulator: Duration,
}

impl TickScheduler {
    /// Creates a scheduler with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time accumulated toward the next tick.
    #[must_use]
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Consumes world events and the frame delta to emit tick commands.
    ///
    /// Losing focus restarts the phase so the first penalty tick lands a full
    /// interval after deactivation.
    pub fn handle(&mut self, events: &[Event], dt: Duration, out: &mut Vec<Command>) {
        for event in events {
            if let Event::FocusChanged { focused: false } = event {
                self.accumulator = Duration::ZERO;
            }
        }

        self.accumulator = self.accumulator.saturating_add(dt);
        if self.accumulator < TICK_INTERVAL {
            return;
        }

        let interval = TICK_INTERVAL.as_nanos();
        let elapsed = self.accumulator.as_nanos();
        let skipped = u64::try_from((elapsed / interval).saturating_sub(1)).unwrap_or(u64::MAX);
        if skipped > 0 {
            debug!(skipped, "coalesced missed ticks");
        }

        let remainder = u64::try_from(elapsed % interval).unwrap_or_default();
        self.accumulator = Duration::from_nanos(remainder);
        out.push(Command::Tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_frames_accumulate_without_ticking() {
        let mut scheduler = TickScheduler::new();
        let mut commands = Vec::new();

        for _ in 0..9 {
            scheduler.handle(&[], Duration::from_millis(100), &mut commands);
        }

        assert!(commands.is_empty());
        assert_eq!(scheduler.pending(), Duration::from_millis(900));
    }

    #[test]
    fn remainder_carries_into_next_interval() {
        let mut scheduler = TickScheduler::new();
        let mut commands = Vec::new();

        scheduler.handle(&[], Duration::from_millis(1_250), &mut commands);

        assert_eq!(commands, vec![Command::Tick]);
        assert_eq!(scheduler.pending(), Duration::from_millis(250));
    }
}
