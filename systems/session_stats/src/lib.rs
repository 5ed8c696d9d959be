#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Session statistics system that summarises focus behaviour.
//!
//! The system only reads the world's event stream. Its report lives in memory
//! for the lifetime of the process and is shown once when the widget closes.

mod report;

use reverse_brainrot_core::Event;

pub use self::report::{format_duration, SessionReport};

/// Pure statistics system that folds world events into a [`SessionReport`].
#[derive(Debug, Default)]
pub struct SessionStats {
    report: SessionReport,
    current_focus_streak: u64,
}

impl SessionStats {
    /// Creates a statistics system with an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the report accumulated so far.
    #[must_use]
    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Consumes world events emitted during a frame.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            match *event {
                Event::TimeAdvanced { focused: true } => {
                    self.report.focused_seconds = self.report.focused_seconds.saturating_add(1);
                    self.current_focus_streak = self.current_focus_streak.saturating_add(1);
                    self.report.longest_focus_streak = self
                        .report
                        .longest_focus_streak
                        .max(self.current_focus_streak);
                }
                Event::TimeAdvanced { focused: false } => {
                    self.report.unfocused_seconds =
                        self.report.unfocused_seconds.saturating_add(1);
                    self.current_focus_streak = 0;
                }
                Event::FocusChanged { focused: false } => {
                    self.current_focus_streak = 0;
                }
                Event::XpGained { amount, .. } => {
                    self.report.xp_earned = self.report.xp_earned.saturating_add(amount.into());
                }
                Event::PenaltyApplied { xp_lost, .. } => {
                    self.report.xp_lost = self.report.xp_lost.saturating_add(xp_lost.into());
                }
                Event::CoinsEarned { amount, .. } => {
                    self.report.coins_earned =
                        self.report.coins_earned.saturating_add(amount.into());
                }
                Event::BadgeClaimed { cost, .. } => {
                    self.report.coins_spent = self.report.coins_spent.saturating_add(cost.into());
                    self.report.badges_claimed = self.report.badges_claimed.saturating_add(1);
                }
                Event::LevelChanged { to, .. } => {
                    self.report.peak_level = self.report.peak_level.max(to);
                }
                _ => {}
            }
        }
    }
}
