//! Consecutive unfocused tick counter.

use reverse_brainrot_core::PENALTY_RESET_TICKS;

/// Counts unfocused ticks and wraps once [`PENALTY_RESET_TICKS`] is reached.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PenaltyStreak {
    count: u32,
}

/// Outcome of recording a single unfocused tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StreakAdvance {
    /// Streak value reached by the tick before any wrap.
    pub(crate) reached: u32,
    /// Whether the streak wrapped back to zero.
    pub(crate) wrapped: bool,
}

impl PenaltyStreak {
    pub(crate) const fn get(&self) -> u32 {
        self.count
    }

    pub(crate) fn advance(&mut self) -> StreakAdvance {
        let reached = self.count.saturating_add(1);
        let wrapped = reached >= PENALTY_RESET_TICKS;
        self.count = if wrapped { 0 } else { reached };
        StreakAdvance { reached, wrapped }
    }

    /// Clears the streak, returning whether it held a non-zero value.
    pub(crate) fn reset(&mut self) -> bool {
        let was_active = self.count != 0;
        self.count = 0;
        was_active
    }
}
