use std::fmt;

use reverse_brainrot_core::Level;

/// Summary of a single widget session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Ticks spent focused.
    pub focused_seconds: u64,
    /// Ticks spent unfocused.
    pub unfocused_seconds: u64,
    /// Longest run of consecutive focused ticks.
    pub longest_focus_streak: u64,
    /// Experience awarded by focused ticks.
    pub xp_earned: u64,
    /// Experience actually removed by penalties.
    pub xp_lost: u64,
    /// Coins awarded by focused ticks.
    pub coins_earned: u64,
    /// Coins spent on badges.
    pub coins_spent: u64,
    /// Number of badge tiers purchased.
    pub badges_claimed: u32,
    /// Highest level reached.
    pub peak_level: Level,
}

impl SessionReport {
    /// Share of ticked time spent focused, rounded down to a whole percentage.
    ///
    /// Returns `None` before the first tick.
    #[must_use]
    pub fn focus_percentage(&self) -> Option<u64> {
        let total = self.focused_seconds.saturating_add(self.unfocused_seconds);
        if total == 0 {
            return None;
        }
        Some(self.focused_seconds.saturating_mul(100) / total)
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "focused {} / unfocused {}",
            format_duration(self.focused_seconds),
            format_duration(self.unfocused_seconds)
        )?;
        if let Some(percentage) = self.focus_percentage() {
            write!(f, " ({percentage}% focused)")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "longest focus streak {}",
            format_duration(self.longest_focus_streak)
        )?;
        writeln!(f, "xp +{} / -{}", self.xp_earned, self.xp_lost)?;
        writeln!(f, "coins +{} / -{}", self.coins_earned, self.coins_spent)?;
        write!(
            f,
            "badges claimed {}, peak level {}",
            self.badges_claimed,
            self.peak_level.get()
        )
    }
}

/// Formats whole seconds as `1h 02m 03s`, `2m 03s`, or `3s`.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m {secs:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}
