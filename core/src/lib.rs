#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the reverse_brainrot focus widget.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! that systems and the display surface react to. The fixed progression
//! tables and the pure derivations over them also live here so every layer
//! agrees on levels, badge tiers, and pet stages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Title shown by display surfaces that support one.
pub const WINDOW_TITLE: &str = "reverse_brainrot";

/// Length of a single progression tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Experience awarded for every focused tick.
pub const XP_GAIN: u32 = 5;

/// Experience removed for every unfocused tick, clamped at zero.
pub const PENALTY_XP_LOSS: u32 = 10;

/// Number of consecutive unfocused ticks after which the penalty streak wraps to zero.
pub const PENALTY_RESET_TICKS: u32 = 5;

/// Width of the experience bar shown once the top level has been reached.
pub const TOP_LEVEL_XP_SPAN: u32 = 100;

/// Commands that express all permissible progression mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// One second elapsed. The world applies the focus tick or the penalty
    /// tick depending on its focus flag at the moment the command is applied.
    Tick,
    /// The windowing environment reported an activation change.
    ActivationChanged {
        /// Whether the application now holds foreground focus.
        active: bool,
    },
    /// The user asked to purchase the next badge tier.
    ClaimReward,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that a tick was applied.
    TimeAdvanced {
        /// Focus flag that selected the tick handler.
        focused: bool,
    },
    /// Announces that the focus flag flipped.
    FocusChanged {
        /// Focus flag after the transition.
        focused: bool,
    },
    /// Confirms that a focused tick awarded experience.
    XpGained {
        /// Experience added by the tick.
        amount: u32,
        /// Experience total after the gain.
        total: u32,
    },
    /// Confirms that a focused tick awarded coins.
    CoinsEarned {
        /// Coins added by the tick.
        amount: u32,
        /// Coin balance after the gain.
        total: u32,
    },
    /// Reports that an unfocused tick applied the experience penalty.
    PenaltyApplied {
        /// Experience actually removed, which may be less than the nominal loss near zero.
        xp_lost: u32,
        /// Experience total after the penalty.
        total: u32,
        /// Penalty streak after the tick, before any wrap.
        streak: u32,
    },
    /// Reports that the penalty streak wrapped back to zero.
    PenaltyStreakReset,
    /// Announces that the derived level changed.
    LevelChanged {
        /// Level held before the experience change.
        from: Level,
        /// Level derived from the new experience total.
        to: Level,
    },
    /// Announces that the pet moved to a different stage.
    PetEvolved {
        /// Stage displayed before the level change.
        from: &'static PetStage,
        /// Stage displayed after the level change.
        to: &'static PetStage,
    },
    /// Confirms that a badge tier was purchased.
    BadgeClaimed {
        /// Rank reached by the purchase.
        rank: BadgeRank,
        /// Coins spent on the purchase.
        cost: u32,
        /// Coin balance left after the purchase.
        remaining: u32,
    },
    /// Reports that a claim was refused. State is unchanged.
    RewardClaimRejected {
        /// Specific reason the claim was refused.
        reason: ClaimRejection,
    },
}

/// Level reached by the player. Level 1 is always attainable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Level(u32);

impl Level {
    /// Lowest level, held with zero experience.
    pub const FLOOR: Self = Self(1);

    /// Creates a new level wrapper.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric level.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FLOOR
    }
}

/// Index into [`BADGE_TIERS`]. Rank zero is the starting "None" tier.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BadgeRank(u32);

impl BadgeRank {
    /// Starting rank that costs nothing.
    pub const NONE: Self = Self(0);

    /// Creates a new rank wrapper.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric rank.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Rank directly above this one, whether or not it exists in the table.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Tier described by this rank, or `None` when the rank lies past the ladder.
    #[must_use]
    pub fn tier(self) -> Option<&'static BadgeTier> {
        usize::try_from(self.0)
            .ok()
            .and_then(|index| BADGE_TIERS.get(index))
    }
}

/// Named, cost-gated rank in the reward ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BadgeTier {
    /// Display name of the tier.
    pub name: &'static str,
    /// Coins required to advance into the tier.
    pub cost_coins: u32,
}

/// Minimum experience required to hold a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelThreshold {
    /// Level unlocked at the threshold.
    pub level: Level,
    /// Experience at which the level is reached.
    pub xp_required: u32,
}

/// Cosmetic pet appearance unlocked at a minimum level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PetStage {
    /// Lowest level that displays this stage.
    pub min_level: Level,
    /// Human readable stage name.
    pub name: &'static str,
    /// Glyph rendered by the display surface.
    pub glyph: &'static str,
}

/// Badge ladder ordered by rank; costs strictly increase.
pub static BADGE_TIERS: [BadgeTier; 8] = [
    BadgeTier {
        name: "None",
        cost_coins: 0,
    },
    BadgeTier {
        name: "Copper",
        cost_coins: 10,
    },
    BadgeTier {
        name: "Bronze",
        cost_coins: 25,
    },
    BadgeTier {
        name: "Silver",
        cost_coins: 50,
    },
    BadgeTier {
        name: "Gold",
        cost_coins: 100,
    },
    BadgeTier {
        name: "Platinum",
        cost_coins: 250,
    },
    BadgeTier {
        name: "Diamond",
        cost_coins: 500,
    },
    BadgeTier {
        name: "Emerald",
        cost_coins: 1000,
    },
];

/// Experience thresholds ordered ascending by level.
pub static LEVEL_THRESHOLDS: [LevelThreshold; 10] = [
    threshold(1, 0),
    threshold(2, 50),
    threshold(3, 120),
    threshold(4, 210),
    threshold(5, 320),
    threshold(6, 460),
    threshold(7, 630),
    threshold(8, 830),
    threshold(9, 1060),
    threshold(10, 1320),
];

/// Pet stages ordered ascending by level requirement.
pub static PET_STAGES: [PetStage; 5] = [
    PetStage {
        min_level: Level::new(1),
        name: "Baby",
        glyph: "🐣",
    },
    PetStage {
        min_level: Level::new(3),
        name: "Hatchling",
        glyph: "🐥",
    },
    PetStage {
        min_level: Level::new(5),
        name: "Chick",
        glyph: "🐤",
    },
    PetStage {
        min_level: Level::new(7),
        name: "Parrot",
        glyph: "🦜",
    },
    PetStage {
        min_level: Level::new(10),
        name: "Dragon",
        glyph: "🐉",
    },
];

const fn threshold(level: u32, xp_required: u32) -> LevelThreshold {
    LevelThreshold {
        level: Level::new(level),
        xp_required,
    }
}

/// Derives the level held with the provided experience total.
///
/// The table is scanned from the highest threshold down and the first level
/// whose requirement is met wins. Level 1 has a zero threshold, so the
/// fallback is never observed in practice.
#[must_use]
pub fn level_for(xp: u32) -> Level {
    LEVEL_THRESHOLDS
        .iter()
        .rev()
        .find(|threshold| threshold.xp_required <= xp)
        .map_or(Level::FLOOR, |threshold| threshold.level)
}

/// Selects the pet stage displayed at the provided level.
#[must_use]
pub fn pet_stage_for(level: Level) -> &'static PetStage {
    PET_STAGES
        .iter()
        .rev()
        .find(|stage| stage.min_level <= level)
        .unwrap_or(&PET_STAGES[0])
}

/// Experience window spanned by a single level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XpBounds {
    /// Experience at which the level was reached.
    pub floor: u32,
    /// Experience at which the next level is reached. For the top level this
    /// is the floor plus [`TOP_LEVEL_XP_SPAN`].
    pub ceiling: u32,
}

/// Computes the experience window for the provided level.
#[must_use]
pub fn xp_bounds_for(level: Level) -> XpBounds {
    let position = LEVEL_THRESHOLDS
        .iter()
        .position(|threshold| threshold.level == level);
    let Some(position) = position else {
        return XpBounds {
            floor: 0,
            ceiling: TOP_LEVEL_XP_SPAN,
        };
    };

    let floor = LEVEL_THRESHOLDS
        .get(position)
        .map_or(0, |threshold| threshold.xp_required);
    let ceiling = LEVEL_THRESHOLDS
        .get(position + 1)
        .map_or(floor.saturating_add(TOP_LEVEL_XP_SPAN), |threshold| {
            threshold.xp_required
        });
    XpBounds { floor, ceiling }
}

/// Whether the next badge tier can be purchased.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordability {
    /// Another tier exists above the current rank.
    Available {
        /// Rank that the purchase would reach.
        rank: BadgeRank,
        /// Display name of that tier.
        name: &'static str,
        /// Coins required for the purchase.
        cost: u32,
        /// Whether the current balance covers the cost.
        affordable: bool,
    },
    /// The ladder is exhausted; nothing more can be claimed.
    MaxTierReached,
}

impl Affordability {
    /// Evaluates the tier above `current` against the provided coin balance.
    #[must_use]
    pub fn evaluate(current: BadgeRank, coins: u32) -> Self {
        let next = current.next();
        match next.tier() {
            Some(tier) => Self::Available {
                rank: next,
                name: tier.name,
                cost: tier.cost_coins,
                affordable: coins >= tier.cost_coins,
            },
            None => Self::MaxTierReached,
        }
    }

    /// Reports whether a claim issued now would succeed.
    #[must_use]
    pub const fn can_claim(&self) -> bool {
        matches!(
            self,
            Self::Available {
                affordable: true,
                ..
            }
        )
    }
}

/// Reasons a reward claim may be refused by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimRejection {
    /// The top tier is already held.
    MaxTierReached,
    /// The balance does not cover the next tier.
    InsufficientCoins {
        /// Cost of the next tier.
        required: u32,
        /// Coins held when the claim was made.
        available: u32,
    },
}

/// Read-only snapshot pushed to the display surface after every mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressionSnapshot {
    /// Current level.
    pub level: Level,
    /// Current experience total.
    pub xp: u32,
    /// Experience at which the current level was reached.
    pub xp_floor_for_level: u32,
    /// Experience at which the next level is reached.
    pub xp_ceiling_for_next_level: u32,
    /// Spendable coin balance.
    pub coins: u32,
    /// Whether the application holds foreground focus.
    pub focused: bool,
    /// Consecutive unfocused ticks since the last reset.
    pub penalty_streak: u32,
    /// Highest badge rank purchased.
    pub badge_rank: BadgeRank,
    /// Name of the held badge tier.
    pub badge_name: &'static str,
    /// Glyph of the current pet stage.
    pub pet_glyph: &'static str,
    /// Name of the next badge tier, absent once the ladder is exhausted.
    pub next_badge_name: Option<&'static str>,
    /// Cost of the next badge tier, absent once the ladder is exhausted.
    pub next_badge_cost: Option<u32>,
    /// Whether a claim issued now would succeed.
    pub can_claim_next: bool,
}

#[cfg(test)]
mod tests {
    use super::{
        level_for, pet_stage_for, xp_bounds_for, Affordability, BadgeRank, ClaimRejection,
        Level, BADGE_TIERS, LEVEL_THRESHOLDS, PET_STAGES, TOP_LEVEL_XP_SPAN,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn threshold_of(level: u32) -> Option<u32> {
        LEVEL_THRESHOLDS
            .iter()
            .find(|threshold| threshold.level.get() == level)
            .map(|threshold| threshold.xp_required)
    }

    #[test]
    fn level_for_returns_unique_matching_level() {
        let top = LEVEL_THRESHOLDS[LEVEL_THRESHOLDS.len() - 1].level;
        for xp in 0..=1_600 {
            let level = level_for(xp);
            let floor = threshold_of(level.get()).expect("derived level exists in table");
            assert!(floor <= xp, "threshold of {level:?} exceeds xp {xp}");
            if level != top {
                let next = threshold_of(level.get() + 1).expect("next level exists");
                assert!(next > xp, "xp {xp} already qualifies for level above {level:?}");
            }
        }
    }

    #[test]
    fn level_for_handles_threshold_edges() {
        assert_eq!(level_for(0), Level::new(1));
        assert_eq!(level_for(49), Level::new(1));
        assert_eq!(level_for(50), Level::new(2));
        assert_eq!(level_for(1_319), Level::new(9));
        assert_eq!(level_for(u32::MAX), Level::new(10));
    }

    #[test]
    fn pet_stage_tracks_highest_unlocked_stage() {
        assert_eq!(pet_stage_for(Level::new(1)).name, "Baby");
        assert_eq!(pet_stage_for(Level::new(2)).name, "Baby");
        assert_eq!(pet_stage_for(Level::new(3)).name, "Hatchling");
        assert_eq!(pet_stage_for(Level::new(6)).name, "Chick");
        assert_eq!(pet_stage_for(Level::new(9)).name, "Parrot");
        assert_eq!(pet_stage_for(Level::new(10)).name, "Dragon");
    }

    #[test]
    fn pet_stage_defaults_to_lowest_stage() {
        assert_eq!(pet_stage_for(Level::new(0)), &PET_STAGES[0]);
    }

    #[test]
    fn xp_bounds_span_to_next_threshold() {
        let bounds = xp_bounds_for(Level::new(2));
        assert_eq!((bounds.floor, bounds.ceiling), (50, 120));
    }

    #[test]
    fn xp_bounds_extend_past_top_level() {
        let bounds = xp_bounds_for(Level::new(10));
        assert_eq!(bounds.floor, 1_320);
        assert_eq!(bounds.ceiling, 1_320 + TOP_LEVEL_XP_SPAN);
    }

    #[test]
    fn tables_are_strictly_ordered() {
        assert_eq!(BADGE_TIERS[0].cost_coins, 0);
        assert!(BADGE_TIERS
            .windows(2)
            .all(|pair| pair[0].cost_coins < pair[1].cost_coins));
        assert_eq!(LEVEL_THRESHOLDS[0].xp_required, 0);
        assert!(LEVEL_THRESHOLDS
            .windows(2)
            .all(|pair| pair[0].level < pair[1].level
                && pair[0].xp_required < pair[1].xp_required));
        assert!(PET_STAGES
            .windows(2)
            .all(|pair| pair[0].min_level < pair[1].min_level));
    }

    #[test]
    fn affordability_reports_next_tier() {
        let affordability = Affordability::evaluate(BadgeRank::NONE, 9);
        assert_eq!(
            affordability,
            Affordability::Available {
                rank: BadgeRank::new(1),
                name: "Copper",
                cost: 10,
                affordable: false,
            }
        );
        assert!(!affordability.can_claim());
        assert!(Affordability::evaluate(BadgeRank::NONE, 10).can_claim());
    }

    #[test]
    fn affordability_is_terminal_at_top_rank() {
        let top = BadgeRank::new(7);
        let affordability = Affordability::evaluate(top, u32::MAX);
        assert_eq!(affordability, Affordability::MaxTierReached);
        assert!(!affordability.can_claim());
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn claim_rejection_round_trips_through_bincode() {
        assert_round_trip(&ClaimRejection::InsufficientCoins {
            required: 25,
            available: 3,
        });
    }

    #[test]
    fn badge_rank_round_trips_through_bincode() {
        assert_round_trip(&BadgeRank::new(4));
    }
}
