#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative progression state for the reverse_brainrot focus widget.

mod penalty;
mod wallet;

use reverse_brainrot_core::{
    level_for, pet_stage_for, Command, Event, Level, PENALTY_XP_LOSS, XP_GAIN,
};
use tracing::{debug, info};

use self::{penalty::PenaltyStreak, wallet::Wallet};

/// Represents the authoritative progression state.
///
/// The world starts focused with every counter zeroed. It is only ever
/// mutated through [`apply`].
#[derive(Debug)]
pub struct World {
    focused: bool,
    xp: u32,
    level: Level,
    wallet: Wallet,
    penalty_streak: PenaltyStreak,
    tick_index: u64,
}

impl World {
    /// Creates a new world in its startup state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            focused: true,
            xp: 0,
            level: Level::FLOOR,
            wallet: Wallet::default(),
            penalty_streak: PenaltyStreak::default(),
            tick_index: 0,
        }
    }

    fn focus_tick(&mut self, out_events: &mut Vec<Event>) {
        self.xp = self.xp.saturating_add(XP_GAIN);
        out_events.push(Event::XpGained {
            amount: XP_GAIN,
            total: self.xp,
        });

        // Coins scale with the level held before this tick's experience lands.
        let reward = self.level.get();
        self.wallet.deposit(reward);
        out_events.push(Event::CoinsEarned {
            amount: reward,
            total: self.wallet.coins(),
        });

        debug!(
            tick = self.tick_index,
            xp = self.xp,
            coins = self.wallet.coins(),
            "focused tick"
        );
        self.recompute_level(out_events);
    }

    fn penalty_tick(&mut self, out_events: &mut Vec<Event>) {
        let before = self.xp;
        self.xp = self.xp.saturating_sub(PENALTY_XP_LOSS);
        let advance = self.penalty_streak.advance();
        out_events.push(Event::PenaltyApplied {
            xp_lost: before - self.xp,
            total: self.xp,
            streak: advance.reached,
        });
        if advance.wrapped {
            out_events.push(Event::PenaltyStreakReset);
        }

        debug!(
            tick = self.tick_index,
            xp = self.xp,
            streak = self.penalty_streak.get(),
            "unfocused tick"
        );
        self.recompute_level(out_events);
    }

    fn recompute_level(&mut self, out_events: &mut Vec<Event>) {
        let level = level_for(self.xp);
        if level == self.level {
            return;
        }

        info!(from = self.level.get(), to = level.get(), "level changed");
        out_events.push(Event::LevelChanged {
            from: self.level,
            to: level,
        });

        let previous_stage = pet_stage_for(self.level);
        let stage = pet_stage_for(level);
        self.level = level;
        if previous_stage != stage {
            info!(stage = stage.name, "pet stage changed");
            out_events.push(Event::PetEvolved {
                from: previous_stage,
                to: stage,
            });
        }
    }

    fn set_activation(&mut self, active: bool, out_events: &mut Vec<Event>) {
        if active == self.focused {
            return;
        }

        self.focused = active;
        info!(focused = active, "focus changed");
        out_events.push(Event::FocusChanged { focused: active });

        // Regaining focus clears the unfocused readout immediately.
        if active && self.penalty_streak.reset() {
            out_events.push(Event::PenaltyStreakReset);
        }
    }

    fn claim_reward(&mut self, out_events: &mut Vec<Event>) {
        match self.wallet.purchase_next() {
            Ok(purchase) => {
                info!(
                    badge = purchase.name,
                    cost = purchase.cost,
                    "badge claimed"
                );
                out_events.push(Event::BadgeClaimed {
                    rank: purchase.rank,
                    cost: purchase.cost,
                    remaining: self.wallet.coins(),
                });
            }
            Err(reason) => {
                debug!(?reason, "reward claim rejected");
                out_events.push(Event::RewardClaimRejected { reason });
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, emitting resulting events.
///
/// Every command runs to completion before the next one is applied, so the
/// focus flag observed by a tick is always the one left by the previous
/// command.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick => {
            world.tick_index = world.tick_index.saturating_add(1);
            out_events.push(Event::TimeAdvanced {
                focused: world.focused,
            });
            if world.focused {
                world.focus_tick(out_events);
            } else {
                world.penalty_tick(out_events);
            }
        }
        Command::ActivationChanged { active } => world.set_activation(active, out_events),
        Command::ClaimReward => world.claim_reward(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use reverse_brainrot_core::{
        pet_stage_for, xp_bounds_for, Affordability, BadgeRank, Level, PetStage,
        ProgressionSnapshot, BADGE_TIERS,
    };

    use super::World;

    /// Reports whether the application currently holds focus.
    #[must_use]
    pub fn is_focused(world: &World) -> bool {
        world.focused
    }

    /// Current experience total.
    #[must_use]
    pub fn xp(world: &World) -> u32 {
        world.xp
    }

    /// Current coin balance.
    #[must_use]
    pub fn coins(world: &World) -> u32 {
        world.wallet.coins()
    }

    /// Current level.
    #[must_use]
    pub fn level(world: &World) -> Level {
        world.level
    }

    /// Consecutive unfocused ticks since the last reset.
    #[must_use]
    pub fn penalty_streak(world: &World) -> u32 {
        world.penalty_streak.get()
    }

    /// Highest badge rank purchased.
    #[must_use]
    pub fn badge_rank(world: &World) -> BadgeRank {
        world.wallet.badge_rank()
    }

    /// Number of ticks applied since startup.
    #[must_use]
    pub fn ticks_elapsed(world: &World) -> u64 {
        world.tick_index
    }

    /// Pet stage matching the current level.
    #[must_use]
    pub fn pet_stage(world: &World) -> &'static PetStage {
        pet_stage_for(world.level)
    }

    /// Describes the next badge tier and whether it can be claimed now.
    #[must_use]
    pub fn affordability(world: &World) -> Affordability {
        world.wallet.affordability()
    }

    /// Captures everything the display surface renders.
    #[must_use]
    pub fn snapshot(world: &World) -> ProgressionSnapshot {
        let bounds = xp_bounds_for(world.level);
        let rank = world.wallet.badge_rank();
        let badge_name = rank.tier().map_or(BADGE_TIERS[0].name, |tier| tier.name);
        let affordability = world.wallet.affordability();
        let (next_badge_name, next_badge_cost) = match affordability {
            Affordability::Available { name, cost, .. } => (Some(name), Some(cost)),
            Affordability::MaxTierReached => (None, None),
        };

        ProgressionSnapshot {
            level: world.level,
            xp: world.xp,
            xp_floor_for_level: bounds.floor,
            xp_ceiling_for_next_level: bounds.ceiling,
            coins: world.wallet.coins(),
            focused: world.focused,
            penalty_streak: world.penalty_streak.get(),
            badge_rank: rank,
            badge_name,
            pet_glyph: pet_stage_for(world.level).glyph,
            next_badge_name,
            next_badge_cost,
            can_claim_next: affordability.can_claim(),
        }
    }
}
