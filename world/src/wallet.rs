//! Coin balance and badge ladder bookkeeping.

use reverse_brainrot_core::{Affordability, BadgeRank, ClaimRejection};

/// Receipt produced by a successful badge purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Purchase {
    /// Rank reached by the purchase.
    pub(crate) rank: BadgeRank,
    /// Display name of the purchased tier.
    pub(crate) name: &'static str,
    /// Coins spent.
    pub(crate) cost: u32,
}

/// Spendable coins together with the highest badge rank paid for.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Wallet {
    coins: u32,
    badge_rank: BadgeRank,
}

impl Wallet {
    pub(crate) const fn coins(&self) -> u32 {
        self.coins
    }

    pub(crate) const fn badge_rank(&self) -> BadgeRank {
        self.badge_rank
    }

    /// Adds coins, saturating at the numeric ceiling.
    pub(crate) fn deposit(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    pub(crate) fn affordability(&self) -> Affordability {
        Affordability::evaluate(self.badge_rank, self.coins)
    }

    /// Buys the tier above the current rank. Nothing changes on rejection.
    pub(crate) fn purchase_next(&mut self) -> Result<Purchase, ClaimRejection> {
        match self.affordability() {
            Affordability::MaxTierReached => Err(ClaimRejection::MaxTierReached),
            Affordability::Available {
                cost,
                affordable: false,
                ..
            } => Err(ClaimRejection::InsufficientCoins {
                required: cost,
                available: self.coins,
            }),
            Affordability::Available {
                rank, name, cost, ..
            } => {
                self.coins = self.coins.saturating_sub(cost);
                self.badge_rank = rank;
                Ok(Purchase { rank, name, cost })
            }
        }
    }
}
