//! Fee and royalty split arithmetic.
//!
//! Rates are whole percents. Each cut is truncated toward zero at
//! [`constants::MONEY_SCALE`] decimal places and the seller receives the
//! remainder, so `royalty + platform_fee + seller == total` holds exactly
//! for every input — no value is created or destroyed by rounding.

use bazaar_types::constants;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The three-way division of one sale total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Paid to the asset's creator.
    pub royalty: Decimal,
    /// Paid to the configured fee recipient.
    pub platform_fee: Decimal,
    /// Paid to the listing's seller, including any rounding remainder.
    pub seller: Decimal,
}

impl Split {
    /// The sum of all three legs. Always equals the input total.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.royalty + self.platform_fee + self.seller
    }
}

/// Split `total` between creator, platform, and seller.
///
/// Callers guarantee `royalty_pct + fee_pct <= 100` (enforced at
/// configuration and mint time), so the seller share is never negative.
#[must_use]
pub fn split(total: Decimal, royalty_pct: u32, fee_pct: u32) -> Split {
    let cut = |pct: u32| {
        (total * Decimal::from(pct) / Decimal::from(constants::PERCENT_DENOMINATOR))
            .round_dp_with_strategy(constants::MONEY_SCALE, RoundingStrategy::ToZero)
    };
    let royalty = cut(royalty_pct);
    let platform_fee = cut(fee_pct);
    Split {
        royalty,
        platform_fee,
        seller: total - royalty - platform_fee,
    }
}
