//! Listing types for the Bazaar listing book.
//!
//! A [`Listing`] is an open offer to sell a bounded quantity of one asset at
//! a fixed unit price. `remaining` only ever decreases, via buys; once it
//! reaches zero the listing is closed and immutable. There is no
//! cancellation path.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    Active,
    Closed,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Closed => write!(f, "CLOSED"),
        }
    }
}

/// One sale listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// The identity selling; receives the post-split proceeds.
    pub seller: AccountId,
    /// Price per unit, strictly positive.
    pub unit_price: Decimal,
    /// Quantity at creation. `remaining` never exceeds this.
    pub quantity: Decimal,
    /// Units still for sale.
    pub remaining: Decimal,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
}

impl Listing {
    #[must_use]
    pub fn status(&self) -> ListingStatus {
        if self.remaining.is_zero() {
            ListingStatus::Closed
        } else {
            ListingStatus::Active
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Units sold so far.
    #[must_use]
    pub fn sold(&self) -> Decimal {
        self.quantity - self.remaining
    }
}
