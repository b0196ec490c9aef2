//! Listing book — per-(collection, token) ordered sale listings.
//!
//! Sequence numbers are scoped to one asset and start at 1, so the current
//! listing count doubles as the latest listing's sequence number (callers
//! of the original system used exactly that to address the newest listing).
//! Closed listings stay in the book; they are terminal, never deleted.

use std::collections::HashMap;

use bazaar_types::{
    AccountId, AssetKey, BazaarError, Listing, ListingKey, ListingSeq, Result,
};
use chrono::Utc;
use rust_decimal::Decimal;

/// All listings, open and closed, plus per-asset sequence counters.
#[derive(Debug, Default)]
pub struct ListingBook {
    listings: HashMap<ListingKey, Listing>,
    counts: HashMap<AssetKey, u64>,
}

impl ListingBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new listing and assign it the asset's next sequence number.
    ///
    /// # Errors
    /// `InvalidPrice` if `unit_price <= 0`, `InvalidQuantity` if `quantity`
    /// is not a positive whole number. Balance and approval preconditions
    /// are the trade engine's job.
    pub fn create(
        &mut self,
        asset: AssetKey,
        seller: AccountId,
        unit_price: Decimal,
        quantity: Decimal,
    ) -> Result<ListingKey> {
        if unit_price <= Decimal::ZERO {
            return Err(BazaarError::InvalidPrice { price: unit_price });
        }
        if quantity <= Decimal::ZERO || !quantity.is_integer() {
            return Err(BazaarError::InvalidQuantity { quantity });
        }

        let count = self.counts.entry(asset).or_insert(0);
        *count += 1;
        let key = ListingKey::new(asset.collection, asset.token, ListingSeq(*count));

        self.listings.insert(
            key,
            Listing {
                seller,
                unit_price,
                quantity,
                remaining: quantity,
                created_at: Utc::now(),
            },
        );
        Ok(key)
    }

    /// Look up a listing.
    ///
    /// # Errors
    /// `NotFound` if no listing exists at `key`.
    pub fn get(&self, key: ListingKey) -> Result<&Listing> {
        self.listings.get(&key).ok_or(BazaarError::NotFound(key))
    }

    /// Decrement a listing's remaining quantity after a sale. Reaching zero
    /// closes the listing permanently.
    ///
    /// # Errors
    /// `NotFound`, `ListingClosed`, `InvalidQuantity` if `sold` is not a
    /// positive whole number, `OverSold` if `sold > remaining`.
    pub fn reduce(&mut self, key: ListingKey, sold: Decimal) -> Result<&Listing> {
        let listing = self
            .listings
            .get_mut(&key)
            .ok_or(BazaarError::NotFound(key))?;
        if listing.is_closed() {
            return Err(BazaarError::ListingClosed(key));
        }
        if sold <= Decimal::ZERO || !sold.is_integer() {
            return Err(BazaarError::InvalidQuantity { quantity: sold });
        }
        if sold > listing.remaining {
            return Err(BazaarError::OverSold {
                requested: sold,
                remaining: listing.remaining,
            });
        }
        listing.remaining -= sold;
        Ok(listing)
    }

    /// How many listings (open or closed) exist for `asset`. Doubles as the
    /// latest sequence number.
    #[must_use]
    pub fn listing_count(&self, asset: AssetKey) -> u64 {
        self.counts.get(&asset).copied().unwrap_or(0)
    }
}
