//! Asset record types for the Bazaar ledger.
//!
//! An [`AssetRecord`] is created exactly once per `(collection, token)` key
//! and never deleted — it is the permanent record of the mint. Ownership
//! state lives in the vaults, not here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Which accounting model a collection uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetFlavor {
    /// One owner at a time, quantity always 1 (non-fungible).
    Unique,
    /// Balance-per-owner accounting, quantity may exceed 1 (semi-fungible).
    Divisible,
}

impl std::fmt::Display for AssetFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unique => write!(f, "UNIQUE"),
            Self::Divisible => write!(f, "DIVISIBLE"),
        }
    }
}

/// Immutable record of one mint.
///
/// The royalty rate is bounded by the ledger's `max_royalty` at mint time
/// and frozen permanently thereafter; later fee reconfiguration never
/// touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// The identity that minted the asset; receives royalties on every sale.
    pub creator: AccountId,
    /// Royalty rate in whole percent, frozen at mint.
    pub royalty: u32,
    /// Total supply minted (1 for unique-flavor assets).
    pub supply: Decimal,
    /// When the mint was committed.
    pub minted_at: DateTime<Utc>,
}
