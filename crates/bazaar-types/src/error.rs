//! Error types for the Bazaar marketplace ledger.
//!
//! All errors use the `BZ_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Role errors
//! - 2xx: Asset errors
//! - 3xx: Listing errors
//! - 4xx: Trade errors
//! - 9xx: General / internal errors
//!
//! Every error is recoverable at the caller boundary: no mutating operation
//! partially commits, so a failed call leaves the ledger exactly as it was.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AssetKey, CollectionId, ListingKey, Role};

/// Central error enum for all Bazaar ledger operations.
#[derive(Debug, Error)]
pub enum BazaarError {
    // =================================================================
    // Role Errors (1xx)
    // =================================================================
    /// The caller does not hold the required role capability.
    #[error("BZ_ERR_100: Unauthorized: caller is missing {role}")]
    Unauthorized { role: Role },

    // =================================================================
    // Asset Errors (2xx)
    // =================================================================
    /// The asset record already exists; mint happens exactly once per key.
    #[error("BZ_ERR_200: Already minted: {0}")]
    AlreadyMinted(AssetKey),

    /// The requested royalty rate exceeds the configured ceiling.
    #[error("BZ_ERR_201: Royalty {royalty}% exceeds maximum {max}%")]
    RoyaltyExceedsMax { royalty: u32, max: u32 },

    /// The quantity is invalid for the operation (zero, or != 1 for a
    /// unique-flavor collection).
    #[error("BZ_ERR_202: Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: Decimal },

    /// Not enough balance to perform the transfer or listing.
    #[error("BZ_ERR_203: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    /// Unique-flavor transfer from an identity that is not the owner.
    #[error("BZ_ERR_204: Not the owner of {0}")]
    NotOwner(AssetKey),

    /// The collection is not registered with this ledger.
    #[error("BZ_ERR_205: Unknown collection: {0}")]
    UnknownCollection(CollectionId),

    // =================================================================
    // Listing Errors (3xx)
    // =================================================================
    /// The requested listing was not found.
    #[error("BZ_ERR_300: Listing not found: {0}")]
    NotFound(ListingKey),

    /// The listing is fully sold and terminal.
    #[error("BZ_ERR_301: Listing closed: {0}")]
    ListingClosed(ListingKey),

    /// The buy requests more units than the listing has remaining.
    #[error("BZ_ERR_302: Oversold: requested {requested}, remaining {remaining}")]
    OverSold {
        requested: Decimal,
        remaining: Decimal,
    },

    /// The seller has not granted the marketplace a standing transfer
    /// authorization for this collection.
    #[error("BZ_ERR_303: Marketplace not approved for collection {0}")]
    NotApproved(CollectionId),

    /// Listings require a strictly positive unit price.
    #[error("BZ_ERR_304: Invalid unit price: {price}")]
    InvalidPrice { price: Decimal },

    // =================================================================
    // Trade Errors (4xx)
    // =================================================================
    /// The attached payment does not cover the purchase total.
    #[error("BZ_ERR_400: Insufficient payment: need {needed}, attached {attached}")]
    InsufficientPayment { needed: Decimal, attached: Decimal },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Configuration error (invalid fee rate, royalty ceiling, etc.).
    #[error("BZ_ERR_900: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, BazaarError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollectionId, ListingSeq, TokenId};

    #[test]
    fn error_display_contains_prefix() {
        let err = BazaarError::Unauthorized { role: Role::Minter };
        let msg = format!("{err}");
        assert!(msg.starts_with("BZ_ERR_100"), "Got: {msg}");
        assert!(msg.contains("MINTER_ROLE"));
    }

    #[test]
    fn insufficient_payment_display() {
        let err = BazaarError::InsufficientPayment {
            needed: Decimal::new(25, 2),
            attached: Decimal::new(5, 2),
        };
        let msg = format!("{err}");
        assert!(msg.contains("BZ_ERR_400"));
        assert!(msg.contains("0.25"));
        assert!(msg.contains("0.05"));
    }

    #[test]
    fn all_errors_have_bz_err_prefix() {
        let key = AssetKey::new(CollectionId::new(), TokenId(1));
        let listing = ListingKey::new(key.collection, key.token, ListingSeq(1));
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(BazaarError::AlreadyMinted(key)),
            Box::new(BazaarError::RoyaltyExceedsMax {
                royalty: 20,
                max: 10,
            }),
            Box::new(BazaarError::NotOwner(key)),
            Box::new(BazaarError::NotFound(listing)),
            Box::new(BazaarError::ListingClosed(listing)),
            Box::new(BazaarError::NotApproved(key.collection)),
            Box::new(BazaarError::Configuration("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("BZ_ERR_"),
                "Error missing BZ_ERR_ prefix: {msg}"
            );
        }
    }
}
