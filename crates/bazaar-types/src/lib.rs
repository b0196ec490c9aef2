//! # bazaar-types
//!
//! Shared types, errors, and configuration for the **Bazaar** marketplace
//! ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`CollectionId`], [`TokenId`], [`ListingSeq`], [`AssetKey`], [`ListingKey`]
//! - **Role model**: [`Role`]
//! - **Asset model**: [`AssetFlavor`], [`AssetRecord`]
//! - **Listing model**: [`Listing`], [`ListingStatus`]
//! - **Event model**: [`MarketEvent`]
//! - **Configuration**: [`MarketConfig`], [`FeeConfig`]
//! - **Errors**: [`BazaarError`] with `BZ_ERR_` prefix codes
//! - **Constants**: money scale and percent arithmetic defaults

pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod listing;
pub mod role;

// Re-export all primary types at crate root for ergonomic imports:
//   use bazaar_types::{AccountId, AssetRecord, Listing, Role, ...};

pub use asset::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use listing::*;
pub use role::*;

// Constants are accessed via `bazaar_types::constants::FOO`
// (not re-exported to avoid name collisions).
