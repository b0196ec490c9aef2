//! # bazaar-assets
//!
//! **State Plane**: role membership, asset ownership, operator approvals,
//! and the funds ledger that receives every payment leg.
//!
//! ## Architecture
//!
//! The State Plane sits below the trade engine:
//! 1. **RoleRegistry**: role-tag → set of authorized identities
//! 2. **AssetRegistry**: per-(collection, token) mint records + vaults
//! 3. **Vaults**: unique and divisible ownership behind one [`AssetOps`] trait
//! 4. **ApprovalRegistry**: standing transfer authorizations for the market
//! 5. **FundsLedger**: per-account credited sale proceeds and refunds
//!
//! ## Mutation discipline
//!
//! Every mutating call validates all of its preconditions before touching
//! state: either the full operation succeeds or nothing changed.

pub mod approvals;
pub mod funds;
pub mod registry;
pub mod roles;
pub mod vault;

pub use approvals::ApprovalRegistry;
pub use funds::FundsLedger;
pub use registry::AssetRegistry;
pub use roles::RoleRegistry;
pub use vault::{AssetOps, AssetVault, DivisibleVault, UniqueVault};
