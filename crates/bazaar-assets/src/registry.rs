//! Asset registry — mint records plus per-collection vaults.
//!
//! The registry enforces the mint-once invariant and the royalty ceiling,
//! then hands ownership bookkeeping to the collection's vault. Mutations
//! validate everything before touching state, so a failed mint or transfer
//! leaves both the records and the vaults untouched.

use std::collections::HashMap;

use bazaar_types::{
    AccountId, AssetFlavor, AssetKey, AssetRecord, BazaarError, CollectionId, Result, Role,
};
use chrono::Utc;
use rust_decimal::Decimal;

use crate::roles::RoleRegistry;
use crate::vault::{AssetOps, AssetVault};

/// Per-(collection, token) mint records and ownership vaults.
#[derive(Debug)]
pub struct AssetRegistry {
    /// Royalty ceiling in whole percent. Fixed at construction.
    max_royalty: u32,
    /// One vault per registered collection.
    collections: HashMap<CollectionId, AssetVault>,
    /// Permanent mint records. Never deleted.
    records: HashMap<AssetKey, AssetRecord>,
}

impl AssetRegistry {
    /// Create an empty registry with the given royalty ceiling.
    #[must_use]
    pub fn new(max_royalty: u32) -> Self {
        Self {
            max_royalty,
            collections: HashMap::new(),
            records: HashMap::new(),
        }
    }

    /// Register a new collection of the given flavor. Construction-time
    /// wiring; returns the id the ledger will address it by.
    pub fn register_collection(&mut self, flavor: AssetFlavor) -> CollectionId {
        let id = CollectionId::new();
        self.collections.insert(id, AssetVault::new(flavor));
        id
    }

    /// The royalty ceiling. No operation may alter it after construction.
    #[must_use]
    pub fn max_royalty(&self) -> u32 {
        self.max_royalty
    }

    /// Flavor of a registered collection.
    #[must_use]
    pub fn flavor(&self, collection: CollectionId) -> Option<AssetFlavor> {
        self.collections.get(&collection).map(AssetVault::flavor)
    }

    /// Mint a new asset record and credit `quantity` units to `creator`.
    ///
    /// `caller` must hold the minter role in `roles`; `(collection, token)`
    /// must not already be minted; `royalty` must not exceed the ceiling;
    /// `quantity` must be valid for the collection's flavor (exactly 1 for
    /// unique).
    ///
    /// # Errors
    /// `UnknownCollection`, `Unauthorized`, `AlreadyMinted`,
    /// `RoyaltyExceedsMax`, `InvalidQuantity`.
    pub fn mint(
        &mut self,
        roles: &RoleRegistry,
        caller: AccountId,
        key: AssetKey,
        creator: AccountId,
        royalty: u32,
        quantity: Decimal,
    ) -> Result<&AssetRecord> {
        if !self.collections.contains_key(&key.collection) {
            return Err(BazaarError::UnknownCollection(key.collection));
        }
        roles.require(Role::Minter, caller)?;
        if self.records.contains_key(&key) {
            return Err(BazaarError::AlreadyMinted(key));
        }
        if royalty > self.max_royalty {
            return Err(BazaarError::RoyaltyExceedsMax {
                royalty,
                max: self.max_royalty,
            });
        }

        // The vault validates quantity for its flavor before mutating.
        let vault = self
            .collections
            .get_mut(&key.collection)
            .expect("collection checked above");
        vault.mint(key, creator, quantity)?;

        let record = AssetRecord {
            creator,
            royalty,
            supply: quantity,
            minted_at: Utc::now(),
        };
        Ok(self.records.entry(key).or_insert(record))
    }

    /// Move `quantity` units from `from` to `to`.
    ///
    /// # Errors
    /// `UnknownCollection`, plus the vault's `NotOwner` /
    /// `InsufficientBalance` / `InvalidQuantity` per flavor.
    pub fn transfer(
        &mut self,
        key: AssetKey,
        from: AccountId,
        to: AccountId,
        quantity: Decimal,
    ) -> Result<()> {
        let vault = self
            .collections
            .get_mut(&key.collection)
            .ok_or(BazaarError::UnknownCollection(key.collection))?;
        vault.transfer(key, from, to, quantity)
    }

    /// Units of `key` held by `identity`. 0 if never credited or the
    /// collection is unknown. Pure read.
    #[must_use]
    pub fn balance_of(&self, key: AssetKey, identity: AccountId) -> Decimal {
        self.collections
            .get(&key.collection)
            .map_or(Decimal::ZERO, |vault| vault.balance_of(key, identity))
    }

    /// Current owner, unique-flavor collections only.
    #[must_use]
    pub fn owner_of(&self, key: AssetKey) -> Option<AccountId> {
        self.collections
            .get(&key.collection)
            .and_then(|vault| vault.owner_of(key.token))
    }

    /// Whether `(collection, token)` has been minted.
    #[must_use]
    pub fn is_minted(&self, key: AssetKey) -> bool {
        self.records.contains_key(&key)
    }

    /// The permanent mint record, if any.
    #[must_use]
    pub fn record(&self, key: AssetKey) -> Option<&AssetRecord> {
        self.records.get(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_types::TokenId;

    struct Fixture {
        roles: RoleRegistry,
        registry: AssetRegistry,
        minter: AccountId,
        unique: CollectionId,
        divisible: CollectionId,
    }

    fn fixture() -> Fixture {
        let deployer = AccountId::new();
        let minter = AccountId::new();
        let mut roles = RoleRegistry::new(deployer);
        roles.grant_role(deployer, Role::Minter, minter).unwrap();

        let mut registry = AssetRegistry::new(10);
        let unique = registry.register_collection(AssetFlavor::Unique);
        let divisible = registry.register_collection(AssetFlavor::Divisible);
        Fixture {
            roles,
            registry,
            minter,
            unique,
            divisible,
        }
    }

    #[test]
    fn mint_creates_record_and_credits_creator() {
        let mut fx = fixture();
        let creator = AccountId::new();
        let key = AssetKey::new(fx.divisible, TokenId(1000));

        let record = fx
            .registry
            .mint(&fx.roles, fx.minter, key, creator, 10, Decimal::new(10, 0))
            .unwrap();
        assert_eq!(record.creator, creator);
        assert_eq!(record.royalty, 10);

        assert!(fx.registry.is_minted(key));
        assert_eq!(fx.registry.balance_of(key, creator), Decimal::new(10, 0));
    }

    #[test]
    fn double_mint_fails_and_keeps_first_record() {
        let mut fx = fixture();
        let first = AccountId::new();
        let second = AccountId::new();
        let key = AssetKey::new(fx.unique, TokenId(1000));

        fx.registry
            .mint(&fx.roles, fx.minter, key, first, 10, Decimal::ONE)
            .unwrap();
        let err = fx
            .registry
            .mint(&fx.roles, fx.minter, key, second, 5, Decimal::ONE)
            .unwrap_err();
        assert!(matches!(err, BazaarError::AlreadyMinted(_)));

        let record = fx.registry.record(key).unwrap();
        assert_eq!(record.creator, first);
        assert_eq!(record.royalty, 10);
    }

    #[test]
    fn royalty_above_max_rejected_even_for_minter() {
        let mut fx = fixture();
        let key = AssetKey::new(fx.unique, TokenId(1));
        let err = fx
            .registry
            .mint(&fx.roles, fx.minter, key, AccountId::new(), 11, Decimal::ONE)
            .unwrap_err();
        assert!(matches!(
            err,
            BazaarError::RoyaltyExceedsMax { royalty: 11, max: 10 }
        ));
        assert!(!fx.registry.is_minted(key));
    }

    #[test]
    fn mint_without_minter_role_fails() {
        let mut fx = fixture();
        let outsider = AccountId::new();
        let key = AssetKey::new(fx.unique, TokenId(1));
        let err = fx
            .registry
            .mint(&fx.roles, outsider, key, outsider, 5, Decimal::ONE)
            .unwrap_err();
        assert!(matches!(err, BazaarError::Unauthorized { role: Role::Minter }));
        assert!(!fx.registry.is_minted(key));
    }

    #[test]
    fn mint_into_unknown_collection_fails() {
        let mut fx = fixture();
        let key = AssetKey::new(CollectionId::new(), TokenId(1));
        let err = fx
            .registry
            .mint(&fx.roles, fx.minter, key, AccountId::new(), 5, Decimal::ONE)
            .unwrap_err();
        assert!(matches!(err, BazaarError::UnknownCollection(_)));
    }

    #[test]
    fn unique_mint_requires_quantity_one() {
        let mut fx = fixture();
        let key = AssetKey::new(fx.unique, TokenId(2));
        let err = fx
            .registry
            .mint(&fx.roles, fx.minter, key, AccountId::new(), 5, Decimal::new(3, 0))
            .unwrap_err();
        assert!(matches!(err, BazaarError::InvalidQuantity { .. }));
        assert!(!fx.registry.is_minted(key));
    }

    #[test]
    fn transfer_dispatches_to_flavor() {
        let mut fx = fixture();
        let (a, b) = (AccountId::new(), AccountId::new());
        let key = AssetKey::new(fx.unique, TokenId(1000));
        fx.registry
            .mint(&fx.roles, fx.minter, key, a, 10, Decimal::ONE)
            .unwrap();

        fx.registry.transfer(key, a, b, Decimal::ONE).unwrap();
        assert_eq!(fx.registry.owner_of(key), Some(b));
    }

    #[test]
    fn balance_of_unknown_collection_is_zero() {
        let fx = fixture();
        let key = AssetKey::new(CollectionId::new(), TokenId(1));
        assert_eq!(fx.registry.balance_of(key, AccountId::new()), Decimal::ZERO);
    }
}
