//! Asset vaults — ownership state behind one capability trait.
//!
//! The trade engine is written once against [`AssetOps`]; the unique /
//! divisible split is dispatched only here, at the registry boundary. A
//! unique vault keeps a single owner per token; a divisible vault keeps a
//! balance per (token, owner) pair with the invariant that balances sum to
//! the minted supply.

use std::collections::HashMap;

use bazaar_types::{AccountId, AssetFlavor, AssetKey, BazaarError, Result, TokenId};
use rust_decimal::Decimal;

/// The shared capability set both asset flavors implement.
pub trait AssetOps {
    /// Credit `quantity` freshly minted units of `key` to `owner`.
    fn mint(&mut self, key: AssetKey, owner: AccountId, quantity: Decimal) -> Result<()>;

    /// Move `quantity` units of `key` from `from` to `to`.
    fn transfer(
        &mut self,
        key: AssetKey,
        from: AccountId,
        to: AccountId,
        quantity: Decimal,
    ) -> Result<()>;

    /// How many units of `key` the identity holds. 0 if never credited.
    fn balance_of(&self, key: AssetKey, identity: AccountId) -> Decimal;
}

// ---------------------------------------------------------------------------
// UniqueVault
// ---------------------------------------------------------------------------

/// Single-owner vault: quantity is always exactly 1.
#[derive(Debug, Default)]
pub struct UniqueVault {
    owners: HashMap<TokenId, AccountId>,
}

impl UniqueVault {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current owner of `token`, if minted.
    #[must_use]
    pub fn owner_of(&self, token: TokenId) -> Option<AccountId> {
        self.owners.get(&token).copied()
    }
}

impl AssetOps for UniqueVault {
    fn mint(&mut self, key: AssetKey, owner: AccountId, quantity: Decimal) -> Result<()> {
        if quantity != Decimal::ONE {
            return Err(BazaarError::InvalidQuantity { quantity });
        }
        // Double-mint is caught by the registry's record check; the vault
        // still refuses to silently replace an owner.
        if self.owners.contains_key(&key.token) {
            return Err(BazaarError::AlreadyMinted(key));
        }
        self.owners.insert(key.token, owner);
        Ok(())
    }

    fn transfer(
        &mut self,
        key: AssetKey,
        from: AccountId,
        to: AccountId,
        quantity: Decimal,
    ) -> Result<()> {
        if quantity != Decimal::ONE {
            return Err(BazaarError::InvalidQuantity { quantity });
        }
        match self.owners.get(&key.token) {
            Some(owner) if *owner == from => {
                self.owners.insert(key.token, to);
                Ok(())
            }
            _ => Err(BazaarError::NotOwner(key)),
        }
    }

    fn balance_of(&self, key: AssetKey, identity: AccountId) -> Decimal {
        match self.owners.get(&key.token) {
            Some(owner) if *owner == identity => Decimal::ONE,
            _ => Decimal::ZERO,
        }
    }
}

// ---------------------------------------------------------------------------
// DivisibleVault
// ---------------------------------------------------------------------------

/// Balance-per-owner vault for semi-fungible assets.
#[derive(Debug, Default)]
pub struct DivisibleVault {
    balances: HashMap<(TokenId, AccountId), Decimal>,
}

impl DivisibleVault {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all balances for `token`. Equals the minted supply.
    #[must_use]
    pub fn total_supply(&self, token: TokenId) -> Decimal {
        self.balances
            .iter()
            .filter(|((t, _), _)| *t == token)
            .map(|(_, qty)| *qty)
            .sum()
    }
}

impl AssetOps for DivisibleVault {
    fn mint(&mut self, key: AssetKey, owner: AccountId, quantity: Decimal) -> Result<()> {
        // Units are indivisible; balances only ever hold whole amounts.
        if quantity < Decimal::ONE || !quantity.is_integer() {
            return Err(BazaarError::InvalidQuantity { quantity });
        }
        *self.balances.entry((key.token, owner)).or_default() += quantity;
        Ok(())
    }

    fn transfer(
        &mut self,
        key: AssetKey,
        from: AccountId,
        to: AccountId,
        quantity: Decimal,
    ) -> Result<()> {
        if quantity <= Decimal::ZERO || !quantity.is_integer() {
            return Err(BazaarError::InvalidQuantity { quantity });
        }
        let available = self
            .balances
            .get(&(key.token, from))
            .copied()
            .unwrap_or_default();
        if available < quantity {
            return Err(BazaarError::InsufficientBalance {
                needed: quantity,
                available,
            });
        }
        *self
            .balances
            .get_mut(&(key.token, from))
            .expect("balance checked above") -= quantity;
        *self.balances.entry((key.token, to)).or_default() += quantity;
        Ok(())
    }

    fn balance_of(&self, key: AssetKey, identity: AccountId) -> Decimal {
        self.balances
            .get(&(key.token, identity))
            .copied()
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// AssetVault — flavor dispatch
// ---------------------------------------------------------------------------

/// One registered collection's ownership state. The only place in the
/// workspace that branches on asset flavor.
#[derive(Debug)]
pub enum AssetVault {
    Unique(UniqueVault),
    Divisible(DivisibleVault),
}

impl AssetVault {
    /// Create an empty vault of the given flavor.
    #[must_use]
    pub fn new(flavor: AssetFlavor) -> Self {
        match flavor {
            AssetFlavor::Unique => Self::Unique(UniqueVault::new()),
            AssetFlavor::Divisible => Self::Divisible(DivisibleVault::new()),
        }
    }

    #[must_use]
    pub fn flavor(&self) -> AssetFlavor {
        match self {
            Self::Unique(_) => AssetFlavor::Unique,
            Self::Divisible(_) => AssetFlavor::Divisible,
        }
    }

    /// Owner lookup, unique flavor only. `None` for divisible vaults.
    #[must_use]
    pub fn owner_of(&self, token: TokenId) -> Option<AccountId> {
        match self {
            Self::Unique(vault) => vault.owner_of(token),
            Self::Divisible(_) => None,
        }
    }
}

impl AssetOps for AssetVault {
    fn mint(&mut self, key: AssetKey, owner: AccountId, quantity: Decimal) -> Result<()> {
        match self {
            Self::Unique(vault) => vault.mint(key, owner, quantity),
            Self::Divisible(vault) => vault.mint(key, owner, quantity),
        }
    }

    fn transfer(
        &mut self,
        key: AssetKey,
        from: AccountId,
        to: AccountId,
        quantity: Decimal,
    ) -> Result<()> {
        match self {
            Self::Unique(vault) => vault.transfer(key, from, to, quantity),
            Self::Divisible(vault) => vault.transfer(key, from, to, quantity),
        }
    }

    fn balance_of(&self, key: AssetKey, identity: AccountId) -> Decimal {
        match self {
            Self::Unique(vault) => vault.balance_of(key, identity),
            Self::Divisible(vault) => vault.balance_of(key, identity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_types::CollectionId;

    fn key() -> AssetKey {
        AssetKey::new(CollectionId::new(), TokenId(1000))
    }

    #[test]
    fn unique_mint_sets_owner() {
        let mut vault = UniqueVault::new();
        let owner = AccountId::new();
        let key = key();
        vault.mint(key, owner, Decimal::ONE).unwrap();
        assert_eq!(vault.owner_of(key.token), Some(owner));
        assert_eq!(vault.balance_of(key, owner), Decimal::ONE);
    }

    #[test]
    fn unique_mint_rejects_quantity_above_one() {
        let mut vault = UniqueVault::new();
        let err = vault
            .mint(key(), AccountId::new(), Decimal::new(2, 0))
            .unwrap_err();
        assert!(matches!(err, BazaarError::InvalidQuantity { .. }));
    }

    #[test]
    fn unique_transfer_replaces_owner() {
        let mut vault = UniqueVault::new();
        let (a, b) = (AccountId::new(), AccountId::new());
        let key = key();
        vault.mint(key, a, Decimal::ONE).unwrap();
        vault.transfer(key, a, b, Decimal::ONE).unwrap();
        assert_eq!(vault.owner_of(key.token), Some(b));
        assert_eq!(vault.balance_of(key, a), Decimal::ZERO);
    }

    #[test]
    fn unique_transfer_from_non_owner_fails() {
        let mut vault = UniqueVault::new();
        let (a, b) = (AccountId::new(), AccountId::new());
        let key = key();
        vault.mint(key, a, Decimal::ONE).unwrap();
        let err = vault.transfer(key, b, a, Decimal::ONE).unwrap_err();
        assert!(matches!(err, BazaarError::NotOwner(_)));
        // Owner unchanged
        assert_eq!(vault.owner_of(key.token), Some(a));
    }

    #[test]
    fn divisible_mint_credits_balance() {
        let mut vault = DivisibleVault::new();
        let owner = AccountId::new();
        let key = key();
        vault.mint(key, owner, Decimal::new(10, 0)).unwrap();
        assert_eq!(vault.balance_of(key, owner), Decimal::new(10, 0));
        assert_eq!(vault.total_supply(key.token), Decimal::new(10, 0));
    }

    #[test]
    fn divisible_transfer_moves_partial_balance() {
        let mut vault = DivisibleVault::new();
        let (a, b) = (AccountId::new(), AccountId::new());
        let key = key();
        vault.mint(key, a, Decimal::new(10, 0)).unwrap();
        vault.transfer(key, a, b, Decimal::new(4, 0)).unwrap();
        assert_eq!(vault.balance_of(key, a), Decimal::new(6, 0));
        assert_eq!(vault.balance_of(key, b), Decimal::new(4, 0));
        // Supply conserved
        assert_eq!(vault.total_supply(key.token), Decimal::new(10, 0));
    }

    #[test]
    fn divisible_transfer_insufficient_fails_clean() {
        let mut vault = DivisibleVault::new();
        let (a, b) = (AccountId::new(), AccountId::new());
        let key = key();
        vault.mint(key, a, Decimal::new(3, 0)).unwrap();
        let err = vault.transfer(key, a, b, Decimal::new(5, 0)).unwrap_err();
        assert!(matches!(err, BazaarError::InsufficientBalance { .. }));
        assert_eq!(vault.balance_of(key, a), Decimal::new(3, 0));
        assert_eq!(vault.balance_of(key, b), Decimal::ZERO);
    }

    #[test]
    fn divisible_zero_quantity_rejected() {
        let mut vault = DivisibleVault::new();
        let err = vault
            .mint(key(), AccountId::new(), Decimal::ZERO)
            .unwrap_err();
        assert!(matches!(err, BazaarError::InvalidQuantity { .. }));
    }

    #[test]
    fn divisible_fractional_quantity_rejected() {
        let mut vault = DivisibleVault::new();
        let (a, b) = (AccountId::new(), AccountId::new());
        let key = key();

        let err = vault.mint(key, a, Decimal::new(25, 1)).unwrap_err();
        assert!(matches!(err, BazaarError::InvalidQuantity { .. }));
        assert_eq!(vault.balance_of(key, a), Decimal::ZERO);

        vault.mint(key, a, Decimal::new(10, 0)).unwrap();
        let err = vault.transfer(key, a, b, Decimal::new(5, 1)).unwrap_err();
        assert!(matches!(err, BazaarError::InvalidQuantity { .. }));
        assert_eq!(vault.balance_of(key, a), Decimal::new(10, 0));
        assert_eq!(vault.balance_of(key, b), Decimal::ZERO);
    }

    #[test]
    fn vault_dispatch_matches_flavor() {
        let vault = AssetVault::new(AssetFlavor::Unique);
        assert_eq!(vault.flavor(), AssetFlavor::Unique);
        let vault = AssetVault::new(AssetFlavor::Divisible);
        assert_eq!(vault.flavor(), AssetFlavor::Divisible);
        assert_eq!(vault.owner_of(TokenId(1)), None);
    }
}
