//! Trade engine — the single entry point for every external call.
//!
//! The engine owns all ledger state (roles, assets, approvals, listings,
//! funds, events) and runs as a strictly sequential, single-writer state
//! machine. Every operation validates all of its preconditions, then applies
//! payment legs before the listing mutation, then appends the event — so no
//! partially committed state is ever observable.
//!
//! The engine holds its own market identity, which is granted the minter
//! role at construction; callers mint *through* the engine the way they did
//! through the original marketplace deployment.

use bazaar_types::{
    AccountId, AssetFlavor, AssetKey, AssetRecord, BazaarError, CollectionId, FeeConfig, Listing,
    ListingKey, ListingSeq, MarketConfig, MarketEvent, Result, Role, TokenId, constants,
};
use bazaar_assets::{ApprovalRegistry, AssetRegistry, FundsLedger, RoleRegistry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::event_log::{EventLog, LoggedEvent};
use crate::fee_split::{Split, split};
use crate::listing_book::ListingBook;

/// What a committed buy paid out, returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub listing: ListingKey,
    /// `unit_price * quantity`.
    pub total: Decimal,
    /// Excess payment returned to the buyer.
    pub refund: Decimal,
    /// How `total` was divided.
    pub split: Split,
}

/// The marketplace ledger core.
#[derive(Debug)]
pub struct TradeEngine {
    /// The engine's own identity; holds the minter role.
    market: AccountId,
    roles: RoleRegistry,
    assets: AssetRegistry,
    approvals: ApprovalRegistry,
    listings: ListingBook,
    funds: FundsLedger,
    fees: FeeConfig,
    events: EventLog,
}

impl TradeEngine {
    /// Construct the ledger. Grants the root admin role to `deployer` and
    /// the minter role to the engine's own market identity.
    ///
    /// # Errors
    /// `Configuration` if the fee/royalty arithmetic in `config` is invalid.
    pub fn new(deployer: AccountId, config: MarketConfig) -> Result<Self> {
        config.validate()?;
        let market = AccountId::new();
        let mut roles = RoleRegistry::new(deployer);
        roles.grant_role(deployer, Role::Minter, market)?;
        Ok(Self {
            market,
            roles,
            assets: AssetRegistry::new(config.max_royalty),
            approvals: ApprovalRegistry::new(),
            listings: ListingBook::new(),
            funds: FundsLedger::new(),
            fees: config.fee_config(),
            events: EventLog::new(),
        })
    }

    /// Register a collection of the given flavor. Construction-time wiring.
    pub fn register_collection(&mut self, flavor: AssetFlavor) -> CollectionId {
        self.assets.register_collection(flavor)
    }

    // =====================================================================
    // Public market actions
    // =====================================================================

    /// Mint `(collection, token)` with `caller` as creator.
    ///
    /// The mint executes under the engine's market identity, which holds the
    /// minter role; the royalty rate is frozen into the record permanently.
    pub fn mint_token(
        &mut self,
        caller: AccountId,
        collection: CollectionId,
        token: TokenId,
        royalty: u32,
        quantity: Decimal,
    ) -> Result<AssetKey> {
        let key = AssetKey::new(collection, token);
        self.assets
            .mint(&self.roles, self.market, key, caller, royalty, quantity)?;

        tracing::info!(%key, creator = %caller, royalty, %quantity, "token minted");
        self.events.append(MarketEvent::Minted {
            collection,
            token,
            creator: caller,
        });
        Ok(key)
    }

    /// Grant or withdraw the marketplace's standing transfer authorization
    /// over `caller`'s assets in `collection`.
    pub fn set_approval_for_all(
        &mut self,
        caller: AccountId,
        collection: CollectionId,
        approved: bool,
    ) {
        self.approvals
            .set_approval_for_all(caller, collection, approved);
    }

    /// Open a sale listing for `quantity` units at `unit_price` each.
    ///
    /// # Errors
    /// `UnknownCollection`, `NotApproved` (no standing authorization),
    /// `InsufficientBalance` (seller holds less than `quantity`),
    /// `InvalidPrice`, `InvalidQuantity`.
    pub fn create_sale(
        &mut self,
        caller: AccountId,
        collection: CollectionId,
        token: TokenId,
        unit_price: Decimal,
        quantity: Decimal,
    ) -> Result<ListingKey> {
        let asset = AssetKey::new(collection, token);
        if self.assets.flavor(collection).is_none() {
            return Err(BazaarError::UnknownCollection(collection));
        }
        // Fail fast here rather than at transfer time inside a later buy.
        if !self.approvals.is_approved_for_all(caller, collection) {
            return Err(BazaarError::NotApproved(collection));
        }
        let available = self.assets.balance_of(asset, caller);
        if available < quantity {
            return Err(BazaarError::InsufficientBalance {
                needed: quantity,
                available,
            });
        }

        let key = self.listings.create(asset, caller, unit_price, quantity)?;
        tracing::info!(%key, seller = %caller, %unit_price, %quantity, "sale listed");
        self.events.append(MarketEvent::Listed {
            collection,
            token,
            listing: key.seq,
            seller: caller,
            unit_price,
            quantity,
        });
        Ok(key)
    }

    /// Buy `quantity` units off a listing, attaching `payment`.
    ///
    /// On success the asset moves seller → buyer, the total is split between
    /// creator royalty, platform fee, and seller proceeds, any excess payment
    /// is refunded to the buyer, and the listing's remaining quantity drops.
    /// All of it commits atomically or none of it does.
    ///
    /// # Errors
    /// `NotFound`, `ListingClosed`, `OverSold`, `InvalidQuantity`,
    /// `InsufficientPayment`, plus transfer errors if the seller no longer
    /// holds the quantity.
    pub fn buy_token(
        &mut self,
        caller: AccountId,
        collection: CollectionId,
        token: TokenId,
        listing: ListingSeq,
        quantity: Decimal,
        payment: Decimal,
    ) -> Result<PurchaseReceipt> {
        let key = ListingKey::new(collection, token, listing);

        // ---- checks ----
        let (seller, unit_price, remaining) = {
            let listing = self.listings.get(key)?;
            if listing.is_closed() {
                return Err(BazaarError::ListingClosed(key));
            }
            (listing.seller, listing.unit_price, listing.remaining)
        };
        if quantity <= Decimal::ZERO || !quantity.is_integer() {
            return Err(BazaarError::InvalidQuantity { quantity });
        }
        if quantity > remaining {
            return Err(BazaarError::OverSold {
                requested: quantity,
                remaining,
            });
        }
        let total = unit_price * quantity;
        if payment < total {
            return Err(BazaarError::InsufficientPayment {
                needed: total,
                attached: payment,
            });
        }
        let refund = payment - total;

        let record = self
            .assets
            .record(key.asset())
            .expect("listed assets are minted");
        let creator = record.creator;
        // Royalty was frozen at mint; fee rate is read now, at buy time.
        let split = split(total, record.royalty, self.fees.fee_rate);

        // ---- effects ----
        // The ownership move is the last fallible step; everything after it
        // is infallible, so the operation is all-or-nothing.
        self.assets.transfer(key.asset(), seller, caller, quantity)?;

        // Payment legs land before the listing mutation.
        self.funds.credit(creator, split.royalty);
        self.funds.credit(self.fees.fee_recipient, split.platform_fee);
        self.funds.credit(seller, split.seller);
        self.funds.credit(caller, refund);

        self.listings
            .reduce(key, quantity)
            .expect("remaining checked above");

        tracing::info!(%key, buyer = %caller, %quantity, %total, %refund, "token bought");
        self.events.append(MarketEvent::Bought {
            collection,
            token,
            listing,
            buyer: caller,
            quantity,
            total,
        });
        Ok(PurchaseReceipt {
            listing: key,
            total,
            refund,
            split,
        })
    }

    // =====================================================================
    // Admin actions
    // =====================================================================

    /// Grant `role` to `identity`. Caller must hold the administering role.
    /// Emits `RoleGranted` only when membership actually changed.
    pub fn grant_role(&mut self, caller: AccountId, role: Role, identity: AccountId) -> Result<()> {
        if self.roles.grant_role(caller, role, identity)? {
            tracing::debug!(%role, %identity, "role granted");
            self.events.append(MarketEvent::RoleGranted { role, identity });
        }
        Ok(())
    }

    /// Revoke `role` from `identity`. Same gate as [`Self::grant_role`].
    pub fn revoke_role(
        &mut self,
        caller: AccountId,
        role: Role,
        identity: AccountId,
    ) -> Result<()> {
        if self.roles.revoke_role(caller, role, identity)? {
            tracing::debug!(%role, %identity, "role revoked");
            self.events.append(MarketEvent::RoleRevoked { role, identity });
        }
        Ok(())
    }

    /// Whether `identity` holds `role`. Pure lookup.
    #[must_use]
    pub fn has_role(&self, role: Role, identity: AccountId) -> bool {
        self.roles.has_role(role, identity)
    }

    /// Change the platform fee rate. Applies to subsequent buys only.
    ///
    /// # Errors
    /// `Unauthorized` without a storage/market admin role; `Configuration`
    /// if the new rate breaks the split arithmetic.
    pub fn set_fee_rate(&mut self, caller: AccountId, rate: u32) -> Result<()> {
        self.roles
            .require_any(&[Role::StorageAdmin, Role::MarketAdmin], caller)?;
        // Bound the rate itself first: the sum below must not overflow on a
        // caller-supplied value.
        if rate > constants::PERCENT_DENOMINATOR
            || rate + self.assets.max_royalty() > constants::PERCENT_DENOMINATOR
        {
            return Err(BazaarError::Configuration(format!(
                "fee_rate {rate}% + max_royalty {}% exceed {}%",
                self.assets.max_royalty(),
                constants::PERCENT_DENOMINATOR
            )));
        }
        self.fees.fee_rate = rate;
        self.events.append(MarketEvent::FeeRateChanged { rate });
        Ok(())
    }

    /// Change the platform fee recipient. Applies to subsequent buys only.
    pub fn set_fee_address(&mut self, caller: AccountId, identity: AccountId) -> Result<()> {
        self.roles
            .require_any(&[Role::StorageAdmin, Role::MarketAdmin], caller)?;
        self.fees.fee_recipient = identity;
        self.events.append(MarketEvent::FeeRecipientChanged { identity });
        Ok(())
    }

    // =====================================================================
    // Read surface
    // =====================================================================

    /// The engine's own identity.
    #[must_use]
    pub fn market_id(&self) -> AccountId {
        self.market
    }

    /// The immutable royalty ceiling.
    #[must_use]
    pub fn max_royalty(&self) -> u32 {
        self.assets.max_royalty()
    }

    /// The current fee configuration.
    #[must_use]
    pub fn fee_config(&self) -> FeeConfig {
        self.fees
    }

    #[must_use]
    pub fn balance_of(
        &self,
        collection: CollectionId,
        token: TokenId,
        identity: AccountId,
    ) -> Decimal {
        self.assets
            .balance_of(AssetKey::new(collection, token), identity)
    }

    /// Current owner; unique-flavor collections only.
    #[must_use]
    pub fn owner_of(&self, collection: CollectionId, token: TokenId) -> Option<AccountId> {
        self.assets.owner_of(AssetKey::new(collection, token))
    }

    #[must_use]
    pub fn is_minted(&self, collection: CollectionId, token: TokenId) -> bool {
        self.assets.is_minted(AssetKey::new(collection, token))
    }

    /// The permanent mint record, if any.
    #[must_use]
    pub fn minted_record(&self, collection: CollectionId, token: TokenId) -> Option<&AssetRecord> {
        self.assets.record(AssetKey::new(collection, token))
    }

    /// Look up a listing.
    pub fn listing(&self, key: ListingKey) -> Result<&Listing> {
        self.listings.get(key)
    }

    /// Listings ever created for `(collection, token)`; doubles as the
    /// newest listing's sequence number.
    #[must_use]
    pub fn listing_count(&self, collection: CollectionId, token: TokenId) -> u64 {
        self.listings.listing_count(AssetKey::new(collection, token))
    }

    /// Proceeds credited to `account` so far (sales, royalties, fees,
    /// refunds).
    #[must_use]
    pub fn funds_of(&self, account: AccountId) -> Decimal {
        self.funds.balance(account)
    }

    /// Sum of every payment ever attached to a committed buy.
    #[must_use]
    pub fn total_funds(&self) -> Decimal {
        self.funds.total_credited()
    }

    /// The append-only event log, oldest first.
    #[must_use]
    pub fn events(&self) -> &[LoggedEvent] {
        self.events.entries()
    }
}
