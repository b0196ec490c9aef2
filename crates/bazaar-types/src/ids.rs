//! Identifiers used throughout the Bazaar ledger.
//!
//! Account and collection IDs use UUIDv7 for time-ordered lexicographic
//! sorting. Token IDs and listing sequence numbers are plain integers,
//! mirroring the numbering scheme of the asset registries the marketplace
//! is deployed against.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Unique identifier for a caller / owner / payment recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// CollectionId
// ---------------------------------------------------------------------------

/// Unique identifier for a registered asset collection.
///
/// Stands in for the address of the linked asset registry the collection
/// lives in; one is assigned when the collection is registered with the
/// ledger at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CollectionId(pub Uuid);

impl CollectionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for CollectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// Token number within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tok:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ListingSeq
// ---------------------------------------------------------------------------

/// Monotonically increasing listing sequence number, scoped to one
/// `(collection, token)` pair. The first listing for an asset is seq 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ListingSeq(pub u64);

impl ListingSeq {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ListingSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seq:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AssetKey
// ---------------------------------------------------------------------------

/// Full address of one asset record: `(collection, token)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AssetKey {
    pub collection: CollectionId,
    pub token: TokenId,
}

impl AssetKey {
    #[must_use]
    pub fn new(collection: CollectionId, token: TokenId) -> Self {
        Self { collection, token }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.token)
    }
}

// ---------------------------------------------------------------------------
// ListingKey
// ---------------------------------------------------------------------------

/// Full address of one listing: `(collection, token, seq)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ListingKey {
    pub collection: CollectionId,
    pub token: TokenId,
    pub seq: ListingSeq,
}

impl ListingKey {
    #[must_use]
    pub fn new(collection: CollectionId, token: TokenId, seq: ListingSeq) -> Self {
        Self {
            collection,
            token,
            seq,
        }
    }

    /// The asset this listing sells.
    #[must_use]
    pub fn asset(&self) -> AssetKey {
        AssetKey::new(self.collection, self.token)
    }
}

impl fmt::Display for ListingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.collection, self.token, self.seq)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_uniqueness() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn account_id_ordering() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert!(a < b);
    }

    #[test]
    fn listing_seq_next() {
        let s = ListingSeq(5);
        assert_eq!(s.next(), ListingSeq(6));
    }

    #[test]
    fn listing_key_asset_projection() {
        let key = ListingKey::new(CollectionId::new(), TokenId(1000), ListingSeq(1));
        let asset = key.asset();
        assert_eq!(asset.collection, key.collection);
        assert_eq!(asset.token, key.token);
    }

    #[test]
    fn serde_roundtrips() {
        let aid = AccountId::new();
        let json = serde_json::to_string(&aid).unwrap();
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(aid, back);

        let key = AssetKey::new(CollectionId::new(), TokenId(7));
        let json = serde_json::to_string(&key).unwrap();
        let back: AssetKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
    }
}
