//! Events emitted by the Bazaar ledger.
//!
//! Events are the externally observable record of committed state
//! transitions. The log itself lives in `bazaar-market`; this module defines
//! the payloads and their deterministic digests. Field order within each
//! variant is part of the external contract and must not change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, CollectionId, ListingSeq, Role, TokenId};

/// A committed state transition. Appended to the event log only after the
/// whole operation has succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A new asset record was created.
    Minted {
        collection: CollectionId,
        token: TokenId,
        creator: AccountId,
    },
    /// A sale listing was opened.
    Listed {
        collection: CollectionId,
        token: TokenId,
        listing: ListingSeq,
        seller: AccountId,
        unit_price: Decimal,
        quantity: Decimal,
    },
    /// Units were bought off a listing.
    Bought {
        collection: CollectionId,
        token: TokenId,
        listing: ListingSeq,
        buyer: AccountId,
        quantity: Decimal,
        total: Decimal,
    },
    /// A role was granted to an identity.
    RoleGranted { role: Role, identity: AccountId },
    /// A role was revoked from an identity.
    RoleRevoked { role: Role, identity: AccountId },
    /// The platform fee rate changed (applies to subsequent buys only).
    FeeRateChanged { rate: u32 },
    /// The platform fee recipient changed.
    FeeRecipientChanged { identity: AccountId },
}

impl MarketEvent {
    /// Short uppercase tag for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Minted { .. } => "MINTED",
            Self::Listed { .. } => "LISTED",
            Self::Bought { .. } => "BOUGHT",
            Self::RoleGranted { .. } => "ROLE_GRANTED",
            Self::RoleRevoked { .. } => "ROLE_REVOKED",
            Self::FeeRateChanged { .. } => "FEE_RATE_CHANGED",
            Self::FeeRecipientChanged { .. } => "FEE_RECIPIENT_CHANGED",
        }
    }

    /// Deterministic digest over (sequence, payload).
    ///
    /// Two observers replaying the same log compute the **exact same**
    /// digest for every entry, so logs can be compared position by position.
    #[must_use]
    pub fn digest(&self, sequence: u64) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"bazaar:event:v1:");
        hasher.update(sequence.to_le_bytes());
        let payload = serde_json::to_vec(self).expect("event payload serializes");
        hasher.update(&payload);
        hasher.finalize().into()
    }
}

impl std::fmt::Display for MarketEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minted {
                collection,
                token,
                creator,
            } => write!(f, "Minted[{collection}/{token}] by {creator}"),
            Self::Listed {
                collection,
                token,
                listing,
                seller,
                unit_price,
                quantity,
            } => write!(
                f,
                "Listed[{collection}/{token}/{listing}] {quantity} @ {unit_price} by {seller}"
            ),
            Self::Bought {
                collection,
                token,
                listing,
                buyer,
                quantity,
                total,
            } => write!(
                f,
                "Bought[{collection}/{token}/{listing}] {quantity} = {total} by {buyer}"
            ),
            Self::RoleGranted { role, identity } => write!(f, "RoleGranted[{role}] {identity}"),
            Self::RoleRevoked { role, identity } => write!(f, "RoleRevoked[{role}] {identity}"),
            Self::FeeRateChanged { rate } => write!(f, "FeeRateChanged[{rate}%]"),
            Self::FeeRecipientChanged { identity } => write!(f, "FeeRecipientChanged[{identity}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minted() -> MarketEvent {
        MarketEvent::Minted {
            collection: CollectionId::new(),
            token: TokenId(1000),
            creator: AccountId::new(),
        }
    }

    #[test]
    fn digest_deterministic() {
        let ev = minted();
        assert_eq!(ev.digest(3), ev.digest(3));
    }

    #[test]
    fn digest_depends_on_sequence() {
        let ev = minted();
        assert_ne!(ev.digest(3), ev.digest(4));
    }

    #[test]
    fn digest_depends_on_payload() {
        let a = minted();
        let b = minted();
        assert_ne!(a.digest(0), b.digest(0));
    }

    #[test]
    fn event_kind_tags() {
        assert_eq!(minted().kind(), "MINTED");
        let ev = MarketEvent::FeeRateChanged { rate: 7 };
        assert_eq!(ev.kind(), "FEE_RATE_CHANGED");
    }

    #[test]
    fn event_serde_roundtrip() {
        let ev = MarketEvent::Listed {
            collection: CollectionId::new(),
            token: TokenId(1),
            listing: ListingSeq(1),
            seller: AccountId::new(),
            unit_price: Decimal::new(5, 2),
            quantity: Decimal::new(10, 0),
        };
        let json = serde_json::to_string(&ev).unwrap();
        let back: MarketEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}
