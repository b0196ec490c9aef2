//! Operator approvals — standing transfer authorizations for the market.
//!
//! The original flow relied on an out-of-band "approve the marketplace to
//! move my assets" step that only surfaced as a failure deep inside the
//! transfer. Here it is an explicit registry the trade engine consults
//! before opening a sale, so listing without approval fails fast with
//! `NotApproved` instead of at transfer time.

use std::collections::HashSet;

use bazaar_types::{AccountId, CollectionId};

/// Which owners have authorized the marketplace per collection.
#[derive(Debug, Default)]
pub struct ApprovalRegistry {
    approved: HashSet<(AccountId, CollectionId)>,
}

impl ApprovalRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant or withdraw the marketplace's authorization to move any of
    /// `owner`'s assets in `collection`.
    pub fn set_approval_for_all(
        &mut self,
        owner: AccountId,
        collection: CollectionId,
        approved: bool,
    ) {
        if approved {
            self.approved.insert((owner, collection));
        } else {
            self.approved.remove(&(owner, collection));
        }
    }

    /// Whether the marketplace holds `owner`'s authorization for
    /// `collection`. Pure lookup.
    #[must_use]
    pub fn is_approved_for_all(&self, owner: AccountId, collection: CollectionId) -> bool {
        self.approved.contains(&(owner, collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unapproved() {
        let approvals = ApprovalRegistry::new();
        assert!(!approvals.is_approved_for_all(AccountId::new(), CollectionId::new()));
    }

    #[test]
    fn approval_is_scoped_to_owner_and_collection() {
        let mut approvals = ApprovalRegistry::new();
        let owner = AccountId::new();
        let collection = CollectionId::new();
        approvals.set_approval_for_all(owner, collection, true);

        assert!(approvals.is_approved_for_all(owner, collection));
        assert!(!approvals.is_approved_for_all(AccountId::new(), collection));
        assert!(!approvals.is_approved_for_all(owner, CollectionId::new()));
    }

    #[test]
    fn approval_can_be_withdrawn() {
        let mut approvals = ApprovalRegistry::new();
        let owner = AccountId::new();
        let collection = CollectionId::new();
        approvals.set_approval_for_all(owner, collection, true);
        approvals.set_approval_for_all(owner, collection, false);
        assert!(!approvals.is_approved_for_all(owner, collection));
    }
}
