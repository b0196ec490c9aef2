//! Role registry — role-tag → set of authorized identities.
//!
//! Replaces the original design's ambient per-contract role storage with an
//! explicit object the trade engine owns. Granting and revoking are
//! idempotent; only membership changes are reported back so the engine can
//! decide whether an event is due.

use std::collections::{HashMap, HashSet};

use bazaar_types::{AccountId, BazaarError, Result, Role};

/// Tracks which identities hold which roles.
#[derive(Debug)]
pub struct RoleRegistry {
    members: HashMap<Role, HashSet<AccountId>>,
}

impl RoleRegistry {
    /// Create a registry with `deployer` holding the root admin role.
    #[must_use]
    pub fn new(deployer: AccountId) -> Self {
        let mut members: HashMap<Role, HashSet<AccountId>> = HashMap::new();
        members.entry(Role::Admin).or_default().insert(deployer);
        Self { members }
    }

    /// Whether `identity` holds `role`. Pure lookup, no side effects.
    #[must_use]
    pub fn has_role(&self, role: Role, identity: AccountId) -> bool {
        self.members
            .get(&role)
            .is_some_and(|set| set.contains(&identity))
    }

    /// Grant `role` to `identity`. The caller must hold the role that
    /// administers `role`.
    ///
    /// Idempotent: granting an already-held role is a no-op. Returns `true`
    /// if membership actually changed.
    ///
    /// # Errors
    /// Returns `Unauthorized` if the caller lacks the administering role.
    pub fn grant_role(&mut self, caller: AccountId, role: Role, identity: AccountId) -> Result<bool> {
        self.require_admin_of(caller, role)?;
        Ok(self.members.entry(role).or_default().insert(identity))
    }

    /// Revoke `role` from `identity`. Same gate as [`Self::grant_role`];
    /// idempotent no-op if the identity never held the role. Returns `true`
    /// if membership actually changed.
    ///
    /// # Errors
    /// Returns `Unauthorized` if the caller lacks the administering role.
    pub fn revoke_role(
        &mut self,
        caller: AccountId,
        role: Role,
        identity: AccountId,
    ) -> Result<bool> {
        self.require_admin_of(caller, role)?;
        Ok(self
            .members
            .get_mut(&role)
            .is_some_and(|set| set.remove(&identity)))
    }

    /// Require that `identity` holds `role`, for gating privileged calls.
    pub fn require(&self, role: Role, identity: AccountId) -> Result<()> {
        if self.has_role(role, identity) {
            Ok(())
        } else {
            Err(BazaarError::Unauthorized { role })
        }
    }

    /// Require that `identity` holds any of `roles`.
    pub fn require_any(&self, roles: &[Role], identity: AccountId) -> Result<()> {
        if roles.iter().any(|&role| self.has_role(role, identity)) {
            Ok(())
        } else {
            Err(BazaarError::Unauthorized { role: roles[0] })
        }
    }

    fn require_admin_of(&self, caller: AccountId, role: Role) -> Result<()> {
        self.require(role.admin_role(), caller)
    }
}
