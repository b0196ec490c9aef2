//! Role tags gating privileged ledger operations.
//!
//! Roles form a closed enum, so an unknown role tag is unrepresentable —
//! a misconfigured role is a compile error, not a runtime one. Each role
//! names the role that administers it; the root [`Role::Admin`] administers
//! itself and every derived role.

use serde::{Deserialize, Serialize};

/// A privilege tag. Membership lives in the role registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Role {
    /// Root administrative role, granted to the deployer at construction.
    Admin,
    /// May mint new asset records.
    Minter,
    /// May change marketplace-level settings.
    MarketAdmin,
    /// May change fee configuration held in storage.
    StorageAdmin,
}

impl Role {
    /// The role that administers grants and revocations of `self`.
    #[must_use]
    pub fn admin_role(self) -> Role {
        // Admin self-administers; all derived roles hang off it.
        Role::Admin
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "DEFAULT_ADMIN_ROLE"),
            Self::Minter => write!(f, "MINTER_ROLE"),
            Self::MarketAdmin => write!(f, "MARKET_ADMIN_ROLE"),
            Self::StorageAdmin => write!(f, "STORAGE_ADMIN_ROLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_self_administers() {
        assert_eq!(Role::Admin.admin_role(), Role::Admin);
    }

    #[test]
    fn derived_roles_administered_by_admin() {
        assert_eq!(Role::Minter.admin_role(), Role::Admin);
        assert_eq!(Role::MarketAdmin.admin_role(), Role::Admin);
        assert_eq!(Role::StorageAdmin.admin_role(), Role::Admin);
    }

    #[test]
    fn role_display() {
        assert_eq!(format!("{}", Role::Minter), "MINTER_ROLE");
        assert_eq!(format!("{}", Role::StorageAdmin), "STORAGE_ADMIN_ROLE");
    }

    #[test]
    fn role_serde_roundtrip() {
        let role = Role::MarketAdmin;
        let json = serde_json::to_string(&role).unwrap();
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(role, back);
    }
}
