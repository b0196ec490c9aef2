//! Configuration types for the Bazaar ledger.

use serde::{Deserialize, Serialize};

use crate::{AccountId, BazaarError, Result, constants};

/// Mutable fee configuration: platform fee rate and its recipient.
///
/// Settable only through the admin-gated operations on the trade engine;
/// changes apply to subsequent buys, never retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Platform fee in whole percent of each sale total.
    pub fee_rate: u32,
    /// Identity credited with the platform fee on every buy.
    pub fee_recipient: AccountId,
}

/// Construction-time configuration for the whole ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Royalty ceiling in whole percent. Immutable after construction.
    pub max_royalty: u32,
    /// Initial platform fee rate in whole percent.
    pub fee_rate: u32,
    /// Initial platform fee recipient.
    pub fee_recipient: AccountId,
}

impl MarketConfig {
    /// Validate the configuration. Invalid fee arithmetic is a deployment
    /// bug, so it fails fast here rather than at trade time.
    pub fn validate(&self) -> Result<()> {
        if self.fee_rate >= constants::PERCENT_DENOMINATOR {
            return Err(BazaarError::Configuration(format!(
                "fee_rate {}% must be below {}%",
                self.fee_rate,
                constants::PERCENT_DENOMINATOR
            )));
        }
        if self.max_royalty >= constants::PERCENT_DENOMINATOR {
            return Err(BazaarError::Configuration(format!(
                "max_royalty {}% must be below {}%",
                self.max_royalty,
                constants::PERCENT_DENOMINATOR
            )));
        }
        // Worst case split must still leave the seller a non-negative share.
        if self.fee_rate + self.max_royalty > constants::PERCENT_DENOMINATOR {
            return Err(BazaarError::Configuration(format!(
                "fee_rate {}% + max_royalty {}% exceed {}%",
                self.fee_rate,
                self.max_royalty,
                constants::PERCENT_DENOMINATOR
            )));
        }
        Ok(())
    }

    /// The mutable fee slice of this configuration.
    #[must_use]
    pub fn fee_config(&self) -> FeeConfig {
        FeeConfig {
            fee_rate: self.fee_rate,
            fee_recipient: self.fee_recipient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_config_validates() {
        let cfg = MarketConfig {
            max_royalty: constants::DEFAULT_MAX_ROYALTY,
            fee_rate: constants::DEFAULT_FEE_RATE,
            fee_recipient: AccountId::new(),
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn oversized_fee_rate_rejected() {
        let cfg = MarketConfig {
            max_royalty: 10,
            fee_rate: 100,
            fee_recipient: AccountId::new(),
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, BazaarError::Configuration(_)));
    }

    #[test]
    fn combined_rates_over_denominator_rejected() {
        let cfg = MarketConfig {
            max_royalty: 60,
            fee_rate: 50,
            fee_recipient: AccountId::new(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = MarketConfig {
            max_royalty: 10,
            fee_rate: 5,
            fee_recipient: AccountId::new(),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MarketConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
