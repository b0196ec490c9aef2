//! System-wide constants and defaults.

/// Decimal places money amounts are kept at. Fee and royalty cuts are
/// truncated to this scale; the truncation remainder goes to the seller.
pub const MONEY_SCALE: u32 = 12;

/// Fee and royalty rates are whole percents out of this denominator.
pub const PERCENT_DENOMINATOR: u32 = 100;

/// Default platform fee rate (percent) used by test deployments.
pub const DEFAULT_FEE_RATE: u32 = 5;

/// Default royalty ceiling (percent) used by test deployments.
pub const DEFAULT_MAX_ROYALTY: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_within_denominator() {
        assert!(DEFAULT_FEE_RATE < PERCENT_DENOMINATOR);
        assert!(DEFAULT_MAX_ROYALTY < PERCENT_DENOMINATOR);
        assert!(DEFAULT_FEE_RATE + DEFAULT_MAX_ROYALTY < PERCENT_DENOMINATOR);
    }
}
