//! Funds ledger — where every payment leg of a buy lands.
//!
//! Each buy's attached payment is split into royalty, platform fee, seller
//! proceeds, and (when overpaid) a buyer refund; all four legs are credits
//! here. The sum of credits therefore equals the sum of attached payments —
//! a conservation invariant the integration tests lean on.

use std::collections::HashMap;

use bazaar_types::AccountId;
use rust_decimal::Decimal;

/// Per-account credited proceeds. Withdrawal is out of scope; the ledger
/// only records what each identity is owed.
#[derive(Debug, Default)]
pub struct FundsLedger {
    balances: HashMap<AccountId, Decimal>,
    total_credited: Decimal,
}

impl FundsLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` to `account`. Zero-amount credits are skipped so the
    /// ledger doesn't accumulate empty entries.
    pub fn credit(&mut self, account: AccountId, amount: Decimal) {
        if amount.is_zero() {
            return;
        }
        *self.balances.entry(account).or_default() += amount;
        self.total_credited += amount;
    }

    /// Credited balance of `account`. 0 if never credited.
    #[must_use]
    pub fn balance(&self, account: AccountId) -> Decimal {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Sum of everything ever credited, across all accounts.
    #[must_use]
    pub fn total_credited(&self) -> Decimal {
        self.total_credited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_accumulates() {
        let mut funds = FundsLedger::new();
        let account = AccountId::new();
        funds.credit(account, Decimal::new(25, 2));
        funds.credit(account, Decimal::new(5, 2));
        assert_eq!(funds.balance(account), Decimal::new(30, 2));
        assert_eq!(funds.total_credited(), Decimal::new(30, 2));
    }

    #[test]
    fn zero_credit_is_skipped() {
        let mut funds = FundsLedger::new();
        funds.credit(AccountId::new(), Decimal::ZERO);
        assert_eq!(funds.total_credited(), Decimal::ZERO);
    }

    #[test]
    fn unknown_account_is_zero() {
        let funds = FundsLedger::new();
        assert_eq!(funds.balance(AccountId::new()), Decimal::ZERO);
    }

    #[test]
    fn total_sums_across_accounts() {
        let mut funds = FundsLedger::new();
        funds.credit(AccountId::new(), Decimal::new(10, 0));
        funds.credit(AccountId::new(), Decimal::new(7, 0));
        assert_eq!(funds.total_credited(), Decimal::new(17, 0));
    }
}
