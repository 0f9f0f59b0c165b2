//! Report data types.

use rust_decimal::Decimal;

/// Net balance of one account (debit minus credit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    /// Account name.
    pub account: String,
    /// Net balance.
    pub balance: Decimal,
}

impl AccountBalance {
    /// Creates a new account balance.
    #[must_use]
    pub fn new(account: impl Into<String>, balance: Decimal) -> Self {
        Self {
            account: account.into(),
            balance,
        }
    }
}

/// Account balances report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBalancesReport {
    /// Balances in the order each account was first seen.
    pub accounts: Vec<AccountBalance>,
}

impl AccountBalancesReport {
    /// Balance of a single account, if it appeared in the ledger.
    #[must_use]
    pub fn balance_of(&self, account: &str) -> Option<Decimal> {
        self.accounts
            .iter()
            .find(|a| a.account == account)
            .map(|a| a.balance)
    }
}

/// Cash balance accumulated for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearBalance {
    /// Fiscal year key (four-digit year, or the invalid-date key).
    pub year: String,
    /// Net cash movement for the year.
    pub balance: Decimal,
}

/// Yearly cash flow report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyCashFlowReport {
    /// Years in ascending (lexical) key order.
    pub years: Vec<YearBalance>,
}

/// One section of the financial statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementSection {
    /// Section name.
    pub name: String,
    /// Accounts in taxonomy order.
    pub accounts: Vec<AccountBalance>,
    /// Sum of the account balances.
    pub total: Decimal,
}

/// Income statement and balance sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialStatementReport {
    /// Revenue section.
    pub revenues: StatementSection,
    /// Expense section.
    pub expenses: StatementSection,
    /// Revenues total minus expenses total.
    pub net_income: Decimal,
    /// Asset section.
    pub assets: StatementSection,
    /// Liability section.
    pub liabilities: StatementSection,
    /// Equity section, without the net income line.
    pub equity: StatementSection,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Equity section total plus net income.
    pub total_equity: Decimal,
}

impl FinancialStatementReport {
    /// Liabilities plus equity.
    #[must_use]
    pub fn liabilities_and_equity(&self) -> Decimal {
        self.total_liabilities.saturating_add(self.total_equity)
    }

    /// Whether assets equal liabilities plus equity.
    ///
    /// Informational only; an unbalanced statement is still a valid report.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_assets == self.liabilities_and_equity()
    }
}
