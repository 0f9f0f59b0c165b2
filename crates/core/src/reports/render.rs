//! CSV rendering of the reports.
//!
//! Lines are joined with `\n` and no trailing newline is emitted.

use rust_decimal::Decimal;
use tally_shared::types::format_amount;

use super::types::{
    AccountBalance, AccountBalancesReport, FinancialStatementReport, StatementSection,
    YearlyCashFlowReport,
};

const ACCOUNT_HEADER: &str = "Account,Balance";
const YEARLY_HEADER: &str = "Financial Year,Cash Balance";

fn line(label: &str, amount: Decimal) -> String {
    format!("{label},{}", format_amount(amount))
}

fn account_lines<'a>(accounts: &'a [AccountBalance]) -> impl Iterator<Item = String> + 'a {
    accounts.iter().map(|a| line(&a.account, a.balance))
}

impl AccountBalancesReport {
    /// Renders `Account,Balance` lines.
    #[must_use]
    pub fn to_csv(&self) -> String {
        std::iter::once(ACCOUNT_HEADER.to_string())
            .chain(account_lines(&self.accounts))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl YearlyCashFlowReport {
    /// Renders `Financial Year,Cash Balance` lines.
    #[must_use]
    pub fn to_csv(&self) -> String {
        std::iter::once(YEARLY_HEADER.to_string())
            .chain(self.years.iter().map(|y| line(&y.year, y.balance)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FinancialStatementReport {
    /// Renders the income statement, the balance sheet and the closing
    /// `Total Assets` / `Total Liabilities + Equity` comparison line.
    ///
    /// The comparison is printed, never enforced.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut lines = vec![ACCOUNT_HEADER.to_string()];

        Self::push_section(&mut lines, &self.revenues);
        Self::push_section(&mut lines, &self.expenses);
        lines.push(line("Net Income", self.net_income));
        lines.push(String::new());

        Self::push_section(&mut lines, &self.assets);
        lines.push(line("Total Assets", self.total_assets));
        lines.push(String::new());

        Self::push_section(&mut lines, &self.liabilities);
        lines.push(line("Total Liabilities", self.total_liabilities));
        lines.push(String::new());

        Self::push_section(&mut lines, &self.equity);
        lines.push(line("Retained Earnings (Net Income)", self.net_income));
        lines.push(line("Total Equity", self.total_equity));
        lines.push(String::new());

        lines.push(format!(
            "Total Assets,{},Total Liabilities + Equity,{}",
            format_amount(self.total_assets),
            format_amount(self.liabilities_and_equity())
        ));

        lines.join("\n")
    }

    fn push_section(lines: &mut Vec<String>, section: &StatementSection) {
        lines.extend(account_lines(&section.accounts));
    }
}
