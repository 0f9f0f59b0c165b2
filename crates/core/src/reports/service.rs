//! Report aggregation service.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use super::taxonomy::{self, TaxonomySection};
use super::types::{
    AccountBalance, AccountBalancesReport, FinancialStatementReport, StatementSection,
    YearBalance, YearlyCashFlowReport,
};
use crate::ledger::LedgerRow;

/// Account whose rows feed the yearly cash flow.
pub const CASH_ACCOUNT: &str = "Cash";

/// Year key for rows whose date cannot be parsed.
pub const INVALID_YEAR: &str = "invalid";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Service for aggregating ledger rows into reports.
pub struct ReportService;

impl ReportService {
    /// Sums `debit - credit` per account over every row.
    ///
    /// Any account value becomes a line, including empty ones. Lines keep
    /// the order in which accounts were first seen. Sums saturate at the
    /// `Decimal` range instead of failing.
    #[must_use]
    pub fn account_balances<'a>(
        rows: impl IntoIterator<Item = &'a LedgerRow>,
    ) -> AccountBalancesReport {
        let mut balances: IndexMap<&str, Decimal> = IndexMap::new();
        for row in rows {
            let balance = balances.entry(row.account()).or_insert(Decimal::ZERO);
            *balance = balance.saturating_add(row.amount());
        }

        AccountBalancesReport {
            accounts: balances
                .into_iter()
                .map(|(account, balance)| AccountBalance::new(account, balance))
                .collect(),
        }
    }

    /// Sums `debit - credit` of the cash account per fiscal year.
    ///
    /// Years are ordered by their string key. Rows with an unparseable date
    /// are kept under [`INVALID_YEAR`].
    #[must_use]
    pub fn yearly_cash_flow<'a>(
        rows: impl IntoIterator<Item = &'a LedgerRow>,
    ) -> YearlyCashFlowReport {
        let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
        for row in rows.into_iter().filter(|r| r.account() == CASH_ACCOUNT) {
            let balance = buckets
                .entry(Self::fiscal_year(row.date()))
                .or_insert(Decimal::ZERO);
            *balance = balance.saturating_add(row.amount());
        }

        YearlyCashFlowReport {
            years: buckets
                .into_iter()
                .map(|(year, balance)| YearBalance { year, balance })
                .collect(),
        }
    }

    /// Calendar year of a ledger date, as a string key.
    ///
    /// Accepts ISO dates, RFC 3339 timestamps, a handful of common written
    /// forms and a bare four-digit year. Anything else maps to
    /// [`INVALID_YEAR`].
    #[must_use]
    pub fn fiscal_year(date: &str) -> String {
        let date = date.trim();

        if date.len() == 4 && date.bytes().all(|b| b.is_ascii_digit()) {
            return date.to_string();
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(date) {
            return timestamp.year().to_string();
        }
        if let Some(parsed) = DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
        {
            return parsed.year().to_string();
        }
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(date, fmt).ok())
            .map_or_else(|| INVALID_YEAR.to_string(), |d| d.year().to_string())
    }

    /// Builds the income statement and balance sheet over the fixed
    /// taxonomy.
    ///
    /// Every taxonomy account starts at zero; rows for other accounts are
    /// ignored. Net income is revenues minus expenses and is folded into
    /// total equity.
    #[must_use]
    pub fn financial_statement<'a>(
        rows: impl IntoIterator<Item = &'a LedgerRow>,
    ) -> FinancialStatementReport {
        let mut balances: HashMap<&'static str, Decimal> =
            taxonomy::accounts().map(|a| (a, Decimal::ZERO)).collect();
        for row in rows {
            if let Some(balance) = balances.get_mut(row.account()) {
                *balance = balance.saturating_add(row.amount());
            }
        }

        let revenues = Self::section(&taxonomy::REVENUES, &balances);
        let expenses = Self::section(&taxonomy::EXPENSES, &balances);
        let assets = Self::section(&taxonomy::ASSETS, &balances);
        let liabilities = Self::section(&taxonomy::LIABILITIES, &balances);
        let equity = Self::section(&taxonomy::EQUITY, &balances);

        let net_income = revenues.total.saturating_sub(expenses.total);
        let total_assets = assets.total;
        let total_liabilities = liabilities.total;
        let total_equity = equity.total.saturating_add(net_income);

        FinancialStatementReport {
            revenues,
            expenses,
            net_income,
            assets,
            liabilities,
            equity,
            total_assets,
            total_liabilities,
            total_equity,
        }
    }

    fn section(
        template: &TaxonomySection,
        balances: &HashMap<&'static str, Decimal>,
    ) -> StatementSection {
        let accounts: Vec<AccountBalance> = template
            .accounts
            .iter()
            .map(|name| {
                AccountBalance::new(*name, balances.get(name).copied().unwrap_or_default())
            })
            .collect();
        let total = accounts
            .iter()
            .fold(Decimal::ZERO, |sum, a| sum.saturating_add(a.balance));

        StatementSection {
            name: template.name.to_string(),
            accounts,
            total,
        }
    }
}
