//! Property-based tests for reports module.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::{INVALID_YEAR, ReportService};
use super::taxonomy;
use crate::ledger::{LedgerCache, LedgerRow, parse_records};

const ACCOUNTS: &[&str] = &[
    "Cash",
    "Sales Revenue",
    "Rent Expense",
    "Loan Payable",
    "Office Supplies",
    "Inventory",
];

fn row(date: &str, account: &str, debit: Decimal, credit: Decimal) -> LedgerRow {
    LedgerRow::from_fields(vec![
        date.to_string(),
        account.to_string(),
        String::new(),
        debit.to_string(),
        credit.to_string(),
    ])
}

/// `(account index, debit cents, credit cents, file index, year)`
fn ledger_strategy() -> impl Strategy<Value = Vec<(usize, i64, i64, usize, i32)>> {
    prop::collection::vec(
        (
            0..ACCOUNTS.len(),
            0i64..10_000_000,
            0i64..10_000_000,
            0usize..4,
            2015i32..2030,
        ),
        0..60,
    )
}

fn build_cache(entries: &[(usize, i64, i64, usize, i32)]) -> LedgerCache {
    let mut files: HashMap<usize, Vec<LedgerRow>> = HashMap::new();
    for &(account, debit, credit, file, year) in entries {
        files.entry(file).or_default().push(row(
            &format!("{year}-06-15"),
            ACCOUNTS[account],
            Decimal::new(debit, 2),
            Decimal::new(credit, 2),
        ));
    }

    let mut cache = LedgerCache::new();
    for (file, rows) in files {
        cache.set(format!("ledger-{file}.csv"), rows);
    }
    cache
}

proptest! {
    /// Account balance equals the exact sum of debit - credit for that
    /// account, however the rows are split across files.
    #[test]
    fn test_account_balances_are_exact_sums(entries in ledger_strategy()) {
        let cache = build_cache(&entries);
        let report = ReportService::account_balances(cache.rows());

        let mut expected: HashMap<&str, Decimal> = HashMap::new();
        for &(account, debit, credit, _, _) in &entries {
            *expected.entry(ACCOUNTS[account]).or_insert(Decimal::ZERO) +=
                Decimal::new(debit, 2) - Decimal::new(credit, 2);
        }

        prop_assert_eq!(report.accounts.len(), expected.len());
        for (account, balance) in expected {
            prop_assert_eq!(report.balance_of(account), Some(balance));
        }
    }

    /// Merging every row into a single file does not change any balance.
    #[test]
    fn test_account_balances_independent_of_file_split(entries in ledger_strategy()) {
        let split = build_cache(&entries);
        let merged_entries: Vec<_> = entries
            .iter()
            .map(|&(a, d, c, _, y)| (a, d, c, 0, y))
            .collect();
        let merged = build_cache(&merged_entries);

        let split_report = ReportService::account_balances(split.rows());
        let merged_report = ReportService::account_balances(merged.rows());

        for line in &split_report.accounts {
            prop_assert_eq!(merged_report.balance_of(&line.account), Some(line.balance));
        }
    }

    /// One line per distinct year that has cash rows, ascending.
    #[test]
    fn test_yearly_cash_flow_years(entries in ledger_strategy()) {
        let cache = build_cache(&entries);
        let report = ReportService::yearly_cash_flow(cache.rows());

        let expected_years: BTreeSet<String> = entries
            .iter()
            .filter(|e| ACCOUNTS[e.0] == "Cash")
            .map(|e| e.4.to_string())
            .collect();
        let years: Vec<String> = report.years.iter().map(|y| y.year.clone()).collect();

        prop_assert_eq!(years, expected_years.into_iter().collect::<Vec<_>>());
        for line in &report.years {
            let expected: Decimal = entries
                .iter()
                .filter(|e| ACCOUNTS[e.0] == "Cash" && e.4.to_string() == line.year)
                .map(|e| Decimal::new(e.1, 2) - Decimal::new(e.2, 2))
                .sum();
            prop_assert_eq!(line.balance, expected);
        }
    }

    /// The statement always lists exactly the taxonomy accounts and its
    /// totals are the sums of the displayed lines.
    #[test]
    fn test_financial_statement_lists_taxonomy(entries in ledger_strategy()) {
        let cache = build_cache(&entries);
        let report = ReportService::financial_statement(cache.rows());

        let listed: Vec<&str> = [
            &report.revenues,
            &report.expenses,
            &report.assets,
            &report.liabilities,
            &report.equity,
        ]
        .iter()
        .flat_map(|section| section.accounts.iter().map(|a| a.account.as_str()))
        .collect();
        prop_assert_eq!(listed, taxonomy::accounts().collect::<Vec<_>>());

        let asset_sum: Decimal = report.assets.accounts.iter().map(|a| a.balance).sum();
        prop_assert_eq!(report.total_assets, asset_sum);
        prop_assert_eq!(report.net_income, report.revenues.total - report.expenses.total);
        prop_assert_eq!(report.total_equity, report.equity.total + report.net_income);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rstest::rstest;

    fn scenario_rows() -> Vec<LedgerRow> {
        parse_records("2023-01-01,Cash,,100,0\n2023-02-01,Sales Revenue,,0,100")
    }

    #[test]
    fn test_scenario_account_balances() {
        let report = ReportService::account_balances(&scenario_rows());

        assert_eq!(report.accounts.len(), 2);
        assert_eq!(report.accounts[0].account, "Cash");
        assert_eq!(report.accounts[0].balance, dec!(100));
        assert_eq!(report.accounts[1].account, "Sales Revenue");
        assert_eq!(report.accounts[1].balance, dec!(-100));
    }

    #[test]
    fn test_scenario_yearly_cash_flow() {
        let report = ReportService::yearly_cash_flow(&scenario_rows());

        assert_eq!(report.years.len(), 1);
        assert_eq!(report.years[0].year, "2023");
        assert_eq!(report.years[0].balance, dec!(100));
    }

    #[test]
    fn test_scenario_net_income_keeps_debit_minus_credit_sign() {
        let report = ReportService::financial_statement(&scenario_rows());

        assert_eq!(report.revenues.total, dec!(-100));
        assert_eq!(report.expenses.total, dec!(0));
        assert_eq!(report.net_income, dec!(-100));
        assert_eq!(report.total_assets, dec!(100));
        assert_eq!(report.total_equity, dec!(-100));
        assert!(!report.is_balanced());
    }

    #[test]
    fn test_missing_amount_fields_count_as_zero() {
        let rows = parse_records("2023-01-01,Cash\n2023-01-02,Cash,,10,0");

        let balances = ReportService::account_balances(&rows);
        assert_eq!(balances.balance_of("Cash"), Some(dec!(10)));

        let yearly = ReportService::yearly_cash_flow(&rows);
        assert_eq!(yearly.years[0].balance, dec!(10));
    }

    #[test]
    fn test_account_balances_first_seen_order() {
        let rows = parse_records(
            "2023-01-01,Zeta,,1,0\n2023-01-01,Alpha,,1,0\n2023-01-01,Zeta,,1,0\n2023-01-01,Mid,,1,0",
        );
        let report = ReportService::account_balances(&rows);

        let order: Vec<&str> = report.accounts.iter().map(|a| a.account.as_str()).collect();
        assert_eq!(order, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(report.balance_of("Zeta"), Some(dec!(2)));
    }

    #[test]
    fn test_account_balances_keep_unlisted_accounts() {
        let rows = parse_records("2023-01-01,Whatever Account,,5,1");
        let report = ReportService::account_balances(&rows);
        assert_eq!(report.balance_of("Whatever Account"), Some(dec!(4)));
    }

    #[test]
    fn test_yearly_ignores_non_cash_rows() {
        let rows = parse_records("2023-01-01,Cash ,,5,0\n2023-01-01,cash,,5,0\n2024-01-01,Inventory,,5,0");
        let report = ReportService::yearly_cash_flow(&rows);
        assert!(report.years.is_empty());
    }

    #[test]
    fn test_yearly_keeps_unparseable_dates() {
        let rows = parse_records(
            "2024-01-01,Cash,,1,0\nnot a date,Cash,,2,0\n2022-12-31,Cash,,3,0\n,Cash,,4,0",
        );
        let report = ReportService::yearly_cash_flow(&rows);

        let keys: Vec<&str> = report.years.iter().map(|y| y.year.as_str()).collect();
        assert_eq!(keys, vec!["2022", "2024", INVALID_YEAR]);
        assert_eq!(report.years[2].balance, dec!(6));
    }

    #[test]
    fn test_statement_ignores_unlisted_accounts() {
        let rows = parse_records("2023-01-01,Office Supplies,,500,0");
        let report = ReportService::financial_statement(&rows);

        assert_eq!(report.total_assets, dec!(0));
        assert_eq!(report.net_income, dec!(0));
        assert_eq!(report.total_equity, dec!(0));
        assert!(report.is_balanced());
    }

    #[test]
    fn test_statement_zero_fills_taxonomy() {
        let report = ReportService::financial_statement(&Vec::<LedgerRow>::new());

        assert_eq!(report.revenues.accounts.len(), 1);
        assert_eq!(report.expenses.accounts.len(), 6);
        assert_eq!(report.assets.accounts.len(), 5);
        assert_eq!(report.liabilities.accounts.len(), 6);
        assert_eq!(report.equity.accounts.len(), 2);
        assert!(
            report
                .assets
                .accounts
                .iter()
                .all(|a| a.balance == Decimal::ZERO)
        );
    }

    #[test]
    fn test_statement_balanced_when_identity_holds() {
        let rows = parse_records(
            "2023-01-01,Cash,,500,0\n2023-01-01,Loan Payable,,200,0\n2023-01-01,Common Stock,,300,0",
        );
        let report = ReportService::financial_statement(&rows);

        assert_eq!(report.total_assets, dec!(500));
        assert_eq!(report.liabilities_and_equity(), dec!(500));
        assert!(report.is_balanced());
    }

    #[test]
    fn test_balances_saturate_on_overflow() {
        let rows = parse_records(
            "2023-01-01,Cash,,79228162514264337593543950335,0\n2023-01-02,Cash,,1,0\n\
             2023-01-03,Loan Payable,,0,79228162514264337593543950335\n\
             2023-01-04,Loan Payable,,0,1",
        );

        let balances = ReportService::account_balances(&rows);
        assert_eq!(balances.balance_of("Cash"), Some(Decimal::MAX));
        assert_eq!(balances.balance_of("Loan Payable"), Some(Decimal::MIN));

        let yearly = ReportService::yearly_cash_flow(&rows);
        assert_eq!(yearly.years[0].balance, Decimal::MAX);

        let statement = ReportService::financial_statement(&rows);
        assert_eq!(statement.total_assets, Decimal::MAX);
        assert_eq!(statement.total_liabilities, Decimal::MIN);
        assert_eq!(statement.liabilities_and_equity(), Decimal::MIN);
    }

    #[test]
    fn test_scientific_amounts_saturate_section_totals() {
        let text = (0..8)
            .map(|_| "2023-01-01,Cash,,1e28,0")
            .collect::<Vec<_>>()
            .join("\n");
        let mut rows = parse_records(&text);
        rows.extend(parse_records("2023-01-01,Inventory,,1e28,0"));

        let yearly = ReportService::yearly_cash_flow(&rows);
        assert_eq!(yearly.years[0].balance, Decimal::MAX);

        let statement = ReportService::financial_statement(&rows);
        assert_eq!(statement.total_assets, Decimal::MAX);
    }

    #[rstest]
    #[case("2023-01-01", "2023")]
    #[case("2023/07/04", "2023")]
    #[case("07/04/2021", "2021")]
    #[case("2020-02-29T10:00:00Z", "2020")]
    #[case("2019-12-31T23:59:59+05:00", "2019")]
    #[case("2018-03-01 08:30:00", "2018")]
    #[case("March 5, 2017", "2017")]
    #[case("Mar 5, 2016", "2016")]
    #[case("1999", "1999")]
    #[case(" 2023-01-01 ", "2023")]
    #[case("2023-13-01", INVALID_YEAR)]
    #[case("yesterday", INVALID_YEAR)]
    #[case("", INVALID_YEAR)]
    fn test_fiscal_year(#[case] date: &str, #[case] expected: &str) {
        assert_eq!(ReportService::fiscal_year(date), expected);
    }
}
