//! Fixed account taxonomy used by the financial statement.
//!
//! The statement only ever shows these accounts, in this order, whether or
//! not the ledger mentions them.

/// A named, ordered group of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomySection {
    /// Section name.
    pub name: &'static str,
    /// Account names in display order.
    pub accounts: &'static [&'static str],
}

/// A statement made of ordered sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyStatement {
    /// Statement name.
    pub name: &'static str,
    /// Sections in display order.
    pub sections: &'static [TaxonomySection],
}

/// Revenue accounts.
pub const REVENUES: TaxonomySection = TaxonomySection {
    name: "Revenues",
    accounts: &["Sales Revenue"],
};

/// Expense accounts.
pub const EXPENSES: TaxonomySection = TaxonomySection {
    name: "Expenses",
    accounts: &[
        "Cost of Goods Sold",
        "Salaries Expense",
        "Rent Expense",
        "Utilities Expense",
        "Interest Expense",
        "Tax Expense",
    ],
};

/// Asset accounts.
pub const ASSETS: TaxonomySection = TaxonomySection {
    name: "Assets",
    accounts: &[
        "Cash",
        "Accounts Receivable",
        "Inventory",
        "Fixed Assets",
        "Prepaid Expenses",
    ],
};

/// Liability accounts.
pub const LIABILITIES: TaxonomySection = TaxonomySection {
    name: "Liabilities",
    accounts: &[
        "Accounts Payable",
        "Loan Payable",
        "Sales Tax Payable",
        "Accrued Liabilities",
        "Unearned Revenue",
        "Dividends Payable",
    ],
};

/// Equity accounts.
pub const EQUITY: TaxonomySection = TaxonomySection {
    name: "Equity",
    accounts: &["Common Stock", "Retained Earnings"],
};

/// Income statement layout.
pub const INCOME_STATEMENT: TaxonomyStatement = TaxonomyStatement {
    name: "Income Statement",
    sections: &[REVENUES, EXPENSES],
};

/// Balance sheet layout.
pub const BALANCE_SHEET: TaxonomyStatement = TaxonomyStatement {
    name: "Balance Sheet",
    sections: &[ASSETS, LIABILITIES, EQUITY],
};

/// Both statements in display order.
pub const STATEMENTS: [TaxonomyStatement; 2] = [INCOME_STATEMENT, BALANCE_SHEET];

/// Every taxonomy account in display order.
pub fn accounts() -> impl Iterator<Item = &'static str> {
    let statements: &'static [TaxonomyStatement] = &STATEMENTS;
    statements
        .iter()
        .flat_map(|statement| statement.sections)
        .flat_map(|section| section.accounts)
        .copied()
}
