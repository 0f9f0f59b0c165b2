//! A single parsed ledger record.

use rust_decimal::Decimal;
use tally_shared::types::parse_amount;

const DATE: usize = 0;
const ACCOUNT: usize = 1;
const DESCRIPTION: usize = 2;
const DEBIT: usize = 3;
const CREDIT: usize = 4;

/// One transaction record: `date,account,description,debit,credit`.
///
/// Fields are kept positionally and verbatim. Short rows are tolerated:
/// a missing text field reads as `""` and a missing amount reads as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    fields: Vec<String>,
}

impl LedgerRow {
    /// Creates a row from its raw positional fields.
    #[must_use]
    pub fn from_fields(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Returns the raw positional fields.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    fn field(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    /// Transaction date as written in the file.
    #[must_use]
    pub fn date(&self) -> &str {
        self.field(DATE)
    }

    /// Account name.
    #[must_use]
    pub fn account(&self) -> &str {
        self.field(ACCOUNT)
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.field(DESCRIPTION)
    }

    /// Debit amount, zero when missing or unparseable.
    #[must_use]
    pub fn debit(&self) -> Decimal {
        parse_amount(self.field(DEBIT))
    }

    /// Credit amount, zero when missing or unparseable.
    #[must_use]
    pub fn credit(&self) -> Decimal {
        parse_amount(self.field(CREDIT))
    }

    /// Signed amount: debit minus credit, saturating at the `Decimal` range.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.debit().saturating_sub(self.credit())
    }
}
