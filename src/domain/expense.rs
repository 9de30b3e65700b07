use serde::{Deserialize, Serialize};

/// Category labels offered by the entry form.
/// These are suggestions for the presentation layer: the ledger stores
/// whatever label a record carries and never checks membership.
pub const CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Others"];

/// One user-entered expense.
///
/// All four fields are kept as opaque strings. The date is expected in
/// `YYYY-MM-DD` form and the amount in whatever shape the user typed;
/// neither is parsed or validated here - no calendar checks, no currency
/// arithmetic. A record always carries all four fields, possibly empty.
///
/// Field names serialize in `PascalCase` so the CSV header row reads
/// `Date,Amount,Category,Description`, matching existing expense files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpenseRecord {
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

impl ExpenseRecord {
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// Returns true if the record's category is one of the labels the
    /// entry form offers.
    pub fn has_known_category(&self) -> bool {
        CATEGORIES.contains(&self.category.as_str())
    }
}
