//! Master lists of head names offered when adding cashflow rows.
//!
//! These labels are hints only: cashflow heads are never validated against them.

use serde::{Deserialize, Serialize};

use crate::cashflow::LineItemKind;

pub const DEFAULT_INCOME_CATEGORIES: [&str; 7] = [
    "Salary",
    "Bonus",
    "Rental Income",
    "Dividends",
    "Spouse Salary",
    "Spouse Bonus",
    "Business Income",
];

pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 9] = [
    "Rent",
    "EMI",
    "Groceries",
    "Utilities",
    "Education",
    "Health",
    "Travel",
    "Leisure",
    "Insurance",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryMasters {
    #[serde(default)]
    pub income: Vec<String>,
    #[serde(default)]
    pub expense: Vec<String>,
}

impl CategoryMasters {
    pub fn labels(&self, kind: LineItemKind) -> &[String] {
        match kind {
            LineItemKind::Income => &self.income,
            LineItemKind::Expense => &self.expense,
        }
    }

    pub fn labels_mut(&mut self, kind: LineItemKind) -> &mut Vec<String> {
        match kind {
            LineItemKind::Income => &mut self.income,
            LineItemKind::Expense => &mut self.expense,
        }
    }

    pub fn contains(&self, kind: LineItemKind, label: &str) -> bool {
        self.labels(kind).iter().any(|existing| existing == label)
    }
}

impl Default for CategoryMasters {
    fn default() -> Self {
        Self {
            income: DEFAULT_INCOME_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            expense: DEFAULT_EXPENSE_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
