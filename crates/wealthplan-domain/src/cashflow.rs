//! Cashflow heads: named income or expense rows with one amount per month.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::*;

/// Direction of a cashflow head. The sign of its amounts is implied by the kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineItemKind {
    Income,
    Expense,
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LineItemKind::Income => "Income",
            LineItemKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A recurring income or expense row tracked for each month of the year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LineItemKind,
    #[serde(rename = "monthlyValues")]
    pub monthly_amounts: MonthlyAmounts,
    /// Set on heads the planner created itself (defaults and income-mode heads).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_master: bool,
}

impl LineItem {
    /// Creates a user-defined head with all twelve months at zero.
    pub fn new(name: impl Into<String>, kind: LineItemKind) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            kind,
            monthly_amounts: [0.0; MONTH_COUNT],
            is_master: false,
        }
    }

    /// Creates a planner-managed head with all twelve months at zero.
    pub fn master(name: impl Into<String>, kind: LineItemKind) -> Self {
        Self {
            is_master: true,
            ..Self::new(name, kind)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_amounts(mut self, amounts: MonthlyAmounts) -> Self {
        self.monthly_amounts = amounts;
        self
    }

    /// Fills every month with the same amount.
    pub fn with_uniform_amount(mut self, amount: f64) -> Self {
        self.monthly_amounts = [amount; MONTH_COUNT];
        self
    }

    pub fn amount(&self, month: Month) -> f64 {
        self.monthly_amounts[month.index()]
    }

    pub fn set_amount(&mut self, month: Month, amount: f64) {
        self.monthly_amounts[month.index()] = amount;
    }

    /// Copies the January amount into every month.
    pub fn replicate_january(&mut self) {
        let january = self.amount(Month::JANUARY);
        self.monthly_amounts = [january; MONTH_COUNT];
    }

    /// Sum of all twelve months.
    pub fn annual_total(&self) -> f64 {
        self.monthly_amounts.iter().sum()
    }

    pub fn is_income(&self) -> bool {
        self.kind == LineItemKind::Income
    }

    /// Returns `true` when this head has the given name and kind.
    pub fn matches(&self, name: &str, kind: LineItemKind) -> bool {
        self.kind == kind && self.name == name
    }
}

impl Identifiable for LineItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for LineItem {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}
