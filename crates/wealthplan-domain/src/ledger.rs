//! The household ledger: the single document the planner persists.

use serde::{Deserialize, Serialize};

use crate::{
    cashflow::{LineItem, LineItemKind},
    categories::CategoryMasters,
    portfolio::{Asset, Liability},
    profile::Profile,
};

/// Schema version written by this release.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdLedger {
    #[serde(default)]
    pub schema_version: u32,
    pub profile: Profile,
    pub cashflow: Vec<LineItem>,
    pub assets: Vec<Asset>,
    pub liabilities: Vec<Liability>,
    /// Liquid funds available at the start of January.
    pub initial_opening_balance: f64,
    pub categories: CategoryMasters,
}

impl HouseholdLedger {
    /// Fresh ledger with the two default income heads.
    pub fn new() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            profile: Profile::default(),
            cashflow: vec![
                LineItem::master("Salary", LineItemKind::Income).with_id("1"),
                LineItem::master("Bonus", LineItemKind::Income).with_id("2"),
            ],
            assets: Vec::new(),
            liabilities: Vec::new(),
            initial_opening_balance: 0.0,
            categories: CategoryMasters::default(),
        }
    }

    pub fn line_item(&self, id: &str) -> Option<&LineItem> {
        self.cashflow.iter().find(|item| item.id == id)
    }

    pub fn line_item_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.cashflow.iter_mut().find(|item| item.id == id)
    }

    /// Finds a head by its name and kind.
    pub fn find_line_item(&self, name: &str, kind: LineItemKind) -> Option<&LineItem> {
        self.cashflow.iter().find(|item| item.matches(name, kind))
    }

    pub fn line_items_of(&self, kind: LineItemKind) -> impl Iterator<Item = &LineItem> {
        self.cashflow.iter().filter(move |item| item.kind == kind)
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    pub fn asset_mut(&mut self, id: &str) -> Option<&mut Asset> {
        self.assets.iter_mut().find(|asset| asset.id == id)
    }

    pub fn liability(&self, id: &str) -> Option<&Liability> {
        self.liabilities.iter().find(|liability| liability.id == id)
    }

    pub fn liability_mut(&mut self, id: &str) -> Option<&mut Liability> {
        self.liabilities
            .iter_mut()
            .find(|liability| liability.id == id)
    }
}

impl Default for HouseholdLedger {
    fn default() -> Self {
        Self::new()
    }
}
