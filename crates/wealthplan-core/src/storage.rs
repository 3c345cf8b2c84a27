use std::{collections::HashSet, path::Path};

use wealthplan_domain::{Displayable, HouseholdLedger, Identifiable};

use crate::CoreError;

/// Fixed key under which the household document is persisted.
pub const STORAGE_KEY: &str = "family_wealth_architect_data";

/// Where a loaded ledger came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// A stored document was read (possibly migrated).
    Stored,
    /// Nothing was stored; a fresh default ledger was created.
    Fresh,
    /// The stored document could not be read; a fresh ledger replaced it.
    Recovered,
}

/// Outcome of loading the persisted ledger.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub ledger: HouseholdLedger,
    pub source: LoadSource,
    pub migrations: Vec<String>,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn fresh(source: LoadSource) -> Self {
        Self {
            ledger: HouseholdLedger::new(),
            source,
            migrations: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Abstraction over backends able to persist the single household document.
pub trait LedgerStorage: Send + Sync {
    /// Loads the stored document. Missing or unreadable documents yield a fresh ledger.
    fn load(&self) -> Result<LoadReport, CoreError>;
    fn save(&self, ledger: &HouseholdLedger) -> Result<(), CoreError>;
    /// Removes the stored document. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), CoreError>;
    fn export_to_path(&self, ledger: &HouseholdLedger, path: &Path) -> Result<(), CoreError>;
    /// Reads and migrates an exported document.
    fn import_from_path(&self, path: &Path) -> Result<LoadReport, CoreError>;
}

/// Detects non-fatal anomalies worth logging after a load or import.
pub fn ledger_warnings(ledger: &HouseholdLedger) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    let ids = ids_of(&ledger.cashflow)
        .chain(ids_of(&ledger.assets))
        .chain(ids_of(&ledger.liabilities))
        .chain(ids_of(&ledger.profile.family_members));
    for id in ids {
        if !seen.insert(id) {
            warnings.push(format!("duplicate id {id}"));
        }
    }

    for item in &ledger.cashflow {
        if item
            .monthly_amounts
            .iter()
            .any(|amount| !amount.is_finite() || *amount < 0.0)
        {
            warnings.push(format!(
                "line item {} has negative or non-finite amounts",
                item.display_label()
            ));
        }
    }

    for liability in &ledger.liabilities {
        let percent = liability.principal_portion_percent;
        if !(0.0..=100.0).contains(&percent) {
            warnings.push(format!(
                "liability {} principal portion {percent}% is outside 0-100",
                liability.display_label()
            ));
        }
        if liability.projected_principal() < 0.0 {
            warnings.push(format!(
                "liability {} projects a negative principal",
                liability.display_label()
            ));
        }
    }
    warnings
}

fn ids_of<T: Identifiable>(entities: &[T]) -> impl Iterator<Item = &str> {
    entities.iter().map(Identifiable::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wealthplan_domain::{Asset, Liability, LineItem, LineItemKind, Month};

    #[test]
    fn default_ledger_has_no_warnings() {
        assert!(ledger_warnings(&HouseholdLedger::new()).is_empty());
    }

    #[test]
    fn flags_duplicates_negatives_and_overpaid_loans() {
        let mut ledger = HouseholdLedger::new();
        let mut refund = LineItem::new("Refund", LineItemKind::Expense);
        refund.set_amount(Month::JANUARY, -50.0);
        ledger.cashflow.push(refund);
        ledger
            .cashflow
            .push(LineItem::new("Salary copy", LineItemKind::Income).with_id("1"));
        ledger
            .liabilities
            .push(Liability::new("Car", 10_000.0, 5_000.0, 120.0));
        ledger.assets.push(Asset::default());

        let warnings = ledger_warnings(&ledger);
        assert_eq!(warnings.len(), 4, "{warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("duplicate id 1")));
        assert!(warnings.iter().any(|w| w.contains("Refund")));
        assert!(warnings.iter().any(|w| w.contains("outside 0-100")));
        assert!(warnings.iter().any(|w| w.contains("negative principal")));
    }
}
