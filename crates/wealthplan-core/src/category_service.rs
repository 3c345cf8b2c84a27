//! Master label lists offered when adding cashflow heads.

use wealthplan_domain::{HouseholdLedger, LineItemKind};

use crate::CoreError;

pub struct CategoryService;

impl CategoryService {
    /// Adds a trimmed label. Returns `Ok(false)` when the label is already listed.
    pub fn add(
        ledger: &mut HouseholdLedger,
        kind: LineItemKind,
        label: &str,
    ) -> Result<bool, CoreError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(CoreError::Validation("category label cannot be empty".into()));
        }
        if ledger.categories.contains(kind, label) {
            return Ok(false);
        }
        ledger.categories.labels_mut(kind).push(label.to_string());
        Ok(true)
    }

    /// Removes a label from the master list. Existing heads with that name stay.
    pub fn remove(ledger: &mut HouseholdLedger, kind: LineItemKind, label: &str) -> bool {
        let labels = ledger.categories.labels_mut(kind);
        let before = labels.len();
        labels.retain(|existing| existing != label);
        labels.len() != before
    }

    /// Labels of `kind` that do not yet have a head in the cashflow grid.
    pub fn available_labels(ledger: &HouseholdLedger, kind: LineItemKind) -> Vec<String> {
        ledger
            .categories
            .labels(kind)
            .iter()
            .filter(|label| ledger.find_line_item(label, kind).is_none())
            .cloned()
            .collect()
    }
}
