//! Keeps the income heads in line with the household income mode.

use tracing::info;

use wealthplan_domain::{HouseholdLedger, IncomeMode, LineItem, LineItemKind};

/// Income heads that must exist in joint mode, in creation order.
pub const JOINT_INCOME_HEADS: [&str; 4] = ["Salary", "Spouse Salary", "Bonus", "Spouse Bonus"];

/// Income heads that must exist in individual mode, in creation order.
pub const INDIVIDUAL_INCOME_HEADS: [&str; 2] = ["Salary", "Bonus"];

/// Income heads dropped when returning to individual mode.
pub const SPOUSE_INCOME_HEADS: [&str; 2] = ["Spouse Salary", "Spouse Bonus"];

/// Heads created and removed by a reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconciliationOutcome {
    pub added: Vec<String>,
    pub removed: Vec<LineItem>,
}

impl ReconciliationOutcome {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

pub struct IncomeModeService;

impl IncomeModeService {
    pub fn required_heads(mode: IncomeMode) -> &'static [&'static str] {
        match mode {
            IncomeMode::Joint => &JOINT_INCOME_HEADS,
            IncomeMode::Individual => &INDIVIDUAL_INCOME_HEADS,
        }
    }

    /// Creates any missing required income heads and, in individual mode, drops
    /// the spouse heads together with their amounts. Expense heads are untouched.
    pub fn reconcile(items: &mut Vec<LineItem>, mode: IncomeMode) -> ReconciliationOutcome {
        let mut outcome = ReconciliationOutcome::default();

        for head in Self::required_heads(mode) {
            let exists = items
                .iter()
                .any(|item| item.matches(head, LineItemKind::Income));
            if !exists {
                items.push(LineItem::master(*head, LineItemKind::Income));
                outcome.added.push(head.to_string());
            }
        }

        if mode == IncomeMode::Individual {
            let (removed, kept): (Vec<_>, Vec<_>) = items.drain(..).partition(|item| {
                item.is_income() && SPOUSE_INCOME_HEADS.contains(&item.name.as_str())
            });
            *items = kept;
            outcome.removed = removed;
        }

        outcome
    }

    /// Switches the ledger's income mode, reconciling heads only on an actual
    /// transition. Returns `None` when `mode` is already active.
    pub fn switch_mode(
        ledger: &mut HouseholdLedger,
        mode: IncomeMode,
    ) -> Option<ReconciliationOutcome> {
        let previous = ledger.profile.income_mode;
        if previous == mode {
            return None;
        }
        ledger.profile.income_mode = mode;
        let outcome = Self::reconcile(&mut ledger.cashflow, mode);
        info!(
            from = %previous,
            to = %mode,
            added = outcome.added.len(),
            removed = outcome.removed.len(),
            "income mode switched"
        );
        Some(outcome)
    }
}
