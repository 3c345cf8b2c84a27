//! Twelve-month cashflow projection with carry-forward balances.

use tracing::debug;

use wealthplan_domain::{
    CashflowProjection, HouseholdLedger, LineItem, LineItemKind, Month, MonthlyAmounts,
    MonthlySnapshot, MONTH_COUNT,
};

/// Turns an opening balance and a set of cashflow heads into the monthly trail.
///
/// Each month opens with the previous month's closing balance:
///
/// ```text
/// available = opening + income
/// closing   = available - expense
/// ```
///
/// Closing balances are never clamped; a negative value flags a shortfall.
pub struct CashflowProjector;

impl CashflowProjector {
    /// Projects the full year starting from `opening_balance`.
    pub fn project(opening_balance: f64, items: &[LineItem]) -> CashflowProjection {
        let income = Self::monthly_totals(items, LineItemKind::Income);
        let expense = Self::monthly_totals(items, LineItemKind::Expense);

        let mut months = [MonthlySnapshot::default(); MONTH_COUNT];
        let mut running_balance = opening_balance;
        for month in Month::all() {
            let idx = month.index();
            let opening = running_balance;
            let available = opening + income[idx];
            let closing = available - expense[idx];
            months[idx] = MonthlySnapshot {
                opening,
                income: income[idx],
                available,
                expense: expense[idx],
                closing,
            };
            running_balance = closing;
        }

        debug!(
            items = items.len(),
            opening_balance,
            closing = running_balance,
            "projected cashflow"
        );
        CashflowProjection {
            opening_balance,
            months,
        }
    }

    /// Projects the ledger's own opening balance and heads.
    pub fn project_ledger(ledger: &HouseholdLedger) -> CashflowProjection {
        Self::project(ledger.initial_opening_balance, &ledger.cashflow)
    }

    /// Per-month totals for every head of `kind`.
    pub fn monthly_totals(items: &[LineItem], kind: LineItemKind) -> MonthlyAmounts {
        let mut totals = [0.0; MONTH_COUNT];
        for month in Month::all() {
            totals[month.index()] = Self::month_total(items, kind, month);
        }
        totals
    }

    /// Total of `kind` for a single month.
    pub fn month_total(items: &[LineItem], kind: LineItemKind, month: Month) -> f64 {
        // Summed in sorted order so the result does not depend on item order.
        let mut amounts: Vec<f64> = items
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| item.amount(month))
            .collect();
        amounts.sort_by(f64::total_cmp);
        amounts.into_iter().fold(0.0, |total, amount| total + amount)
    }

    /// Returns a copy of `item` with every month set to its January amount.
    pub fn replicated(item: &LineItem) -> LineItem {
        let mut copy = item.clone();
        copy.replicate_january();
        copy
    }
}
