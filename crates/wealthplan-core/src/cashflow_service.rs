//! Edits to the cashflow grid: heads, monthly cells and the opening balance.

use tracing::debug;

use wealthplan_domain::{HouseholdLedger, LineItem, LineItemKind, Month};

use crate::{
    format::{parse_amount, require_finite},
    CoreError,
};

pub struct CashflowService;

impl CashflowService {
    /// Adds a head with all months at zero and returns its id.
    ///
    /// A head is unique per name and kind; asking for an existing one returns
    /// the id already in the ledger.
    pub fn add_head(ledger: &mut HouseholdLedger, name: &str, kind: LineItemKind) -> String {
        if let Some(existing) = ledger.find_line_item(name, kind) {
            return existing.id.clone();
        }
        let item = LineItem::new(name, kind);
        let id = item.id.clone();
        debug!(%id, name, %kind, "cashflow head added");
        ledger.cashflow.push(item);
        id
    }

    pub fn remove_head(ledger: &mut HouseholdLedger, id: &str) -> Result<LineItem, CoreError> {
        let position = ledger
            .cashflow
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CoreError::LineItemNotFound(id.to_string()))?;
        Ok(ledger.cashflow.remove(position))
    }

    /// Overwrites a single monthly cell. Non-finite amounts are rejected.
    pub fn set_amount(
        ledger: &mut HouseholdLedger,
        id: &str,
        month_index: usize,
        amount: f64,
    ) -> Result<(), CoreError> {
        let month = Month::new(month_index).ok_or(CoreError::InvalidMonth(month_index))?;
        let amount = require_finite("amount", amount)?;
        Self::head_mut(ledger, id)?.set_amount(month, amount);
        Ok(())
    }

    /// Coerces raw cell input with [`parse_amount`] and stores it, returning the stored value.
    pub fn set_amount_from_input(
        ledger: &mut HouseholdLedger,
        id: &str,
        month_index: usize,
        raw: &str,
    ) -> Result<f64, CoreError> {
        let amount = parse_amount(raw);
        Self::set_amount(ledger, id, month_index, amount)?;
        Ok(amount)
    }

    /// Copies the head's January amount into every month.
    pub fn replicate(ledger: &mut HouseholdLedger, id: &str) -> Result<(), CoreError> {
        Self::head_mut(ledger, id)?.replicate_january();
        Ok(())
    }

    pub fn set_opening_balance(ledger: &mut HouseholdLedger, amount: f64) -> Result<(), CoreError> {
        ledger.initial_opening_balance = require_finite("opening balance", amount)?;
        Ok(())
    }

    pub fn set_opening_balance_from_input(ledger: &mut HouseholdLedger, raw: &str) -> f64 {
        // parse_amount never yields a non-finite value.
        let amount = parse_amount(raw);
        ledger.initial_opening_balance = amount;
        amount
    }

    fn head_mut<'a>(
        ledger: &'a mut HouseholdLedger,
        id: &str,
    ) -> Result<&'a mut LineItem, CoreError> {
        ledger
            .line_item_mut(id)
            .ok_or_else(|| CoreError::LineItemNotFound(id.to_string()))
    }
}
