//! Asset and liability registry maintenance.

use wealthplan_domain::{Asset, HouseholdLedger, Liability};

use crate::{
    format::{parse_amount, parse_percent, require_finite},
    CoreError,
};

pub struct PortfolioService;

impl PortfolioService {
    /// Adds a placeholder asset ("New Asset", Investment, zero value) and returns its id.
    pub fn add_default_asset(ledger: &mut HouseholdLedger) -> String {
        let asset = Asset::default();
        let id = asset.id.clone();
        ledger.assets.push(asset);
        id
    }

    /// Adds `asset` and returns its id. Non-finite figures are rejected.
    pub fn add_asset(ledger: &mut HouseholdLedger, asset: Asset) -> Result<String, CoreError> {
        check_asset(&asset)?;
        let id = asset.id.clone();
        ledger.assets.push(asset);
        Ok(id)
    }

    /// Applies `update` to the asset. An edit that leaves a non-finite figure
    /// is undone and reported as a validation error.
    pub fn update_asset<F>(ledger: &mut HouseholdLedger, id: &str, update: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut Asset),
    {
        let asset = ledger
            .asset_mut(id)
            .ok_or_else(|| CoreError::AssetNotFound(id.to_string()))?;
        let before = asset.clone();
        update(asset);
        if let Err(err) = check_asset(asset) {
            *asset = before;
            return Err(err);
        }
        Ok(())
    }

    /// Coerces raw percentage input and stores it as the asset's appreciation.
    pub fn set_appreciation_from_input(
        ledger: &mut HouseholdLedger,
        id: &str,
        raw: &str,
    ) -> Result<f64, CoreError> {
        let percent = parse_percent(raw);
        Self::update_asset(ledger, id, |asset| asset.appreciation_percent = percent)?;
        Ok(percent)
    }

    pub fn set_value_from_input(
        ledger: &mut HouseholdLedger,
        id: &str,
        raw: &str,
    ) -> Result<f64, CoreError> {
        let value = parse_amount(raw);
        Self::update_asset(ledger, id, |asset| asset.current_value = value)?;
        Ok(value)
    }

    pub fn remove_asset(ledger: &mut HouseholdLedger, id: &str) -> Result<Asset, CoreError> {
        let position = ledger
            .assets
            .iter()
            .position(|asset| asset.id == id)
            .ok_or_else(|| CoreError::AssetNotFound(id.to_string()))?;
        Ok(ledger.assets.remove(position))
    }

    /// Adds a placeholder loan ("New Loan", all zeros) and returns its id.
    pub fn add_default_liability(ledger: &mut HouseholdLedger) -> String {
        let liability = Liability::default();
        let id = liability.id.clone();
        ledger.liabilities.push(liability);
        id
    }

    pub fn add_liability(
        ledger: &mut HouseholdLedger,
        liability: Liability,
    ) -> Result<String, CoreError> {
        check_liability(&liability)?;
        let id = liability.id.clone();
        ledger.liabilities.push(liability);
        Ok(id)
    }

    pub fn update_liability<F>(
        ledger: &mut HouseholdLedger,
        id: &str,
        update: F,
    ) -> Result<(), CoreError>
    where
        F: FnOnce(&mut Liability),
    {
        let liability = ledger
            .liability_mut(id)
            .ok_or_else(|| CoreError::LiabilityNotFound(id.to_string()))?;
        let before = liability.clone();
        update(liability);
        if let Err(err) = check_liability(liability) {
            *liability = before;
            return Err(err);
        }
        Ok(())
    }

    /// Coerces raw percentage input for the share of each EMI that repays principal.
    pub fn set_principal_portion_from_input(
        ledger: &mut HouseholdLedger,
        id: &str,
        raw: &str,
    ) -> Result<f64, CoreError> {
        let percent = parse_percent(raw);
        Self::update_liability(ledger, id, |liability| {
            liability.principal_portion_percent = percent;
        })?;
        Ok(percent)
    }

    pub fn remove_liability(
        ledger: &mut HouseholdLedger,
        id: &str,
    ) -> Result<Liability, CoreError> {
        let position = ledger
            .liabilities
            .iter()
            .position(|liability| liability.id == id)
            .ok_or_else(|| CoreError::LiabilityNotFound(id.to_string()))?;
        Ok(ledger.liabilities.remove(position))
    }
}

fn check_asset(asset: &Asset) -> Result<(), CoreError> {
    require_finite("current value", asset.current_value)?;
    require_finite("appreciation percent", asset.appreciation_percent)?;
    Ok(())
}

fn check_liability(liability: &Liability) -> Result<(), CoreError> {
    require_finite("outstanding principal", liability.outstanding_principal)?;
    require_finite("monthly payment", liability.monthly_payment)?;
    require_finite("principal portion percent", liability.principal_portion_percent)?;
    Ok(())
}
