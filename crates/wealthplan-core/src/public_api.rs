//! Stable, public-facing helpers that wrap the internal service layer.
//!
//! Frontends that only need to build a ledger and read its dashboard figures
//! can rely on these without depending on every service.

use serde::Serialize;

use wealthplan_domain::{
    Asset, CashflowProjection, HouseholdLedger, IncomeMode, Liability, LineItemKind,
    NetWorthTrend,
};

use crate::{
    cashflow_service::CashflowService, income_mode_service::ReconciliationOutcome,
    net_worth_service::NetWorthAggregator, portfolio_service::PortfolioService,
    profile_service::ProfileService, projection_service::CashflowProjector, CoreError,
};

/// Headline figures shown on the planner dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDashboard {
    pub present_net_worth: f64,
    pub projected_year_end_net_worth: f64,
    pub trend: NetWorthTrend,
    pub change: f64,
    pub asset_ratio: f64,
    pub annual_savings_delta: f64,
    pub debt_reduction_delta: f64,
    pub year_end_closing: f64,
    /// Months whose closing balance falls below zero.
    pub shortfall_months: usize,
    pub projection: CashflowProjection,
}

/// Creates the fresh default ledger.
pub fn api_create_ledger() -> HouseholdLedger {
    HouseholdLedger::new()
}

/// Adds (or finds) a cashflow head and returns its identifier.
pub fn api_add_head(ledger: &mut HouseholdLedger, name: &str, kind: LineItemKind) -> String {
    CashflowService::add_head(ledger, name, kind)
}

pub fn api_set_amount(
    ledger: &mut HouseholdLedger,
    head_id: &str,
    month_index: usize,
    amount: f64,
) -> Result<(), CoreError> {
    CashflowService::set_amount(ledger, head_id, month_index, amount)
}

pub fn api_add_asset(
    ledger: &mut HouseholdLedger,
    name: &str,
    classification: &str,
    current_value: f64,
    appreciation_percent: f64,
) -> Result<String, CoreError> {
    let asset = Asset::new(name, classification, current_value, appreciation_percent);
    PortfolioService::add_asset(ledger, asset)
}

pub fn api_add_liability(
    ledger: &mut HouseholdLedger,
    name: &str,
    outstanding_principal: f64,
    monthly_payment: f64,
    principal_portion_percent: f64,
) -> Result<String, CoreError> {
    let liability = Liability::new(
        name,
        outstanding_principal,
        monthly_payment,
        principal_portion_percent,
    );
    PortfolioService::add_liability(ledger, liability)
}

/// Switches the household income mode. Returns `None` when the mode was already active.
pub fn api_set_income_mode(
    ledger: &mut HouseholdLedger,
    mode: IncomeMode,
) -> Option<ReconciliationOutcome> {
    ProfileService::set_income_mode(ledger, mode)
}

/// Recomputes the projection and net worth figures from scratch.
pub fn api_dashboard(ledger: &HouseholdLedger) -> ApiDashboard {
    let projection = CashflowProjector::project_ledger(ledger);
    let snapshot =
        NetWorthAggregator::aggregate_with_projection(&projection, &ledger.assets, &ledger.liabilities);
    ApiDashboard {
        present_net_worth: snapshot.present_net_worth,
        projected_year_end_net_worth: snapshot.projected_year_end_net_worth,
        trend: snapshot.trend(),
        change: snapshot.change_magnitude(),
        asset_ratio: snapshot.asset_ratio,
        annual_savings_delta: snapshot.annual_savings_delta,
        debt_reduction_delta: snapshot.debt_reduction_delta,
        year_end_closing: snapshot.year_end_closing,
        shortfall_months: projection.shortfall_months().len(),
        projection,
    }
}
