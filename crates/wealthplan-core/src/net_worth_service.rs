//! Present and year-end net worth derived from the registry and the cashflow trail.

use tracing::debug;

use wealthplan_domain::{
    Asset, CashflowProjection, HouseholdLedger, Liability, LineItem, NetWorthSnapshot,
};

use crate::projection_service::CashflowProjector;

/// Combines assets, liabilities and the cashflow projection into net worth figures.
///
/// Projections are linear single-period approximations: assets grow by their
/// yearly percentage once and liabilities shrink by twelve instalments' worth
/// of principal. Inputs are never clamped.
pub struct NetWorthAggregator;

impl NetWorthAggregator {
    pub fn aggregate(
        opening_balance: f64,
        items: &[LineItem],
        assets: &[Asset],
        liabilities: &[Liability],
    ) -> NetWorthSnapshot {
        let projection = CashflowProjector::project(opening_balance, items);
        Self::aggregate_with_projection(&projection, assets, liabilities)
    }

    /// Aggregates against an already computed projection.
    pub fn aggregate_with_projection(
        projection: &CashflowProjection,
        assets: &[Asset],
        liabilities: &[Liability],
    ) -> NetWorthSnapshot {
        let opening_balance = projection.opening_balance;
        let current_assets_total = Self::current_assets_total(assets);
        let current_liabilities_total = Self::current_liabilities_total(liabilities);
        let projected_assets = Self::projected_assets(assets);
        let projected_liabilities = Self::projected_liabilities(liabilities);
        let year_end_closing = projection.final_closing();

        let present_net_worth = current_assets_total - current_liabilities_total + opening_balance;
        let projected_year_end_net_worth =
            projected_assets - projected_liabilities + year_end_closing;

        let snapshot = NetWorthSnapshot {
            present_net_worth,
            projected_year_end_net_worth,
            asset_ratio: Self::asset_ratio(
                current_assets_total,
                opening_balance,
                current_liabilities_total,
            ),
            annual_savings_delta: projection.annual_savings_delta(),
            debt_reduction_delta: current_liabilities_total - projected_liabilities,
            current_assets_total,
            current_liabilities_total,
            projected_assets,
            projected_liabilities,
            year_end_closing,
        };
        debug!(
            present = snapshot.present_net_worth,
            year_end = snapshot.projected_year_end_net_worth,
            "aggregated net worth"
        );
        snapshot
    }

    pub fn aggregate_ledger(ledger: &HouseholdLedger) -> NetWorthSnapshot {
        Self::aggregate(
            ledger.initial_opening_balance,
            &ledger.cashflow,
            &ledger.assets,
            &ledger.liabilities,
        )
    }

    pub fn current_assets_total(assets: &[Asset]) -> f64 {
        total(assets.iter().map(|asset| asset.current_value))
    }

    pub fn current_liabilities_total(liabilities: &[Liability]) -> f64 {
        total(
            liabilities
                .iter()
                .map(|liability| liability.outstanding_principal),
        )
    }

    pub fn projected_assets(assets: &[Asset]) -> f64 {
        total(assets.iter().map(Asset::projected_value))
    }

    pub fn projected_liabilities(liabilities: &[Liability]) -> f64 {
        total(liabilities.iter().map(Liability::projected_principal))
    }

    /// Percentage of total capital held as assets plus liquidity.
    ///
    /// Returns `0` whenever total capital is not positive.
    pub fn asset_ratio(assets_total: f64, opening_balance: f64, liabilities_total: f64) -> f64 {
        let owned = assets_total + opening_balance;
        let total_capital = owned + liabilities_total;
        if total_capital > 0.0 {
            owned / total_capital * 100.0
        } else {
            0.0
        }
    }
}

/// Sums from `+0.0`, so an empty registry totals a plain zero.
fn total(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |sum, value| sum + value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wealthplan_domain::{LineItemKind, NetWorthTrend};

    #[test]
    fn empty_registry_with_zero_balance_is_zero() {
        let snapshot = NetWorthAggregator::aggregate(0.0, &[], &[], &[]);

        assert_eq!(snapshot.present_net_worth, 0.0);
        assert_eq!(snapshot.asset_ratio, 0.0);
        assert_eq!(snapshot.projected_year_end_net_worth, 0.0);
        assert_eq!(snapshot.debt_reduction_delta, 0.0);
        assert_eq!(snapshot.trend(), NetWorthTrend::Appreciation);
    }

    #[test]
    fn combines_registry_with_cashflow() {
        let items = vec![
            LineItem::new("Salary", LineItemKind::Income).with_uniform_amount(50_000.0),
            LineItem::new("Rent", LineItemKind::Expense).with_uniform_amount(20_000.0),
        ];
        let assets = vec![Asset::new("Fund", "Investment", 100_000.0, 10.0)];
        let liabilities = vec![Liability::new("Home Loan", 120_000.0, 5_000.0, 50.0)];

        let snapshot = NetWorthAggregator::aggregate(10_000.0, &items, &assets, &liabilities);

        assert_eq!(snapshot.present_net_worth, 100_000.0 - 120_000.0 + 10_000.0);
        assert!((snapshot.projected_assets - 110_000.0).abs() < 1e-9);
        assert_eq!(snapshot.projected_liabilities, 90_000.0);
        assert_eq!(snapshot.debt_reduction_delta, 30_000.0);
        assert_eq!(snapshot.annual_savings_delta, 360_000.0);
        assert!(
            (snapshot.projected_year_end_net_worth - (110_000.0 - 90_000.0 + 370_000.0)).abs()
                < 1e-9
        );
        assert!((snapshot.asset_ratio - 110_000.0 / 230_000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn liabilities_only_give_zero_ratio_when_capital_not_positive() {
        assert_eq!(NetWorthAggregator::asset_ratio(0.0, -500.0, 100.0), 0.0);
        assert_eq!(NetWorthAggregator::asset_ratio(0.0, 0.0, 100.0), 0.0);
        assert_eq!(NetWorthAggregator::asset_ratio(100.0, 0.0, 0.0), 100.0);
    }

    #[test]
    fn trend_reports_depreciation() {
        let assets = vec![Asset::new("Car", "Vehicle", 40_000.0, -25.0)];
        let snapshot = NetWorthAggregator::aggregate(0.0, &[], &assets, &[]);

        assert_eq!(snapshot.trend(), NetWorthTrend::Depreciation);
        assert_eq!(snapshot.change_magnitude(), 10_000.0);
    }

    #[test]
    fn empty_registries_total_positive_zero() {
        let totals = [
            NetWorthAggregator::current_assets_total(&[]),
            NetWorthAggregator::current_liabilities_total(&[]),
            NetWorthAggregator::projected_assets(&[]),
            NetWorthAggregator::projected_liabilities(&[]),
        ];
        assert!(totals.iter().all(|total| *total == 0.0 && total.is_sign_positive()));
    }
}
