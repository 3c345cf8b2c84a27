//! Derived figures produced by the projection engine. Never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::*;

/// Cash position for one month of the carry-over trail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct MonthlySnapshot {
    pub opening: f64,
    pub income: f64,
    /// Opening balance plus the month's income.
    pub available: f64,
    pub expense: f64,
    pub closing: f64,
}

/// Twelve monthly snapshots in calendar order, January first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashflowProjection {
    pub opening_balance: f64,
    pub months: [MonthlySnapshot; MONTH_COUNT],
}

impl CashflowProjection {
    pub fn month(&self, month: Month) -> &MonthlySnapshot {
        &self.months[month.index()]
    }

    /// Closing balance of December.
    pub fn final_closing(&self) -> f64 {
        self.months[MONTH_COUNT - 1].closing
    }

    /// Net change in liquid funds across the year.
    pub fn annual_savings_delta(&self) -> f64 {
        self.final_closing() - self.opening_balance
    }

    pub fn total_income(&self) -> f64 {
        self.months.iter().map(|m| m.income).sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.months.iter().map(|m| m.expense).sum()
    }

    /// Months whose closing balance is below zero.
    pub fn shortfall_months(&self) -> Vec<Month> {
        Month::all()
            .filter(|month| self.month(*month).closing < 0.0)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, &MonthlySnapshot)> {
        Month::all().zip(self.months.iter())
    }
}

/// Direction of the projected year-end net worth relative to today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NetWorthTrend {
    Appreciation,
    Depreciation,
}

impl fmt::Display for NetWorthTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NetWorthTrend::Appreciation => "Appreciation",
            NetWorthTrend::Depreciation => "Depreciation",
        };
        f.write_str(label)
    }
}

/// Present and projected year-end net worth with their composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetWorthSnapshot {
    pub present_net_worth: f64,
    pub projected_year_end_net_worth: f64,
    /// Share of capital held as assets and liquidity, in percent.
    pub asset_ratio: f64,
    /// Cash accumulated across the year.
    pub annual_savings_delta: f64,
    /// Principal repaid across the year.
    pub debt_reduction_delta: f64,
    pub current_assets_total: f64,
    pub current_liabilities_total: f64,
    pub projected_assets: f64,
    pub projected_liabilities: f64,
    pub year_end_closing: f64,
}

impl NetWorthSnapshot {
    pub fn trend(&self) -> NetWorthTrend {
        if self.projected_year_end_net_worth >= self.present_net_worth {
            NetWorthTrend::Appreciation
        } else {
            NetWorthTrend::Depreciation
        }
    }

    /// Magnitude of the change between today and year end.
    pub fn change_magnitude(&self) -> f64 {
        (self.projected_year_end_net_worth - self.present_net_worth).abs()
    }
}
