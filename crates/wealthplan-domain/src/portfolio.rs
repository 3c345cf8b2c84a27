//! Asset and liability registry entries.

use serde::{Deserialize, Serialize};

use crate::common::*;

const MONTHS_PER_YEAR: f64 = MONTH_COUNT as f64;

/// Something the household owns, valued today and grown at a flat yearly rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    /// Free-form classification such as "Investment" or "Real Estate".
    #[serde(rename = "type")]
    pub classification: String,
    pub current_value: f64,
    pub appreciation_percent: f64,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        classification: impl Into<String>,
        current_value: f64,
        appreciation_percent: f64,
    ) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            classification: classification.into(),
            current_value,
            appreciation_percent,
        }
    }

    /// Value after one year of simple, non-compounded growth.
    pub fn projected_value(&self) -> f64 {
        self.current_value * (1.0 + self.appreciation_percent / 100.0)
    }
}

impl Default for Asset {
    fn default() -> Self {
        Self::new("New Asset", "Investment", 0.0, 0.0)
    }
}

impl Identifiable for Asset {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Asset {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.classification)
    }
}

/// An outstanding loan repaid through a fixed monthly instalment (EMI).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub name: String,
    pub outstanding_principal: f64,
    #[serde(rename = "emi")]
    pub monthly_payment: f64,
    /// Share of each instalment that reduces principal rather than paying interest.
    #[serde(rename = "principalComponentPercent")]
    pub principal_portion_percent: f64,
}

impl Liability {
    pub fn new(
        name: impl Into<String>,
        outstanding_principal: f64,
        monthly_payment: f64,
        principal_portion_percent: f64,
    ) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            outstanding_principal,
            monthly_payment,
            principal_portion_percent,
        }
    }

    /// Principal repaid over twelve instalments.
    pub fn principal_paid_this_year(&self) -> f64 {
        (self.monthly_payment * MONTHS_PER_YEAR) * (self.principal_portion_percent / 100.0)
    }

    /// Outstanding principal after a year of instalments. May go negative.
    pub fn projected_principal(&self) -> f64 {
        self.outstanding_principal - self.principal_paid_this_year()
    }
}

impl Default for Liability {
    fn default() -> Self {
        Self::new("New Loan", 0.0, 0.0, 0.0)
    }
}

impl Identifiable for Liability {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Liability {
    fn display_label(&self) -> String {
        format!("{} (EMI {})", self.name, self.monthly_payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_grows_by_simple_percentage() {
        let asset = Asset::new("Index Fund", "Investment", 100_000.0, 10.0);
        assert!((asset.projected_value() - 110_000.0).abs() < 1e-9);
    }

    #[test]
    fn negative_appreciation_is_not_clamped() {
        let asset = Asset::new("Car", "Vehicle", 50_000.0, -150.0);
        assert!((asset.projected_value() + 25_000.0).abs() < 1e-9);
    }

    #[test]
    fn liability_amortizes_linearly() {
        let loan = Liability::new("Home Loan", 120_000.0, 5_000.0, 50.0);
        assert_eq!(loan.principal_paid_this_year(), 30_000.0);
        assert_eq!(loan.projected_principal(), 90_000.0);
    }

    #[test]
    fn overpaid_liability_goes_negative() {
        let loan = Liability::new("Short Loan", 10_000.0, 5_000.0, 100.0);
        assert_eq!(loan.projected_principal(), -50_000.0);
    }

    #[test]
    fn liability_uses_document_field_names() {
        let loan = Liability::new("Car Loan", 1.0, 2.0, 3.0);
        let json = serde_json::to_value(&loan).expect("serialize");
        assert_eq!(json["outstandingPrincipal"], 1.0);
        assert_eq!(json["emi"], 2.0);
        assert_eq!(json["principalComponentPercent"], 3.0);
    }
}
