//! Versioned-defaults merge applied once when a stored or imported document is read.
//!
//! Older documents may lack fields introduced later, or carry `null` where a
//! number was expected. The merge fills those gaps on the raw JSON value before
//! it is deserialized into a [`HouseholdLedger`], and records each step taken.

use serde_json::{Map, Value};
use tracing::debug;

use wealthplan_domain::{
    CategoryMasters, HouseholdLedger, Profile, CURRENT_SCHEMA_VERSION, MONTH_COUNT,
};

use crate::CoreError;

/// Income label appended to master lists that predate it.
const SPOUSE_BONUS_LABEL: &str = "Spouse Bonus";

/// Outcome of reading a document through the migration step.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub ledger: HouseholdLedger,
    /// Schema version found in the document; `0` when absent.
    pub from_version: u32,
    pub migrations: Vec<String>,
}

impl MigrationReport {
    pub fn migrated(&self) -> bool {
        !self.migrations.is_empty()
    }
}

/// Parses JSON text and migrates it to the current schema.
pub fn parse_document(text: &str) -> Result<MigrationReport, CoreError> {
    let value: Value = serde_json::from_str(text)?;
    migrate_document(value)
}

/// Migrates a raw JSON document to the current schema.
pub fn migrate_document(mut value: Value) -> Result<MigrationReport, CoreError> {
    let root = value
        .as_object_mut()
        .ok_or_else(|| CoreError::Validation("ledger document must be a JSON object".into()))?;

    let from_version = match root.get("schemaVersion").and_then(Value::as_u64) {
        Some(version) => u32::try_from(version).map_err(|_| newer_schema(version))?,
        None => 0,
    };
    if from_version > CURRENT_SCHEMA_VERSION {
        return Err(newer_schema(u64::from(from_version)));
    }

    let mut migrations = Vec::new();

    if !root.get("initialOpeningBalance").is_some_and(Value::is_number) {
        root.insert("initialOpeningBalance".into(), Value::from(0.0));
        migrations.push("defaulted initialOpeningBalance to 0".to_string());
    }

    for key in ["cashflow", "assets", "liabilities"] {
        if !root.get(key).is_some_and(Value::is_array) {
            root.insert(key.into(), Value::Array(Vec::new()));
            migrations.push(format!("defaulted {key} to an empty list"));
        }
    }

    migrate_profile(root, &mut migrations)?;
    migrate_categories(root, &mut migrations)?;
    migrate_cashflow(root, &mut migrations);
    migrate_registry(root, &mut migrations);

    if from_version < CURRENT_SCHEMA_VERSION {
        migrations.push(format!(
            "upgraded schema v{from_version} to v{CURRENT_SCHEMA_VERSION}"
        ));
    }
    root.insert("schemaVersion".into(), Value::from(CURRENT_SCHEMA_VERSION));

    let ledger: HouseholdLedger = serde_json::from_value(value)?;
    debug!(from_version, steps = migrations.len(), "ledger document migrated");
    Ok(MigrationReport {
        ledger,
        from_version,
        migrations,
    })
}

fn newer_schema(version: u64) -> CoreError {
    CoreError::UnsupportedSchema {
        found: version,
        supported: CURRENT_SCHEMA_VERSION,
    }
}

fn migrate_profile(root: &mut Map<String, Value>, migrations: &mut Vec<String>) -> Result<(), CoreError> {
    let Some(profile) = root.get_mut("profile").and_then(Value::as_object_mut) else {
        root.insert("profile".into(), serde_json::to_value(Profile::default())?);
        migrations.push("defaulted profile".to_string());
        return Ok(());
    };
    if coerce_count(profile, "age") {
        migrations.push("coerced profile age".to_string());
    }
    if let Some(members) = profile.get_mut("familyMembers").and_then(Value::as_array_mut) {
        let mut coerced = 0;
        for member in members.iter_mut().filter_map(Value::as_object_mut) {
            if coerce_count(member, "age") {
                coerced += 1;
            }
        }
        if coerced > 0 {
            migrations.push(format!("coerced {coerced} family member age(s)"));
        }
    }
    Ok(())
}

fn migrate_categories(
    root: &mut Map<String, Value>,
    migrations: &mut Vec<String>,
) -> Result<(), CoreError> {
    let Some(categories) = root.get_mut("categories").and_then(Value::as_object_mut) else {
        root.insert(
            "categories".into(),
            serde_json::to_value(CategoryMasters::default())?,
        );
        migrations.push("defaulted category masters".to_string());
        return Ok(());
    };
    if let Some(income) = categories.get_mut("income").and_then(Value::as_array_mut) {
        let has_spouse_bonus = income
            .iter()
            .any(|label| label.as_str() == Some(SPOUSE_BONUS_LABEL));
        if !has_spouse_bonus {
            income.push(Value::from(SPOUSE_BONUS_LABEL));
            migrations.push(format!("added `{SPOUSE_BONUS_LABEL}` income category"));
        }
    }
    Ok(())
}

fn migrate_cashflow(root: &mut Map<String, Value>, migrations: &mut Vec<String>) {
    let Some(items) = root.get_mut("cashflow").and_then(Value::as_array_mut) else {
        return;
    };
    let mut reshaped = 0;
    for item in items.iter_mut().filter_map(Value::as_object_mut) {
        if normalize_monthly_values(item) {
            reshaped += 1;
        }
    }
    if reshaped > 0 {
        migrations.push(format!("normalized monthly values on {reshaped} cashflow head(s)"));
    }
}

fn migrate_registry(root: &mut Map<String, Value>, migrations: &mut Vec<String>) {
    let sections: [(&str, &[&str]); 2] = [
        ("assets", &["currentValue", "appreciationPercent"]),
        (
            "liabilities",
            &["outstandingPrincipal", "emi", "principalComponentPercent"],
        ),
    ];
    for (section, fields) in sections {
        let Some(entries) = root.get_mut(section).and_then(Value::as_array_mut) else {
            continue;
        };
        let mut coerced = 0;
        for entry in entries.iter_mut().filter_map(Value::as_object_mut) {
            for field in fields {
                if coerce_number(entry, field) {
                    coerced += 1;
                }
            }
        }
        if coerced > 0 {
            migrations.push(format!("coerced {coerced} non-numeric {section} field(s) to 0"));
        }
    }
}

/// Pads or truncates `monthlyValues` to twelve numbers. Returns whether anything changed.
fn normalize_monthly_values(item: &mut Map<String, Value>) -> bool {
    let original = item.get("monthlyValues").cloned();
    let source = original
        .as_ref()
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let normalized: Vec<Value> = (0..MONTH_COUNT)
        .map(|idx| {
            source
                .get(idx)
                .filter(|value| value.is_number())
                .cloned()
                .unwrap_or_else(|| Value::from(0.0))
        })
        .collect();
    let normalized = Value::Array(normalized);
    let changed = original.as_ref() != Some(&normalized);
    item.insert("monthlyValues".into(), normalized);
    changed
}

/// Replaces a missing or non-numeric field with `0`.
fn coerce_number(entry: &mut Map<String, Value>, field: &str) -> bool {
    if entry.get(field).is_some_and(Value::is_number) {
        return false;
    }
    entry.insert(field.into(), Value::from(0.0));
    true
}

/// Replaces a field that is not a non-negative integer with `0`.
fn coerce_count(entry: &mut Map<String, Value>, field: &str) -> bool {
    let valid = entry
        .get(field)
        .and_then(Value::as_u64)
        .is_some_and(|value| u32::try_from(value).is_ok());
    if valid {
        return false;
    }
    entry.insert(field.into(), Value::from(0u32));
    true
}
