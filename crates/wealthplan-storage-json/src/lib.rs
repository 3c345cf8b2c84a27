//! wealthplan-storage-json
//!
//! Filesystem persistence for the household document: one fixed-key JSON file
//! inside a data directory, plus import/export of standalone files.

use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use wealthplan_core::{
    migration::parse_document,
    storage::{ledger_warnings, LedgerStorage, LoadReport, LoadSource, STORAGE_KEY},
    CoreError,
};
use wealthplan_domain::HouseholdLedger;

const DOCUMENT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the household document as `<data_dir>/family_wealth_architect_data.json`.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    data_dir: PathBuf,
    pretty: bool,
}

impl JsonLedgerStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            data_dir,
            pretty: true,
        })
    }

    /// Controls whether exports are pretty-printed. The stored document always is.
    pub fn with_pretty_exports(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn document_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{STORAGE_KEY}.{DOCUMENT_EXTENSION}"))
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn load(&self) -> Result<LoadReport, CoreError> {
        let path = self.document_path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no stored ledger; starting fresh");
                return Ok(LoadReport::fresh(LoadSource::Fresh));
            }
            Err(err) => return Err(err.into()),
        };

        match read_document(&text) {
            Ok(report) => {
                info!(
                    path = %path.display(),
                    migrations = report.migrations.len(),
                    warnings = report.warnings.len(),
                    "ledger loaded"
                );
                Ok(report)
            }
            // Refuse to replace a document written by a newer release.
            Err(err @ CoreError::UnsupportedSchema { .. }) => Err(err),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stored ledger unreadable; starting fresh");
                let mut report = LoadReport::fresh(LoadSource::Recovered);
                report
                    .warnings
                    .push(format!("stored ledger discarded: {err}"));
                Ok(report)
            }
        }
    }

    fn save(&self, ledger: &HouseholdLedger) -> Result<(), CoreError> {
        let path = self.document_path();
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        info!(path = %path.display(), "ledger saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        let path = self.document_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "stored ledger cleared");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn export_to_path(&self, ledger: &HouseholdLedger, path: &Path) -> Result<(), CoreError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(ledger)?
        } else {
            serde_json::to_string(ledger)?
        };
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        info!(path = %path.display(), "ledger exported");
        Ok(())
    }

    fn import_from_path(&self, path: &Path) -> Result<LoadReport, CoreError> {
        let text = fs::read_to_string(path)?;
        let report = read_document(&text)?;
        info!(
            path = %path.display(),
            migrations = report.migrations.len(),
            "ledger imported"
        );
        Ok(report)
    }
}

fn read_document(text: &str) -> Result<LoadReport, CoreError> {
    let migrated = parse_document(text)?;
    let warnings = ledger_warnings(&migrated.ledger);
    for warning in &warnings {
        warn!("{warning}");
    }
    Ok(LoadReport {
        ledger: migrated.ledger,
        source: LoadSource::Stored,
        migrations: migrated.migrations,
        warnings,
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
