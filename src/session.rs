//! Host session: owns the ledger, recomputes derived figures on demand and
//! schedules persistence after edits.

use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use serde::Serialize;
use tracing::{debug, info, warn};

use wealthplan_config::Config;
use wealthplan_core::{
    public_api::{api_dashboard, ApiDashboard},
    storage::{LedgerStorage, LoadReport, LoadSource},
    time::{export_file_name, Clock, SystemClock},
    CashflowProjector, CashflowService, CoreError, NetWorthAggregator, ProfileService,
    ReconciliationOutcome,
};
use wealthplan_domain::{CashflowProjection, HouseholdLedger, IncomeMode, NetWorthSnapshot};
use wealthplan_storage_json::JsonLedgerStorage;

use crate::errors::Result;

/// Persistence state shown next to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SaveStatus {
    /// Nothing edited since the session started.
    Idle,
    /// Edited; waiting for the autosave delay to elapse.
    Pending,
    Saved,
}

/// Metadata describing the outcome of a load or import.
#[derive(Debug, Clone)]
pub struct LoadMetadata {
    pub source: LoadSource,
    pub migrations: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<&LoadReport> for LoadMetadata {
    fn from(report: &LoadReport) -> Self {
        Self {
            source: report.source,
            migrations: report.migrations.clone(),
            warnings: report.warnings.clone(),
        }
    }
}

pub struct PlannerSession {
    ledger: HouseholdLedger,
    storage: Box<dyn LedgerStorage>,
    clock: Box<dyn Clock>,
    autosave_delay: Duration,
    status: SaveStatus,
    last_edit: Option<Instant>,
}

impl PlannerSession {
    /// Creates a session holding the fresh default ledger. Call [`load`](Self::load)
    /// to pick up the stored document.
    pub fn new(storage: Box<dyn LedgerStorage>, autosave_delay: Duration) -> Self {
        Self {
            ledger: HouseholdLedger::new(),
            storage,
            clock: Box::new(SystemClock),
            autosave_delay,
            status: SaveStatus::Idle,
            last_edit: None,
        }
    }

    /// Opens the JSON store described by `config` and loads it.
    pub fn open(config: &Config) -> Result<(Self, LoadMetadata)> {
        let storage = JsonLedgerStorage::new(config.resolve_data_dir())?
            .with_pretty_exports(config.pretty_exports);
        let mut session = Self::new(Box::new(storage), config.autosave_delay());
        let metadata = session.load()?;
        Ok((session, metadata))
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn storage(&self) -> &dyn LedgerStorage {
        self.storage.as_ref()
    }

    pub fn ledger(&self) -> &HouseholdLedger {
        &self.ledger
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn last_edit(&self) -> Option<Instant> {
        self.last_edit
    }

    /// Replaces the in-memory ledger with the stored one.
    pub fn load(&mut self) -> Result<LoadMetadata> {
        let report = self.storage.load()?;
        let metadata = LoadMetadata::from(&report);
        self.ledger = report.ledger;
        self.status = SaveStatus::Idle;
        self.last_edit = None;
        info!(source = ?metadata.source, "session loaded");
        Ok(metadata)
    }

    /// Applies an infallible edit and marks the session pending.
    ///
    /// An edit that changes `profile.income_mode` is treated as a mode switch:
    /// the income heads are reconciled as with [`PlannerSession::set_income_mode`].
    pub fn update<F, T>(&mut self, edit: F) -> T
    where
        F: FnOnce(&mut HouseholdLedger) -> T,
    {
        let previous = self.ledger.profile.income_mode;
        let result = edit(&mut self.ledger);
        self.reconcile_mode_change(previous);
        self.mark_edited();
        result
    }

    /// Applies a fallible edit. The session is marked pending only on success.
    pub fn try_update<F, T>(&mut self, edit: F) -> Result<T>
    where
        F: FnOnce(&mut HouseholdLedger) -> std::result::Result<T, CoreError>,
    {
        let previous = self.ledger.profile.income_mode;
        let outcome = edit(&mut self.ledger);
        let switched = self.reconcile_mode_change(previous);
        if outcome.is_ok() || switched {
            self.mark_edited();
        }
        outcome.map_err(Into::into)
    }

    /// Stores raw cell input for one head and month, returning the coerced amount.
    pub fn set_cell(&mut self, head_id: &str, month_index: usize, raw: &str) -> Result<f64> {
        self.try_update(|ledger| {
            CashflowService::set_amount_from_input(ledger, head_id, month_index, raw)
        })
    }

    pub fn replicate(&mut self, head_id: &str) -> Result<()> {
        self.try_update(|ledger| CashflowService::replicate(ledger, head_id))
    }

    pub fn set_opening_balance(&mut self, raw: &str) -> f64 {
        self.update(|ledger| CashflowService::set_opening_balance_from_input(ledger, raw))
    }

    /// Switches the income mode. Requests for the active mode change nothing.
    pub fn set_income_mode(&mut self, mode: IncomeMode) -> Option<ReconciliationOutcome> {
        let outcome = ProfileService::set_income_mode(&mut self.ledger, mode);
        if outcome.is_some() {
            self.mark_edited();
        }
        outcome
    }

    pub fn projection(&self) -> CashflowProjection {
        CashflowProjector::project_ledger(&self.ledger)
    }

    pub fn net_worth(&self) -> NetWorthSnapshot {
        NetWorthAggregator::aggregate_ledger(&self.ledger)
    }

    pub fn dashboard(&self) -> ApiDashboard {
        api_dashboard(&self.ledger)
    }

    /// Persists when an edit is pending and the autosave delay has elapsed
    /// since the last edit. Returns whether a save happened.
    pub fn flush_if_due(&mut self, now: Instant) -> Result<bool> {
        let Some(last_edit) = self.last_edit else {
            return Ok(false);
        };
        if now.saturating_duration_since(last_edit) < self.autosave_delay {
            return Ok(false);
        }
        self.save_now()?;
        Ok(true)
    }

    pub fn save_now(&mut self) -> Result<()> {
        self.storage.save(&self.ledger)?;
        self.status = SaveStatus::Saved;
        self.last_edit = None;
        Ok(())
    }

    /// Clears the stored document and starts over with the default ledger.
    pub fn reset(&mut self) -> Result<()> {
        self.storage.clear()?;
        self.ledger = HouseholdLedger::new();
        self.status = SaveStatus::Idle;
        self.last_edit = None;
        info!("session reset to the default ledger");
        Ok(())
    }

    /// Suggested export file name for today.
    pub fn export_file_name(&self) -> String {
        export_file_name(self.clock.today())
    }

    pub fn export_to(&self, path: &Path) -> Result<()> {
        self.storage.export_to_path(&self.ledger, path)?;
        Ok(())
    }

    /// Exports into `dir` under the suggested name and returns the written path.
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.export_file_name());
        self.export_to(&path)?;
        Ok(path)
    }

    /// Replaces the ledger with an imported document. On failure the current
    /// ledger is left untouched.
    pub fn import_from(&mut self, path: &Path) -> Result<LoadMetadata> {
        let report = match self.storage.import_from_path(path) {
            Ok(report) => report,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "import rejected");
                return Err(err.into());
            }
        };
        let metadata = LoadMetadata::from(&report);
        self.ledger = report.ledger;
        self.mark_edited();
        Ok(metadata)
    }

    /// Returns whether the edit switched the income mode.
    fn reconcile_mode_change(&mut self, previous: IncomeMode) -> bool {
        let requested = self.ledger.profile.income_mode;
        if requested == previous {
            return false;
        }
        self.ledger.profile.income_mode = previous;
        ProfileService::set_income_mode(&mut self.ledger, requested).is_some()
    }

    fn mark_edited(&mut self) {
        self.status = SaveStatus::Pending;
        self.last_edit = Some(Instant::now());
        debug!("ledger edited; save pending");
    }
}
