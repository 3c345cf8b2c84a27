use std::{path::PathBuf, sync::Mutex, time::Duration};

use once_cell::sync::Lazy;
use tempfile::TempDir;
use wealthplan::PlannerSession;
use wealthplan_config::ConfigManager;
use wealthplan_storage_json::JsonLedgerStorage;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const TEST_AUTOSAVE_DELAY: Duration = Duration::from_millis(1_500);

/// Creates a unique directory that outlives the calling test.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates an isolated session and config manager backed by a unique directory.
pub fn setup_test_env() -> (PlannerSession, ConfigManager, PathBuf) {
    let base = scratch_dir();
    let storage = JsonLedgerStorage::new(base.join("data")).expect("create json storage");
    let session = PlannerSession::new(Box::new(storage), TEST_AUTOSAVE_DELAY);
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    (session, config_manager, base)
}
