//! Household wealth planner: monthly cashflow projection, net worth
//! aggregation and a persistent planning session.
//!
//! The member crates are re-exported so hosts can depend on this crate alone.

pub mod errors;
pub mod session;
pub mod utils;

pub use errors::{PlannerError, Result};
pub use session::{LoadMetadata, PlannerSession, SaveStatus};

pub use wealthplan_config;
pub use wealthplan_core;
pub use wealthplan_domain;
pub use wealthplan_storage_json;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("wealthplan tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
