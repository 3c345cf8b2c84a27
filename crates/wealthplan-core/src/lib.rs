//! wealthplan-core
//!
//! Projection engine and ledger services for the household planner.
//! Depends on wealthplan-domain. No terminal I/O, no direct filesystem access.

pub mod error;
pub mod format;
pub mod migration;
pub mod public_api;
pub mod storage;
pub mod time;

pub mod cashflow_service;
pub mod category_service;
pub mod income_mode_service;
pub mod net_worth_service;
pub mod portfolio_service;
pub mod profile_service;
pub mod projection_service;

pub use error::CoreError;
pub use cashflow_service::*;
pub use category_service::*;
pub use income_mode_service::*;
pub use net_worth_service::*;
pub use portfolio_service::*;
pub use profile_service::*;
pub use projection_service::*;

#[cfg(test)]
mod tests;
