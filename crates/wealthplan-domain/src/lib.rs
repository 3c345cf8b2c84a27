//! wealthplan-domain
//!
//! Pure domain models (household ledger, cashflow heads, assets, liabilities,
//! profile, category masters and derived snapshots).
//! No I/O, no storage. Only data types and core enums.

pub mod cashflow;
pub mod categories;
pub mod common;
pub mod ledger;
pub mod portfolio;
pub mod profile;
pub mod snapshot;

pub use cashflow::*;
pub use categories::*;
pub use common::*;
pub use ledger::*;
pub use portfolio::*;
pub use profile::*;
pub use snapshot::*;
