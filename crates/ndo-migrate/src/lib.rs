//! Migration planning and execution.
//!
//! [`plan`] turns selection rows plus live controller state into per-row
//! step plans without touching the network; [`executor`] drives a plan
//! through the [`api::ControllerApi`] seam, destination side first.

pub mod api;
pub mod error;
pub mod executor;
pub mod plan;

pub use api::{ControllerApi, LiveController};
pub use error::MigrateError;
pub use executor::{MigrationReport, RowOutcome, run_batch};
pub use plan::{RowPlan, plan_row};
