//! # ndo-core
//!
//! Core types shared across the ndomig crates:
//! - serde mirrors of the orchestrator's JSON objects (sites, tenants,
//!   schemas, templates, VRFs, BDs, ANPs, EPGs, contracts)
//! - mutation payload types for the JSON-Patch surface
//! - `bdRef`/`epgRef` parsing and formatting
//! - typed worksheet row models, including the operator-facing
//!   EPG Selection row
//!
//! These are read-only mirrors of controller-side state, fetched fresh on
//! each run; nothing in this crate performs I/O.

pub mod entities;
pub mod errors;
pub mod payloads;
pub mod refs;
pub mod rows;

pub use errors::CoreError;
pub use refs::{BdRef, EpgRef};
