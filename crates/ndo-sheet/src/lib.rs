//! Excel workbook layer.
//!
//! [`export`] flattens controller inventory into a workbook the operator can
//! review, and [`import`] reads back the edited `EPG Selection` sheet as
//! typed rows. [`normalize`] holds the entity-to-row flattening shared by
//! both sides.

pub mod columns;
pub mod error;
pub mod export;
pub mod import;
pub mod normalize;

pub use error::SheetError;
pub use export::{ExportData, write_workbook};
pub use import::read_selection;
