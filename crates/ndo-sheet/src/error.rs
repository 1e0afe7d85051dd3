//! Workbook error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the workbook.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Failure writing the workbook.
    #[error("workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    /// Failure opening or reading the workbook.
    #[error("workbook read error: {0}")]
    Read(#[from] calamine::XlsxError),

    /// The workbook exists but has no sheet with the expected name.
    #[error("sheet '{name}' does not exist in the workbook")]
    MissingSheet { name: &'static str },
}
