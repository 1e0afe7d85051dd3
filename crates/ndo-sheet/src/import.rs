//! EPG Selection sheet reader.
//!
//! Reads back the operator-edited sheet written by [`crate::export`]. Cells
//! are addressed positionally per [`crate::columns`]; rows missing a required
//! identifier are logged and skipped, never fatal to the batch.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use ndo_core::rows::SelectionRow;
use tracing::warn;

use crate::columns::{
    COL_DST_ANP, COL_DST_BD, COL_DST_CONSUMER_CONTRACT, COL_DST_EPG, COL_DST_HOST_BASED_ROUTING,
    COL_DST_L3OUT_1, COL_DST_L3OUT_2, COL_DST_L3OUT_REF_1, COL_DST_L3OUT_REF_2, COL_DST_SCHEMA_ID,
    COL_DST_SITE_ID, COL_DST_TEMPLATE, COL_DST_TENANT_ID, COL_DST_TENANT_NAME, COL_DST_VRF_REF,
    COL_SRC_ANP, COL_SRC_BD, COL_SRC_EPG, COL_SRC_SCHEMA_ID, COL_SRC_SITE_ID, COL_SRC_TEMPLATE,
    COL_SRC_TENANT_ID, COL_SRC_TENANT_NAME, SELECTION_SHEET,
};
use crate::error::SheetError;

/// Identifier cells that may not be blank for a row to be usable.
const REQUIRED: &[(usize, &str)] = &[
    (COL_SRC_SITE_ID, "Source Site ID"),
    (COL_SRC_TENANT_ID, "Source Tenant ID"),
    (COL_SRC_SCHEMA_ID, "Source Schema ID"),
    (COL_SRC_TEMPLATE, "Source Template"),
    (COL_SRC_ANP, "Source ANP"),
    (COL_SRC_BD, "Source BD"),
    (COL_SRC_EPG, "Source EPG"),
    (COL_DST_TENANT_ID, "Destination Tenant ID"),
    (COL_DST_SITE_ID, "Destination Site ID"),
    (COL_DST_SCHEMA_ID, "Destination Schema ID"),
    (COL_DST_TEMPLATE, "Destination Template"),
    (COL_DST_ANP, "Destination ANP"),
    (COL_DST_VRF_REF, "Destination VRF Reference"),
    (COL_DST_BD, "Destination BD"),
    (COL_DST_EPG, "Destination EPG"),
];

/// Render a cell as text. Numeric identifiers pasted by the spreadsheet
/// application come back as floats; integral ones lose the trailing `.0`.
#[allow(clippy::cast_possible_truncation)]
fn cell_string(row: &[Data], col: usize) -> String {
    match row.get(col) {
        Some(Data::String(s)) => s.trim().to_owned(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn cell_opt(row: &[Data], col: usize) -> Option<String> {
    let value = cell_string(row, col);
    (!value.is_empty()).then_some(value)
}

fn cell_bool(row: &[Data], col: usize) -> bool {
    match row.get(col) {
        Some(Data::Bool(b)) => *b,
        other => {
            let text = cell_string(row, col);
            matches!(text.to_ascii_lowercase().as_str(), "true" | "yes" | "1")
                || matches!(other, Some(Data::Float(f)) if *f != 0.0)
        }
    }
}

/// Read the edited `EPG Selection` sheet back from `path`.
///
/// # Errors
///
/// Returns [`SheetError::Read`] if the workbook cannot be opened and
/// [`SheetError::MissingSheet`] if it has no `EPG Selection` sheet.
/// Malformed rows are skipped with a warning, not treated as errors.
pub fn read_selection(path: &Path) -> Result<Vec<SelectionRow>, SheetError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    if !workbook.sheet_names().iter().any(|n| n == SELECTION_SHEET) {
        return Err(SheetError::MissingSheet {
            name: SELECTION_SHEET,
        });
    }
    let range = workbook.worksheet_range(SELECTION_SHEET)?;

    let mut rows = Vec::new();
    // Row 0 is the header.
    for (idx, cells) in range.rows().enumerate().skip(1) {
        if cells.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        if let Some((_, field)) = REQUIRED
            .iter()
            .find(|(col, _)| cell_string(cells, *col).is_empty())
        {
            warn!(row = idx + 1, field, "skipping row with blank identifier");
            continue;
        }
        rows.push(SelectionRow {
            src_site_id: cell_string(cells, COL_SRC_SITE_ID),
            src_tenant_id: cell_string(cells, COL_SRC_TENANT_ID),
            src_tenant_name: cell_string(cells, COL_SRC_TENANT_NAME),
            src_schema_id: cell_string(cells, COL_SRC_SCHEMA_ID),
            src_template: cell_string(cells, COL_SRC_TEMPLATE),
            src_anp: cell_string(cells, COL_SRC_ANP),
            src_bd: cell_string(cells, COL_SRC_BD),
            src_epg: cell_string(cells, COL_SRC_EPG),
            dst_tenant_id: cell_string(cells, COL_DST_TENANT_ID),
            dst_tenant_name: cell_string(cells, COL_DST_TENANT_NAME),
            dst_site_id: cell_string(cells, COL_DST_SITE_ID),
            dst_schema_id: cell_string(cells, COL_DST_SCHEMA_ID),
            dst_template: cell_string(cells, COL_DST_TEMPLATE),
            dst_anp: cell_string(cells, COL_DST_ANP),
            dst_vrf_ref: cell_string(cells, COL_DST_VRF_REF),
            dst_bd: cell_string(cells, COL_DST_BD),
            dst_epg: cell_string(cells, COL_DST_EPG),
            dst_l3out_1: cell_opt(cells, COL_DST_L3OUT_1),
            dst_l3out_ref_1: cell_opt(cells, COL_DST_L3OUT_REF_1),
            dst_l3out_2: cell_opt(cells, COL_DST_L3OUT_2),
            dst_l3out_ref_2: cell_opt(cells, COL_DST_L3OUT_REF_2),
            dst_consumer_contract: cell_opt(cells, COL_DST_CONSUMER_CONTRACT),
            dst_host_based_routing: cell_bool(cells, COL_DST_HOST_BASED_ROUTING),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn float_ids_drop_trailing_zero() {
        let row = vec![Data::Float(6075.0)];
        assert_eq!(cell_string(&row, 0), "6075");
    }

    #[test]
    fn blank_and_missing_cells_are_empty() {
        let row = vec![Data::Empty, Data::String("  ".into())];
        assert_eq!(cell_string(&row, 0), "");
        assert_eq!(cell_string(&row, 1), "");
        assert_eq!(cell_string(&row, 9), "");
        assert_eq!(cell_opt(&row, 1), None);
    }

    #[test]
    fn bool_cells_accept_text_spellings() {
        assert!(cell_bool(&[Data::Bool(true)], 0));
        assert!(cell_bool(&[Data::String("TRUE".into())], 0));
        assert!(cell_bool(&[Data::String("yes".into())], 0));
        assert!(cell_bool(&[Data::Float(1.0)], 0));
        assert!(!cell_bool(&[Data::String("false".into())], 0));
        assert!(!cell_bool(&[Data::Empty], 0));
    }
}
