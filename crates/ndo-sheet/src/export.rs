//! Workbook writer.
//!
//! One sheet per object type; sheets that have both a template-level and a
//! site-level view carry the two tables side by side with a one-column gap.
//! The `EPG Selection` sheet is written last, pre-populated with current
//! assignments for the operator to edit.

use std::path::Path;

use ndo_core::entities::{SchemasResponse, SitesResponse, TenantsResponse};
use ndo_core::rows::{
    BdSiteRow, BdTemplateRow, ContractSiteRow, ContractTemplateRow, EpgSiteRow, EpgTemplateRow,
    SchemaSiteRow, SchemaTemplateRow, SelectionRow, SiteRow, TenantRow, VrfSiteRow, VrfTemplateRow,
};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::columns::{SELECTION_HEADERS, SELECTION_SHEET};
use crate::error::SheetError;
use crate::normalize;

/// Everything one export run fetched from the controller.
#[derive(Debug, Clone)]
pub struct ExportData {
    pub sites: SitesResponse,
    pub tenants: TenantsResponse,
    pub schemas: SchemasResponse,
}

enum Cell {
    Str(String),
    Num(u64),
    Bool(bool),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

trait SheetRow {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

impl SheetRow for SiteRow {
    const HEADERS: &'static [&'static str] =
        &["Site Name", "Site Display Name", "Site ID", "Site Number"];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.name.as_str().into(),
            self.display_name.as_str().into(),
            self.id.as_str().into(),
            self.number.as_str().into(),
        ]
    }
}

impl SheetRow for TenantRow {
    const HEADERS: &'static [&'static str] = &[
        "Tenant Name",
        "Tenant Display Name",
        "Tenant ID",
        "Site Association",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.name.as_str().into(),
            self.display_name.as_str().into(),
            self.id.as_str().into(),
            self.site_id.as_str().into(),
        ]
    }
}

impl SheetRow for SchemaTemplateRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema Name",
        "Schema ID",
        "Schema Version",
        "Template Name",
        "Template Display Name",
        "Template ID",
        "Template Type",
        "Template Version",
        "Tenant ID",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_name.as_str().into(),
            self.schema_id.as_str().into(),
            Cell::Num(self.schema_version),
            self.template_name.as_str().into(),
            self.template_display_name.as_str().into(),
            self.template_id.as_str().into(),
            self.template_type.as_str().into(),
            Cell::Num(self.template_version),
            self.tenant_id.as_str().into(),
        ]
    }
}

impl SheetRow for SchemaSiteRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema Name",
        "Schema ID",
        "Schema Version",
        "Site ID",
        "Site Template Name",
        "Site Template ID",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_name.as_str().into(),
            self.schema_id.as_str().into(),
            Cell::Num(self.schema_version),
            self.site_id.as_str().into(),
            self.site_template_name.as_str().into(),
            self.site_template_id.as_str().into(),
        ]
    }
}

impl SheetRow for VrfTemplateRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema ID",
        "Template ID",
        "Tenant ID",
        "VRF Name",
        "VRF Display Name",
        "VRF UUID",
        "VRF Reference",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_id.as_str().into(),
            self.template_id.as_str().into(),
            self.tenant_id.as_str().into(),
            self.vrf_name.as_str().into(),
            self.vrf_display_name.as_str().into(),
            self.vrf_uuid.as_str().into(),
            self.vrf_ref.as_str().into(),
        ]
    }
}

impl SheetRow for VrfSiteRow {
    const HEADERS: &'static [&'static str] =
        &["Schema ID", "Site ID", "Site Template ID", "VRF Reference"];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_id.as_str().into(),
            self.site_id.as_str().into(),
            self.site_template_id.as_str().into(),
            self.vrf_ref.as_str().into(),
        ]
    }
}

impl SheetRow for BdTemplateRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema ID",
        "Template ID",
        "Tenant ID",
        "BD Name",
        "BD Display Name",
        "BD UUID",
        "BD Reference",
        "L2 Stretch",
        "Template Subnets",
        "VRF Reference",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_id.as_str().into(),
            self.template_id.as_str().into(),
            self.tenant_id.as_str().into(),
            self.bd_name.as_str().into(),
            self.bd_display_name.as_str().into(),
            self.bd_uuid.as_str().into(),
            self.bd_ref.as_str().into(),
            Cell::Bool(self.l2_stretch),
            Cell::Bool(self.has_template_subnets),
            self.vrf_ref.as_str().into(),
        ]
    }
}

impl SheetRow for BdSiteRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema ID",
        "Site ID",
        "Site Template ID",
        "BD Reference",
        "Site Subnets",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_id.as_str().into(),
            self.site_id.as_str().into(),
            self.site_template_id.as_str().into(),
            self.bd_ref.as_str().into(),
            Cell::Bool(self.has_site_subnets),
        ]
    }
}

impl SheetRow for EpgTemplateRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema ID",
        "Template ID",
        "Tenant ID",
        "ANP Name",
        "ANP UUID",
        "ANP Reference",
        "EPG Name",
        "EPG Display Name",
        "EPG UUID",
        "EPG Reference",
        "BD Reference",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_id.as_str().into(),
            self.template_id.as_str().into(),
            self.tenant_id.as_str().into(),
            self.anp_name.as_str().into(),
            self.anp_uuid.as_str().into(),
            self.anp_ref.as_str().into(),
            self.epg_name.as_str().into(),
            self.epg_display_name.as_str().into(),
            self.epg_uuid.as_str().into(),
            self.epg_ref.as_str().into(),
            self.bd_ref.as_str().into(),
        ]
    }
}

impl SheetRow for EpgSiteRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema ID",
        "Site ID",
        "Site Template ID",
        "ANP Reference",
        "EPG Reference",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_id.as_str().into(),
            self.site_id.as_str().into(),
            self.site_template_id.as_str().into(),
            self.anp_ref.as_str().into(),
            self.epg_ref.as_str().into(),
        ]
    }
}

impl SheetRow for ContractTemplateRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema ID",
        "Template ID",
        "Tenant ID",
        "Contract Name",
        "Contract Display Name",
        "Contract UUID",
        "Contract Reference",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_id.as_str().into(),
            self.template_id.as_str().into(),
            self.tenant_id.as_str().into(),
            self.contract_name.as_str().into(),
            self.contract_display_name.as_str().into(),
            self.contract_uuid.as_str().into(),
            self.contract_ref.as_str().into(),
        ]
    }
}

impl SheetRow for ContractSiteRow {
    const HEADERS: &'static [&'static str] = &[
        "Schema ID",
        "Site ID",
        "Site Template ID",
        "Contract Reference",
    ];
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.schema_id.as_str().into(),
            self.site_id.as_str().into(),
            self.site_template_id.as_str().into(),
            self.contract_ref.as_str().into(),
        ]
    }
}

fn opt(value: &Option<String>) -> Cell {
    Cell::Str(value.clone().unwrap_or_default())
}

impl SheetRow for SelectionRow {
    const HEADERS: &'static [&'static str] = &SELECTION_HEADERS;
    fn cells(&self) -> Vec<Cell> {
        vec![
            self.src_site_id.as_str().into(),
            self.src_tenant_id.as_str().into(),
            self.src_tenant_name.as_str().into(),
            self.src_schema_id.as_str().into(),
            self.src_template.as_str().into(),
            self.src_anp.as_str().into(),
            self.src_bd.as_str().into(),
            self.src_epg.as_str().into(),
            self.dst_tenant_id.as_str().into(),
            self.dst_tenant_name.as_str().into(),
            self.dst_site_id.as_str().into(),
            self.dst_schema_id.as_str().into(),
            self.dst_template.as_str().into(),
            self.dst_anp.as_str().into(),
            self.dst_vrf_ref.as_str().into(),
            self.dst_bd.as_str().into(),
            self.dst_epg.as_str().into(),
            opt(&self.dst_l3out_1),
            opt(&self.dst_l3out_ref_1),
            opt(&self.dst_l3out_2),
            opt(&self.dst_l3out_ref_2),
            opt(&self.dst_consumer_contract),
            Cell::Bool(self.dst_host_based_routing),
        ]
    }
}

fn write_table<R: SheetRow>(
    sheet: &mut Worksheet,
    first_col: u16,
    rows: &[R],
    header_format: &Format,
) -> Result<(), XlsxError> {
    for (offset, header) in R::HEADERS.iter().enumerate() {
        let col = first_col + u16::try_from(offset).unwrap_or(u16::MAX);
        sheet.write_string_with_format(0, col, *header, header_format)?;
    }
    for (row_offset, row) in rows.iter().enumerate() {
        let row_idx = u32::try_from(row_offset + 1).unwrap_or(u32::MAX);
        for (col_offset, cell) in row.cells().iter().enumerate() {
            let col = first_col + u16::try_from(col_offset).unwrap_or(u16::MAX);
            match cell {
                Cell::Str(s) => sheet.write_string(row_idx, col, s)?,
                #[allow(clippy::cast_precision_loss)]
                Cell::Num(n) => sheet.write_number(row_idx, col, *n as f64)?,
                Cell::Bool(b) => sheet.write_boolean(row_idx, col, *b)?,
            };
        }
    }
    Ok(())
}

fn side_by_side_col<R: SheetRow>() -> u16 {
    // One blank gap column between the template view and the site view.
    u16::try_from(R::HEADERS.len() + 1).unwrap_or(u16::MAX)
}

/// Write the full workbook for one export run.
///
/// # Errors
///
/// Returns [`SheetError::Write`] if any sheet cannot be written or the file
/// cannot be saved.
pub fn write_workbook(path: &Path, data: &ExportData) -> Result<(), SheetError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet().set_name("Sites")?;
    write_table(sheet, 0, &normalize::site_rows(&data.sites), &header_format)?;

    let sheet = workbook.add_worksheet().set_name("Tenants")?;
    write_table(
        sheet,
        0,
        &normalize::tenant_rows(&data.tenants),
        &header_format,
    )?;

    let sheet = workbook.add_worksheet().set_name("Schemas")?;
    write_table(
        sheet,
        0,
        &normalize::schema_template_rows(&data.schemas),
        &header_format,
    )?;
    write_table(
        sheet,
        side_by_side_col::<SchemaTemplateRow>(),
        &normalize::schema_site_rows(&data.schemas),
        &header_format,
    )?;

    let sheet = workbook.add_worksheet().set_name("VRFs")?;
    write_table(
        sheet,
        0,
        &normalize::vrf_template_rows(&data.schemas),
        &header_format,
    )?;
    write_table(
        sheet,
        side_by_side_col::<VrfTemplateRow>(),
        &normalize::vrf_site_rows(&data.schemas),
        &header_format,
    )?;

    let sheet = workbook.add_worksheet().set_name("BDs")?;
    write_table(
        sheet,
        0,
        &normalize::bd_template_rows(&data.schemas),
        &header_format,
    )?;
    write_table(
        sheet,
        side_by_side_col::<BdTemplateRow>(),
        &normalize::bd_site_rows(&data.schemas),
        &header_format,
    )?;

    let sheet = workbook.add_worksheet().set_name("EPGs")?;
    write_table(
        sheet,
        0,
        &normalize::epg_template_rows(&data.schemas),
        &header_format,
    )?;
    write_table(
        sheet,
        side_by_side_col::<EpgTemplateRow>(),
        &normalize::epg_site_rows(&data.schemas),
        &header_format,
    )?;

    let sheet = workbook.add_worksheet().set_name("Contracts")?;
    write_table(
        sheet,
        0,
        &normalize::contract_template_rows(&data.schemas),
        &header_format,
    )?;
    write_table(
        sheet,
        side_by_side_col::<ContractTemplateRow>(),
        &normalize::contract_site_rows(&data.schemas),
        &header_format,
    )?;

    let selection = normalize::selection_rows(&data.schemas, &data.tenants);
    tracing::info!(rows = selection.len(), "pre-populated EPG Selection sheet");
    let sheet = workbook.add_worksheet().set_name(SELECTION_SHEET)?;
    write_table(sheet, 0, &selection, &header_format)?;

    workbook.save(path)?;
    tracing::info!(path = %path.display(), "workbook written");
    Ok(())
}
