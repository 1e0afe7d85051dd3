//! Typed worksheet row models.
//!
//! One struct per exported sheet, mirroring the flattened views the operator
//! sees in the workbook. The sheet crate owns column headers and cell
//! placement; these types only carry the data.

use serde::{Deserialize, Serialize};

/// `Sites` sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRow {
    pub name: String,
    pub display_name: String,
    pub id: String,
    /// Fabric site number, empty when the site never reported one.
    pub number: String,
}

/// `Tenants` sheet row; one row per tenant/site association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantRow {
    pub name: String,
    pub display_name: String,
    pub id: String,
    pub site_id: String,
}

/// `Schemas` sheet, template view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTemplateRow {
    pub schema_name: String,
    pub schema_id: String,
    pub schema_version: u64,
    pub template_name: String,
    pub template_display_name: String,
    pub template_id: String,
    pub template_type: String,
    pub template_version: u64,
    pub tenant_id: String,
}

/// `Schemas` sheet, site-association view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSiteRow {
    pub schema_name: String,
    pub schema_id: String,
    pub schema_version: u64,
    pub site_id: String,
    pub site_template_name: String,
    pub site_template_id: String,
}

/// `VRFs` sheet, template view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrfTemplateRow {
    pub schema_id: String,
    pub template_id: String,
    pub tenant_id: String,
    pub vrf_name: String,
    pub vrf_display_name: String,
    pub vrf_uuid: String,
    pub vrf_ref: String,
}

/// `VRFs` sheet, site view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrfSiteRow {
    pub schema_id: String,
    pub site_id: String,
    pub site_template_id: String,
    pub vrf_ref: String,
}

/// `BDs` sheet, template view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BdTemplateRow {
    pub schema_id: String,
    pub template_id: String,
    pub tenant_id: String,
    pub bd_name: String,
    pub bd_display_name: String,
    pub bd_uuid: String,
    pub bd_ref: String,
    pub l2_stretch: bool,
    pub has_template_subnets: bool,
    pub vrf_ref: String,
}

/// `BDs` sheet, site view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BdSiteRow {
    pub schema_id: String,
    pub site_id: String,
    pub site_template_id: String,
    pub bd_ref: String,
    pub has_site_subnets: bool,
}

/// `EPGs` sheet, template view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpgTemplateRow {
    pub schema_id: String,
    pub template_id: String,
    pub tenant_id: String,
    pub anp_name: String,
    pub anp_uuid: String,
    pub anp_ref: String,
    pub epg_name: String,
    pub epg_display_name: String,
    pub epg_uuid: String,
    pub epg_ref: String,
    pub bd_ref: String,
}

/// `EPGs` sheet, site view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpgSiteRow {
    pub schema_id: String,
    pub site_id: String,
    pub site_template_id: String,
    pub anp_ref: String,
    pub epg_ref: String,
}

/// `Contracts` sheet, template view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTemplateRow {
    pub schema_id: String,
    pub template_id: String,
    pub tenant_id: String,
    pub contract_name: String,
    pub contract_display_name: String,
    pub contract_uuid: String,
    pub contract_ref: String,
}

/// `Contracts` sheet, site view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSiteRow {
    pub schema_id: String,
    pub site_id: String,
    pub site_template_id: String,
    pub contract_ref: String,
}

/// `EPG Selection` sheet row: one BD/EPG pair with its current (source)
/// assignment and the operator-edited destination.
///
/// At export the destination columns are pre-filled with the current
/// assignment, so an untouched sheet reimports as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRow {
    // Source identity (as exported; not meant to be edited).
    pub src_site_id: String,
    pub src_tenant_id: String,
    pub src_tenant_name: String,
    pub src_schema_id: String,
    pub src_template: String,
    pub src_anp: String,
    pub src_bd: String,
    pub src_epg: String,

    // Destination, edited by the operator.
    pub dst_tenant_id: String,
    pub dst_tenant_name: String,
    pub dst_site_id: String,
    pub dst_schema_id: String,
    pub dst_template: String,
    pub dst_anp: String,
    pub dst_vrf_ref: String,
    pub dst_bd: String,
    pub dst_epg: String,
    pub dst_l3out_1: Option<String>,
    pub dst_l3out_ref_1: Option<String>,
    pub dst_l3out_2: Option<String>,
    pub dst_l3out_ref_2: Option<String>,
    pub dst_consumer_contract: Option<String>,
    pub dst_host_based_routing: bool,
}

impl SelectionRow {
    /// A row whose destination tenant matches the current tenant requires no
    /// mutation.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.dst_tenant_id == self.src_tenant_id
    }

    /// Destination L3Out name/ref pairs, skipping blanks.
    #[must_use]
    pub fn dst_l3outs(&self) -> Vec<(String, Option<String>)> {
        [
            (&self.dst_l3out_1, &self.dst_l3out_ref_1),
            (&self.dst_l3out_2, &self.dst_l3out_ref_2),
        ]
        .into_iter()
        .filter_map(|(name, reference)| {
            name.as_deref()
                .filter(|n| !n.is_empty())
                .map(|n| (n.to_owned(), reference.clone().filter(|r| !r.is_empty())))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_row() -> SelectionRow {
        SelectionRow {
            src_site_id: "6075".into(),
            src_tenant_id: "t-100".into(),
            src_tenant_name: "prod".into(),
            src_schema_id: "5f2a".into(),
            src_template: "Tmpl1".into(),
            src_anp: "AP1".into(),
            src_bd: "WEB_BD".into(),
            src_epg: "WEB_EPG".into(),
            dst_tenant_id: "t-100".into(),
            dst_tenant_name: "prod".into(),
            dst_site_id: "6075".into(),
            dst_schema_id: "5f2a".into(),
            dst_template: "Tmpl1".into(),
            dst_anp: "AP1".into(),
            dst_vrf_ref: "/schemas/5f2a/templates/Tmpl1/vrfs/VRF1".into(),
            dst_bd: "WEB_BD".into(),
            dst_epg: "WEB_EPG".into(),
            dst_l3out_1: None,
            dst_l3out_ref_1: None,
            dst_l3out_2: None,
            dst_l3out_ref_2: None,
            dst_consumer_contract: None,
            dst_host_based_routing: false,
        }
    }

    #[test]
    fn untouched_row_is_noop() {
        assert!(sample_row().is_noop());
    }

    #[test]
    fn retenanted_row_is_not_noop() {
        let mut row = sample_row();
        row.dst_tenant_id = "t-200".into();
        assert!(!row.is_noop());
    }

    #[test]
    fn l3out_pairs_skip_blanks() {
        let mut row = sample_row();
        row.dst_l3out_1 = Some("core-l3out".into());
        row.dst_l3out_ref_1 = Some(String::new());
        row.dst_l3out_2 = Some(String::new());

        let l3outs = row.dst_l3outs();
        assert_eq!(l3outs.len(), 1);
        assert_eq!(l3outs[0].0, "core-l3out");
        assert!(l3outs[0].1.is_none());
    }
}
