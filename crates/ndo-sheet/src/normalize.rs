//! Flattening of controller objects into worksheet rows.
//!
//! Each function walks one listing and produces the rows for one sheet
//! view. Empty collections are worth surfacing to the operator (a template
//! with no BDs cannot donate anything to a migration), so they are logged
//! as warnings rather than silently producing nothing.

use ndo_core::entities::{Schema, SchemasResponse, SitesResponse, Template, TenantsResponse};
use ndo_core::rows::{
    BdSiteRow, BdTemplateRow, ContractSiteRow, ContractTemplateRow, EpgSiteRow, EpgTemplateRow,
    SchemaSiteRow, SchemaTemplateRow, SelectionRow, SiteRow, TenantRow, VrfSiteRow, VrfTemplateRow,
};

#[must_use]
pub fn site_rows(sites: &SitesResponse) -> Vec<SiteRow> {
    sites
        .sites
        .iter()
        .map(|site| {
            if site.common.site_id.is_none() {
                tracing::debug!(site = %site.common.name, "site has no fabric site number");
            }
            SiteRow {
                name: site.common.name.clone(),
                display_name: site.common.display_name.clone(),
                id: site.id.clone(),
                number: site.common.site_id.clone().unwrap_or_default(),
            }
        })
        .collect()
}

/// One row per tenant/site association; tenants with no associations still
/// produce a single row so they stay visible in the sheet.
#[must_use]
pub fn tenant_rows(tenants: &TenantsResponse) -> Vec<TenantRow> {
    let mut rows = Vec::new();
    for tenant in &tenants.tenants {
        if tenant.site_associations.is_empty() {
            tracing::warn!(tenant = %tenant.name, "tenant is not associated to any site");
            rows.push(TenantRow {
                name: tenant.name.clone(),
                display_name: tenant.display_name.clone(),
                id: tenant.id.clone(),
                site_id: String::new(),
            });
            continue;
        }
        for association in &tenant.site_associations {
            rows.push(TenantRow {
                name: tenant.name.clone(),
                display_name: tenant.display_name.clone(),
                id: tenant.id.clone(),
                site_id: association.site_id.clone(),
            });
        }
    }
    rows
}

#[must_use]
pub fn schema_template_rows(schemas: &SchemasResponse) -> Vec<SchemaTemplateRow> {
    schemas
        .schemas
        .iter()
        .flat_map(|schema| {
            schema.templates.iter().map(|tmpl| SchemaTemplateRow {
                schema_name: schema.display_name.clone(),
                schema_id: schema.id.clone(),
                schema_version: schema.update_version,
                template_name: tmpl.name.clone(),
                template_display_name: tmpl.display_name.clone(),
                template_id: tmpl.template_id.clone(),
                template_type: tmpl.template_type.clone(),
                template_version: tmpl.version,
                tenant_id: tmpl.tenant_id.clone(),
            })
        })
        .collect()
}

#[must_use]
pub fn schema_site_rows(schemas: &SchemasResponse) -> Vec<SchemaSiteRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        if schema.sites.is_empty() {
            tracing::warn!(schema = %schema.display_name, "schema is not associated to any site");
            continue;
        }
        for site in &schema.sites {
            rows.push(SchemaSiteRow {
                schema_name: schema.display_name.clone(),
                schema_id: schema.id.clone(),
                schema_version: schema.update_version,
                site_id: site.site_id.clone(),
                site_template_name: site.template_name.clone(),
                site_template_id: site.template_id.clone(),
            });
        }
    }
    rows
}

fn warn_empty(schema: &Schema, tmpl: &Template, what: &str) {
    tracing::warn!(
        schema = %schema.display_name,
        template = %tmpl.name,
        "template does not have any {what}"
    );
}

#[must_use]
pub fn vrf_template_rows(schemas: &SchemasResponse) -> Vec<VrfTemplateRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for tmpl in &schema.templates {
            if tmpl.vrfs.is_empty() {
                warn_empty(schema, tmpl, "VRFs");
            }
            for vrf in &tmpl.vrfs {
                rows.push(VrfTemplateRow {
                    schema_id: schema.id.clone(),
                    template_id: tmpl.template_id.clone(),
                    tenant_id: tmpl.tenant_id.clone(),
                    vrf_name: vrf.name.clone(),
                    vrf_display_name: vrf.display_name.clone(),
                    vrf_uuid: vrf.uuid.clone(),
                    vrf_ref: vrf.vrf_ref.clone(),
                });
            }
        }
    }
    rows
}

#[must_use]
pub fn vrf_site_rows(schemas: &SchemasResponse) -> Vec<VrfSiteRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for site in &schema.sites {
            for vrf in &site.vrfs {
                rows.push(VrfSiteRow {
                    schema_id: schema.id.clone(),
                    site_id: site.site_id.clone(),
                    site_template_id: site.template_id.clone(),
                    vrf_ref: vrf.vrf_ref.clone(),
                });
            }
        }
    }
    rows
}

#[must_use]
pub fn bd_template_rows(schemas: &SchemasResponse) -> Vec<BdTemplateRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for tmpl in &schema.templates {
            if tmpl.bds.is_empty() {
                warn_empty(schema, tmpl, "BDs");
            }
            for bd in &tmpl.bds {
                rows.push(BdTemplateRow {
                    schema_id: schema.id.clone(),
                    template_id: tmpl.template_id.clone(),
                    tenant_id: tmpl.tenant_id.clone(),
                    bd_name: bd.name.clone(),
                    bd_display_name: bd.display_name.clone(),
                    bd_uuid: bd.uuid.clone(),
                    bd_ref: bd.bd_ref.clone(),
                    l2_stretch: bd.l2_stretch,
                    has_template_subnets: !bd.subnets.is_empty(),
                    vrf_ref: bd.vrf_ref.clone(),
                });
            }
        }
    }
    rows
}

#[must_use]
pub fn bd_site_rows(schemas: &SchemasResponse) -> Vec<BdSiteRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for site in &schema.sites {
            for bd in &site.bds {
                rows.push(BdSiteRow {
                    schema_id: schema.id.clone(),
                    site_id: site.site_id.clone(),
                    site_template_id: site.template_id.clone(),
                    bd_ref: bd.bd_ref.clone(),
                    has_site_subnets: !bd.subnets.is_empty(),
                });
            }
        }
    }
    rows
}

#[must_use]
pub fn epg_template_rows(schemas: &SchemasResponse) -> Vec<EpgTemplateRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for tmpl in &schema.templates {
            if tmpl.anps.is_empty() {
                warn_empty(schema, tmpl, "application profiles");
            }
            for anp in &tmpl.anps {
                if anp.epgs.is_empty() {
                    tracing::warn!(
                        schema = %schema.display_name,
                        template = %tmpl.name,
                        anp = %anp.name,
                        "application profile does not have any EPGs"
                    );
                }
                for epg in &anp.epgs {
                    rows.push(EpgTemplateRow {
                        schema_id: schema.id.clone(),
                        template_id: tmpl.template_id.clone(),
                        tenant_id: tmpl.tenant_id.clone(),
                        anp_name: anp.name.clone(),
                        anp_uuid: anp.uuid.clone(),
                        anp_ref: anp.anp_ref.clone(),
                        epg_name: epg.name.clone(),
                        epg_display_name: epg.display_name.clone(),
                        epg_uuid: epg.uuid.clone(),
                        epg_ref: epg.epg_ref.clone(),
                        bd_ref: epg.bd_ref.clone(),
                    });
                }
            }
        }
    }
    rows
}

#[must_use]
pub fn epg_site_rows(schemas: &SchemasResponse) -> Vec<EpgSiteRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for site in &schema.sites {
            for anp in &site.anps {
                for epg in &anp.epgs {
                    rows.push(EpgSiteRow {
                        schema_id: schema.id.clone(),
                        site_id: site.site_id.clone(),
                        site_template_id: site.template_id.clone(),
                        anp_ref: anp.anp_ref.clone(),
                        epg_ref: epg.epg_ref.clone(),
                    });
                }
            }
        }
    }
    rows
}

#[must_use]
pub fn contract_template_rows(schemas: &SchemasResponse) -> Vec<ContractTemplateRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for tmpl in &schema.templates {
            if tmpl.contracts.is_empty() {
                warn_empty(schema, tmpl, "contracts");
            }
            for contract in &tmpl.contracts {
                rows.push(ContractTemplateRow {
                    schema_id: schema.id.clone(),
                    template_id: tmpl.template_id.clone(),
                    tenant_id: tmpl.tenant_id.clone(),
                    contract_name: contract.name.clone(),
                    contract_display_name: contract.display_name.clone(),
                    contract_uuid: contract.uuid.clone(),
                    contract_ref: contract.contract_ref.clone(),
                });
            }
        }
    }
    rows
}

#[must_use]
pub fn contract_site_rows(schemas: &SchemasResponse) -> Vec<ContractSiteRow> {
    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for site in &schema.sites {
            for contract in &site.contracts {
                rows.push(ContractSiteRow {
                    schema_id: schema.id.clone(),
                    site_id: site.site_id.clone(),
                    site_template_id: site.template_id.clone(),
                    contract_ref: contract.contract_ref.clone(),
                });
            }
        }
    }
    rows
}

/// Build the pre-populated EPG Selection rows: one per (site, BD, EPG)
/// triple, destination columns mirroring the current assignment so an
/// unedited sheet reimports as a no-op.
#[must_use]
pub fn selection_rows(
    schemas: &SchemasResponse,
    tenants: &TenantsResponse,
) -> Vec<SelectionRow> {
    let tenant_name = |id: &str| -> String {
        tenants
            .tenants
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .unwrap_or_default()
    };

    let mut rows = Vec::new();
    for schema in &schemas.schemas {
        for tmpl in &schema.templates {
            for anp in &tmpl.anps {
                for epg in &anp.epgs {
                    let Some(bd) = tmpl.bds.iter().find(|bd| bd.bd_ref == epg.bd_ref) else {
                        tracing::warn!(
                            epg = %epg.name,
                            bd_ref = %epg.bd_ref,
                            "EPG references a BD outside its own template; not selectable"
                        );
                        continue;
                    };

                    for site in schema.sites.iter().filter(|s| s.template_name == tmpl.name) {
                        if site.epg(&epg.epg_ref).is_none() {
                            continue;
                        }
                        let site_bd = site.bd(&bd.bd_ref);
                        let l3_out = |idx: usize| -> Option<String> {
                            site_bd
                                .and_then(|b| b.l3_outs.get(idx))
                                .and_then(|v| v.as_str())
                                .map(ToOwned::to_owned)
                        };
                        let l3_out_ref = |idx: usize| -> Option<String> {
                            site_bd
                                .and_then(|b| b.l3_out_refs.get(idx))
                                .and_then(|v| v.as_str())
                                .map(ToOwned::to_owned)
                        };

                        rows.push(SelectionRow {
                            src_site_id: site.site_id.clone(),
                            src_tenant_id: tmpl.tenant_id.clone(),
                            src_tenant_name: tenant_name(&tmpl.tenant_id),
                            src_schema_id: schema.id.clone(),
                            src_template: tmpl.name.clone(),
                            src_anp: anp.name.clone(),
                            src_bd: bd.name.clone(),
                            src_epg: epg.name.clone(),
                            dst_tenant_id: tmpl.tenant_id.clone(),
                            dst_tenant_name: tenant_name(&tmpl.tenant_id),
                            dst_site_id: site.site_id.clone(),
                            dst_schema_id: schema.id.clone(),
                            dst_template: tmpl.name.clone(),
                            dst_anp: anp.name.clone(),
                            dst_vrf_ref: bd.vrf_ref.clone(),
                            dst_bd: bd.name.clone(),
                            dst_epg: epg.name.clone(),
                            dst_l3out_1: l3_out(0),
                            dst_l3out_ref_1: l3_out_ref(0),
                            dst_l3out_2: l3_out(1),
                            dst_l3out_ref_2: l3_out_ref(1),
                            dst_consumer_contract: None,
                            dst_host_based_routing: site_bd
                                .and_then(|b| b.host_based_routing)
                                .unwrap_or(false),
                        });
                    }
                }
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tenant_without_sites_still_gets_a_row() {
        let tenants: TenantsResponse = serde_json::from_str(
            r#"{"tenants": [{"id": "t-1", "name": "lab", "displayName": "Lab"}]}"#,
        )
        .unwrap();
        let rows = tenant_rows(&tenants);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].site_id, "");
    }

    #[test]
    fn epg_with_foreign_bd_is_not_selectable() {
        let schemas: SchemasResponse = serde_json::from_str(
            r#"{
                "schemas": [
                    {
                        "id": "s1",
                        "displayName": "S1",
                        "templates": [
                            {
                                "name": "T1",
                                "displayName": "T1",
                                "tenantId": "t-1",
                                "bds": [],
                                "anps": [
                                    {
                                        "name": "AP1",
                                        "displayName": "AP1",
                                        "anpRef": "/schemas/s1/templates/T1/anps/AP1",
                                        "epgs": [
                                            {
                                                "name": "E1",
                                                "displayName": "E1",
                                                "epgRef": "/schemas/s1/templates/T1/anps/AP1/epgs/E1",
                                                "bdRef": "/schemas/OTHER/templates/TX/bds/BX"
                                            }
                                        ]
                                    }
                                ]
                            }
                        ],
                        "sites": [
                            {"siteId": "10", "templateName": "T1", "bds": [], "anps": []}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        let tenants: TenantsResponse = serde_json::from_str(r#"{"tenants": []}"#).unwrap();

        assert!(selection_rows(&schemas, &tenants).is_empty());
    }
}
