//! Migration planning.
//!
//! Planning is a pure function from a selection row plus live controller
//! state to a [`RowPlan`]: every payload the executor will send, built up
//! front so validation failures surface before the first mutation. A row
//! whose destination tenant matches its current tenant plans to nothing.

use ndo_core::entities::{Bd, Epg, Schema, SiteBd, SiteEpg, Template};
use ndo_core::payloads::{BdSitePayload, BdTemplatePayload, EpgSitePayload, EpgTemplatePayload};
use ndo_core::refs::{BdRef, EpgRef};
use ndo_core::rows::SelectionRow;
use serde_json::{Value, json};

use crate::error::MigrateError;

/// One side of a migration: where a BD/EPG pair lives in the schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub schema_id: String,
    pub template: String,
    pub site_id: String,
    pub anp: String,
    pub bd: String,
    pub epg: String,
}

/// Everything the executor needs to move one BD/EPG pair.
#[derive(Debug, Clone)]
pub struct RowPlan {
    pub src: Endpoint,
    pub dst: Endpoint,
    pub dst_bd_template: BdTemplatePayload,
    pub dst_bd_site: BdSitePayload,
    pub dst_epg_template: EpgTemplatePayload,
    pub dst_epg_site: EpgSitePayload,
}

struct SourceState<'a> {
    bd: &'a Bd,
    epg: &'a Epg,
    site_bd: &'a SiteBd,
    site_epg: &'a SiteEpg,
}

fn find_schema<'a>(schemas: &'a [Schema], schema_id: &str) -> Result<&'a Schema, MigrateError> {
    schemas
        .iter()
        .find(|s| s.id == schema_id)
        .ok_or_else(|| MigrateError::UnknownSchema {
            schema_id: schema_id.to_owned(),
        })
}

fn find_template<'a>(schema: &'a Schema, template: &str) -> Result<&'a Template, MigrateError> {
    schema
        .template(template)
        .ok_or_else(|| MigrateError::UnknownTemplate {
            schema_id: schema.id.clone(),
            template: template.to_owned(),
        })
}

fn source_state<'a>(
    schema: &'a Schema,
    template: &'a Template,
    row: &SelectionRow,
) -> Result<SourceState<'a>, MigrateError> {
    let bd = template
        .bds
        .iter()
        .find(|b| b.name == row.src_bd)
        .ok_or_else(|| MigrateError::UnknownBd {
            template: template.name.clone(),
            bd: row.src_bd.clone(),
        })?;
    let epg = template
        .anps
        .iter()
        .find(|a| a.name == row.src_anp)
        .and_then(|a| a.epgs.iter().find(|e| e.name == row.src_epg))
        .ok_or_else(|| MigrateError::UnknownEpg {
            template: template.name.clone(),
            anp: row.src_anp.clone(),
            epg: row.src_epg.clone(),
        })?;

    let site = schema.site(&row.src_site_id, &template.name).ok_or_else(|| {
        MigrateError::MissingSiteOverlay {
            site_id: row.src_site_id.clone(),
            template: template.name.clone(),
        }
    })?;
    let site_bd = site
        .bd(&bd.bd_ref)
        .ok_or_else(|| MigrateError::MissingSiteState {
            site_id: row.src_site_id.clone(),
            object_ref: bd.bd_ref.clone(),
        })?;
    let site_epg = site
        .epg(&epg.epg_ref)
        .ok_or_else(|| MigrateError::MissingSiteState {
            site_id: row.src_site_id.clone(),
            object_ref: epg.epg_ref.clone(),
        })?;

    Ok(SourceState {
        bd,
        epg,
        site_bd,
        site_epg,
    })
}

/// Destination BD payloads. A source BD that is not L2-stretched is
/// force-stretched on the destination, with its site-local subnets lifted to
/// the template level so they survive the stretch.
fn bd_payloads(src: &SourceState<'_>, row: &SelectionRow, dst_bd_ref: &BdRef) -> (BdTemplatePayload, BdSitePayload) {
    let force_stretch = !src.bd.l2_stretch;

    let template = BdTemplatePayload {
        arp_flood: if force_stretch { Some(true) } else { src.bd.arp_flood },
        description: src.bd.description.clone(),
        dhcp_labels: src.bd.dhcp_labels.clone(),
        display_name: row.dst_bd.clone(),
        intersite_bum_traffic_allow: if force_stretch {
            Some(true)
        } else {
            src.bd.intersite_bum_traffic_allow
        },
        l2_stretch: true,
        l2_unknown_unicast: src.bd.l2_unknown_unicast.clone(),
        l3_mcast: src.bd.l3_mcast,
        multi_dst_pkt_act: src.bd.multi_dst_pkt_act.clone(),
        name: row.dst_bd.clone(),
        optimize_wan_bandwidth: if force_stretch {
            Some(true)
        } else {
            src.bd.optimize_wan_bandwidth
        },
        subnets: if force_stretch {
            src.site_bd.subnets.clone()
        } else {
            src.bd.subnets.clone()
        },
        unicast_routing: src.bd.unicast_routing,
        unk_mcast_act: src.bd.unk_mcast_act.clone(),
        v6_unk_mcast_act: src.bd.v6_unk_mcast_act.clone(),
        vmac: src.bd.vmac.clone().unwrap_or_default(),
        vrf_ref: row.dst_vrf_ref.clone(),
    };

    let mut l3_outs = Vec::new();
    let mut l3_out_refs = Vec::new();
    for (name, reference) in row.dst_l3outs() {
        l3_outs.push(Value::String(name));
        if let Some(r) = reference {
            l3_out_refs.push(Value::String(r));
        }
    }
    let site = BdSitePayload {
        bd_ref: dst_bd_ref.to_string(),
        host_based_routing: row.dst_host_based_routing,
        l3_out_refs,
        l3_outs,
        mac: src.site_bd.mac.clone(),
        subnets: if force_stretch {
            Vec::new()
        } else {
            src.site_bd.subnets.clone()
        },
    };

    (template, site)
}

/// Destination EPG payloads: the source EPG rehomed onto the destination BD,
/// with `preferredGroup` forced on and the row's consumer contract appended.
fn epg_payloads(
    src: &SourceState<'_>,
    row: &SelectionRow,
    dst_bd_ref: &BdRef,
    dst_epg_ref: &EpgRef,
) -> (EpgTemplatePayload, EpgSitePayload) {
    let mut contract_relationships = src.epg.contract_relationships.clone();
    if let Some(contract_ref) = &row.dst_consumer_contract {
        contract_relationships.push(json!({
            "contractRef": contract_ref,
            "relationshipType": "consumer",
        }));
    }

    let template = EpgTemplatePayload {
        bd_ref: dst_bd_ref.to_string(),
        contract_relationships,
        description: src.epg.description.clone(),
        display_name: row.dst_epg.clone(),
        epg_type: src.epg.epg_type.clone(),
        intra_epg: src.epg.intra_epg.clone(),
        mcast_source: src.epg.mcast_source,
        name: row.dst_epg.clone(),
        preferred_group: true,
        proxy_arp: src.epg.proxy_arp,
        selectors: src.epg.selectors.clone(),
        subnets: src.epg.subnets.clone(),
        useg_attrs: src.epg.useg_attrs.clone(),
        useg_epg: src.epg.useg_epg,
    };

    let site = EpgSitePayload {
        domain_associations: src.site_epg.domain_associations.clone(),
        epg_ref: dst_epg_ref.to_string(),
        selectors: src.site_epg.selectors.clone(),
        static_leafs: src.site_epg.static_leafs.clone(),
        static_ports: src.site_epg.static_ports.clone(),
        subnets: src.site_epg.subnets.clone(),
        useg_attrs: src.site_epg.useg_attrs.clone(),
    };

    (template, site)
}

/// Plan one selection row against live schemas.
///
/// Returns `Ok(None)` when the row needs no mutation (destination tenant
/// equals the current tenant).
///
/// # Errors
///
/// Returns [`MigrateError`] when the row references state the controller no
/// longer has, or when the destination template does not belong to the
/// requested destination tenant.
pub fn plan_row(row: &SelectionRow, schemas: &[Schema]) -> Result<Option<RowPlan>, MigrateError> {
    if row.is_noop() {
        tracing::debug!(
            bd = %row.src_bd,
            epg = %row.src_epg,
            tenant = %row.src_tenant_id,
            "destination tenant unchanged, nothing to do"
        );
        return Ok(None);
    }

    let src_schema = find_schema(schemas, &row.src_schema_id)?;
    let src_template = find_template(src_schema, &row.src_template)?;
    let src = source_state(src_schema, src_template, row)?;

    let dst_schema = find_schema(schemas, &row.dst_schema_id)?;
    let dst_template = find_template(dst_schema, &row.dst_template)?;
    if dst_template.tenant_id != row.dst_tenant_id {
        return Err(MigrateError::TenantMismatch {
            template: dst_template.name.clone(),
            requested: row.dst_tenant_id.clone(),
            actual: dst_template.tenant_id.clone(),
        });
    }

    let dst_bd_ref = BdRef::new(&row.dst_schema_id, &row.dst_template, &row.dst_bd);
    let dst_epg_ref = EpgRef::new(
        &row.dst_schema_id,
        &row.dst_template,
        &row.dst_anp,
        &row.dst_epg,
    );

    let (dst_bd_template, dst_bd_site) = bd_payloads(&src, row, &dst_bd_ref);
    let (dst_epg_template, dst_epg_site) = epg_payloads(&src, row, &dst_bd_ref, &dst_epg_ref);

    Ok(Some(RowPlan {
        src: Endpoint {
            schema_id: row.src_schema_id.clone(),
            template: row.src_template.clone(),
            site_id: row.src_site_id.clone(),
            anp: row.src_anp.clone(),
            bd: row.src_bd.clone(),
            epg: row.src_epg.clone(),
        },
        dst: Endpoint {
            schema_id: row.dst_schema_id.clone(),
            template: row.dst_template.clone(),
            site_id: row.dst_site_id.clone(),
            anp: row.dst_anp.clone(),
            bd: row.dst_bd.clone(),
            epg: row.dst_epg.clone(),
        },
        dst_bd_template,
        dst_bd_site,
        dst_epg_template,
        dst_epg_site,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SCHEMAS: &str = r#"{
        "schemas": [
            {
                "id": "5f2a",
                "displayName": "Prod Schema",
                "templates": [
                    {
                        "name": "Tmpl1",
                        "displayName": "Template 1",
                        "tenantId": "t-100",
                        "vrfs": [],
                        "bds": [
                            {
                                "name": "WEB_BD",
                                "displayName": "WEB_BD",
                                "bdRef": "/schemas/5f2a/templates/Tmpl1/bds/WEB_BD",
                                "l2Stretch": false,
                                "l2UnknownUnicast": "proxy",
                                "unicastRouting": true,
                                "unkMcastAct": "flood",
                                "v6unkMcastAct": "flood",
                                "vrfRef": "/schemas/5f2a/templates/Tmpl1/vrfs/VRF1"
                            }
                        ],
                        "anps": [
                            {
                                "name": "AP1",
                                "displayName": "AP1",
                                "anpRef": "/schemas/5f2a/templates/Tmpl1/anps/AP1",
                                "epgs": [
                                    {
                                        "name": "WEB_EPG",
                                        "displayName": "WEB_EPG",
                                        "epgRef": "/schemas/5f2a/templates/Tmpl1/anps/AP1/epgs/WEB_EPG",
                                        "bdRef": "/schemas/5f2a/templates/Tmpl1/bds/WEB_BD",
                                        "preferredGroup": false
                                    }
                                ]
                            }
                        ]
                    },
                    {
                        "name": "Tmpl2",
                        "displayName": "Template 2",
                        "tenantId": "t-200",
                        "vrfs": [],
                        "bds": [],
                        "anps": [
                            {
                                "name": "AP1",
                                "displayName": "AP1",
                                "anpRef": "/schemas/5f2a/templates/Tmpl2/anps/AP1",
                                "epgs": []
                            }
                        ]
                    }
                ],
                "sites": [
                    {
                        "siteId": "6075",
                        "templateName": "Tmpl1",
                        "bds": [
                            {
                                "bdRef": "/schemas/5f2a/templates/Tmpl1/bds/WEB_BD",
                                "hostBasedRouting": false,
                                "mac": "00:22:BD:F8:19:FF",
                                "subnets": [{"ip": "10.14.1.1/24"}]
                            }
                        ],
                        "anps": [
                            {
                                "anpRef": "/schemas/5f2a/templates/Tmpl1/anps/AP1",
                                "epgs": [
                                    {
                                        "epgRef": "/schemas/5f2a/templates/Tmpl1/anps/AP1/epgs/WEB_EPG",
                                        "staticPorts": [{"path": "topology/pod-1/node-101/eth1/1"}]
                                    }
                                ]
                            }
                        ]
                    },
                    {
                        "siteId": "6076",
                        "templateName": "Tmpl2",
                        "bds": [],
                        "anps": []
                    }
                ]
            }
        ]
    }"#;

    fn schemas() -> Vec<Schema> {
        let parsed: ndo_core::entities::SchemasResponse = serde_json::from_str(SCHEMAS).unwrap();
        parsed.schemas
    }

    fn retenant_row() -> SelectionRow {
        SelectionRow {
            src_site_id: "6075".into(),
            src_tenant_id: "t-100".into(),
            src_tenant_name: "prod".into(),
            src_schema_id: "5f2a".into(),
            src_template: "Tmpl1".into(),
            src_anp: "AP1".into(),
            src_bd: "WEB_BD".into(),
            src_epg: "WEB_EPG".into(),
            dst_tenant_id: "t-200".into(),
            dst_tenant_name: "lab".into(),
            dst_site_id: "6076".into(),
            dst_schema_id: "5f2a".into(),
            dst_template: "Tmpl2".into(),
            dst_anp: "AP1".into(),
            dst_vrf_ref: "/schemas/5f2a/templates/Tmpl2/vrfs/VRF1".into(),
            dst_bd: "WEB_BD".into(),
            dst_epg: "WEB_EPG".into(),
            dst_l3out_1: Some("core-l3out".into()),
            dst_l3out_ref_1: None,
            dst_l3out_2: None,
            dst_l3out_ref_2: None,
            dst_consumer_contract: Some("/schemas/5f2a/templates/Tmpl2/contracts/WEB_CTR".into()),
            dst_host_based_routing: true,
        }
    }

    #[test]
    fn noop_row_plans_nothing() {
        let mut row = retenant_row();
        row.dst_tenant_id = "t-100".into();
        let plan = plan_row(&row, &schemas()).unwrap();
        assert!(plan.is_none());
    }

    #[test]
    fn retenant_row_plans_full_move() {
        let plan = plan_row(&retenant_row(), &schemas()).unwrap().expect("plan");

        assert_eq!(plan.src.template, "Tmpl1");
        assert_eq!(plan.dst.template, "Tmpl2");
        assert_eq!(
            plan.dst_bd_site.bd_ref,
            "/schemas/5f2a/templates/Tmpl2/bds/WEB_BD"
        );
        assert_eq!(
            plan.dst_epg_site.epg_ref,
            "/schemas/5f2a/templates/Tmpl2/anps/AP1/epgs/WEB_EPG"
        );
        assert_eq!(
            plan.dst_epg_template.bd_ref,
            "/schemas/5f2a/templates/Tmpl2/bds/WEB_BD"
        );
        assert!(plan.dst_epg_template.preferred_group);
        // Static ports follow the EPG to the destination site.
        assert_eq!(plan.dst_epg_site.static_ports.len(), 1);
    }

    #[test]
    fn non_stretched_bd_is_force_stretched() {
        let plan = plan_row(&retenant_row(), &schemas()).unwrap().expect("plan");

        let bd = &plan.dst_bd_template;
        assert!(bd.l2_stretch);
        assert_eq!(bd.arp_flood, Some(true));
        assert_eq!(bd.intersite_bum_traffic_allow, Some(true));
        assert_eq!(bd.optimize_wan_bandwidth, Some(true));
        // Site subnets lifted to the template level.
        assert_eq!(bd.subnets.len(), 1);
        assert_eq!(bd.subnets[0]["ip"], "10.14.1.1/24");
        assert!(plan.dst_bd_site.subnets.is_empty());
        // Missing vmac defaults to empty.
        assert_eq!(bd.vmac, "");
    }

    #[test]
    fn site_overlay_comes_from_selection_row() {
        let plan = plan_row(&retenant_row(), &schemas()).unwrap().expect("plan");

        let site = &plan.dst_bd_site;
        assert!(site.host_based_routing);
        assert_eq!(site.l3_outs, vec![serde_json::json!("core-l3out")]);
        assert!(site.l3_out_refs.is_empty());
        assert_eq!(site.mac, "00:22:BD:F8:19:FF");
    }

    #[test]
    fn consumer_contract_is_appended() {
        let plan = plan_row(&retenant_row(), &schemas()).unwrap().expect("plan");

        let rels = &plan.dst_epg_template.contract_relationships;
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0]["relationshipType"], "consumer");
        assert_eq!(
            rels[0]["contractRef"],
            "/schemas/5f2a/templates/Tmpl2/contracts/WEB_CTR"
        );
    }

    #[test]
    fn tenant_mismatch_is_rejected() {
        let mut row = retenant_row();
        row.dst_tenant_id = "t-999".into();
        let err = plan_row(&row, &schemas()).unwrap_err();
        assert!(matches!(err, MigrateError::TenantMismatch { .. }));
    }

    #[test]
    fn missing_source_objects_are_rejected() {
        let schemas = schemas();

        let mut row = retenant_row();
        row.src_bd = "GONE_BD".into();
        assert!(matches!(
            plan_row(&row, &schemas).unwrap_err(),
            MigrateError::UnknownBd { .. }
        ));

        let mut row = retenant_row();
        row.src_epg = "GONE_EPG".into();
        assert!(matches!(
            plan_row(&row, &schemas).unwrap_err(),
            MigrateError::UnknownEpg { .. }
        ));

        let mut row = retenant_row();
        row.src_site_id = "9999".into();
        assert!(matches!(
            plan_row(&row, &schemas).unwrap_err(),
            MigrateError::MissingSiteOverlay { .. }
        ));

        let mut row = retenant_row();
        row.dst_schema_id = "beef".into();
        assert!(matches!(
            plan_row(&row, &schemas).unwrap_err(),
            MigrateError::UnknownSchema { .. }
        ));
    }

    #[test]
    fn stretched_bd_keeps_template_subnets_and_site_state() {
        let mut schemas = schemas();
        schemas[0].templates[0].bds[0].l2_stretch = true;
        schemas[0].templates[0].bds[0].subnets =
            vec![serde_json::json!({"ip": "10.20.1.1/24"})];
        schemas[0].templates[0].bds[0].vmac = Some("00:00:5E:00:01:3C".into());

        let plan = plan_row(&retenant_row(), &schemas).unwrap().expect("plan");
        let bd = &plan.dst_bd_template;
        assert!(bd.l2_stretch);
        assert!(bd.arp_flood.is_none());
        assert_eq!(bd.subnets[0]["ip"], "10.20.1.1/24");
        assert_eq!(bd.vmac, "00:00:5E:00:01:3C");
        // Site subnets stay site-local.
        assert_eq!(plan.dst_bd_site.subnets.len(), 1);
    }
}
