//! Mutation payloads for the controller's JSON-Patch surface.
//!
//! These are the exact field sets the controller accepts for `add`/`replace`
//! operations on template-level and site-local BDs and EPGs. The migration
//! planner fills them from source objects plus the operator's selection row;
//! identity fields the controller assigns itself (`uuid`, version counters)
//! are deliberately absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Template-level BD payload for `add` on `/templates/{t}/bds/-`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BdTemplatePayload {
    pub arp_flood: Option<bool>,
    pub description: String,
    pub dhcp_labels: Vec<Value>,
    pub display_name: String,
    pub intersite_bum_traffic_allow: Option<bool>,
    pub l2_stretch: bool,
    pub l2_unknown_unicast: String,
    #[serde(rename = "l3MCast")]
    pub l3_mcast: Option<bool>,
    pub multi_dst_pkt_act: String,
    pub name: String,
    pub optimize_wan_bandwidth: Option<bool>,
    pub subnets: Vec<Value>,
    pub unicast_routing: Option<bool>,
    #[serde(rename = "unkMcastAct")]
    pub unk_mcast_act: String,
    #[serde(rename = "v6unkMcastAct")]
    pub v6_unk_mcast_act: String,
    pub vmac: String,
    pub vrf_ref: String,
}

/// Site-local BD payload for `replace` on `/sites/{s}-{t}/bds/{bd}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BdSitePayload {
    pub bd_ref: String,
    pub host_based_routing: bool,
    #[serde(rename = "l3OutRefs")]
    pub l3_out_refs: Vec<Value>,
    #[serde(rename = "l3Outs")]
    pub l3_outs: Vec<Value>,
    pub mac: String,
    pub subnets: Vec<Value>,
}

/// Template-level EPG payload for `add` on `/templates/{t}/anps/{a}/epgs/-`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpgTemplatePayload {
    pub bd_ref: String,
    pub contract_relationships: Vec<Value>,
    pub description: String,
    pub display_name: String,
    pub epg_type: String,
    pub intra_epg: String,
    #[serde(rename = "mCastSource")]
    pub mcast_source: Option<bool>,
    pub name: String,
    pub preferred_group: bool,
    pub proxy_arp: Option<bool>,
    pub selectors: Vec<Value>,
    pub subnets: Vec<Value>,
    #[serde(rename = "uSegAttrs")]
    pub useg_attrs: Vec<Value>,
    #[serde(rename = "uSegEpg")]
    pub useg_epg: Option<bool>,
}

/// Site-local EPG payload for `replace` on `/sites/{s}-{t}/anps/{a}/epgs/{e}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpgSitePayload {
    pub domain_associations: Vec<Value>,
    pub epg_ref: String,
    pub selectors: Vec<Value>,
    pub static_leafs: Vec<Value>,
    pub static_ports: Vec<Value>,
    pub subnets: Vec<Value>,
    #[serde(rename = "uSegAttrs")]
    pub useg_attrs: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bd_template_payload_uses_wire_names() {
        let payload = BdTemplatePayload {
            name: "WEB_BD".into(),
            display_name: "WEB_BD".into(),
            l2_stretch: true,
            vrf_ref: "/schemas/s/templates/t/vrfs/v".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["l2Stretch"], true);
        assert_eq!(json["vrfRef"], "/schemas/s/templates/t/vrfs/v");
        assert_eq!(json["unkMcastAct"], "");
        assert_eq!(json["v6unkMcastAct"], "");
        assert!(json["l3MCast"].is_null());
    }

    #[test]
    fn epg_site_payload_uses_wire_names() {
        let payload = EpgSitePayload {
            epg_ref: "/schemas/s/templates/t/anps/a/epgs/e".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["epgRef"], "/schemas/s/templates/t/anps/a/epgs/e");
        assert!(json["uSegAttrs"].as_array().unwrap().is_empty());
        assert!(json["staticPorts"].as_array().unwrap().is_empty());
    }
}
