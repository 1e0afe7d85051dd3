use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /mso/api/v1/schemas` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemasResponse {
    pub schemas: Vec<Schema>,
}

/// A schema: a versioned container of templates plus their per-site overlays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: String,
    pub display_name: String,
    #[serde(rename = "_updateVersion", default)]
    pub update_version: u64,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub sites: Vec<SchemaSite>,
}

impl Schema {
    /// Look up a template by name.
    #[must_use]
    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Look up the site overlay for a (site, template) pair.
    #[must_use]
    pub fn site(&self, site_id: &str, template_name: &str) -> Option<&SchemaSite> {
        self.sites
            .iter()
            .find(|s| s.site_id == site_id && s.template_name == template_name)
    }
}

/// A template: the tenant-owned unit of deployment inside a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "templateID", default)]
    pub template_id: String,
    #[serde(default)]
    pub version: u64,
    pub tenant_id: String,
    #[serde(default)]
    pub template_type: String,
    #[serde(default)]
    pub vrfs: Vec<Vrf>,
    #[serde(default)]
    pub bds: Vec<Bd>,
    #[serde(default)]
    pub anps: Vec<Anp>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vrf {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub uuid: String,
    pub vrf_ref: String,
}

/// Template-level bridge domain, including every field the migration
/// copies into the destination payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bd {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub uuid: String,
    pub bd_ref: String,
    #[serde(default)]
    pub arp_flood: Option<bool>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dhcp_labels: Vec<Value>,
    #[serde(default)]
    pub intersite_bum_traffic_allow: Option<bool>,
    #[serde(default)]
    pub l2_stretch: bool,
    #[serde(default)]
    pub l2_unknown_unicast: String,
    #[serde(rename = "l3MCast", default)]
    pub l3_mcast: Option<bool>,
    #[serde(default)]
    pub multi_dst_pkt_act: String,
    #[serde(default)]
    pub optimize_wan_bandwidth: Option<bool>,
    #[serde(default)]
    pub subnets: Vec<Value>,
    #[serde(default)]
    pub unicast_routing: Option<bool>,
    #[serde(rename = "unkMcastAct", default)]
    pub unk_mcast_act: String,
    #[serde(rename = "v6unkMcastAct", default)]
    pub v6_unk_mcast_act: String,
    /// Virtual MAC; not present on BDs that never had one configured.
    #[serde(default)]
    pub vmac: Option<String>,
    #[serde(default)]
    pub vrf_ref: String,
}

/// Application network profile: the grouping EPGs live under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anp {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub uuid: String,
    pub anp_ref: String,
    #[serde(default)]
    pub epgs: Vec<Epg>,
}

/// Template-level EPG, including every field the migration copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Epg {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub uuid: String,
    pub epg_ref: String,
    #[serde(default)]
    pub bd_ref: String,
    #[serde(default)]
    pub contract_relationships: Vec<Value>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub epg_type: String,
    #[serde(default)]
    pub intra_epg: String,
    #[serde(rename = "mCastSource", default)]
    pub mcast_source: Option<bool>,
    #[serde(default)]
    pub preferred_group: Option<bool>,
    #[serde(default)]
    pub proxy_arp: Option<bool>,
    #[serde(default)]
    pub selectors: Vec<Value>,
    #[serde(default)]
    pub subnets: Vec<Value>,
    #[serde(rename = "uSegAttrs", default)]
    pub useg_attrs: Vec<Value>,
    #[serde(rename = "uSegEpg", default)]
    pub useg_epg: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub uuid: String,
    pub contract_ref: String,
}

/// Per-site overlay of a template: site-local object state keyed by refs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSite {
    pub site_id: String,
    pub template_name: String,
    #[serde(rename = "templateID", default)]
    pub template_id: String,
    #[serde(default)]
    pub vrfs: Vec<SiteVrf>,
    #[serde(default)]
    pub bds: Vec<SiteBd>,
    #[serde(default)]
    pub anps: Vec<SiteAnp>,
    #[serde(default)]
    pub contracts: Vec<SiteContract>,
}

impl SchemaSite {
    /// Site-local BD state by `bdRef`.
    #[must_use]
    pub fn bd(&self, bd_ref: &str) -> Option<&SiteBd> {
        self.bds.iter().find(|b| b.bd_ref == bd_ref)
    }

    /// Site-local EPG state by `epgRef`, searching every site-local ANP.
    #[must_use]
    pub fn epg(&self, epg_ref: &str) -> Option<&SiteEpg> {
        self.anps
            .iter()
            .flat_map(|a| a.epgs.iter())
            .find(|e| e.epg_ref == epg_ref)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteVrf {
    pub vrf_ref: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteBd {
    pub bd_ref: String,
    #[serde(default)]
    pub host_based_routing: Option<bool>,
    #[serde(rename = "l3Outs", default)]
    pub l3_outs: Vec<Value>,
    #[serde(rename = "l3OutRefs", default)]
    pub l3_out_refs: Vec<Value>,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub subnets: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAnp {
    pub anp_ref: String,
    #[serde(default)]
    pub epgs: Vec<SiteEpg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteEpg {
    pub epg_ref: String,
    #[serde(default)]
    pub domain_associations: Vec<Value>,
    #[serde(default)]
    pub selectors: Vec<Value>,
    #[serde(default)]
    pub static_leafs: Vec<Value>,
    #[serde(default)]
    pub static_ports: Vec<Value>,
    #[serde(default)]
    pub subnets: Vec<Value>,
    #[serde(rename = "uSegAttrs", default)]
    pub useg_attrs: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContract {
    pub contract_ref: String,
}
