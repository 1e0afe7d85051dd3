//! Serde mirrors of the orchestrator's JSON objects.
//!
//! Field names follow the controller's camelCase wire format. Collections
//! the tool copies verbatim during migration (subnets, selectors, uSeg
//! attributes, DHCP labels, static ports, ...) are kept as raw
//! [`serde_json::Value`]s so nothing is lost between read and write.

mod schema;
mod site;
mod tenant;

pub use schema::{
    Anp, Bd, Contract, Epg, Schema, SchemaSite, SchemasResponse, SiteAnp, SiteBd, SiteContract,
    SiteEpg, SiteVrf, Template, Vrf,
};
pub use site::{Site, SiteCommon, SitesResponse};
pub use tenant::{SiteAssociation, Tenant, TenantsResponse};
