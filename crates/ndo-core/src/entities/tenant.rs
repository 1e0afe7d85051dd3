use serde::{Deserialize, Serialize};

/// `GET /mso/api/v1/tenants` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantsResponse {
    pub tenants: Vec<Tenant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub site_associations: Vec<SiteAssociation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAssociation {
    pub site_id: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "tenants": [
            {
                "id": "t-100",
                "name": "prod",
                "displayName": "Production",
                "siteAssociations": [
                    {"siteId": "6075"},
                    {"siteId": "6076"}
                ]
            },
            {
                "id": "t-200",
                "name": "lab",
                "displayName": "Lab"
            }
        ]
    }"#;

    #[test]
    fn parse_tenants_response() {
        let data: TenantsResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.tenants.len(), 2);
        assert_eq!(data.tenants[0].site_associations.len(), 2);
        assert_eq!(data.tenants[0].site_associations[1].site_id, "6076");
        assert!(data.tenants[1].site_associations.is_empty());
    }
}
