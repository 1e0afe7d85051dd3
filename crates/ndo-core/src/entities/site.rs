use serde::{Deserialize, Serialize};

/// `GET /mso/api/v2/sites` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitesResponse {
    pub sites: Vec<Site>,
}

/// A managed fabric site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub common: SiteCommon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCommon {
    pub name: String,
    pub display_name: String,
    /// Fabric site number; absent on sites that never completed onboarding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "sites": [
            {
                "id": "6075",
                "common": {
                    "name": "dc-east",
                    "displayName": "DC East",
                    "siteId": "1"
                }
            },
            {
                "id": "6076",
                "common": {
                    "name": "dc-west",
                    "displayName": "DC West"
                }
            }
        ]
    }"#;

    #[test]
    fn parse_sites_response() {
        let data: SitesResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.sites.len(), 2);
        assert_eq!(data.sites[0].common.name, "dc-east");
        assert_eq!(data.sites[0].common.site_id.as_deref(), Some("1"));
        assert!(data.sites[1].common.site_id.is_none());
    }
}
