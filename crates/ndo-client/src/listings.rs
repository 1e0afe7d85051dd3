//! Read-only listing endpoints.
//!
//! The controller returns complete listings in a single response; there is
//! no pagination on these endpoints.

use ndo_core::entities::{SchemasResponse, SitesResponse, TenantsResponse};

use crate::NdoClient;
use crate::error::ApiError;
use crate::http::check_response;

impl NdoClient {
    /// Fetch all managed sites.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the controller returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn sites(&self) -> Result<SitesResponse, ApiError> {
        let resp = self.http.get(self.url("/mso/api/v2/sites")).send().await?;
        let data: SitesResponse = check_response(resp).await?.json().await?;
        tracing::info!(count = data.sites.len(), "received site listing");
        Ok(data)
    }

    /// Fetch all tenants with their site associations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the controller returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn tenants(&self) -> Result<TenantsResponse, ApiError> {
        let resp = self
            .http
            .get(self.url("/mso/api/v1/tenants"))
            .send()
            .await?;
        let data: TenantsResponse = check_response(resp).await?.json().await?;
        tracing::info!(count = data.tenants.len(), "received tenant listing");
        Ok(data)
    }

    /// Fetch all schemas with templates and site overlays.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the controller returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn schemas(&self) -> Result<SchemasResponse, ApiError> {
        let resp = self
            .http
            .get(self.url("/mso/api/v1/schemas"))
            .send()
            .await?;
        let data: SchemasResponse = check_response(resp).await?.json().await?;
        tracing::info!(count = data.schemas.len(), "received schema listing");
        Ok(data)
    }
}
