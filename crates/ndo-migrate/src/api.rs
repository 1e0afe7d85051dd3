//! Controller seam for the executor.
//!
//! The executor drives migrations through this trait rather than calling
//! [`NdoClient`] directly, so tests can run the full step sequence against an
//! in-memory mock. [`LiveController`] is the production implementation: it
//! forwards each call to the client and folds the poll settings into
//! `deploy_and_wait`.

use std::time::Duration;

use ndo_client::{ApiError, NdoClient};
use ndo_core::payloads::{BdSitePayload, BdTemplatePayload, EpgSitePayload, EpgTemplatePayload};
use serde_json::Value;

/// The controller operations one row plan needs.
#[allow(async_fn_in_trait)]
pub trait ControllerApi {
    async fn add_template_bd(
        &self,
        schema_id: &str,
        template: &str,
        payload: &BdTemplatePayload,
    ) -> Result<(), ApiError>;

    async fn remove_template_bd(
        &self,
        schema_id: &str,
        template: &str,
        bd: &str,
    ) -> Result<(), ApiError>;

    async fn replace_site_bd(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        bd: &str,
        payload: &BdSitePayload,
    ) -> Result<(), ApiError>;

    async fn add_template_epg(
        &self,
        schema_id: &str,
        template: &str,
        anp: &str,
        payload: &EpgTemplatePayload,
    ) -> Result<(), ApiError>;

    async fn remove_template_epg(
        &self,
        schema_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
    ) -> Result<(), ApiError>;

    async fn replace_site_epg(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
        payload: &EpgSitePayload,
    ) -> Result<(), ApiError>;

    async fn replace_site_epg_static_ports(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
        ports: &[Value],
    ) -> Result<(), ApiError>;

    /// Deploy a template and block until the task completes.
    async fn deploy_and_wait(&self, schema_id: &str, template: &str) -> Result<(), ApiError>;
}

/// Production [`ControllerApi`] backed by an authenticated [`NdoClient`].
#[derive(Debug)]
pub struct LiveController {
    client: NdoClient,
    poll_interval: Duration,
    poll_attempts: u32,
}

impl LiveController {
    #[must_use]
    pub fn new(client: NdoClient, poll_interval: Duration, poll_attempts: u32) -> Self {
        Self {
            client,
            poll_interval,
            poll_attempts,
        }
    }
}

impl ControllerApi for LiveController {
    async fn add_template_bd(
        &self,
        schema_id: &str,
        template: &str,
        payload: &BdTemplatePayload,
    ) -> Result<(), ApiError> {
        self.client.add_template_bd(schema_id, template, payload).await
    }

    async fn remove_template_bd(
        &self,
        schema_id: &str,
        template: &str,
        bd: &str,
    ) -> Result<(), ApiError> {
        self.client.remove_template_bd(schema_id, template, bd).await
    }

    async fn replace_site_bd(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        bd: &str,
        payload: &BdSitePayload,
    ) -> Result<(), ApiError> {
        self.client
            .replace_site_bd(schema_id, site_id, template, bd, payload)
            .await
    }

    async fn add_template_epg(
        &self,
        schema_id: &str,
        template: &str,
        anp: &str,
        payload: &EpgTemplatePayload,
    ) -> Result<(), ApiError> {
        self.client
            .add_template_epg(schema_id, template, anp, payload)
            .await
    }

    async fn remove_template_epg(
        &self,
        schema_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
    ) -> Result<(), ApiError> {
        self.client
            .remove_template_epg(schema_id, template, anp, epg)
            .await
    }

    async fn replace_site_epg(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
        payload: &EpgSitePayload,
    ) -> Result<(), ApiError> {
        self.client
            .replace_site_epg(schema_id, site_id, template, anp, epg, payload)
            .await
    }

    async fn replace_site_epg_static_ports(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
        ports: &[Value],
    ) -> Result<(), ApiError> {
        self.client
            .replace_site_epg_static_ports(schema_id, site_id, template, anp, epg, ports)
            .await
    }

    async fn deploy_and_wait(&self, schema_id: &str, template: &str) -> Result<(), ApiError> {
        self.client
            .deploy_and_wait(schema_id, template, self.poll_interval, self.poll_attempts)
            .await
    }
}
