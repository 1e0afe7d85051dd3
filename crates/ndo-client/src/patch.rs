//! JSON-Patch mutations on `/mso/api/v1/schemas/{id}`.
//!
//! Template-level objects are addressed by name under
//! `/templates/{template}/...`; site-local state lives under
//! `/sites/{siteId}-{template}/...`. Op construction is kept in pure
//! functions so the exact bodies are testable without a controller.

use ndo_core::payloads::{BdSitePayload, BdTemplatePayload, EpgSitePayload, EpgTemplatePayload};
use serde_json::{Value, json};

use crate::NdoClient;
use crate::error::ApiError;
use crate::http::check_response;

fn add_template_bd_ops(template: &str, payload: &BdTemplatePayload) -> Value {
    json!([{
        "op": "add",
        "path": format!("/templates/{template}/bds/-"),
        "value": payload,
    }])
}

fn remove_template_bd_ops(template: &str, bd: &str) -> Value {
    json!([{
        "op": "remove",
        "path": format!("/templates/{template}/bds/{bd}"),
    }])
}

fn replace_site_bd_ops(site_id: &str, template: &str, bd: &str, payload: &BdSitePayload) -> Value {
    json!([{
        "op": "replace",
        "path": format!("/sites/{site_id}-{template}/bds/{bd}"),
        "value": payload,
    }])
}

fn add_template_epg_ops(template: &str, anp: &str, payload: &EpgTemplatePayload) -> Value {
    json!([{
        "op": "add",
        "path": format!("/templates/{template}/anps/{anp}/epgs/-"),
        "value": payload,
    }])
}

fn remove_template_epg_ops(template: &str, anp: &str, epg: &str) -> Value {
    json!([{
        "op": "remove",
        "path": format!("/templates/{template}/anps/{anp}/epgs/{epg}"),
    }])
}

fn replace_site_epg_ops(
    site_id: &str,
    template: &str,
    anp: &str,
    epg: &str,
    payload: &EpgSitePayload,
) -> Value {
    json!([{
        "op": "replace",
        "path": format!("/sites/{site_id}-{template}/anps/{anp}/epgs/{epg}"),
        "value": payload,
    }])
}

fn replace_static_ports_ops(
    site_id: &str,
    template: &str,
    anp: &str,
    epg: &str,
    ports: &[Value],
) -> Value {
    json!([{
        "op": "replace",
        "path": format!("/sites/{site_id}-{template}/anps/{anp}/epgs/{epg}/staticPorts"),
        "value": ports,
    }])
}

impl NdoClient {
    async fn patch_schema(&self, schema_id: &str, ops: &Value) -> Result<(), ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/mso/api/v1/schemas/{schema_id}")))
            .json(ops)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// Append a BD to a template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the controller rejects the patch.
    pub async fn add_template_bd(
        &self,
        schema_id: &str,
        template: &str,
        payload: &BdTemplatePayload,
    ) -> Result<(), ApiError> {
        self.patch_schema(schema_id, &add_template_bd_ops(template, payload))
            .await?;
        tracing::info!(schema_id, template, bd = %payload.name, "template BD added");
        Ok(())
    }

    /// Remove a BD from a template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the controller rejects the patch.
    pub async fn remove_template_bd(
        &self,
        schema_id: &str,
        template: &str,
        bd: &str,
    ) -> Result<(), ApiError> {
        self.patch_schema(schema_id, &remove_template_bd_ops(template, bd))
            .await?;
        tracing::info!(schema_id, template, bd, "template BD removed");
        Ok(())
    }

    /// Replace a BD's site-local state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the controller rejects the patch.
    pub async fn replace_site_bd(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        bd: &str,
        payload: &BdSitePayload,
    ) -> Result<(), ApiError> {
        self.patch_schema(schema_id, &replace_site_bd_ops(site_id, template, bd, payload))
            .await?;
        tracing::info!(schema_id, site_id, template, bd, "site BD replaced");
        Ok(())
    }

    /// Append an EPG to a template ANP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the controller rejects the patch.
    pub async fn add_template_epg(
        &self,
        schema_id: &str,
        template: &str,
        anp: &str,
        payload: &EpgTemplatePayload,
    ) -> Result<(), ApiError> {
        self.patch_schema(schema_id, &add_template_epg_ops(template, anp, payload))
            .await?;
        tracing::info!(schema_id, template, anp, epg = %payload.name, "template EPG added");
        Ok(())
    }

    /// Remove an EPG from a template ANP.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the controller rejects the patch.
    pub async fn remove_template_epg(
        &self,
        schema_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
    ) -> Result<(), ApiError> {
        self.patch_schema(schema_id, &remove_template_epg_ops(template, anp, epg))
            .await?;
        tracing::info!(schema_id, template, anp, epg, "template EPG removed");
        Ok(())
    }

    /// Replace an EPG's site-local state.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the controller rejects the patch.
    pub async fn replace_site_epg(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
        payload: &EpgSitePayload,
    ) -> Result<(), ApiError> {
        self.patch_schema(
            schema_id,
            &replace_site_epg_ops(site_id, template, anp, epg, payload),
        )
        .await?;
        tracing::info!(schema_id, site_id, template, anp, epg, "site EPG replaced");
        Ok(())
    }

    /// Replace an EPG's site-local static port bindings.
    ///
    /// Passing an empty slice strips every binding, which is how the
    /// migration releases ports from the source EPG before the destination
    /// claims them.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the controller rejects the patch.
    pub async fn replace_site_epg_static_ports(
        &self,
        schema_id: &str,
        site_id: &str,
        template: &str,
        anp: &str,
        epg: &str,
        ports: &[Value],
    ) -> Result<(), ApiError> {
        self.patch_schema(
            schema_id,
            &replace_static_ports_ops(site_id, template, anp, epg, ports),
        )
        .await?;
        tracing::info!(
            schema_id,
            site_id,
            template,
            anp,
            epg,
            count = ports.len(),
            "site EPG static ports replaced"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn add_template_bd_targets_append_path() {
        let payload = BdTemplatePayload {
            name: "WEB_BD".into(),
            ..Default::default()
        };
        let ops = add_template_bd_ops("Tmpl1", &payload);
        assert_eq!(ops[0]["op"], "add");
        assert_eq!(ops[0]["path"], "/templates/Tmpl1/bds/-");
        assert_eq!(ops[0]["value"]["name"], "WEB_BD");
    }

    #[test]
    fn remove_template_epg_has_no_value() {
        let ops = remove_template_epg_ops("Tmpl1", "AP1", "WEB_EPG");
        assert_eq!(ops[0]["op"], "remove");
        assert_eq!(ops[0]["path"], "/templates/Tmpl1/anps/AP1/epgs/WEB_EPG");
        assert!(ops[0].get("value").is_none());
    }

    #[test]
    fn site_paths_join_site_and_template() {
        let payload = BdSitePayload::default();
        let ops = replace_site_bd_ops("6075", "Tmpl1", "WEB_BD", &payload);
        assert_eq!(ops[0]["path"], "/sites/6075-Tmpl1/bds/WEB_BD");

        let ops = replace_static_ports_ops("6075", "Tmpl1", "AP1", "WEB_EPG", &[]);
        assert_eq!(
            ops[0]["path"],
            "/sites/6075-Tmpl1/anps/AP1/epgs/WEB_EPG/staticPorts"
        );
        assert_eq!(ops[0]["value"], serde_json::json!([]));
    }
}
