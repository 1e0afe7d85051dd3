//! Template deployment tasks.
//!
//! Mutations on a schema only reach the fabric once the template is
//! deployed. `POST /mso/api/v1/task` starts a deployment and returns a task
//! id; `GET /mso/api/v1/deployments/{id}` reports task progress.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::NdoClient;
use crate::error::ApiError;
use crate::http::check_response;

/// Handle to a started deployment task.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentHandle {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentStatus {
    oper_details: OperDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperDetails {
    task_status: String,
    #[serde(default)]
    exec_site_status: Vec<Value>,
}

impl OperDetails {
    /// First per-site failure message, when the controller provides one.
    fn failure_message(&self) -> String {
        self.exec_site_status
            .first()
            .and_then(|site| site.pointer("/status/msg"))
            .and_then(Value::as_str)
            .unwrap_or("no site status message")
            .to_owned()
    }
}

impl NdoClient {
    /// Start a deployment of `template` in `schema_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the controller refuses the task.
    pub async fn deploy_template(
        &self,
        schema_id: &str,
        template: &str,
    ) -> Result<DeploymentHandle, ApiError> {
        let body = serde_json::json!({
            "isRedeploy": false,
            "schemaId": schema_id,
            "templateName": template,
        });
        let resp = self
            .http
            .post(self.url("/mso/api/v1/task"))
            .json(&body)
            .send()
            .await?;
        let handle: DeploymentHandle = check_response(resp).await?.json().await?;
        tracing::info!(schema_id, template, task_id = %handle.id, "deployment task started");
        Ok(handle)
    }

    /// Poll a deployment task until it reports `Complete`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Deployment`] when the task enters the `Error`
    /// state and [`ApiError::DeploymentTimeout`] when `attempts` polls pass
    /// without completion.
    pub async fn wait_for_deployment(
        &self,
        handle: &DeploymentHandle,
        interval: Duration,
        attempts: u32,
    ) -> Result<(), ApiError> {
        let api = format!("/mso/api/v1/deployments/{}", handle.id);
        for _ in 0..attempts {
            let resp = self.http.get(self.url(&api)).send().await?;
            let status: DeploymentStatus = check_response(resp).await?.json().await?;
            let task_status = status.oper_details.task_status.as_str();
            tracing::debug!(task_id = %handle.id, task_status, "deployment status");

            match task_status {
                "Complete" => {
                    tracing::info!(task_id = %handle.id, "deployment complete");
                    return Ok(());
                }
                "Error" => {
                    return Err(ApiError::Deployment {
                        task_id: handle.id.clone(),
                        message: status.oper_details.failure_message(),
                    });
                }
                _ => tokio::time::sleep(interval).await,
            }
        }
        Err(ApiError::DeploymentTimeout {
            task_id: handle.id.clone(),
            attempts,
        })
    }

    /// Start a deployment and poll it to completion.
    ///
    /// # Errors
    ///
    /// See [`Self::deploy_template`] and [`Self::wait_for_deployment`].
    pub async fn deploy_and_wait(
        &self,
        schema_id: &str,
        template: &str,
        interval: Duration,
        attempts: u32,
    ) -> Result<(), ApiError> {
        let handle = self.deploy_template(schema_id, template).await?;
        self.wait_for_deployment(&handle, interval, attempts).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_deployment_status() {
        let raw = r#"{
            "operDetails": {
                "taskStatus": "InProgress",
                "execSiteStatus": []
            }
        }"#;
        let status: DeploymentStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.oper_details.task_status, "InProgress");
    }

    #[test]
    fn failure_message_reads_site_status() {
        let raw = r#"{
            "operDetails": {
                "taskStatus": "Error",
                "execSiteStatus": [
                    {"status": {"msg": "BD already exists"}}
                ]
            }
        }"#;
        let status: DeploymentStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(status.oper_details.failure_message(), "BD already exists");
    }

    #[test]
    fn failure_message_tolerates_missing_site_status() {
        let raw = r#"{"operDetails": {"taskStatus": "Error"}}"#;
        let status: DeploymentStatus = serde_json::from_str(raw).unwrap();
        assert_eq!(
            status.oper_details.failure_message(),
            "no site status message"
        );
    }
}
