//! Controller API error types.

use thiserror::Error;

/// Errors that can occur when talking to the orchestrator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The controller returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the controller.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// A deployment task finished in the `Error` state.
    #[error("deployment task {task_id} failed: {message}")]
    Deployment { task_id: String, message: String },

    /// A deployment task never reached `Complete` within the allowed polls.
    #[error("deployment task {task_id} still not complete after {attempts} polls")]
    DeploymentTimeout { task_id: String, attempts: u32 },
}
