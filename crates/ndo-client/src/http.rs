//! Shared HTTP response helpers.
//!
//! Centralizes the status-code check so individual endpoint modules stay
//! focused on request construction and response mapping.

use crate::error::ApiError;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success; a non-success status becomes
/// [`ApiError::Api`] carrying the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        return Err(ApiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "")).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_auth_failure_carries_body() {
        let err = check_response(mock_response(401, "invalid credentials"))
            .await
            .unwrap_err();
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid credentials");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let err = check_response(mock_response(500, "boom")).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
    }
}
