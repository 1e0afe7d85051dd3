//! Session login.

use serde::Serialize;

use crate::NdoClient;
use crate::error::ApiError;
use crate::http::check_response;

#[derive(Serialize)]
struct LoginRequest<'a> {
    domain: &'a str,
    username: &'a str,
    #[serde(rename = "userPasswd")]
    user_passwd: &'a str,
}

impl NdoClient {
    /// Authenticate and store the session cookie for subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or when the controller
    /// rejects the credentials.
    pub async fn login(
        &self,
        domain: &str,
        username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let body = LoginRequest {
            domain,
            username,
            user_passwd: password,
        };
        let resp = self.http.post(self.url("/login")).json(&body).send().await?;
        check_response(resp).await?;
        tracing::info!(username, "authenticated to controller");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_wire_field_names() {
        let body = LoginRequest {
            domain: "local",
            username: "svc-migrate",
            user_passwd: "hunter2",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["domain"], "local");
        assert_eq!(json["username"], "svc-migrate");
        assert_eq!(json["userPasswd"], "hunter2");
    }
}
