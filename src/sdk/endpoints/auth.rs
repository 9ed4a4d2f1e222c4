use serde_json::Value;

use crate::error::Result;
use crate::sdk::client::QuailClient;
use crate::sdk::routes;
use crate::sdk::types::{AuthCodeRequest, LoginRequest};

impl QuailClient {
    /// Ask the server to mail a one-time login code.
    ///
    /// `ctoken` is the human-challenge token, forwarded verbatim.
    pub async fn request_auth_code(&self, email: &str, ctoken: &str) -> Result<Value> {
        let body = AuthCodeRequest {
            email: email.to_string(),
            lang: self.lang(),
            challenge_action: "request_auth_code".to_string(),
            challenge_token: ctoken.to_string(),
        };
        self.post(routes::AUTH_CODE, &body).await
    }

    /// Exchange an emailed code for an access token.
    pub async fn login(&self, email: &str, code: &str) -> Result<Value> {
        let body = LoginRequest {
            method: "email_code".to_string(),
            email: email.to_string(),
            code: code.to_string(),
            lang: self.lang(),
        };
        self.post(routes::AUTH_LOGIN, &body).await
    }
}
