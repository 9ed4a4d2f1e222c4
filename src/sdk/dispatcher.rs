//! Request dispatcher for the Quail API.
//!
//! Every endpoint call funnels through [`Dispatcher::send`] (JSON) or
//! [`Dispatcher::send_form`] (multipart uploads). The dispatcher resolves the
//! bearer token, applies the header contract, issues exactly one request
//! and decodes the response envelope.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::sdk::credentials::{resolve_access_token, CredentialProvider};
use crate::sdk::envelope::Envelope;
use crate::VERSION;

/// Header carrying the static API key (`X-QUAIL-Key`).
pub const API_KEY_HEADER: &str = "x-quail-key";

/// User agent string for API requests.
fn user_agent() -> String {
    format!("quail-client/{} (rust)", VERSION)
}

/// Sends requests to the Quail API and decodes response envelopes.
///
/// Cloning is cheap; clones share the underlying connection handling and
/// credential provider.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    config: Arc<ClientConfig>,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl Dispatcher {
    /// Create a dispatcher that only knows the static token from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent())
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: Arc::new(config.normalized()),
            credentials: None,
        })
    }

    /// Create a dispatcher that falls back to `provider` when no static
    /// token is configured.
    pub fn with_credentials(
        config: ClientConfig,
        provider: impl CredentialProvider + 'static,
    ) -> Result<Self> {
        let mut dispatcher = Self::new(config)?;
        dispatcher.credentials = Some(Arc::new(provider));
        Ok(dispatcher)
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolve the bearer token for the next request.
    pub async fn access_token(&self) -> String {
        resolve_access_token(&self.config.access_token, self.credentials.as_deref()).await
    }

    fn url(&self, path: &str) -> Result<String> {
        if path.is_empty() {
            return Err(Error::InvalidPath(
                "request path must not be empty".to_string(),
            ));
        }
        Ok(format!("{}{}", self.config.apibase, path))
    }

    /// Authorization and API key headers shared by both send paths.
    async fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let token = self.access_token().await;
        if !token.is_empty() {
            headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", token))?);
        }

        if !self.config.apikey.is_empty() {
            headers.insert(
                HeaderName::from_static(API_KEY_HEADER),
                header_value(&self.config.apikey)?,
            );
        }

        Ok(headers)
    }

    /// Send a JSON request and return the envelope's `data`.
    ///
    /// `path` is appended verbatim to the configured base URL and may carry
    /// a query string. A `None` or JSON `null` body sends no body at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the envelope carries a truthy `code`, and
    /// passes transport or decoding failures through as [`Error::Http`].
    pub async fn send<B>(&self, path: &str, method: Method, body: Option<&B>) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let payload = match body {
            Some(b) => serde_json::to_value(b)?,
            None => Value::Null,
        };

        let mut headers = self.auth_headers().await?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if self.config.debug {
            debug!("request method {}", method);
            debug!("request url {}", url);
            debug!("request headers {:?}", headers);
            debug!("request body {}", payload);
        }

        let mut request = self.client.request(method.clone(), &url).headers(headers);
        if !payload.is_null() {
            request = request.body(serde_json::to_vec(&payload)?);
        }

        let response = request.send().await?;
        let envelope = decode(response).await?;

        if envelope.is_error() {
            let code = envelope.code_text();
            let message = envelope.message_text();
            warn!("quail client error {} {}", code, message);
            return Err(Error::api(code, message, method.as_str(), url));
        }

        Ok(envelope.into_data())
    }

    /// Upload a multipart form with `POST`.
    ///
    /// Unlike [`Dispatcher::send`], a truthy `code` is not an error here:
    /// the result is `data` when present, else `{code, message}` from the
    /// envelope. The multipart boundary header is left to the transport.
    pub async fn send_form(&self, path: &str, form: Form) -> Result<Value> {
        let url = self.url(path)?;
        let headers = self.auth_headers().await?;

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .multipart(form)
            .send()
            .await?;

        Ok(decode(response).await?.into_form_result())
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::Config(format!("Invalid header value: {}", e)))
}

/// Parse the body as JSON regardless of HTTP status.
async fn decode(response: Response) -> Result<Envelope> {
    let value: Value = response.json().await?;
    Ok(Envelope::from_value(value))
}
