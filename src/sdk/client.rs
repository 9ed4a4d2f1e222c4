//! `QuailClient` - the typed endpoint surface.
//!
//! Endpoint methods live in [`crate::sdk::endpoints`], grouped by resource.
//! They only build a path and body and hand them to the [`Dispatcher`].

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::sdk::credentials::{ChainCredentials, CredentialProvider};
use crate::sdk::dispatcher::Dispatcher;

/// Client for the Quail API.
#[derive(Debug, Clone)]
pub struct QuailClient {
    dispatcher: Dispatcher,
}

impl QuailClient {
    /// Create a client that authenticates with the static token only.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::from_dispatcher(Dispatcher::new(config)?))
    }

    /// Create a client that falls back to `provider` for its bearer token.
    pub fn with_credentials(
        config: ClientConfig,
        provider: impl CredentialProvider + 'static,
    ) -> Result<Self> {
        Ok(Self::from_dispatcher(Dispatcher::with_credentials(
            config, provider,
        )?))
    }

    /// Create a client using the standard store-then-environment chain.
    pub fn standard(config: ClientConfig) -> Result<Self> {
        Self::with_credentials(config, ChainCredentials::standard())
    }

    /// Wrap an existing dispatcher.
    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// The dispatcher every endpoint goes through.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Active configuration.
    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }

    pub(crate) fn lang(&self) -> String {
        self.config().short_lang()
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        self.dispatcher.send::<Value>(path, Method::GET, None).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value> {
        self.dispatcher.send::<Value>(path, Method::DELETE, None).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.dispatcher.send(path, Method::POST, Some(body)).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<Value> {
        self.dispatcher.send::<Value>(path, Method::POST, None).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.dispatcher.send(path, Method::PUT, Some(body)).await
    }

    pub(crate) async fn put_empty(&self, path: &str) -> Result<Value> {
        self.dispatcher.send::<Value>(path, Method::PUT, None).await
    }
}
