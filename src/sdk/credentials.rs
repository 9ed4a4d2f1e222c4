//! Credential resolution for the Quail API.
//!
//! The bearer token is resolved fresh on every request, in order:
//! 1. The static `access_token` from [`ClientConfig`](crate::config::ClientConfig)
//! 2. The `"auth"` record of the persisted key-value store
//! 3. The `QUAIL_ACCESS_TOKEN` environment variable
//!
//! Sources 2 and 3 are injected into the dispatcher as a
//! [`CredentialProvider`]; [`ChainCredentials::standard`] wires them up in
//! that order. Resolution only ever reads these sources.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Key of the auth record in the persisted store.
pub const AUTH_STORE_KEY: &str = "auth";

/// Environment variable holding an ambient access token.
pub const ACCESS_TOKEN_ENV: &str = "QUAIL_ACCESS_TOKEN";

/// A source of bearer tokens consulted when no static token is configured.
#[async_trait]
pub trait CredentialProvider: Debug + Send + Sync {
    /// Return a token, or `None` if this source has nothing to offer.
    async fn access_token(&self) -> Option<String>;
}

/// Extract the token from a JSON-encoded auth record.
///
/// `access_token` wins over `token`; empty or non-string fields are skipped
/// without discarding the other one. A record that fails to parse yields an
/// empty string.
pub fn parse_auth_record(raw: &str) -> String {
    let record: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return String::new(),
    };

    ["access_token", "token"]
        .iter()
        .filter_map(|field| record.get(field).and_then(Value::as_str))
        .find(|t| !t.is_empty())
        .map(String::from)
        .unwrap_or_default()
}

/// Default location of the persisted store.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("quail").join("storage.json"))
}

/// Persisted key-value store backed by a JSON object file.
///
/// Values are strings, like browser local storage. The `"auth"` entry is
/// itself a JSON document; an inline object is accepted as well.
#[derive(Debug, Clone)]
pub struct StoreCredentials {
    path: PathBuf,
}

impl StoreCredentials {
    /// Read from the store file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read from [`default_store_path`], if a config directory exists.
    pub fn default_location() -> Option<Self> {
        default_store_path().map(Self::new)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a raw value from the store.
    pub async fn get(&self, key: &str) -> Option<String> {
        let content = fs::read_to_string(&self.path).await.ok()?;
        let store: Value = serde_json::from_str(&content).ok()?;
        match store.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

#[async_trait]
impl CredentialProvider for StoreCredentials {
    async fn access_token(&self) -> Option<String> {
        let raw = self.get(AUTH_STORE_KEY).await?;
        Some(parse_auth_record(&raw)).filter(|t| !t.is_empty())
    }
}

/// Token taken from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Read the token from the given variable.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(ACCESS_TOKEN_ENV)
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentials {
    async fn access_token(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|t| !t.is_empty())
    }
}

/// Ordered list of providers; the first non-empty token wins.
#[derive(Debug, Default, Clone)]
pub struct ChainCredentials {
    providers: Vec<Arc<dyn CredentialProvider>>,
}

impl ChainCredentials {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provider to the end of the chain.
    pub fn with(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    /// Store file at its default location, then `QUAIL_ACCESS_TOKEN`.
    pub fn standard() -> Self {
        Self::standard_with_store(default_store_path())
    }

    /// Like [`ChainCredentials::standard`] with an explicit store file.
    pub fn standard_with_store(store: Option<PathBuf>) -> Self {
        let chain = match store {
            Some(path) => Self::new().with(StoreCredentials::new(path)),
            None => Self::new(),
        };
        chain.with(EnvCredentials::default())
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl CredentialProvider for ChainCredentials {
    async fn access_token(&self) -> Option<String> {
        for provider in &self.providers {
            if let Some(token) = provider.access_token().await.filter(|t| !t.is_empty()) {
                return Some(token);
            }
        }
        None
    }
}

/// Resolve the bearer token for one request.
///
/// Returns an empty string when no source has a token.
pub async fn resolve_access_token(
    static_token: &str,
    provider: Option<&dyn CredentialProvider>,
) -> String {
    if !static_token.is_empty() {
        return static_token.to_string();
    }

    match provider {
        Some(p) => p.access_token().await.unwrap_or_default(),
        None => String::new(),
    }
}
