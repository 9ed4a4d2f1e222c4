//! Quail Client - Rust Implementation
//!
//! A typed async client for the Quail newsletter platform API.
//!
//! # Architecture
//!
//! 1. **Dispatcher** (`sdk::dispatcher`) - resolves the bearer token, sends one
//!    HTTP request per call and decodes the `{code, message, data}` envelope
//! 2. **Credentials** (`sdk::credentials`) - pluggable token sources tried when
//!    no static token is configured
//! 3. **Endpoints** (`sdk::QuailClient`) - one method per API endpoint
//!
//! # Example
//!
//! ```no_run
//! use quail_client::config::ClientConfig;
//! use quail_client::sdk::{Page, QuailClient};
//!
//! # async fn example() -> quail_client::Result<()> {
//! let client = QuailClient::standard(ClientConfig::new().with_apikey("my-key"))?;
//! let posts = client.get_list_posts(42, Page::default(), true).await?;
//! println!("{}", posts);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod sdk;

pub use error::{Error, Result};

/// Client version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.quail.ink";
