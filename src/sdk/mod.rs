//! Quail SDK.
//!
//! # Architecture
//!
//! - `credentials` - Bearer token resolution
//! - `dispatcher` - Single chokepoint that sends requests and decodes envelopes
//! - `envelope` - Response envelope decoding
//! - `routes` - Endpoint path and query construction
//! - `types` - Typed request payloads
//! - `client` / `endpoints` - `QuailClient` and its endpoint methods

pub mod client;
pub mod credentials;
pub mod dispatcher;
mod endpoints;
pub mod envelope;
pub mod routes;
pub mod types;

pub use client::QuailClient;
pub use credentials::{
    resolve_access_token, ChainCredentials, CredentialProvider, EnvCredentials, StoreCredentials,
};
pub use dispatcher::Dispatcher;
pub use envelope::Envelope;
pub use routes::Page;
pub use types::*;
