//! Configuration management for the Quail client.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::DEFAULT_API_BASE;

/// Language sent to the auth endpoints when none is configured.
pub const DEFAULT_LANG: &str = "en";

/// Client configuration.
///
/// Empty strings are treated the same as omitted options; see
/// [`ClientConfig::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub apibase: String,
    /// Static API key, sent as `X-QUAIL-Key`
    pub apikey: String,
    /// Static access token; wins over any credential provider
    pub access_token: String,
    /// Log every outgoing JSON request
    pub debug: bool,
    /// Preferred language for auth mails
    pub lang: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            apibase: DEFAULT_API_BASE.to_string(),
            apikey: String::new(),
            access_token: String::new(),
            debug: false,
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_apibase(mut self, apibase: impl Into<String>) -> Self {
        self.apibase = apibase.into();
        self
    }

    /// Set the static API key.
    pub fn with_apikey(mut self, apikey: impl Into<String>) -> Self {
        self.apikey = apikey.into();
        self
    }

    /// Set the static access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    /// Enable or disable request diagnostics.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the language tag (e.g. `en-US`); only the first two characters are sent.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Restore defaults for options left empty.
    pub fn normalized(mut self) -> Self {
        if self.apibase.is_empty() {
            self.apibase = DEFAULT_API_BASE.to_string();
        }
        if self.lang.is_empty() {
            self.lang = DEFAULT_LANG.to_string();
        }
        self
    }

    /// Two-letter language code derived from `lang`.
    pub fn short_lang(&self) -> String {
        self.lang.chars().take(2).collect()
    }
}

/// Command-line arguments for the `quail` binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "quail")]
#[command(author = "Quail Client Developers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the Quail newsletter platform")]
pub struct Args {
    /// API base URL
    #[arg(long, default_value = DEFAULT_API_BASE, env = "QUAIL_API_BASE")]
    pub api_base: String,

    /// Static API key (sent as X-QUAIL-Key)
    #[arg(long, env = "QUAIL_API_KEY")]
    pub api_key: Option<String>,

    /// Access token (overrides the credential store and QUAIL_ACCESS_TOKEN)
    #[arg(long)]
    pub access_token: Option<String>,

    /// Enable debug logging
    #[arg(short, long, env = "QUAIL_DEBUG")]
    pub debug: bool,

    /// Language for auth mails
    #[arg(long, env = "QUAIL_LANG")]
    pub lang: Option<String>,

    /// Credential store file (defaults to <config dir>/quail/storage.json)
    #[arg(long, env = "QUAIL_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `quail` binary.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the current user
    Me,
    /// List assets of the current user
    Assets,
    /// List API keys
    Apikeys,
    /// List mailing lists owned by a user
    Lists { user_id: String },
    /// Show one mailing list
    List { list_id: String },
    /// List posts of a mailing list
    Posts {
        list_id: String,
        #[arg(long, default_value = "0")]
        offset: u64,
        #[arg(long, default_value = "10")]
        limit: u64,
        /// Only public posts
        #[arg(long)]
        public: bool,
    },
    /// Show one post
    Post { list_id: String, post_id: String },
    /// List the current user's subscriptions
    Subscriptions,
    /// Trending posts
    TrendingPosts {
        #[arg(long, default_value = "0")]
        offset: u64,
        #[arg(long, default_value = "10")]
        limit: u64,
    },
    /// Trending mailing lists
    TrendingLists {
        #[arg(long, default_value = "0")]
        offset: u64,
        #[arg(long, default_value = "10")]
        limit: u64,
    },
    /// Search stock photos
    SearchPhotos {
        query: String,
        #[arg(long, default_value = "1")]
        page: u64,
        #[arg(long, default_value = "10")]
        limit: u64,
    },
    /// Upload a file as an attachment
    Upload { file: PathBuf },
    /// Send a raw request through the dispatcher
    Request {
        method: String,
        path: String,
        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },
}

/// Language tag from a POSIX locale string such as `de_DE.UTF-8`.
///
/// The `C` and `POSIX` locales carry no language and yield `None`.
pub fn lang_from_locale(locale: &str) -> Option<String> {
    let name = locale.split(['.', '@']).next().unwrap_or_default();
    match name {
        "" | "C" | "POSIX" => None,
        _ => Some(name.to_string()),
    }
}

impl From<&Args> for ClientConfig {
    fn from(args: &Args) -> Self {
        let lang = args
            .lang
            .clone()
            .or_else(|| std::env::var("LANG").ok().and_then(|l| lang_from_locale(&l)))
            .unwrap_or_default();

        Self {
            apibase: args.api_base.clone(),
            apikey: args.api_key.clone().unwrap_or_default(),
            access_token: args.access_token.clone().unwrap_or_default(),
            debug: args.debug,
            lang,
        }
        .normalized()
    }
}
