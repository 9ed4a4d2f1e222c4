use serde_json::Value;
use std::fmt::Display;

use crate::error::Result;
use crate::sdk::client::QuailClient;
use crate::sdk::routes::{self, Page};

impl QuailClient {
    pub async fn get_explore_trending_posts(&self, page: Page) -> Result<Value> {
        self.get(&routes::trending_posts(page)).await
    }

    pub async fn get_explore_trending_lists(&self, page: Page) -> Result<Value> {
        self.get(&routes::trending_lists(page)).await
    }

    /// Increment a counter of a post, e.g. `view`.
    pub async fn inc_count(&self, post_id: impl Display, field: &str) -> Result<Value> {
        self.post_empty(&routes::counter(post_id, field)).await
    }
}
