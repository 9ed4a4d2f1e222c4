use serde_json::Value;

use crate::error::Result;
use crate::sdk::client::QuailClient;
use crate::sdk::routes;
use crate::sdk::types::ComposeRequest;

impl QuailClient {
    /// Generate post frontmatter; `includes` names extra categories to fill in.
    pub async fn generate_frontmatter<S: AsRef<str>>(
        &self,
        title: &str,
        content: &str,
        includes: &[S],
    ) -> Result<Value> {
        self.post(&routes::frontmatter(includes), &ComposeRequest { title, content })
            .await
    }

    /// Generate post metadata; `includes` names extra categories to fill in.
    pub async fn generate_metadata<S: AsRef<str>>(
        &self,
        title: &str,
        content: &str,
        includes: &[S],
    ) -> Result<Value> {
        self.post(&routes::metadata(includes), &ComposeRequest { title, content })
            .await
    }

    /// Search the stock photo provider.
    pub async fn search_photos(&self, query: &str, page: u64, limit: u64) -> Result<Value> {
        self.get(&routes::photo_search(query, page, limit)).await
    }

    /// Resolve a provider download endpoint into a direct URL.
    pub async fn get_photo_download_url(&self, endpoint: &str) -> Result<Value> {
        self.get(&routes::photo_download_url(endpoint)).await
    }
}
