use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::path::Path;
use tokio::fs;

use crate::error::Result;
use crate::sdk::client::QuailClient;
use crate::sdk::routes::{self, Page};
use crate::sdk::types::PinPostsRequest;

impl QuailClient {
    /// Posts of a list; `public` restricts the result to published posts.
    pub async fn get_list_posts(
        &self,
        list_id: impl Display,
        page: Page,
        public: bool,
    ) -> Result<Value> {
        self.get(&routes::list_posts_page(list_id, page, public))
            .await
    }

    pub async fn get_post(&self, list_id: impl Display, post_id: impl Display) -> Result<Value> {
        self.get(&routes::post(list_id, post_id)).await
    }

    pub async fn get_post_content(
        &self,
        list_id: impl Display,
        post_id: impl Display,
    ) -> Result<Value> {
        self.get(&routes::post_action(list_id, post_id, "content"))
            .await
    }

    pub async fn delete_post(&self, list_id: impl Display, post_id: impl Display) -> Result<Value> {
        self.delete(&routes::post(list_id, post_id)).await
    }

    pub async fn create_post<P: Serialize + ?Sized + Sync>(
        &self,
        list_id: impl Display,
        payload: &P,
    ) -> Result<Value> {
        self.post(&routes::list_posts(list_id), payload).await
    }

    pub async fn update_post<P: Serialize + ?Sized + Sync>(
        &self,
        list_id: impl Display,
        post_id: impl Display,
        payload: &P,
    ) -> Result<Value> {
        self.put(&routes::post_action(list_id, post_id, "update"), payload)
            .await
    }

    pub async fn publish_post(&self, list_id: impl Display, slug: impl Display) -> Result<Value> {
        self.put_empty(&routes::post_action(list_id, slug, "publish"))
            .await
    }

    pub async fn unpublish_post(&self, list_id: impl Display, slug: impl Display) -> Result<Value> {
        self.put_empty(&routes::post_action(list_id, slug, "unpublish"))
            .await
    }

    /// Send a published post to subscribers.
    pub async fn deliver_post(&self, list_id: impl Display, slug: impl Display) -> Result<Value> {
        self.put_empty(&routes::post_action(list_id, slug, "deliver"))
            .await
    }

    pub async fn get_pinned_posts(&self, list_id: impl Display) -> Result<Value> {
        self.get(&routes::pinned(list_id)).await
    }

    /// Replace the pinned posts of a list, in display order.
    pub async fn pin_posts(&self, list_id: impl Display, ids: &[u64]) -> Result<Value> {
        self.put(&routes::pinned(list_id), &PinPostsRequest { ids })
            .await
    }

    /// Upload a caller-built multipart form.
    ///
    /// Server-side failures come back as `{code, message}` instead of an
    /// error; check the returned value for a `code`.
    pub async fn upload_attachment(&self, form: Form) -> Result<Value> {
        self.dispatcher().send_form(routes::ATTACHMENTS, form).await
    }

    /// Upload a local file as the `file` part of a form.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let bytes = fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        self.upload_attachment(form).await
    }
}
