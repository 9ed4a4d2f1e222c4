use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

use crate::error::Result;
use crate::sdk::client::QuailClient;
use crate::sdk::routes::{self, Page};
use crate::sdk::types::{EmailSettings, ListProfile, TelegramSettings};

impl QuailClient {
    /// Create a mailing list.
    pub async fn create_list<P: Serialize + ?Sized + Sync>(&self, payload: &P) -> Result<Value> {
        self.post(routes::LISTS, payload).await
    }

    /// Mailing lists owned by a user.
    pub async fn get_lists(&self, user_id: impl Display) -> Result<Value> {
        self.get(&routes::user_lists(user_id)).await
    }

    pub async fn get_list(&self, list_id: impl Display) -> Result<Value> {
        self.get(&routes::list(list_id)).await
    }

    pub async fn get_list_metrics(&self, list_id: impl Display) -> Result<Value> {
        self.get(&routes::list_metrics(list_id)).await
    }

    /// Replace the title, description and avatar of a list.
    pub async fn update_list(&self, list_id: impl Display, profile: &ListProfile) -> Result<Value> {
        self.put(&routes::list(list_id), profile).await
    }

    pub async fn update_list_telegram(
        &self,
        list_id: impl Display,
        settings: &TelegramSettings,
    ) -> Result<Value> {
        self.put(&routes::list_telegram(list_id), settings).await
    }

    pub async fn update_list_payments<P: Serialize + ?Sized + Sync>(
        &self,
        list_id: impl Display,
        payload: &P,
    ) -> Result<Value> {
        self.put(&routes::list_payments(list_id), payload).await
    }

    /// Update email settings; long onboarding and signature texts are cut to 2048 characters.
    pub async fn update_list_email_settings(
        &self,
        list_id: impl Display,
        settings: EmailSettings,
    ) -> Result<Value> {
        let settings = settings.truncated();
        self.put(&routes::list_email_settings(list_id), &settings)
            .await
    }

    /// Rename the list's slug.
    pub async fn update_list_slug(&self, list_id: impl Display, slug: &str) -> Result<Value> {
        self.put_empty(&routes::list_slug(list_id, slug)).await
    }

    /// Subscribers of a list, optionally filtered by email and premium tier.
    pub async fn get_list_subscriptions(
        &self,
        list_id: impl Display,
        page: Page,
        email: &str,
        premium: &str,
    ) -> Result<Value> {
        self.get(&routes::list_subscriptions(list_id, page, email, premium))
            .await
    }

    /// Delivery history of a list.
    pub async fn get_list_delivery(&self, list_id: impl Display, page: Page) -> Result<Value> {
        self.get(&routes::list_delivery(list_id, page)).await
    }
}
