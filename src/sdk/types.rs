//! Request payloads for endpoints with a fixed body schema.
//!
//! Endpoints whose body is owned by the server (profiles, posts, payment
//! settings) take any `Serialize` value instead.

use serde::{Deserialize, Serialize};

/// Maximum length of the free-text email settings fields, in UTF-16 code units.
pub const MAX_EMAIL_TEXT_LEN: usize = 2048;

/// Default plan for subscription upgrades.
pub const DEFAULT_UPGRADE_PLAN: &str = "silver";

/// Default upgrade duration in days.
pub const DEFAULT_UPGRADE_DAYS: u32 = 90;

/// Body of `POST /auth/code`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthCodeRequest {
    pub email: String,
    pub lang: String,
    #[serde(rename = "challenge-action")]
    pub challenge_action: String,
    #[serde(rename = "challenge-token")]
    pub challenge_token: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub method: String,
    pub email: String,
    pub code: String,
    pub lang: String,
}

/// Body of `POST /apikeys`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateApikeyRequest {
    pub name: String,
}

/// Body of `POST /subscriptions/{list}`.
#[derive(Debug, Clone, Serialize)]
pub struct SubscribeRequest {
    pub email: String,
    #[serde(rename = "challenge-action")]
    pub challenge_action: String,
    #[serde(rename = "challenge-token")]
    pub challenge_token: String,
}

/// Body of `POST /subscriptions/{list}/add-members`.
#[derive(Debug, Clone, Serialize)]
pub struct AddMembersRequest<'a, M: Serialize> {
    #[serde(rename = "challenge-action")]
    pub challenge_action: String,
    #[serde(rename = "challenge-token")]
    pub challenge_token: String,
    pub members: &'a [M],
}

/// Body of `DELETE /subscriptions/{list}`.
#[derive(Debug, Clone, Serialize)]
pub struct UnsubscribeRequest {
    pub trace_id: String,
}

/// Options for a paid-plan upgrade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeOptions {
    /// Where the payment page sends the reader afterwards
    pub redirect_url: String,
    pub plan: String,
    /// Duration in days
    pub dur: u32,
}

impl Default for UpgradeOptions {
    fn default() -> Self {
        Self {
            redirect_url: String::new(),
            plan: DEFAULT_UPGRADE_PLAN.to_string(),
            dur: DEFAULT_UPGRADE_DAYS,
        }
    }
}

/// Body of `PUT /lists/{list}/pinned`.
#[derive(Debug, Clone, Serialize)]
pub struct PinPostsRequest<'a> {
    pub ids: &'a [u64],
}

/// Editable profile fields of a mailing list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListProfile {
    #[serde(default)]
    pub avatar_image_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Telegram channel integration of a mailing list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramSettings {
    #[serde(default)]
    pub telegram_bot_token: String,
    #[serde(default)]
    pub telegram_channel_id: String,
}

/// Email delivery settings of a mailing list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSettings {
    pub email_channel_enabled: bool,
    #[serde(default)]
    pub email_deny_list: Vec<String>,
    #[serde(default)]
    pub email_onboarding_text: String,
    #[serde(default)]
    pub email_signature_text: String,
}

impl EmailSettings {
    /// Cut the onboarding and signature texts to [`MAX_EMAIL_TEXT_LEN`]
    /// UTF-16 code units, never splitting a character.
    pub fn truncated(mut self) -> Self {
        truncate_utf16(&mut self.email_onboarding_text, MAX_EMAIL_TEXT_LEN);
        truncate_utf16(&mut self.email_signature_text, MAX_EMAIL_TEXT_LEN);
        self
    }
}

fn truncate_utf16(s: &mut String, max: usize) {
    let mut units = 0;
    for (idx, c) in s.char_indices() {
        units += c.len_utf16();
        if units > max {
            s.truncate(idx);
            return;
        }
    }
}

/// Body of the composer generation endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ComposeRequest<'a> {
    pub title: &'a str,
    pub content: &'a str,
}
