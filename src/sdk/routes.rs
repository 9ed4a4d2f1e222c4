//! Path builders for the Quail endpoints.
//!
//! Each function returns a server-relative path, query string included,
//! ready for [`Dispatcher::send`](crate::sdk::Dispatcher::send). Free-text
//! query values are percent-encoded like `encodeURIComponent`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::Display;

/// Characters left as-is by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Offset/limit window for listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    fn query(&self) -> String {
        format!("offset={}&limit={}", self.offset, self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
        }
    }
}

// ===== Auth, users, assets, API keys =====

pub const AUTH_CODE: &str = "/auth/code";
pub const AUTH_LOGIN: &str = "/auth/login";
pub const ASSETS: &str = "/assets";
pub const ME: &str = "/users/me";
pub const APIKEYS: &str = "/apikeys";
pub const ATTACHMENTS: &str = "/attachments";
pub const LISTS: &str = "/lists";
pub const SUBSCRIPTIONS: &str = "/subscriptions";

pub fn asset(asset_id: impl Display) -> String {
    format!("/assets/{}", asset_id)
}

pub fn apikey(id: impl Display) -> String {
    format!("/apikeys/{}", id)
}

pub fn user_lists(user_id: impl Display) -> String {
    format!("/users/{}/lists", user_id)
}

// ===== Subscriptions =====

pub fn subscription(list_id: impl Display) -> String {
    format!("/subscriptions/{}", list_id)
}

pub fn subscription_rel(list_id: impl Display) -> String {
    format!("/subscriptions/{}/rel", list_id)
}

pub fn subscription_no_challenge(list_id: impl Display) -> String {
    format!("/subscriptions/{}/no-challenge", list_id)
}

pub fn add_members(list_id: impl Display) -> String {
    format!("/subscriptions/{}/add-members", list_id)
}

pub fn member(list_id: impl Display, member_id: impl Display) -> String {
    format!("/subscriptions/{}/members/{}", list_id, member_id)
}

pub fn upgrade(list_id: impl Display, redirect_url: &str, plan: &str, dur: u32) -> String {
    format!(
        "/subscriptions/{}/upgrade?redirect_url={}&plan={}&dur={}",
        list_id,
        encode_component(redirect_url),
        encode_component(plan),
        dur
    )
}

// ===== Lists =====

pub fn list(list_id: impl Display) -> String {
    format!("/lists/{}", list_id)
}

pub fn list_metrics(list_id: impl Display) -> String {
    format!("/lists/{}/metrics", list_id)
}

pub fn list_telegram(list_id: impl Display) -> String {
    format!("/lists/{}/telegram", list_id)
}

pub fn list_payments(list_id: impl Display) -> String {
    format!("/lists/{}/payments", list_id)
}

pub fn list_email_settings(list_id: impl Display) -> String {
    format!("/lists/{}/email_settings", list_id)
}

pub fn list_slug(list_id: impl Display, slug: &str) -> String {
    format!("/lists/{}/slug?slug={}", list_id, encode_component(slug))
}

pub fn list_subscriptions(
    list_id: impl Display,
    page: Page,
    email: &str,
    premium: &str,
) -> String {
    let mut path = format!("/lists/{}/subscriptions?{}", list_id, page.query());
    if !email.is_empty() {
        path.push_str(&format!("&email={}", encode_component(email)));
    }
    if !premium.is_empty() {
        path.push_str(&format!("&premium={}", encode_component(premium)));
    }
    path
}

pub fn list_delivery(list_id: impl Display, page: Page) -> String {
    format!("/lists/{}/delivery?{}", list_id, page.query())
}

pub fn pinned(list_id: impl Display) -> String {
    format!("/lists/{}/pinned", list_id)
}

// ===== Posts =====

pub fn list_posts(list_id: impl Display) -> String {
    format!("/lists/{}/posts", list_id)
}

pub fn list_posts_page(list_id: impl Display, page: Page, public: bool) -> String {
    let mut path = format!("/lists/{}/posts?{}", list_id, page.query());
    if public {
        path.push_str("&public=1");
    }
    path
}

pub fn post(list_id: impl Display, post_id: impl Display) -> String {
    format!("/lists/{}/posts/{}", list_id, post_id)
}

/// Sub-resource or lifecycle action of a post, e.g. `content` or `publish`.
pub fn post_action(list_id: impl Display, post_id: impl Display, action: &str) -> String {
    format!("/lists/{}/posts/{}/{}", list_id, post_id, action)
}

pub fn counter(post_id: impl Display, field: &str) -> String {
    format!("/posts/{}?id={}", field, post_id)
}

// ===== Composer =====

fn with_includes<S: AsRef<str>>(base: &str, includes: &[S]) -> String {
    if includes.is_empty() {
        return base.to_string();
    }
    let joined = includes
        .iter()
        .map(|x| encode_component(&x.as_ref().to_lowercase()))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}?includes={}", base, joined)
}

pub fn frontmatter<S: AsRef<str>>(includes: &[S]) -> String {
    with_includes("/composer/frontmatter", includes)
}

pub fn metadata<S: AsRef<str>>(includes: &[S]) -> String {
    with_includes("/composer/metadata", includes)
}

pub fn photo_search(query: &str, page: u64, limit: u64) -> String {
    format!(
        "/composer/unsplash/photos/search?query={}&page={}&limit={}",
        encode_component(query),
        page,
        limit
    )
}

pub fn photo_download_url(endpoint: &str) -> String {
    format!(
        "/composer/unsplash/photos/download_url?endpoint={}",
        encode_component(endpoint)
    )
}

// ===== Explore =====

pub fn trending_posts(page: Page) -> String {
    format!("/explore/trending/posts?{}", page.query())
}

pub fn trending_lists(page: Page) -> String {
    format!("/explore/trending/lists?{}", page.query())
}
