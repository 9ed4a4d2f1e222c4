//! Endpoint methods of [`QuailClient`](crate::sdk::QuailClient).
//!
//! - `auth` - Email code login
//! - `users` - Profile, assets and API keys
//! - `lists` - Mailing lists and their settings
//! - `subscriptions` - Subscribers and paid upgrades
//! - `posts` - Posts, lifecycle actions, pinning and attachments
//! - `composer` - AI-assisted frontmatter and stock photos
//! - `explore` - Trending listings and counters

mod auth;
mod composer;
mod explore;
mod lists;
mod posts;
mod subscriptions;
mod users;
