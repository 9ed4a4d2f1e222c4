use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

use crate::error::Result;
use crate::sdk::client::QuailClient;
use crate::sdk::routes;
use crate::sdk::types::{AddMembersRequest, SubscribeRequest, UnsubscribeRequest, UpgradeOptions};

const SUBSCRIBE_ACTION: &str = "subscribe";

impl QuailClient {
    /// Subscribe `email` to a list; `ctoken` is the human-challenge token.
    pub async fn subscribe(&self, list_id: impl Display, email: &str, ctoken: &str) -> Result<Value> {
        let body = SubscribeRequest {
            email: email.to_string(),
            challenge_action: SUBSCRIBE_ACTION.to_string(),
            challenge_token: ctoken.to_string(),
        };
        self.post(&routes::subscription(list_id), &body).await
    }

    /// Subscribe the current user without a challenge.
    pub async fn subscribe_no_challenge(&self, list_id: impl Display) -> Result<Value> {
        self.post_empty(&routes::subscription_no_challenge(list_id))
            .await
    }

    pub async fn unsubscribe(&self, list_id: impl Display, trace_id: &str) -> Result<Value> {
        let body = UnsubscribeRequest {
            trace_id: trace_id.to_string(),
        };
        self.dispatcher()
            .send(
                &routes::subscription(list_id),
                reqwest::Method::DELETE,
                Some(&body),
            )
            .await
    }

    /// Add several members to a list at once.
    pub async fn batch_add_subscribers<M: Serialize + Sync>(
        &self,
        list_id: impl Display,
        members: &[M],
        ctoken: &str,
    ) -> Result<Value> {
        let body = AddMembersRequest {
            challenge_action: SUBSCRIBE_ACTION.to_string(),
            challenge_token: ctoken.to_string(),
            members,
        };
        self.post(&routes::add_members(list_id), &body).await
    }

    pub async fn update_subscriber<P: Serialize + ?Sized + Sync>(
        &self,
        list_id: impl Display,
        member_id: u64,
        payload: &P,
    ) -> Result<Value> {
        self.put(&routes::member(list_id, member_id), payload).await
    }

    pub async fn delete_subscriber(&self, list_id: impl Display, member_id: u64) -> Result<Value> {
        self.delete(&routes::member(list_id, member_id)).await
    }

    /// Subscriptions of the current user.
    pub async fn get_my_subscriptions(&self) -> Result<Value> {
        self.get(routes::SUBSCRIPTIONS).await
    }

    /// The current user's subscription to one list.
    pub async fn get_my_subscription(&self, list_id: impl Display) -> Result<Value> {
        self.get(&routes::subscription_rel(list_id)).await
    }

    /// Start a paid-plan upgrade; see [`UpgradeOptions`] for the defaults.
    pub async fn upgrade_subscription(
        &self,
        list_id: impl Display,
        opts: &UpgradeOptions,
    ) -> Result<Value> {
        self.post_empty(&routes::upgrade(
            list_id,
            &opts.redirect_url,
            &opts.plan,
            opts.dur,
        ))
        .await
    }
}
