use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

use crate::error::Result;
use crate::sdk::client::QuailClient;
use crate::sdk::routes;
use crate::sdk::types::CreateApikeyRequest;

impl QuailClient {
    /// Current user.
    pub async fn get_me(&self) -> Result<Value> {
        self.get(routes::ME).await
    }

    /// Update the current user's profile.
    pub async fn update_me<P: Serialize + ?Sized + Sync>(&self, profile: &P) -> Result<Value> {
        self.put(routes::ME, profile).await
    }

    pub async fn get_assets(&self) -> Result<Value> {
        self.get(routes::ASSETS).await
    }

    pub async fn get_asset(&self, asset_id: impl Display) -> Result<Value> {
        self.get(&routes::asset(asset_id)).await
    }

    pub async fn get_apikeys(&self) -> Result<Value> {
        self.get(routes::APIKEYS).await
    }

    pub async fn create_apikey(&self, name: &str) -> Result<Value> {
        let body = CreateApikeyRequest {
            name: name.to_string(),
        };
        self.post(routes::APIKEYS, &body).await
    }

    pub async fn delete_apikey(&self, id: u64) -> Result<Value> {
        self.delete(&routes::apikey(id)).await
    }
}
