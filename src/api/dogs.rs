//! Dog detail endpoint

use super::client::ApiClient;
use super::error::FetchError;
use crate::models::Dog;

/// `GET /dogs/{id}`; `Ok(None)` when the shelter has no such dog
pub async fn get_dog(client: &ApiClient, id: u32) -> Result<Option<Dog>, FetchError> {
    client.get_optional_json(&dog_path(id), &[]).await
}

fn dog_path(id: u32) -> String {
    format!("/dogs/{id}")
}
