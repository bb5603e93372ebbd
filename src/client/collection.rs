use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::ClientError;
use crate::types::{NewSavedRecipe, SavedRecipe};

/// The two collection operations the client needs.
pub trait CollectionBackend {
    fn save(&self, recipe: &NewSavedRecipe) -> impl Future<Output = Result<(), ClientError>> + Send;
    fn list(&self) -> impl Future<Output = Result<Vec<SavedRecipe>, ClientError>> + Send;
}

/// HTTP client for the collection API.
pub struct CollectionClient {
    client: Client,
    base_url: String,
}

impl CollectionClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status { status, body })
    }
}

impl CollectionBackend for CollectionClient {
    async fn save(&self, recipe: &NewSavedRecipe) -> Result<(), ClientError> {
        let url = format!("{}/saveRecipe", self.base_url);
        let response = self.client.post(&url).json(recipe).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SavedRecipe>, ClientError> {
        let url = format!("{}/savedRecipes", self.base_url);
        let response = self.client.get(&url).send().await?;
        let body = ensure_success(response).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
