use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::ClientError;
use crate::types::{Recipe, SearchResponse};

/// Read-only recipe lookup by name substring.
pub trait RecipeProvider {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Recipe>, ClientError>> + Send;
}

/// TheMealDB-compatible search endpoint.
pub struct MealDbProvider {
    client: Client,
    endpoint: String,
}

impl MealDbProvider {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl RecipeProvider for MealDbProvider {
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, ClientError> {
        debug!("Searching provider for {query:?}");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("s", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(parsed.meals.unwrap_or_default())
    }
}
