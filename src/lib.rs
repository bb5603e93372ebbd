pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod server;
pub mod types;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::client::{CollectionClient, MealDbProvider, RecipeApp};
use crate::config::Config;
use crate::db::CollectionStore;

/// Runtime state shared across collection API handlers.
pub struct AppState {
    /// Saved-recipe store. Handlers serialize on its connection lock.
    pub store: CollectionStore,
}

/// Install the global subscriber. `RUST_LOG` wins when set; otherwise debug
/// builds log at INFO and release builds only WARN and above. Logs go to
/// stderr so they stay out of the interactive client's output.
pub fn init_tracing() {
    #[cfg(debug_assertions)]
    let default_level = "info";
    #[cfg(not(debug_assertions))]
    let default_level = "warn";

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Serve the collection API.
pub async fn run_server(config: Config) -> Result<()> {
    server::start_server(config).await
}

/// Run the interactive client against the configured provider and API.
pub async fn run_client(config: Config) -> Result<()> {
    let provider = MealDbProvider::new(config.provider_url)?;
    let collection = CollectionClient::new(config.api_url)?;
    client::repl::run(RecipeApp::new(provider, collection)).await
}
