use std::{env, fmt::Display, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::{debug, info};

pub const DEFAULT_PROVIDER_URL: &str = "https://www.themealdb.com/api/json/v1/1/search.php";

/// Deployment settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the collection API listens on.
    pub port: u16,
    /// SQLite file backing the collection.
    pub db_path: String,
    /// Recipe provider search endpoint (queried with `?s=`).
    pub provider_url: String,
    /// Base URL of the collection API, as seen by the client.
    pub api_url: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("RECIPE_PORT", "3001")?,
            db_path: try_load("RECIPE_DB_PATH", "recipes.sqlite")?,
            provider_url: try_load("RECIPE_PROVIDER_URL", DEFAULT_PROVIDER_URL)?,
            api_url: try_load("RECIPE_API_URL", "http://localhost:3001")?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    debug!("{key} = {raw}");

    raw.parse()
        .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}"))
}
