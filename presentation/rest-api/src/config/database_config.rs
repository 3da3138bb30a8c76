use std::env;

use anyhow::Context;
use persistence::db::{DatabaseConfig, connect_database};

const DEFAULT_DATABASE_NAME: &str = "food-del";
const DEFAULT_CONNECT_ATTEMPTS: u32 = 3;

/// Document store settings
///
/// Environment variables:
/// - MONGO_URL: MongoDB connection string (required)
/// - MONGO_DB_NAME: Database name (default: "food-del")
/// - MONGO_CONNECT_ATTEMPTS: Ping attempts before giving up (default: 3)
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub name: String,
    pub connect_attempts: u32,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let url = lookup("MONGO_URL").context("MONGO_URL must be set")?;
        let name = lookup("MONGO_DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());
        let connect_attempts = match lookup("MONGO_CONNECT_ATTEMPTS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("MONGO_CONNECT_ATTEMPTS is not a number: {raw}"))?,
            None => DEFAULT_CONNECT_ATTEMPTS,
        };

        Ok(Self {
            url,
            name,
            connect_attempts,
        })
    }
}

/// Connects to the document store described by `settings`
///
/// # Errors
/// Returns error if the connection string is invalid or the server never answers
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<mongodb::Database> {
    let mut config = DatabaseConfig::new(settings.url.clone(), settings.name.clone());
    config.max_attempts = settings.connect_attempts;

    let database = connect_database(&config).await?;
    Ok(database)
}
