use super::{
    cors_config, database_config::DatabaseSettings, server_config::ServerConfig,
    storefront_config::StorefrontConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub storefront: StorefrontConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let server = ServerConfig::from_env();
        let storefront = StorefrontConfig::from_env(&server)?;

        Ok(Self {
            server,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            storefront,
        })
    }
}
