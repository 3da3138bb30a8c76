use std::env;

use anyhow::Context;
use business::domain::storefront::view::AssetBaseUrl;

use super::server_config::ServerConfig;

/// Public-facing storefront settings
///
/// Environment variables:
/// - PUBLIC_URL: Base URL images are served under (default: "http://{SERVICE_IP}:{SERVICE_PORT}")
/// - ASSETS_DIR: Directory served at `/images` by this server (default: "uploads")
///
/// With the default `PUBLIC_URL` the images come from `ASSETS_DIR`. Point
/// `PUBLIC_URL` at another host to serve them from elsewhere.
pub struct StorefrontConfig {
    pub base_url: AssetBaseUrl,
    pub assets_dir: String,
}

impl StorefrontConfig {
    pub fn from_env(server: &ServerConfig) -> anyhow::Result<Self> {
        Self::from_vars(server, |key| env::var(key).ok())
    }

    pub(crate) fn from_vars(
        server: &ServerConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let raw = lookup("PUBLIC_URL")
            .unwrap_or_else(|| format!("http://{}", server.bind_address()));
        let base_url =
            AssetBaseUrl::parse(&raw).with_context(|| format!("PUBLIC_URL is invalid: {raw}"))?;

        let assets_dir = lookup("ASSETS_DIR").unwrap_or_else(|| "uploads".to_string());

        Ok(Self {
            base_url,
            assets_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> ServerConfig {
        ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: "4000".to_string(),
        }
    }

    #[test]
    fn should_derive_base_url_from_bind_address() {
        let config = StorefrontConfig::from_vars(&server(), |_| None).unwrap();

        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:4000/");
        assert_eq!(config.assets_dir, "uploads");
    }

    #[test]
    fn should_use_assets_dir_when_set() {
        let config = StorefrontConfig::from_vars(&server(), |key| match key {
            "ASSETS_DIR" => Some("/srv/food/images".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.assets_dir, "/srv/food/images");
    }

    #[test]
    fn should_use_public_url_when_set() {
        let config = StorefrontConfig::from_vars(&server(), |key| match key {
            "PUBLIC_URL" => Some("https://food.example.com".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://food.example.com/");
    }

    #[test]
    fn should_reject_invalid_public_url() {
        let result = StorefrontConfig::from_vars(&server(), |key| match key {
            "PUBLIC_URL" => Some("::not-a-url".to_string()),
            _ => None,
        });

        assert!(result.is_err());
    }
}
