use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_static_dir() -> String {
    "assets".to_string()
}

fn default_carousel_autoplay_ms() -> u64 {
    4000
}

/// Configuration options of the storefront server.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `127.0.0.1`.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Secret used to sign session and identity cookies.
    pub secret: String,
    /// Login page of the authentication service.
    pub auth_service_url: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Delay between carousel slides.
    #[serde(default = "default_carousel_autoplay_ms")]
    pub carousel_autoplay_ms: u64,
}

impl ServerConfig {
    /// Layered load: `config/default.yaml`, then `config/{APP_ENV}.yaml`, then
    /// `APP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn fills_defaults_for_optional_settings() {
        let yaml = r#"
address: 127.0.0.1
port: 8080
database_url: app.db
secret: not-so-secret
auth_service_url: http://auth.localhost/auth/signin
"#;
        let config: ServerConfig = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.templates_dir, "templates");
        assert_eq!(config.carousel_autoplay_ms, 4000);
    }
}
