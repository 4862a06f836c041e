use super::{ConfigError, database_config::DatabaseSettings, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseSettings::from_env(),
        })
    }
}
