pub mod app_config;
pub mod database_config;
pub mod server_config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}
