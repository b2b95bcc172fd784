pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from_str, ENV_PREFIX};
pub use schema::{
    AppConfig, DatabaseConfig, LogFormat, LoggingConfig, ReferenceConfig, ServerConfig,
};
