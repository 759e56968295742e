pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{
    AppConfig, AuthConfig, DatabaseConfig, GeneralConfig, LoggingConfig, LoginSecurityConfig,
    ScriptDbConfig,
};
pub use envconfig::EnvConfig;
