pub mod toml_config;

pub use toml_config::{
    IdentifierConfig, LogFormat, LoggingConfig, ProviderMode, TimeConfig, ToolboxConfig,
};
