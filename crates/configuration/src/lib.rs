use config::FileFormat;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use logging::init_tracing;
pub use settings::{Config, DisplaySettings, LoggingSettings, MetricsSettings};

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "finscope.toml";

/// Prefix for environment overrides, e.g. `FINSCOPE__METRICS__STRICT=true`.
pub const ENV_PREFIX: &str = "FINSCOPE";

/// Built-in values; every key can be overridden by the file or the environment.
const DEFAULTS: &str = r#"
[metrics]
strict = false

[display]
decimals = 2
kpi_decimals = 1
billions_threshold = 1000.0

[logging]
level = "info"
"#;

/// Loads the application configuration.
///
/// Sources are layered in order: built-in defaults, the TOML file, then
/// `FINSCOPE__*` environment variables. With `path == None` the default
/// `finscope.toml` is used if it exists; an explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path)
            .format(FileFormat::Toml)
            .required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE)
            .format(FileFormat::Toml)
            .required(false),
    };

    let builder = config::Config::builder()
        .add_source(config::File::from_str(DEFAULTS, FileFormat::Toml))
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// The configuration with nothing but the built-in defaults applied.
pub fn default_config() -> Result<Config, ConfigError> {
    let config = config::Config::builder()
        .add_source(config::File::from_str(DEFAULTS, FileFormat::Toml))
        .build()?
        .try_deserialize::<Config>()?;
    Ok(config)
}
