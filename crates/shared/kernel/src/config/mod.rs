use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`MFX__MESSAGING__RECIPIENT` maps to `messaging.recipient`).
pub const ENV_PREFIX: &str = "MFX";
/// Separator between nested keys in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Default config file stem, resolved against the working directory (`site.toml`).
pub const DEFAULT_CONFIG: &str = "site";

/// Errors raised while assembling configuration sources.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to {action}: {source}")]
    Config {
        action: &'static str,
        #[source]
        source: config::ConfigError,
    },
}

/// A layered configuration loader: a base file overlaid with environment overrides.
///
/// # Example
/// ```rust
/// use mfx_kernel::config::ConfigLoader;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = ConfigLoader::new("config/local").required(false).load().unwrap_or_default();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    required: bool,
    prefix: Cow<'static, str>,
    env: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    /// Creates a loader for `path`; the extension may be omitted (`site` finds `site.toml`).
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
            prefix: Cow::Borrowed(ENV_PREFIX),
            env: None,
        }
    }

    /// Whether a missing file is an error. Defaults to `true`.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the process environment with an explicit variable map.
    #[must_use]
    pub fn env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Builds the layered sources and deserializes them into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if a required file is missing, a source is malformed,
    /// or the merged values do not match the structure of `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        info!(path = %self.path.display(), required = self.required, "Loading config");

        let environment = Environment::with_prefix(&self.prefix)
            .separator(ENV_SEPARATOR)
            .source(self.env);

        Config::builder()
            .add_source(File::from(self.path.as_path()).required(self.required))
            .add_source(environment)
            .build()
            .map_err(|source| ConfigError::Config { action: "build config", source })?
            .try_deserialize::<T>()
            .map_err(|source| ConfigError::Config { action: "deserialize config", source })
    }
}

/// Loads a required config file with `MFX__` environment overrides.
///
/// Defaults to the `site` file in the current working directory.
///
/// # Errors
/// Returns an error if the file is missing or its content does not match `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());
    ConfigLoader::new(effective).load()
}

/// Loads an optional config file with `MFX__` environment overrides.
///
/// A missing file is not an error: `T` is built from the environment alone, so its
/// `#[serde(default)]` values fill the gaps. Defaults to the `site` file in the working directory.
///
/// # Errors
/// Returns an error if the file or the environment holds values that do not match `T`.
pub fn load_optional_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG), |p| p.as_ref().to_path_buf());
    ConfigLoader::new(effective).required(false).load()
}
