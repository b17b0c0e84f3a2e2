use kindnet_shared::donation::handle::SortKey;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Path of the config file read by [`INSTANCE`].
pub const CONFIG_PATH: &str = "./data/config.toml";

static LOADED: Lazy<(Config, Option<crate::Error>)> =
    Lazy::new(|| Config::load_or_default(CONFIG_PATH));

/// The static config instance.
pub static INSTANCE: Lazy<Config> = Lazy::new(|| LOADED.0.clone());

/// Why [`CONFIG_PATH`] was replaced by the defaults, if it was.
/// Nothing is logged here, the subscriber is not installed yet.
pub fn load_error() -> Option<&'static crate::Error> {
    LOADED.1.as_ref()
}

/// Describing the listing configuration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding one json file per storage key.
    pub data_dir: PathBuf,
    /// Fill an empty storage with sample donations on first load.
    pub seed_samples: bool,
    /// Maximum level of the log output, such as `info` or `debug`.
    pub log_level: String,
    pub keys: StorageKeys,
    /// Sort key applied by the listing when nothing is selected.
    pub default_sort: SortKey,
}

impl Config {
    /// Read the config from a toml file.
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(string) => Ok(toml::from_str(&string)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(crate::storage::Error::Io(err).into()),
        }
    }

    /// Read the config like [`Config::load`], keeping the defaults and the
    /// error when the file cannot be used.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<crate::Error>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    /// The configured log level, `info` if it names no level.
    pub fn max_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            seed_samples: true,
            log_level: "info".to_string(),
            keys: StorageKeys::default(),
            default_sort: SortKey::Recency,
        }
    }
}

/// Storage keys the listing and the session live under.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorageKeys {
    pub donations: String,
    pub session: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            donations: "kindnet_food_donations".to_string(),
            session: "kindnet_user".to_string(),
        }
    }
}
