mod basic;
mod gemini;

pub use basic::BasicConfig;
pub use gemini::{GEMINI_API_KEY_VAR, GeminiConfig, gemini_api_key};

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::LazyLock};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Gemini upstream settings (see `gemini` table in config.toml).
    #[serde(default)]
    pub gemini: GeminiConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Builds a Figment that merges defaults and a config TOML file.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        }
    }

    /// Loads configuration by merging defaults and `config.toml` if present.
    ///
    /// The Gemini credential is not part of the file; it comes from the
    /// process environment (see [`gemini_api_key`]).
    pub fn from_optional_toml() -> Self {
        Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration (defaults + optional config.toml): {err}")
        })
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_optional_toml);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let cfg = Config::default();
        assert_eq!(cfg.basic.listen_port, 8186);
        assert_eq!(cfg.basic.loglevel, "info");
        assert_eq!(cfg.gemini.endpoints.len(), 4);
        assert!(
            cfg.gemini
                .catalog_base
                .as_str()
                .starts_with("https://generativelanguage.googleapis.com")
        );
    }
}
