//! Process configuration read from the environment.

use std::net::SocketAddr;

use stockroom_infra::RestConfig;
use stockroom_observability::LogFormat;

use crate::settings::Theme;

pub const BIND_ADDR: &str = "STOCKROOM_BIND_ADDR";
pub const STORE_URL: &str = "STOCKROOM_STORE_URL";
pub const STORE_KEY: &str = "STOCKROOM_STORE_KEY";
pub const THEME: &str = "STOCKROOM_THEME";
pub const LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidValue { var: &'static str, message: String },

    #[error("STOCKROOM_STORE_KEY is set but STOCKROOM_STORE_URL is not")]
    KeyWithoutUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Hosted database connection; `None` selects the in-memory store.
    pub store: Option<RestConfig>,
    pub theme: Theme,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store: None,
            theme: Theme::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get(BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR,
                value: bind_addr.clone(),
            })?;

        let store = match (get(STORE_URL), get(STORE_KEY)) {
            (Some(url), key) => {
                let config = RestConfig::new(url.trim());
                Some(match key {
                    Some(key) => config.with_api_key(key.trim()),
                    None => config,
                })
            }
            (None, Some(_)) => return Err(ConfigError::KeyWithoutUrl),
            (None, None) => None,
        };

        let theme = match get(THEME) {
            Some(raw) => raw.parse().map_err(|e: crate::settings::UnknownTheme| {
                ConfigError::InvalidValue {
                    var: THEME,
                    message: e.to_string(),
                }
            })?,
            None => Theme::default(),
        };

        let log_format = match get(LOG_FORMAT) {
            Some(raw) => raw.parse().map_err(|e: stockroom_observability::UnknownLogFormat| {
                ConfigError::InvalidValue {
                    var: LOG_FORMAT,
                    message: e.to_string(),
                }
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            store,
            theme,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn store_url_and_key_build_rest_config() {
        let config = Config::from_lookup(lookup(&[
            (STORE_URL, "https://db.example.test"),
            (STORE_KEY, "anon-key"),
            (THEME, "dark"),
            (LOG_FORMAT, "pretty"),
            (BIND_ADDR, "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(
            config.store,
            Some(RestConfig::new("https://db.example.test").with_api_key("anon-key"))
        );
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(BIND_ADDR, "not-an-addr")])),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(THEME, "sepia")])),
            Err(ConfigError::InvalidValue { var: THEME, .. })
        ));
        assert_eq!(
            Config::from_lookup(lookup(&[(STORE_KEY, "orphan")])),
            Err(ConfigError::KeyWithoutUrl)
        );
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[(STORE_URL, "  "), (THEME, "")])).unwrap();
        assert_eq!(config.store, None);
        assert_eq!(config.theme, Theme::Light);
    }
}
