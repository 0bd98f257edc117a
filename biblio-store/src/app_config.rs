use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Display settings for the console front end.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Currency symbol prefixed to printed prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_name() -> String {
    "Bookstore".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            currency: default_currency(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every source is optional: the tool must run with no config
            // files present at all
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not meant to be checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `BIBLIO_STORE__NAME=...` sets the store name
            .add_source(config::Environment::with_prefix("BIBLIO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_any_source() {
        let config = Config::load().unwrap();
        assert_eq!(config.store.name, "Bookstore");
        assert_eq!(config.store.currency, "$");
    }
}
