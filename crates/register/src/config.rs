//! Session configuration, loaded from defaults and environment overrides.

use thiserror::Error;

use cashreg_inventory::INITIAL_CATALOG_SLOTS;
use cashreg_sales::MAX_SALES;

/// Id counter value before the first insert; the first item gets 1000.
pub const INITIAL_ITEM_NUMBER: u32 = 999;

/// Upper bound on reserved catalog slots: one per representable item id.
pub const MAX_CATALOG_SLOTS: usize = u32::MAX as usize;

pub const ENV_INITIAL_SLOTS: &str = "CASHREG_INITIAL_SLOTS";
pub const ENV_MAX_SALES: &str = "CASHREG_MAX_SALES";
pub const ENV_FIRST_ITEM_ID: &str = "CASHREG_FIRST_ITEM_ID";
pub const ENV_SEED: &str = "CASHREG_SEED";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterConfig {
    /// Catalog slots reserved before the first growth.
    pub initial_catalog_slots: usize,
    /// Hard bound on recorded sales.
    pub max_sales: usize,
    /// Starting value of the running id counter (last id "already used").
    pub first_item_id: u32,
    /// Seed for reproducible stock generation; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            initial_catalog_slots: INITIAL_CATALOG_SLOTS,
            max_sales: MAX_SALES,
            first_item_id: INITIAL_ITEM_NUMBER,
            seed: None,
        }
    }
}

impl RegisterConfig {
    /// Defaults overridden by `CASHREG_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RegisterConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, ENV_INITIAL_SLOTS)? {
            config.initial_catalog_slots = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_MAX_SALES)? {
            config.max_sales = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_FIRST_ITEM_ID)? {
            config.first_item_id = v;
        }
        config.seed = parse_var(&lookup, ENV_SEED)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_catalog_slots > MAX_CATALOG_SLOTS {
            return Err(ConfigError::Invalid {
                key: ENV_INITIAL_SLOTS,
                message: format!("must be at most {MAX_CATALOG_SLOTS}"),
            });
        }
        if self.max_sales == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_MAX_SALES,
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                key,
                message: format!("{raw:?}: {e}"),
            }),
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
    fn defaults_match_classic_register() {
        let config = RegisterConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RegisterConfig::default());
        assert_eq!(config.initial_catalog_slots, 10);
        assert_eq!(config.max_sales, 1000);
        assert_eq!(config.first_item_id, 999);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn env_values_override_defaults() {
        let config = RegisterConfig::from_lookup(lookup(&[
            (ENV_INITIAL_SLOTS, "4"),
            (ENV_MAX_SALES, " 25 "),
            (ENV_FIRST_ITEM_ID, "0"),
            (ENV_SEED, "7"),
        ]))
        .unwrap();
        assert_eq!(config.initial_catalog_slots, 4);
        assert_eq!(config.max_sales, 25);
        assert_eq!(config.first_item_id, 0);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn malformed_value_is_reported_with_its_key() {
        let err = RegisterConfig::from_lookup(lookup(&[(ENV_MAX_SALES, "lots")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, ENV_MAX_SALES),
        }
    }

    #[test]
    fn unbounded_initial_slots_are_rejected() {
        let huge = usize::MAX.to_string();
        let err = RegisterConfig::from_lookup(lookup(&[(ENV_INITIAL_SLOTS, &huge)]))
            .unwrap_err();
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, ENV_INITIAL_SLOTS),
        }

        let at_limit = MAX_CATALOG_SLOTS.to_string();
        let config = RegisterConfig::from_lookup(lookup(&[(ENV_INITIAL_SLOTS, &at_limit)]))
            .unwrap();
        assert_eq!(config.initial_catalog_slots, MAX_CATALOG_SLOTS);
    }

    #[test]
    fn zero_max_sales_is_rejected() {
        assert!(RegisterConfig::from_lookup(lookup(&[(ENV_MAX_SALES, "0")])).is_err());
    }
}
