//! # Configuration
//!
//! Runtime settings read from the environment. Every variable is optional; a variable that is
//! set but unusable is an error rather than a silent fallback.
//!
//! | Variable | Default |
//! |---|---|
//! | `SHOP_CHANNEL_CAPACITY` | 32 |
//! | `SHOP_PROMO_GROUP_SIZE` | 3 |
//! | `SHOP_PROMO_FREE_UNITS` | 1 |
//! | `SHOP_LOG_FORMAT` | `compact` |
//!
//! The tracing filter itself comes from `RUST_LOG`, see
//! [`setup_tracing`](actor_framework::tracing::setup_tracing).

use crate::pricing::PromotionRule;
use actor_framework::tracing::LogFormat;
use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "SHOP_CHANNEL_CAPACITY";
pub const PROMO_GROUP_SIZE_VAR: &str = "SHOP_PROMO_GROUP_SIZE";
pub const PROMO_FREE_UNITS_VAR: &str = "SHOP_PROMO_FREE_UNITS";
pub const LOG_FORMAT_VAR: &str = "SHOP_LOG_FORMAT";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    /// Mailbox size of each actor.
    pub channel_capacity: usize,
    pub promotion: PromotionRule,
    pub log_format: LogFormat,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            promotion: PromotionRule::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl ShopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to the defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let channel_capacity = parse_or(&lookup, CHANNEL_CAPACITY_VAR, defaults.channel_capacity)?;
        if channel_capacity == 0 {
            return Err(invalid(CHANNEL_CAPACITY_VAR, "0", "must be at least 1"));
        }

        let group_size = parse_or(
            &lookup,
            PROMO_GROUP_SIZE_VAR,
            defaults.promotion.group_size,
        )?;
        if group_size == 0 {
            return Err(invalid(PROMO_GROUP_SIZE_VAR, "0", "must be at least 1"));
        }
        let free_per_group = parse_or(
            &lookup,
            PROMO_FREE_UNITS_VAR,
            defaults.promotion.free_per_group,
        )?;

        let log_format = parse_or(&lookup, LOG_FORMAT_VAR, defaults.log_format)?;

        Ok(Self {
            channel_capacity,
            promotion: PromotionRule {
                group_size,
                free_per_group,
            },
            log_format,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(key, &raw, e.to_string())),
    }
}

fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = ShopConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.promotion, PromotionRule::default());
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn reads_every_variable() {
        let config = ShopConfig::from_lookup(lookup(&[
            (CHANNEL_CAPACITY_VAR, "8"),
            (PROMO_GROUP_SIZE_VAR, "5"),
            (PROMO_FREE_UNITS_VAR, "2"),
            (LOG_FORMAT_VAR, "json"),
        ]))
        .unwrap();

        assert_eq!(config.channel_capacity, 8);
        assert_eq!(
            config.promotion,
            PromotionRule {
                group_size: 5,
                free_per_group: 2
            }
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let err = ShopConfig::from_lookup(lookup(&[(CHANNEL_CAPACITY_VAR, "lots")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, CHANNEL_CAPACITY_VAR);
                assert_eq!(value, "lots");
            }
        }
    }

    #[test]
    fn zero_capacity_and_zero_group_are_rejected() {
        assert!(ShopConfig::from_lookup(lookup(&[(CHANNEL_CAPACITY_VAR, "0")])).is_err());
        assert!(ShopConfig::from_lookup(lookup(&[(PROMO_GROUP_SIZE_VAR, "0")])).is_err());
    }

    #[test]
    fn zero_free_units_turns_promotion_off() {
        let config = ShopConfig::from_lookup(lookup(&[(PROMO_FREE_UNITS_VAR, "0")])).unwrap();
        assert_eq!(config.promotion.free_units(9), 0);
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = ShopConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "pretty")])).unwrap_err();
        assert!(err.to_string().contains(LOG_FORMAT_VAR));
    }
}
