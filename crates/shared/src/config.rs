//! Application configuration management.
//!
//! Policy constants (accrual rate, caps) were global mutable state in the
//! system this replaces; here they are an explicit struct injected into the
//! engine at construction.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Leave and time-savings policy parameters.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Leave accrual and CET policy parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Days accrued per full month worked.
    #[serde(default = "default_monthly_accrual")]
    pub monthly_accrual_days: Decimal,
    /// Annual accrual cap in days.
    #[serde(default = "default_annual_cap")]
    pub annual_cap_days: Decimal,
    /// Maximum balance of a time-savings (CET) account, in days.
    #[serde(default = "default_cet_cap")]
    pub cet_cap_days: Decimal,
}

fn default_monthly_accrual() -> Decimal {
    Decimal::new(208, 2) // 2.08
}

fn default_annual_cap() -> Decimal {
    Decimal::new(25, 0)
}

fn default_cet_cap() -> Decimal {
    Decimal::new(60, 0)
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            monthly_accrual_days: default_monthly_accrual(),
            annual_cap_days: default_annual_cap(),
            cet_cap_days: default_cet_cap(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SOLDE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_policy_defaults() {
        let policy = PolicyConfig::default();
        assert_eq!(policy.monthly_accrual_days, dec!(2.08));
        assert_eq!(policy.annual_cap_days, dec!(25));
        assert_eq!(policy.cet_cap_days, dec!(60));
    }

    #[test]
    fn test_policy_deserialize_partial() {
        let policy: PolicyConfig = serde_json::from_str(r#"{"cet_cap_days": "40"}"#).unwrap();
        assert_eq!(policy.cet_cap_days, dec!(40));
        assert_eq!(policy.annual_cap_days, dec!(25));
    }

    #[test]
    fn test_load_applies_env_overrides() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("test")),
                ("SOLDE__POLICY__CET_CAP_DAYS", Some("40")),
                ("SOLDE__POLICY__MONTHLY_ACCRUAL_DAYS", Some("1.75")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.policy.cet_cap_days, dec!(40));
                assert_eq!(config.policy.monthly_accrual_days, dec!(1.75));
                // untouched fields keep their defaults
                assert_eq!(config.policy.annual_cap_days, dec!(25));
            },
        );
    }

    #[test]
    fn test_load_without_env_uses_defaults() {
        temp_env::with_vars_unset(["SOLDE__POLICY__CET_CAP_DAYS", "RUN_MODE"], || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.policy.cet_cap_days, dec!(60));
        });
    }
}
