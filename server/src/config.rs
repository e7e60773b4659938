use std::sync::LazyLock;

use ::config::{ConfigBuilder, Environment, File, builder::DefaultState};
use eyre::{Result, WrapErr};
use serde::Deserialize;
use types::{CurrentUser, UserType};

/// Loaded once from `shiats.toml` (optional) and `SHIATS_*` variables.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|error| {
        tracing::warn!(?error, "failed to load configuration, using defaults");
        Config::default()
    })
});

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Display name of the signed-in user. There is no login yet, so this
    /// stands in for one.
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_type: UserType,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::build(
            ::config::Config::builder()
                .add_source(File::with_name("shiats").required(false))
                .add_source(Environment::with_prefix("SHIATS")),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .wrap_err("failed to read configuration")?
            .try_deserialize()
            .wrap_err("invalid configuration")
    }

    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            name: self.user_name.clone(),
            user_type: self.user_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use ::config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Result<Config> {
        Config::build(
            ::config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
    }

    #[test]
    fn empty_config_is_nameless_admin() {
        let config = from_toml("").unwrap();
        assert_eq!(config.current_user(), CurrentUser::default());
    }

    #[test]
    fn reads_user() {
        let config = from_toml(
            r#"
            user_name = "Jane Smith"
            user_type = "hotel_manager"
            "#,
        )
        .unwrap();

        let user = config.current_user();
        assert_eq!(user.name.as_deref(), Some("Jane Smith"));
        assert_eq!(user.user_type, UserType::HotelManager);
    }

    #[test]
    fn rejects_unknown_user_type() {
        assert!(from_toml(r#"user_type = "landlord""#).is_err());
    }
}
