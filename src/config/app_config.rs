use serde::Deserialize;

use crate::domain::UsernamePolicy;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub policy: PolicyConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Treat usernames as email addresses instead of local identifiers.
    pub email_as_username: bool,
}

impl PolicyConfig {
    pub fn username_policy(&self) -> UsernamePolicy {
        if self.email_as_username {
            UsernamePolicy::Email
        } else {
            UsernamePolicy::Local
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert!(!config.policy.email_as_username);
        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.logging.format, LogFormat::Pretty));
    }

    #[test]
    fn test_username_policy_mapping() {
        let local = PolicyConfig {
            email_as_username: false,
        };
        assert_eq!(local.username_policy(), UsernamePolicy::Local);

        let email = PolicyConfig {
            email_as_username: true,
        };
        assert_eq!(email.username_policy(), UsernamePolicy::Email);
    }

    #[test]
    fn test_deserializes_from_partial_input() {
        let config: AppConfig =
            serde_json::from_str(r#"{"policy":{"email_as_username":true}}"#).unwrap();

        assert!(config.policy.email_as_username);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_log_format_is_lowercase_in_config() {
        let config: AppConfig =
            serde_json::from_str(r#"{"logging":{"level":"debug","format":"json"}}"#).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(matches!(config.logging.format, LogFormat::Json));
    }
}
