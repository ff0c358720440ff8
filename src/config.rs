use std::env;
use std::fmt;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_lambda::config::Credentials;

use crate::errors::AppError;

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub aws_region: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub agent_id: String,
    pub agent_alias_id: String,
    pub notifier_function_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            aws_region: env::var("AWS_DEFAULT_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            aws_access_key_id: env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
            aws_secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
            agent_id: env::var("BEDROCK_AGENT_ID").unwrap_or_default(),
            agent_alias_id: env::var("BEDROCK_AGENT_ALIAS_ID").unwrap_or_default(),
            notifier_function_name: env::var("NOTIFIER_FUNCTION_NAME").unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("AWS_DEFAULT_REGION", &self.aws_region),
            ("BEDROCK_AGENT_ID", &self.agent_id),
            ("BEDROCK_AGENT_ALIAS_ID", &self.agent_alias_id),
            ("NOTIFIER_FUNCTION_NAME", &self.notifier_function_name),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// Static credentials are only used when both halves are set; otherwise
    /// the AWS default provider chain applies.
    pub fn has_static_credentials(&self) -> bool {
        !self.aws_access_key_id.is_empty() && !self.aws_secret_access_key.is_empty()
    }

    /// Shared SDK settings for both remote clients.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(self.aws_region.clone()));

        if self.has_static_credentials() {
            loader = loader.credentials_provider(Credentials::new(
                self.aws_access_key_id.clone(),
                self.aws_secret_access_key.clone(),
                None,
                None,
                "inquiry-desk-env",
            ));
        }

        loader.load().await
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("aws_region", &self.aws_region)
            .field("aws_access_key_id", &self.aws_access_key_id)
            .field("aws_secret_access_key", &"<redacted>")
            .field("agent_id", &self.agent_id)
            .field("agent_alias_id", &self.agent_alias_id)
            .field("notifier_function_name", &self.notifier_function_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppConfig {
        AppConfig {
            port: 3000,
            aws_region: "us-east-1".to_string(),
            aws_access_key_id: "AKIDEXAMPLE".to_string(),
            aws_secret_access_key: "very-secret".to_string(),
            agent_id: "AGENT".to_string(),
            agent_alias_id: "ALIAS".to_string(),
            notifier_function_name: "notify-inquiry".to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_names_every_missing_setting() {
        let mut config = sample();
        config.agent_id = String::new();
        config.notifier_function_name = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("BEDROCK_AGENT_ID"));
        assert!(err.contains("NOTIFIER_FUNCTION_NAME"));
        assert!(!err.contains("BEDROCK_AGENT_ALIAS_ID"));
    }

    #[test]
    fn debug_redacts_secret_key() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn static_credentials_need_both_halves() {
        let mut config = sample();
        assert!(config.has_static_credentials());
        config.aws_secret_access_key.clear();
        assert!(!config.has_static_credentials());
    }
}
