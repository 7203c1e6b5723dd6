//! SES connection configuration.

use std::env;

use crate::error::DeliveryError;

/// Configuration for the SES delivery backend.
///
/// A plain record, read once at backend construction. Nothing is looked up
/// from ambient state after that point; hosts that configure through the
/// environment can use [`SesConfig::from_env`] explicitly.
///
/// Values are passed to the remote service as-is. The backend does not
/// validate or normalize them; malformed credentials or regions surface as
/// the remote service's own errors on the first send.
#[derive(Debug, Clone)]
pub struct SesConfig {
    /// IAM access key ID.
    pub access_key: String,
    /// IAM secret access key.
    pub secret_key: String,
    /// AWS region (e.g. "us-east-1", "eu-west-1").
    pub region: String,
    /// Verified identity the backend sends on behalf of (`SourceArn`).
    /// Attached to every delivery, even when left empty.
    pub source_arn: String,
}

impl SesConfig {
    /// Create a configuration from a credential pair and region.
    ///
    /// The delegation identity starts empty; set it with
    /// [`SesConfig::source_arn`].
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
            source_arn: String::new(),
        }
    }

    /// Set the delegated sending identity.
    pub fn source_arn(mut self, arn: impl Into<String>) -> Self {
        self.source_arn = arn.into();
        self
    }

    /// Read configuration from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `AWS_ACCESS_KEY_ID` | IAM access key |
    /// | `AWS_SECRET_ACCESS_KEY` | IAM secret key |
    /// | `AWS_REGION` | AWS region for SES |
    /// | `AWS_SES_SOURCE_ARN` | Delegated sending identity (optional) |
    pub fn from_env() -> Result<Self, DeliveryError> {
        let access_key = env::var("AWS_ACCESS_KEY_ID")
            .map_err(|_| DeliveryError::Configuration("AWS_ACCESS_KEY_ID not set".into()))?;
        let secret_key = env::var("AWS_SECRET_ACCESS_KEY")
            .map_err(|_| DeliveryError::Configuration("AWS_SECRET_ACCESS_KEY not set".into()))?;
        let region = env::var("AWS_REGION")
            .map_err(|_| DeliveryError::Configuration("AWS_REGION not set".into()))?;
        let source_arn = env::var("AWS_SES_SOURCE_ARN").unwrap_or_default();

        Ok(Self {
            access_key,
            secret_key,
            region,
            source_arn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = SesConfig::new("key", "secret", "us-east-1")
            .source_arn("arn:aws:ses:us-east-1:123:identity/example.com");

        assert_eq!(config.access_key, "key");
        assert_eq!(config.secret_key, "secret");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(
            config.source_arn,
            "arn:aws:ses:us-east-1:123:identity/example.com"
        );
    }

    #[test]
    fn test_source_arn_defaults_to_empty() {
        let config = SesConfig::new("key", "secret", "us-east-1");
        assert_eq!(config.source_arn, "");
    }

    #[test]
    fn test_from_env() {
        // Single test so the set/unset sequence stays deterministic.
        env::remove_var("AWS_ACCESS_KEY_ID");
        env::remove_var("AWS_SECRET_ACCESS_KEY");
        env::remove_var("AWS_REGION");
        env::remove_var("AWS_SES_SOURCE_ARN");

        let result = SesConfig::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("AWS_ACCESS_KEY_ID"));

        env::set_var("AWS_ACCESS_KEY_ID", "env_key");
        env::set_var("AWS_SECRET_ACCESS_KEY", "env_secret");
        env::set_var("AWS_REGION", "eu-west-1");

        let config = SesConfig::from_env().unwrap();
        assert_eq!(config.access_key, "env_key");
        assert_eq!(config.region, "eu-west-1");
        // Unset delegation identity reads as empty, not as an error.
        assert_eq!(config.source_arn, "");

        env::set_var("AWS_SES_SOURCE_ARN", "arn:aws:ses:eu-west-1:123:identity/x");
        let config = SesConfig::from_env().unwrap();
        assert_eq!(config.source_arn, "arn:aws:ses:eu-west-1:123:identity/x");

        env::remove_var("AWS_ACCESS_KEY_ID");
        env::remove_var("AWS_SECRET_ACCESS_KEY");
        env::remove_var("AWS_REGION");
        env::remove_var("AWS_SES_SOURCE_ARN");
    }
}
