use serde::Deserialize;

/// Default AWS region for Bedrock requests
pub const BEDROCK_DEFAULT_REGION: &str = "us-east-1";
/// Anthropic payload version expected by Bedrock
pub const BEDROCK_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
/// Default model identifier
pub const BEDROCK_DEFAULT_MODEL_ID: &str = "global.anthropic.claude-opus-4-5-20251101-v1:0";

/// Helper to read and normalize an env var (trim + filter empty).
fn env_trimmed(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration for the Bedrock client
///
/// Region, profile, and model selection. Credentials themselves are resolved
/// by `aws-config`; this type only steers that resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BedrockConfig {
    region: String,
    profile: Option<String>,
    model_id: String,
    anthropic_version: String,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: env_trimmed("AWS_REGION").unwrap_or_else(|| BEDROCK_DEFAULT_REGION.into()),
            profile: env_trimmed("AWS_PROFILE"),
            model_id: env_trimmed("BEDROCK_MODEL_ID")
                .unwrap_or_else(|| BEDROCK_DEFAULT_MODEL_ID.into()),
            anthropic_version: BEDROCK_ANTHROPIC_VERSION.into(),
        }
    }
}

impl BedrockConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `AWS_REGION` for the region (defaults to `us-east-1`)
    /// - `AWS_PROFILE` for a named credentials profile
    /// - `BEDROCK_MODEL_ID` for the model identifier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AWS region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the AWS profile name used for credential resolution
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Sets the Bedrock model identifier
    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Sets the Anthropic payload version string
    ///
    /// Default is `bedrock-2023-05-31`
    #[must_use]
    pub fn with_anthropic_version(mut self, v: impl Into<String>) -> Self {
        self.anthropic_version = v.into();
        self
    }

    /// Returns the configured region
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the configured profile name, if any
    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Returns the configured model identifier
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Returns the Anthropic payload version string
    #[must_use]
    pub fn anthropic_version(&self) -> &str {
        &self.anthropic_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides() {
        let cfg = BedrockConfig::new()
            .with_region("eu-west-1")
            .with_profile("dev")
            .with_model_id("anthropic.claude-3-5-sonnet-20240620-v1:0");
        assert_eq!(cfg.region(), "eu-west-1");
        assert_eq!(cfg.profile(), Some("dev"));
        assert_eq!(cfg.model_id(), "anthropic.claude-3-5-sonnet-20240620-v1:0");
        assert_eq!(cfg.anthropic_version(), BEDROCK_ANTHROPIC_VERSION);
    }

    #[test]
    fn default_model_and_version() {
        let cfg = BedrockConfig::new().with_region("us-east-1");
        assert_eq!(cfg.anthropic_version(), "bedrock-2023-05-31");
        assert!(!cfg.model_id().is_empty());
    }
}
