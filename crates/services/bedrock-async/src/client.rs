use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::BedrockConfig, error::BedrockError};

/// Bedrock runtime client
///
/// Wraps the AWS SDK client together with a [`BedrockConfig`] that selects
/// region, profile, and model. The SDK handles SigV4 signing and transport;
/// this type only serializes payloads and maps errors.
#[derive(Debug, Clone)]
pub struct Client {
    runtime: aws_sdk_bedrockruntime::Client,
    config: BedrockConfig,
}

impl Client {
    /// Creates a new client with default configuration
    ///
    /// Region, profile, and model come from the environment; credentials are
    /// resolved through the standard AWS chain.
    pub async fn new() -> Self {
        Self::with_config(BedrockConfig::new()).await
    }

    /// Creates a new client with the given configuration
    ///
    /// Loads AWS shared configuration for the configured region and profile.
    pub async fn with_config(config: BedrockConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region().to_owned()));
        if let Some(profile) = config.profile() {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;
        Self {
            runtime: aws_sdk_bedrockruntime::Client::new(&sdk_config),
            config,
        }
    }

    /// Creates a client from an already-built SDK client
    ///
    /// Useful for tests and for callers that manage SDK configuration
    /// themselves.
    #[must_use]
    pub const fn from_parts(runtime: aws_sdk_bedrockruntime::Client, config: BedrockConfig) -> Self {
        Self { runtime, config }
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &BedrockConfig {
        &self.config
    }

    pub(crate) async fn invoke<I, O>(&self, model_id: &str, body: &I) -> Result<O, BedrockError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;

        tracing::debug!(model_id, payload_bytes = payload.len(), "invoking model");

        // Single blocking call: no retry, no timeout override.
        let output = self
            .runtime
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await?;

        let resp: O = serde_json::from_slice(output.body().as_ref())?;
        Ok(resp)
    }
}
