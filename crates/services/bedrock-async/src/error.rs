use thiserror::Error;

/// Errors returned by the Bedrock client
#[derive(Debug, Error)]
pub enum BedrockError {
    /// Transport or service failure reported by the AWS SDK
    #[error("Bedrock SDK error: {0}")]
    Sdk(String),

    /// Invalid client or request configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Payload serialization or response deserialization failure
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl<E, R> From<aws_sdk_bedrockruntime::error::SdkError<E, R>> for BedrockError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    fn from(e: aws_sdk_bedrockruntime::error::SdkError<E, R>) -> Self {
        // DisplayErrorContext renders the full source chain, including the
        // service-side message that SdkError's Display alone omits.
        Self::Sdk(aws_sdk_bedrockruntime::error::DisplayErrorContext(&e).to_string())
    }
}

impl From<serde_json::Error> for BedrockError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}
