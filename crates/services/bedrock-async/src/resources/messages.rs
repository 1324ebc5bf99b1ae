use crate::{
    client::Client,
    error::BedrockError,
    types::messages::{MessagesCreateRequest, MessagesCreateResponse},
};

/// Validate a messages create request
///
/// Checks sampling parameters before anything reaches the wire.
fn validate_messages_create_request(req: &MessagesCreateRequest) -> Result<(), BedrockError> {
    if let Some(t) = req.temperature
        && !(0.0..=1.0).contains(&t)
    {
        return Err(BedrockError::Config(format!(
            "Invalid temperature {t}: must be in [0.0, 1.0]"
        )));
    }

    if req.max_tokens == 0 {
        return Err(BedrockError::Config(
            "max_tokens must be greater than 0".into(),
        ));
    }

    Ok(())
}

/// API resource for Anthropic messages on Bedrock
pub struct Messages<'c> {
    client: &'c Client,
}

impl<'c> Messages<'c> {
    /// Creates a new Messages resource
    #[must_use]
    pub const fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Create a new message with the configured model
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails client-side validation
    /// - The SDK call fails (transport or service error)
    /// - The response body cannot be deserialized
    pub async fn create(
        &self,
        req: MessagesCreateRequest,
    ) -> Result<MessagesCreateResponse, BedrockError> {
        // Centralized validation
        validate_messages_create_request(&req)?;

        self.client
            .invoke(self.client.config().model_id(), &req)
            .await
    }
}

// Add to client
impl Client {
    /// Returns the Messages API resource
    #[must_use]
    pub const fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }
}
