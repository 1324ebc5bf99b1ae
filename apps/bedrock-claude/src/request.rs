//! Assembly of the outgoing messages request.

use bedrock_async::types::content::{ContentBlockParam, MessageParam, MessageRole};
use bedrock_async::types::messages::MessagesCreateRequest;

/// Builds one user-authored request from file blocks and the prompt.
///
/// File-derived blocks keep their order and the prompt is appended as the
/// final text block. Pure data transformation.
pub fn assemble_request(
    prompt: &str,
    mut blocks: Vec<ContentBlockParam>,
    max_tokens: u32,
    temperature: f32,
) -> MessagesCreateRequest {
    blocks.push(ContentBlockParam::text(prompt));

    MessagesCreateRequest::new(
        max_tokens,
        vec![MessageParam {
            role: MessageRole::User,
            content: blocks,
        }],
    )
    .with_temperature(temperature)
}
