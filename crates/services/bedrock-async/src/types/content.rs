use serde::{Deserialize, Serialize};

/// Image source for multimodal content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ImageSource {
    /// Base64-encoded image data
    Base64 {
        /// Media type (e.g., "image/png")
        media_type: String,
        /// Base64-encoded image data
        data: String,
    },
}

/// Document source for multimodal content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentSource {
    /// Base64-encoded document data
    Base64 {
        /// Media type (Bedrock accepts only "application/pdf")
        media_type: String,
        /// Base64-encoded document data
        data: String,
    },
}

/// Role of a message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// User message
    User,
    /// Assistant message
    Assistant,
}

// Request-side content blocks
/// Content block parameter for requests
///
/// This enum represents the content types that can be sent in a request.
/// It is separate from the response [`ContentBlock`] enum because the API is
/// asymmetric - requests accept more content types than responses return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlockParam {
    /// Text content block
    Text {
        /// The text content
        text: String,
    },
    /// Image content block
    Image {
        /// Image source (base64-encoded bytes and media type)
        source: ImageSource,
    },
    /// Document content block
    Document {
        /// Document source (base64-encoded bytes and media type)
        source: DocumentSource,
    },
}

impl ContentBlockParam {
    /// Creates a text content block
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates a base64 image content block
    #[must_use]
    pub fn image(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Image {
            source: ImageSource::Base64 {
                media_type: media_type.into(),
                data: data.into(),
            },
        }
    }

    /// Creates a base64 document content block
    #[must_use]
    pub fn document(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Document {
            source: DocumentSource::Base64 {
                media_type: media_type.into(),
                data: data.into(),
            },
        }
    }
}

// Response-side content blocks
/// Content block in a response
///
/// Only text blocks are consumed; any other block type (tool use, thinking,
/// ...) deserializes to [`ContentBlock::Unknown`] so one unexpected block
/// never fails the whole response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Text content block
    Text {
        /// The text content
        text: String,
    },
    /// Any other block type, tolerated and skipped by consumers
    #[serde(other)]
    Unknown,
}

/// A message parameter in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageParam {
    /// Role of the message
    pub role: MessageRole,
    /// Ordered content blocks of the message
    pub content: Vec<ContentBlockParam>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_role_ser() {
        assert_eq!(
            serde_json::to_string(&MessageRole::User).unwrap(),
            r#""user""#
        );
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn content_block_param_text_ser() {
        let cb = ContentBlockParam::text("hello");
        let s = serde_json::to_string(&cb).unwrap();
        assert!(s.contains(r#""type":"text""#));
        assert!(s.contains(r#""text":"hello""#));
    }

    #[test]
    fn content_block_param_image_ser() {
        let cb = ContentBlockParam::image("image/png", "aGVsbG8=");
        let v: serde_json::Value = serde_json::to_value(&cb).unwrap();
        assert_eq!(v["type"], "image");
        assert_eq!(v["source"]["type"], "base64");
        assert_eq!(v["source"]["media_type"], "image/png");
        assert_eq!(v["source"]["data"], "aGVsbG8=");
    }

    #[test]
    fn content_block_param_document_ser() {
        let cb = ContentBlockParam::document("application/pdf", "JVBERi0=");
        let v: serde_json::Value = serde_json::to_value(&cb).unwrap();
        assert_eq!(v["type"], "document");
        assert_eq!(v["source"]["type"], "base64");
        assert_eq!(v["source"]["media_type"], "application/pdf");
    }

    #[test]
    fn content_block_response_text_de() {
        let cb: ContentBlock =
            serde_json::from_str(r#"{"type":"text","text":"response"}"#).unwrap();
        assert_eq!(
            cb,
            ContentBlock::Text {
                text: "response".into()
            }
        );
    }

    #[test]
    fn content_block_response_tolerates_unknown_types() {
        let cb: ContentBlock = serde_json::from_str(
            r#"{"type":"tool_use","id":"toolu_1","name":"get_weather","input":{}}"#,
        )
        .unwrap();
        assert_eq!(cb, ContentBlock::Unknown);

        let cb: ContentBlock = serde_json::from_str(r#"{"type":"thinking"}"#).unwrap();
        assert_eq!(cb, ContentBlock::Unknown);
    }
}
