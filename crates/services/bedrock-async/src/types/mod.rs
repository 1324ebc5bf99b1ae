/// Shared response metadata types
pub mod common;
/// Content block types for requests and responses
pub mod content;
/// Messages request and response envelopes
pub mod messages;
