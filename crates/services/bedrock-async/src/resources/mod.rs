/// Messages resource (`InvokeModel` with the Anthropic messages payload)
pub mod messages;

pub use messages::Messages;
