#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! # `bedrock-async`
//!
//! An Anthropic messages client for Amazon Bedrock, built on
//! `aws-sdk-bedrockruntime`'s `InvokeModel` operation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bedrock_async::{Client, types::{content::*, messages::*}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new().await;
//!
//! let req = MessagesCreateRequest::new(
//!     4096,
//!     vec![MessageParam {
//!         role: MessageRole::User,
//!         content: vec![ContentBlockParam::text("Hello!")],
//!     }],
//! );
//!
//! let response = client.messages().create(req).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Credentials are resolved by `aws-config` through the standard AWS chain
//! (environment, shared config/credentials files, SSO, instance metadata).
//! See [`BedrockConfig`] for region, profile, and model selection.

/// Client wrapping the Bedrock runtime SDK
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::BedrockConfig;
pub use crate::error::BedrockError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::common::*;
    pub use crate::types::content::*;
    pub use crate::types::messages::*;
    pub use crate::{BedrockConfig, Client};
}
