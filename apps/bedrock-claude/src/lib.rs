//! Library surface of the `bedrock-claude` CLI.
//!
//! The pipeline is strictly sequential: classify and encode input files into
//! content blocks, assemble one messages request, invoke Bedrock once, then
//! extract (and optionally persist) the textual output.

pub mod docx;
pub mod errors;
pub mod files;
pub mod output;
pub mod request;

pub use docx::{DocxExtractor, DocxUnavailable, ParagraphDocxExtractor};
pub use errors::{CliError, Result};
pub use files::process_files;
pub use output::{collect_text, extract_and_save};
pub use request::assemble_request;
