//! Response text collection and artifact persistence.
//!
//! Persistence is an ordered, short-circuiting list of `(predicate, action)`
//! rules: code fences beat JSON, JSON beats XML, plain text is the catch-all.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use bedrock_async::types::content::ContentBlock;
use bedrock_async::types::messages::MessagesCreateResponse;
use regex::Regex;

use crate::errors::Result;

/// Outputs longer than this are persisted even without a recognized format.
const PERSIST_LENGTH_THRESHOLD: usize = 5000;

// Inner content of a fenced block, optional language hint, non-greedy.
#[expect(clippy::unwrap_used, reason = "pattern is a literal")]
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\w*\n(.*?)```").unwrap());

/// Joins the text blocks of a response with newlines.
///
/// Non-text blocks are skipped, not errors.
pub fn collect_text(response: &MessagesCreateResponse) -> String {
    response
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Unknown => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn has_code_fence(text: &str) -> bool {
    text.contains("```")
}

fn looks_like_json(text: &str) -> bool {
    let t = text.trim();
    t.starts_with('{') || t.starts_with('[')
}

fn looks_like_xml(text: &str) -> bool {
    text.trim().starts_with("<?xml")
}

fn always(_: &str) -> bool {
    true
}

fn should_persist(text: &str) -> bool {
    has_code_fence(text)
        || text.chars().count() > PERSIST_LENGTH_THRESHOLD
        || looks_like_xml(text)
        || looks_like_json(text)
}

fn write_whole(text: &str, path: PathBuf) -> Result<Vec<PathBuf>> {
    std::fs::write(&path, text)?;
    tracing::info!("Saved output to: {}", path.display());
    Ok(vec![path])
}

fn write_code_blocks(text: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut saved = Vec::new();
    for (i, cap) in FENCE_RE.captures_iter(text).enumerate() {
        let path = dir.join(format!("output_{}.txt", i + 1));
        std::fs::write(&path, cap[1].trim())?;
        tracing::info!("Saved code block to: {}", path.display());
        saved.push(path);
    }
    Ok(saved)
}

fn write_json(text: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    write_whole(text, dir.join("output.json"))
}

fn write_xml(text: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    write_whole(text, dir.join("output.xml"))
}

fn write_text(text: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    write_whole(text, dir.join("output.txt"))
}

type Predicate = fn(&str) -> bool;
type Action = fn(&str, &Path) -> Result<Vec<PathBuf>>;

/// First matching rule wins; the final rule always matches.
const PERSISTENCE_RULES: &[(Predicate, Action)] = &[
    (has_code_fence, write_code_blocks),
    (looks_like_json, write_json),
    (looks_like_xml, write_xml),
    (always, write_text),
];

/// Persists the response text according to the rule table.
///
/// Returns the paths written (empty when persistence is disabled or not
/// triggered). The output directory is created on first write.
pub fn extract_and_save(text: &str, output_dir: &Path, save: bool) -> Result<Vec<PathBuf>> {
    if !save || !should_persist(text) {
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(output_dir)?;

    for (applies, action) in PERSISTENCE_RULES {
        if applies(text) {
            return action(text, output_dir);
        }
    }
    Ok(Vec::new())
}
