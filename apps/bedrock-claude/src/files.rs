//! File classification and encoding into request content blocks.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bedrock_async::types::content::ContentBlockParam;

use crate::docx::DocxExtractor;
use crate::errors::{CliError, Result};

/// Extensions sent as base64 image blocks.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Extensions sent as base64 document blocks (Bedrock accepts only PDF).
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

/// Extensions converted to text before sending.
pub const TEXT_EXTENSIONS: &[&str] = &["csv", "doc", "docx", "xls", "xlsx", "html", "txt", "md"];

/// How a file is turned into a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Base64 image block
    Image,
    /// Base64 PDF document block
    Document,
    /// Paragraph text extracted from the document model
    Docx,
    /// Read as UTF-8 text (declared text formats and unknown extensions alike)
    Text,
}

impl FileKind {
    /// Classifies a path by its (lowercased) extension.
    pub fn classify(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "docx" => Self::Docx,
            e if IMAGE_EXTENSIONS.contains(&e) => Self::Image,
            e if DOCUMENT_EXTENSIONS.contains(&e) => Self::Document,
            _ => Self::Text,
        }
    }
}

/// Whether the extension is in the declared text-extraction set, as opposed
/// to an unknown extension taking the plain-text fallback.
fn declared_text(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|e| TEXT_EXTENSIONS.contains(&e.as_str()))
}

/// Display name of a file for marker lines and progress output.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

/// Determines a media type: content sniffing first, extension mapping second.
fn media_type(path: &Path, bytes: &[u8]) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" => "image/jpeg".into(),
        e if IMAGE_EXTENSIONS.contains(&e) => format!("image/{e}"),
        "pdf" => "application/pdf".into(),
        _ => "text/plain".into(),
    }
}

/// Wraps extracted text with the originating-file marker line.
fn text_block(path: &Path, content: &str) -> ContentBlockParam {
    ContentBlockParam::text(format!("[Content from {}]\n\n{content}", file_name(path)))
}

/// Converts one file into its content block.
fn file_block(path: &Path, docx: &dyn DocxExtractor) -> Result<ContentBlockParam> {
    if !path.exists() {
        return Err(CliError::MissingFile(path.to_path_buf()));
    }

    match FileKind::classify(path) {
        FileKind::Image => {
            let bytes = std::fs::read(path)?;
            let media_type = media_type(path, &bytes);
            tracing::info!("Added image: {}", file_name(path));
            Ok(ContentBlockParam::image(media_type, BASE64.encode(&bytes)))
        }
        FileKind::Document => {
            let bytes = std::fs::read(path)?;
            // Bedrock accepts only PDF as a document type; force the media
            // type regardless of what sniffing reports.
            tracing::info!("Added PDF document: {}", file_name(path));
            Ok(ContentBlockParam::document(
                "application/pdf",
                BASE64.encode(&bytes),
            ))
        }
        FileKind::Docx => {
            let text = docx.extract(path)?;
            tracing::info!("Added text from DOCX: {}", file_name(path));
            Ok(text_block(path, &text))
        }
        FileKind::Text => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::InvalidData {
                    CliError::NonUtf8(path.to_path_buf())
                } else {
                    CliError::Io(e)
                }
            })?;
            if declared_text(path) {
                tracing::info!("Added text file: {}", file_name(path));
            } else {
                tracing::info!(
                    "Added text file (unrecognized extension): {}",
                    file_name(path)
                );
            }
            Ok(text_block(path, &text))
        }
    }
}

/// Converts input files into content blocks, in order.
///
/// A file that cannot be read maps to zero blocks: the failure is logged as a
/// warning and the batch continues.
pub fn process_files<P: AsRef<Path>>(
    paths: &[P],
    docx: &dyn DocxExtractor,
) -> Vec<ContentBlockParam> {
    let mut blocks = Vec::new();
    for path in paths {
        let path = path.as_ref();
        match file_block(path, docx) {
            Ok(block) => blocks.push(block),
            Err(e) => tracing::warn!("Could not process file {}: {e}", path.display()),
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::{DocxUnavailable, ParagraphDocxExtractor};
    use bedrock_async::types::content::{DocumentSource, ImageSource};
    use std::path::PathBuf;

    fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn image_extensions_map_to_documented_media_types() {
        let tmp = tempfile::tempdir().unwrap();
        let cases = [
            ("a.jpg", "image/jpeg"),
            ("a.jpeg", "image/jpeg"),
            ("a.png", "image/png"),
            ("a.gif", "image/gif"),
            ("a.webp", "image/webp"),
        ];
        for (name, expected) in cases {
            // Payload that sniffs as nothing, to exercise the extension table.
            let path = write(tmp.path(), name, b"not an actual image");
            let blocks = process_files(&[path], &DocxUnavailable);
            assert_eq!(blocks.len(), 1, "{name}");
            match &blocks[0] {
                ContentBlockParam::Image {
                    source: ImageSource::Base64 { media_type, data },
                } => {
                    assert_eq!(media_type, expected, "{name}");
                    assert_eq!(
                        BASE64.decode(data).unwrap(),
                        b"not an actual image".to_vec()
                    );
                }
                other => panic!("expected image block for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn sniffed_png_bytes_win_over_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let png_magic = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        let path = write(tmp.path(), "mislabeled.gif", &png_magic);
        let blocks = process_files(&[path], &DocxUnavailable);
        match &blocks[0] {
            ContentBlockParam::Image {
                source: ImageSource::Base64 { media_type, .. },
            } => assert_eq!(media_type, "image/png"),
            other => panic!("expected image block, got {other:?}"),
        }
    }

    #[test]
    fn pdf_always_yields_application_pdf() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "doc.pdf", b"%PDF-1.7 not really");
        let blocks = process_files(&[path], &DocxUnavailable);
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            ContentBlockParam::Document {
                source: DocumentSource::Base64 { media_type, .. },
            } => assert_eq!(media_type, "application/pdf"),
            other => panic!("expected document block, got {other:?}"),
        }
    }

    #[test]
    fn text_block_carries_marker_line() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "notes.md", b"# Title\nbody");
        let blocks = process_files(&[path], &DocxUnavailable);
        assert_eq!(
            blocks[0],
            ContentBlockParam::text("[Content from notes.md]\n\n# Title\nbody")
        );
    }

    #[test]
    fn unknown_extension_falls_back_to_text() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "data.toml", b"key = 1");
        let blocks = process_files(&[path], &DocxUnavailable);
        assert_eq!(
            blocks[0],
            ContentBlockParam::text("[Content from data.toml]\n\nkey = 1")
        );
    }

    #[test]
    fn missing_file_skipped_batch_continues() {
        let tmp = tempfile::tempdir().unwrap();
        let real = write(tmp.path(), "real.txt", b"hello");
        let missing = tmp.path().join("missing.png");
        let blocks = process_files(&[missing, real], &DocxUnavailable);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            ContentBlockParam::text("[Content from real.txt]\n\nhello")
        );
    }

    #[test]
    fn non_utf8_text_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "binary.txt", &[0xFF, 0xFE, 0x00, 0x80]);
        let blocks = process_files(&[path], &DocxUnavailable);
        assert!(blocks.is_empty());
    }

    #[test]
    fn docx_without_capability_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write(tmp.path(), "report.docx", b"pretend docx");
        let blocks = process_files(&[path], &DocxUnavailable);
        assert!(blocks.is_empty());
    }

    #[test]
    fn docx_with_capability_yields_marked_text() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("report.docx");
        let file = std::fs::File::create(&path).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file(
            "word/document.xml",
            zip::write::SimpleFileOptions::default(),
        )
        .unwrap();
        use std::io::Write as _;
        zip.write_all(
            br#"<w:document xmlns:w="ns"><w:body><w:p><w:r><w:t>Hello docx</w:t></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();
        zip.finish().unwrap();

        let blocks = process_files(&[path], &ParagraphDocxExtractor);
        assert_eq!(
            blocks[0],
            ContentBlockParam::text("[Content from report.docx]\n\nHello docx")
        );
    }

    #[test]
    fn declared_text_set_matches_documented_extensions() {
        for ext in TEXT_EXTENSIONS {
            let name = format!("file.{ext}");
            assert!(declared_text(Path::new(&name)), "{name}");
        }
        assert!(declared_text(Path::new("UPPER.MD")));
        assert!(!declared_text(Path::new("data.toml")));
        assert!(!declared_text(Path::new("noext")));
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(FileKind::classify(Path::new("A.PNG")), FileKind::Image);
        assert_eq!(FileKind::classify(Path::new("B.Pdf")), FileKind::Document);
        assert_eq!(FileKind::classify(Path::new("C.DocX")), FileKind::Docx);
        assert_eq!(FileKind::classify(Path::new("noext")), FileKind::Text);
    }
}
