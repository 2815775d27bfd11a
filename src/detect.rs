//! Attachment kind detection.
//!
//! Decides how fetched content should be visualized from the URL it came
//! from, the declared content type, and a filename hint taken from the
//! attachment label.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Kinds of attachment content the viewer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `.md` Markdown
    Md,
    /// `.markdown` Markdown
    Markdown,
    /// JSON document
    Json,
    /// Plain text
    Txt,
    /// Anything else
    Unsupported,
}

impl FileKind {
    /// Map a file extension (without the dot, any case) to a kind.
    pub fn from_extension(ext: &str) -> FileKind {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "md" => FileKind::Md,
            "markdown" => FileKind::Markdown,
            "json" => FileKind::Json,
            "txt" => FileKind::Txt,
            _ => FileKind::Unsupported,
        }
    }

    /// Map a MIME content type to a kind.
    pub fn from_content_type(content_type: &str) -> FileKind {
        let content_type = content_type.to_ascii_lowercase();
        if content_type.contains("json") {
            FileKind::Json
        } else if content_type.contains("markdown") {
            FileKind::Md
        } else if content_type.contains("text") {
            FileKind::Txt
        } else {
            FileKind::Unsupported
        }
    }

    /// Canonical extension, or `None` for unsupported content.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            FileKind::Md => Some("md"),
            FileKind::Markdown => Some("markdown"),
            FileKind::Json => Some("json"),
            FileKind::Txt => Some("txt"),
            FileKind::Unsupported => None,
        }
    }

    /// Whether the kind can be visualized.
    pub fn is_supported(&self) -> bool {
        !matches!(self, FileKind::Unsupported)
    }

    /// Whether the content goes through the Markdown pipeline.
    pub fn is_markdown(&self) -> bool {
        matches!(self, FileKind::Md | FileKind::Markdown)
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension().unwrap_or("unsupported"))
    }
}

static URL_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(\w+)(?:\?|$)").expect("valid url extension pattern"));

static ATTACHMENT_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([^/\\]+\.(md|json|markdown|txt))").expect("valid attachment name pattern")
});

/// Detect the kind of fetched content.
///
/// Sources are consulted in order: the URL's extension, the content type,
/// then the extension of `filename_hint`. A source that yields nothing
/// supported falls through to the next one.
///
/// # Example
/// ```
/// use attview::detect::{detect_file_kind, FileKind};
///
/// let kind = detect_file_kind("https://host/notes.md?raw=1", "", "");
/// assert_eq!(kind, FileKind::Md);
/// ```
pub fn detect_file_kind(url: &str, content_type: &str, filename_hint: &str) -> FileKind {
    if let Some(caps) = URL_EXTENSION.captures(url) {
        let kind = FileKind::from_extension(&caps[1]);
        if kind.is_supported() {
            return kind;
        }
    }

    let kind = FileKind::from_content_type(content_type);
    if kind.is_supported() {
        return kind;
    }

    match filename_hint.rsplit_once('.') {
        Some((_, ext)) => FileKind::from_extension(ext),
        None => FileKind::Unsupported,
    }
}

/// Pull a supported attachment filename out of a label or tooltip.
///
/// Returns `"attachment"` when no supported name is present.
pub fn extract_filename(text: &str) -> String {
    ATTACHMENT_NAME
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| "attachment".to_string())
}

/// An attachment named in a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentName {
    /// Filename as it appears in the label
    pub filename: String,
    /// Kind implied by the filename's extension
    pub kind: FileKind,
}

/// Find a supported attachment named anywhere in `text`.
pub fn find_attachment(text: &str) -> Option<AttachmentName> {
    let caps = ATTACHMENT_NAME.captures(text)?;
    Some(AttachmentName {
        filename: caps[1].trim().to_string(),
        kind: FileKind::from_extension(&caps[2]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(FileKind::from_extension("MD"), FileKind::Md);
        assert_eq!(FileKind::from_extension(".markdown"), FileKind::Markdown);
        assert_eq!(FileKind::from_extension("json"), FileKind::Json);
        assert_eq!(FileKind::from_extension("txt"), FileKind::Txt);
        assert_eq!(FileKind::from_extension("pdf"), FileKind::Unsupported);
    }

    #[test]
    fn test_detect_from_url() {
        assert_eq!(detect_file_kind("https://x/a.json", "", ""), FileKind::Json);
        assert_eq!(
            detect_file_kind("https://x/readme.markdown?dl=1", "", ""),
            FileKind::Markdown
        );
    }

    #[test]
    fn test_detect_falls_through_unsupported_url_extension() {
        let kind = detect_file_kind("https://x/download.php?id=3", "application/json", "");
        assert_eq!(kind, FileKind::Json);
    }

    #[test]
    fn test_detect_from_content_type() {
        assert_eq!(
            detect_file_kind("https://x/att", "text/markdown; charset=utf-8", ""),
            FileKind::Md
        );
        assert_eq!(
            detect_file_kind("https://x/att", "text/plain", ""),
            FileKind::Txt
        );
    }

    #[test]
    fn test_detect_from_filename_hint() {
        let kind = detect_file_kind("https://x/att", "application/octet-stream", "notes.md");
        assert_eq!(kind, FileKind::Md);
    }

    #[test]
    fn test_detect_unsupported() {
        let kind = detect_file_kind("https://x/att", "image/png", "photo.png");
        assert_eq!(kind, FileKind::Unsupported);
        assert_eq!(detect_file_kind("", "", ""), FileKind::Unsupported);
    }

    #[test]
    fn test_extract_filename() {
        assert_eq!(extract_filename("Download report.json (2 KB)"), "Download report.json");
        assert_eq!(extract_filename("C:\\tmp\\notes.MD"), "notes.MD");
        assert_eq!(extract_filename("image.png"), "attachment");
    }

    #[test]
    fn test_find_attachment() {
        let found = find_attachment("data/config.json").unwrap();
        assert_eq!(found.filename, "config.json");
        assert_eq!(found.kind, FileKind::Json);
        assert!(find_attachment("no attachment here").is_none());
    }
}
