//! Attachment viewer pipeline.
//!
//! Fetches an attachment through an injected [`ContentFetcher`], decides its
//! kind, and converts it to an HTML view. Whether the viewer runs at all is
//! read from an injected [`EnabledFlag`] on every call.

use crate::convert::{ConvertOptions, ConverterRegistry};
use crate::detect::{detect_file_kind, FileKind};
use crate::error::{Error, FetchError, Result};
use crate::render::RenderStats;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Filename used when the attachment label names none.
pub const DEFAULT_FILENAME: &str = "attachment";

/// Raw content returned by a fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContent {
    /// Response body as text
    pub content: String,

    /// `Content-Type` header value, empty if absent
    pub content_type: String,
}

impl FetchedContent {
    /// Create fetched content.
    pub fn new(content: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: content_type.into(),
        }
    }
}

/// Loads the body of an attachment URL.
pub trait ContentFetcher: Send + Sync {
    /// Fetch `url`, failing with the HTTP status or network cause.
    fn fetch(&self, url: &str) -> std::result::Result<FetchedContent, FetchError>;
}

/// Host switch deciding whether attachments are visualized.
pub trait EnabledFlag {
    /// Current value of the switch.
    fn is_enabled(&self) -> bool;
}

impl EnabledFlag for bool {
    fn is_enabled(&self) -> bool {
        *self
    }
}

impl EnabledFlag for AtomicBool {
    fn is_enabled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F> EnabledFlag for F
where
    F: Fn() -> bool,
{
    fn is_enabled(&self) -> bool {
        self()
    }
}

/// What to visualize.
#[derive(Debug, Clone, Default)]
pub struct AttachmentRequest {
    /// Download URL
    pub url: String,

    /// Filename from the attachment label
    pub filename_hint: Option<String>,

    /// Extension the host already knows; wins over detection
    pub extension_hint: Option<String>,
}

impl AttachmentRequest {
    /// Create a request for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the filename hint.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename_hint = Some(filename.into());
        self
    }

    /// Set the extension hint.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension_hint = Some(extension.into());
        self
    }

    /// Filename to show, falling back to [`DEFAULT_FILENAME`].
    pub fn display_filename(&self) -> &str {
        self.filename_hint
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_FILENAME)
    }

    /// Decide the kind of the fetched content.
    pub fn resolve_kind(&self, content_type: &str) -> FileKind {
        match self.extension_hint.as_deref().map(str::trim) {
            Some(ext) if !ext.is_empty() => FileKind::from_extension(ext),
            _ => detect_file_kind(
                &self.url,
                content_type,
                self.filename_hint.as_deref().unwrap_or_default(),
            ),
        }
    }
}

/// A rendered attachment ready to mount.
#[derive(Debug, Clone)]
pub struct ViewerContent {
    /// Rendered HTML view
    pub html: String,

    /// Original content, for copy and download
    pub raw: String,

    /// Display filename
    pub filename: String,

    /// Detected kind
    pub kind: FileKind,

    /// Content size in bytes
    pub size: usize,

    /// Time spent fetching
    pub load_time: Duration,

    /// Render statistics, if collected
    pub stats: Option<RenderStats>,
}

/// Fetch, detect and convert attachments.
pub struct Visualizer {
    fetcher: Arc<dyn ContentFetcher>,
    registry: ConverterRegistry,
    options: ConvertOptions,
}

impl Visualizer {
    /// Create a visualizer with the default converters.
    pub fn new(fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self {
            fetcher,
            registry: ConverterRegistry::with_defaults(),
            options: ConvertOptions::default(),
        }
    }

    /// Use a custom converter registry.
    pub fn with_registry(mut self, registry: ConverterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Conversion options in use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Visualize one attachment.
    ///
    /// Returns `Ok(None)` without fetching when `enabled` is off.
    pub fn visualize(
        &self,
        request: &AttachmentRequest,
        enabled: &dyn EnabledFlag,
    ) -> Result<Option<ViewerContent>> {
        if !enabled.is_enabled() {
            log::debug!("visualization disabled, skipping {}", request.url);
            return Ok(None);
        }

        let started = Instant::now();
        let fetched = self.fetcher.fetch(&request.url)?;
        let load_time = started.elapsed();

        let kind = request.resolve_kind(&fetched.content_type);
        if !kind.is_supported() {
            return Err(Error::UnsupportedKind(kind.to_string()));
        }

        let mut view = self.view_content(fetched.content, kind, request.display_filename())?;
        view.load_time = load_time;

        log::info!(
            "loaded {} ({} bytes) in {}ms",
            view.filename,
            view.size,
            view.load_time.as_millis()
        );

        Ok(Some(view))
    }

    /// Convert content that is already in memory.
    pub fn view_content(
        &self,
        content: String,
        kind: FileKind,
        filename: &str,
    ) -> Result<ViewerContent> {
        let result = self.registry.convert(&content, kind, &self.options)?;
        Ok(ViewerContent {
            html: result.content,
            size: content.len(),
            raw: content,
            filename: filename.to_string(),
            kind,
            load_time: Duration::ZERO,
            stats: result.stats,
        })
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Neutral information
    Info,
    /// A completed action
    Success,
    /// A failed action
    Error,
}

/// A transient, dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message text
    pub message: String,

    /// Severity
    pub level: NoticeLevel,
}

impl Notice {
    /// Create a notice.
    pub fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    /// An informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Info)
    }

    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Success)
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeLevel::Error)
    }

    /// The notice shown for a failed visualization.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::UnsupportedKind(_) => Self::error("File type not supported for visualization"),
            Error::Disabled => Self::info(err.to_string()),
            Error::Fetch(fetch) => Self::error(format!("Failed to load attachment: {}", fetch)),
            other => Self::error(format!("Failed to load attachment: {}", other)),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
