//! attview CLI - render Markdown, JSON and text attachments to safe HTML

mod http;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use attview::detect::find_attachment;
use attview::parser::classify_document;
use attview::render::{render_with_stats, to_json};
use attview::{
    AttView, AttachmentRequest, ConvertOptions, Error, FileKind, JsonFormat, Notice, NoticeLevel,
    ParagraphJoin, ParseOptions, RenderOptions, Visualizer,
};

use http::HttpFetcher;

#[derive(Parser)]
#[command(name = "attview")]
#[command(version)]
#[command(about = "Render Markdown, JSON and text attachments to safe HTML", long_about = None)]
struct Cli {
    /// Input file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a local attachment to HTML
    Render {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Content kind (taken from the file extension if not specified)
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Dump the classified blocks as JSON
    Blocks {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Treat `Label: value` lines as paragraph text
        #[arg(long)]
        no_definitions: bool,
    },

    /// Format a single line of inline markup
    Inline {
        /// Text to format
        #[arg(value_name = "TEXT")]
        text: String,

        /// Turn bare URLs into links
        #[arg(long)]
        autolink: bool,
    },

    /// Fetch a remote attachment and render it
    Fetch {
        /// Attachment URL
        #[arg(value_name = "URL")]
        url: String,

        /// Attachment filename (used for kind detection and display)
        #[arg(long)]
        filename: Option<String>,

        /// Force the content kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Save the raw content instead of the rendered view
        #[arg(long)]
        raw: bool,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Whether visualization is switched on
        #[arg(long, env = "ATTVIEW_ENABLED", default_value_t = true, action = ArgAction::Set)]
        enabled: bool,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show attachment information
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Classifier and renderer flags shared by the rendering commands.
#[derive(Args, Clone)]
struct ViewArgs {
    /// How multi-line paragraphs are joined
    #[arg(long, value_enum, default_value = "break")]
    join: JoinMode,

    /// Treat `Label: value` lines as paragraph text
    #[arg(long)]
    no_definitions: bool,

    /// Keep `label: //...` lines (bare URLs) as paragraph text
    #[arg(long)]
    urls_as_text: bool,

    /// Turn bare URLs into links
    #[arg(long)]
    autolink: bool,

    /// CSS class prefix
    #[arg(long, default_value = "av-")]
    class_prefix: String,
}

impl ViewArgs {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_parse_options(
                ParseOptions::new()
                    .with_definitions(!self.no_definitions)
                    .with_urls_as_text(self.urls_as_text),
            )
            .with_render_options(
                RenderOptions::new()
                    .with_paragraph_join(self.join.into())
                    .with_autolink(self.autolink)
                    .with_class_prefix(&self.class_prefix),
            )
    }

    fn builder(&self) -> AttView {
        AttView::new().with_options(self.convert_options())
    }
}

impl Default for ViewArgs {
    fn default() -> Self {
        Self {
            join: JoinMode::Break,
            no_definitions: false,
            urls_as_text: false,
            autolink: false,
            class_prefix: "av-".to_string(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum JoinMode {
    /// Keep line breaks (`<br>`)
    Break,
    /// Join lines with spaces
    Space,
}

impl From<JoinMode> for ParagraphJoin {
    fn from(mode: JoinMode) -> Self {
        match mode {
            JoinMode::Break => ParagraphJoin::LineBreak,
            JoinMode::Space => ParagraphJoin::Space,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum KindArg {
    /// Markdown (.md)
    Md,
    /// Markdown (.markdown)
    Markdown,
    /// JSON
    Json,
    /// Plain text
    Txt,
}

impl From<KindArg> for FileKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Md => FileKind::Md,
            KindArg::Markdown => FileKind::Markdown,
            KindArg::Json => FileKind::Json,
            KindArg::Txt => FileKind::Txt,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            kind,
            view,
        }) => cmd_render(&input, output.as_deref(), kind, &view),
        Some(Commands::Blocks {
            input,
            output,
            compact,
            no_definitions,
        }) => cmd_blocks(&input, output.as_deref(), compact, no_definitions),
        Some(Commands::Inline { text, autolink }) => {
            cmd_inline(&text, autolink);
            Ok(())
        }
        Some(Commands::Fetch {
            url,
            filename,
            kind,
            output,
            raw,
            timeout,
            enabled,
            view,
        }) => cmd_fetch(
            &url,
            filename,
            kind,
            output.as_deref(),
            raw,
            timeout,
            enabled,
            &view,
        ),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render if input is provided
            if let Some(input) = cli.input {
                cmd_render(&input, cli.output.as_deref(), None, &ViewArgs::default())
            } else {
                println!("{}", "Usage: attview <FILE> [-o OUTPUT]".yellow());
                println!("       attview --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    kind: Option<KindArg>,
    view: &ViewArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let builder = view.builder();
    let result = match kind {
        Some(kind) => {
            let content = fs::read_to_string(input)?;
            builder.render(&content, kind.into())?
        }
        None => builder.render_file(input)?,
    };

    write_output(output, &result.content)
}

fn cmd_blocks(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    no_definitions: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let options = ParseOptions::new().with_definitions(!no_definitions);

    let mut doc = classify_document(&content, &options);
    doc.metadata.filename = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    doc.metadata.kind = Some(kind_from_path(input));

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_inline(text: &str, autolink: bool) {
    let formatter = attview::render::InlineFormatter::new(autolink);
    println!("{}", formatter.format(text));
}

#[allow(clippy::too_many_arguments)]
fn cmd_fetch(
    url: &str,
    filename: Option<String>,
    kind: Option<KindArg>,
    output: Option<&Path>,
    raw: bool,
    timeout: u64,
    enabled: bool,
    view: &ViewArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = HttpFetcher::new(Duration::from_secs(timeout))?;
    let visualizer = Visualizer::new(Arc::new(fetcher)).with_options(view.convert_options());

    let mut request = AttachmentRequest::new(url);
    let filename = filename.or_else(|| find_attachment(url).map(|found| found.filename));
    if let Some(name) = filename {
        request = request.with_filename(name);
    }
    if let Some(kind) = kind {
        if let Some(ext) = FileKind::from(kind).extension() {
            request = request.with_extension(ext);
        }
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Loading {}...", request.display_filename()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = visualizer.visualize(&request, &enabled);
    pb.finish_and_clear();

    let content = match result {
        Ok(Some(content)) => content,
        Ok(None) => {
            print_notice(&Notice::from_error(&Error::Disabled));
            return Ok(());
        }
        Err(e) => return Err(Notice::from_error(&e).message.into()),
    };

    eprintln!(
        "{} {} ({} bytes, {}) in {}ms",
        "Loaded".green(),
        content.filename,
        content.size,
        content.kind,
        content.load_time.as_millis()
    );

    let body = if raw { &content.raw } else { &content.html };
    write_output(output, body)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let kind = kind_from_path(input);

    println!("{}", "Attachment Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Kind".bold(), kind);
    println!("{}: {} bytes", "Size".bold(), content.len());
    println!("{}: {}", "Lines".bold(), content.lines().count());

    if !kind.is_markdown() {
        return Ok(());
    }

    let doc = classify_document(&content, &ParseOptions::default());
    let stats = render_with_stats(&doc.to_blocks(), &RenderOptions::default()).stats;

    println!();
    println!("{}", "Block Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count());
    println!("{}: {}", "Headers".bold(), stats.header_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!("{}: {}", "Definitions".bold(), stats.definition_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "attview".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Attachment visualizer: Markdown, JSON and text to safe HTML");
    println!();
    println!("License: MIT");
}

fn kind_from_path(path: &Path) -> FileKind {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(FileKind::from_extension)
        .unwrap_or(FileKind::Unsupported)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        print_notice(&Notice::success(format!("Saved to {}", path.display())));
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_notice(notice: &Notice) {
    let message = match notice.level {
        NoticeLevel::Info => notice.message.cyan(),
        NoticeLevel::Success => notice.message.green(),
        NoticeLevel::Error => notice.message.red(),
    };
    eprintln!("{}", message);
}
