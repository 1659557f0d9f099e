//! `rag-chunk`: split documents into overlapping word-window chunks.
//!
//! Reads plain text or a JSON array of documents and writes the resulting
//! chunks to stdout as JSON. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rag_text_chunker::{seed, Chunker, Document, DEFAULT_BASE_CHUNK_ID, DEFAULT_SOURCE};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod settings;

use settings::Overrides;

#[derive(Parser)]
#[command(name = "rag-chunk")]
#[command(about = "Split text into overlapping chunks for retrieval indexing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Target chunk size in tokens (overrides CHUNK_SIZE)
    #[arg(long, global = true)]
    chunk_size: Option<usize>,

    /// Overlap between chunks in tokens (overrides CHUNK_OVERLAP)
    #[arg(long, global = true)]
    overlap: Option<usize>,

    /// TOML settings file with `chunk_size` and `chunk_overlap`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk a single text read from a file or stdin
    Text(TextArgs),

    /// Chunk a JSON array of documents read from a file or stdin
    Batch(BatchArgs),

    /// Chunk the built-in seed corpus
    Seed,

    /// Print the resolved chunker configuration
    Config,
}

#[derive(Args)]
struct TextArgs {
    /// Text file to chunk (stdin when omitted or `-`)
    path: Option<PathBuf>,

    /// Source identifier (defaults to the file path)
    #[arg(long)]
    source: Option<String>,

    /// Base chunk id
    #[arg(long, default_value = DEFAULT_BASE_CHUNK_ID)]
    id: String,
}

#[derive(Args)]
struct BatchArgs {
    /// JSON file with `[{"text", "source", "chunk_id"}, ...]` (stdin when omitted or `-`)
    path: Option<PathBuf>,
}

#[derive(Serialize)]
struct ConfigReport {
    chunk_size: usize,
    overlap: usize,
    words_per_chunk: usize,
    overlap_words: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = settings::resolve(
        cli.config.as_deref(),
        |name| std::env::var(name).ok(),
        Overrides {
            chunk_size: cli.chunk_size,
            overlap: cli.overlap,
        },
    )?;
    let chunker = Chunker::new(config).context("Failed to configure chunker")?;

    match cli.command {
        Commands::Text(args) => {
            let text = read_input(args.path.as_deref())?;
            let source = args.source.unwrap_or_else(|| match &args.path {
                Some(path) if !is_stdin(path) => path.display().to_string(),
                _ => DEFAULT_SOURCE.to_string(),
            });
            let chunks = chunker.chunk_text(&text, &source, &args.id);
            write_json(&chunks, cli.pretty)
        }
        Commands::Batch(args) => {
            let raw = read_input(args.path.as_deref())?;
            let documents: Vec<Document> =
                serde_json::from_str(&raw).context("Failed to parse documents JSON")?;
            write_json(&chunker.chunk_documents(&documents), cli.pretty)
        }
        Commands::Seed => write_json(
            &chunker.chunk_documents(&seed::default_documents()),
            cli.pretty,
        ),
        Commands::Config => write_json(
            &ConfigReport {
                chunk_size: chunker.config().chunk_size,
                overlap: chunker.config().overlap,
                words_per_chunk: chunker.words_per_chunk(),
                overlap_words: chunker.overlap_words(),
            },
            cli.pretty,
        ),
    }
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path.filter(|p| !is_stdin(p)) {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

fn write_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}
