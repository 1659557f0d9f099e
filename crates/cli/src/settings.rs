//! Chunker settings resolution.
//!
//! Layers, lowest priority first: built-in defaults, an optional TOML file,
//! the `CHUNK_SIZE` / `CHUNK_OVERLAP` environment variables, then explicit
//! command-line values.

use anyhow::{Context, Result};
use rag_text_chunker::ChunkerConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub(crate) const CHUNK_SIZE_ENV: &str = "CHUNK_SIZE";
pub(crate) const CHUNK_OVERLAP_ENV: &str = "CHUNK_OVERLAP";

/// Contents of a settings file
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileSettings {
    pub chunk_size: Option<usize>,
    pub chunk_overlap: Option<usize>,
}

/// Values given on the command line
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Overrides {
    pub chunk_size: Option<usize>,
    pub overlap: Option<usize>,
}

pub(crate) fn load_file(path: &Path) -> Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid settings file {}", path.display()))
}

fn parse_env_value(name: &str, raw: Option<&str>) -> Result<Option<usize>> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    value
        .parse::<usize>()
        .map(Some)
        .with_context(|| format!("{name} must be a non-negative integer, got {value:?}"))
}

/// Resolve the chunker configuration.
///
/// `env` looks up a variable by name so tests do not have to touch the
/// process environment.
pub(crate) fn resolve(
    file: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
    overrides: Overrides,
) -> Result<ChunkerConfig> {
    let mut config = ChunkerConfig::default();

    if let Some(path) = file {
        let settings = load_file(path)?;
        config = config.with_overrides(settings.chunk_size, settings.chunk_overlap);
        log::debug!("Loaded chunker settings from {}", path.display());
    }

    let env_size = parse_env_value(CHUNK_SIZE_ENV, env(CHUNK_SIZE_ENV).as_deref())?;
    let env_overlap = parse_env_value(CHUNK_OVERLAP_ENV, env(CHUNK_OVERLAP_ENV).as_deref())?;
    config = config.with_overrides(env_size, env_overlap);

    Ok(config.with_overrides(overrides.chunk_size, overrides.overlap))
}
