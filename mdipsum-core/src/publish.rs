//! Document publishing pipeline.
//!
//! Bridges the format registry and file I/O: serialize a generated document and
//! either hand the text back or write it to disk. Downloads are named
//! `Markdown-YYYY-MM-DD.<ext>` after the export date.

use crate::error::Error;
use crate::registry::FormatRegistry;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new(&markdown, "html")
///     .with_output_path("Markdown-2024-05-01.html")
///     .with_option("theme", "dark");
/// ```
///
/// Without an output path the serialized content is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The generated markdown document.
    pub markdown: &'a str,
    /// Target format name ("markdown", "text", "html").
    pub format: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Format-specific options (e.g., theme selection).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(markdown: &'a str, format: &'a str) -> Self {
        Self {
            markdown,
            format,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a format-specific option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Merge a set of format-specific options.
    pub fn with_options(mut self, options: &HashMap<String, String>) -> Self {
        self.options
            .extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output path given).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publishes a document as described by the [`PublishSpec`].
///
/// # Errors
///
/// Returns [`Error`] if the format is unknown, rejects an option, or the file
/// cannot be written.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, Error> {
    let registry = FormatRegistry::with_defaults();
    let text = registry.serialize_with_options(spec.markdown, spec.format, &spec.options)?;
    let artifact = match spec.output {
        Some(path) => PublishArtifact::File(write_to_path(path, text)?),
        None => PublishArtifact::InMemory(text),
    };
    Ok(PublishResult { artifact })
}

/// `Markdown-YYYY-MM-DD.<extension>`
pub fn download_filename(date: NaiveDate, extension: &str) -> String {
    format!("Markdown-{}.{extension}", date.format("%Y-%m-%d"))
}

/// Download path inside `dir` for the given format, using its primary extension.
pub fn download_path(
    registry: &FormatRegistry,
    format: &str,
    dir: impl AsRef<Path>,
    date: NaiveDate,
) -> Result<PathBuf, Error> {
    let format = registry.get(format)?;
    let extension = format.file_extensions().first().ok_or_else(|| {
        Error::NotSupported(format!(
            "Format '{}' has no file extension to download as",
            format.name()
        ))
    })?;
    Ok(dir.as_ref().join(download_filename(date, extension)))
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    fs::write(&path, text).map_err(|e| io_error(&path, e))?;
    info!(path = %path.display(), "wrote document");
    Ok(path)
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    Error::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
