//! Static export: writes the rendered page and its stylesheet to disk.
//!
//! Output layout:
//!   <out_dir>/index.html
//!   <out_dir>/portfolio.css
//!   <out_dir>/ShashankAtmakur_Resume.pdf   (when a resume source is configured)
//!
//! Without `PORTFOLIO_RESUME_PATH` the resume link in the header points at a
//! file that must be supplied separately; the export logs a warning.
//! The WASM bundle under `pkg/` is produced by the frontend build, not here.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::content::RESUME;
use crate::render::render_document;

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "portfolio.css";

const STYLESHEET: &str = include_str!("../style/portfolio.css");

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: std::io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy { from: PathBuf, to: PathBuf, source: std::io::Error },
}

/// Files written by a successful export, in write order.
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
}

/// Render the page and write it with its stylesheet (and resume, if
/// configured) into `config.out_dir`.
///
/// Existing files are overwritten, so re-running produces the same bytes.
///
/// # Errors
///
/// Returns [`ExportError`] if the directory cannot be created or a file
/// cannot be written or copied.
pub fn write_site(config: &ExportConfig) -> Result<ExportSummary, ExportError> {
    fs::create_dir_all(&config.out_dir)
        .map_err(|source| ExportError::CreateDir { path: config.out_dir.clone(), source })?;

    let html = render_document(config.leptos_options());
    let mut summary = ExportSummary::default();
    summary.written.push(write_file(&config.out_dir, INDEX_FILE, &html)?);
    summary.written.push(write_file(&config.out_dir, STYLESHEET_FILE, STYLESHEET)?);
    match &config.resume_source {
        Some(source) => summary.written.push(copy_resume(source, &config.out_dir)?),
        None => tracing::warn!(href = RESUME.href, "no resume source configured; resume link will be dead"),
    }

    tracing::debug!(out_dir = %config.out_dir.display(), bytes = html.len(), "rendered index");
    Ok(summary)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, ExportError> {
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|source| ExportError::Write { path: path.clone(), source })?;
    Ok(path)
}

/// File name the header's resume link resolves to inside the export.
#[must_use]
pub fn resume_file_name() -> &'static str {
    RESUME.href.trim_start_matches('/')
}

fn copy_resume(source: &Path, dir: &Path) -> Result<PathBuf, ExportError> {
    let dest = dir.join(resume_file_name());
    fs::copy(source, &dest)
        .map_err(|e| ExportError::Copy { from: source.to_path_buf(), to: dest.clone(), source: e })?;
    Ok(dest)
}
