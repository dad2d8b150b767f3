//! Export configuration from environment variables.
//!
//! `PORTFOLIO_OUT_DIR` chooses the output directory (default `dist`) and
//! `PORTFOLIO_OUTPUT_NAME` names the WASM bundle the hydration scripts load
//! (default `portfolio`). `PORTFOLIO_RESUME_PATH` points at the resume PDF
//! to ship alongside the page. Unset or blank values fall back to the
//! defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use leptos::prelude::LeptosOptions;

pub const DEFAULT_OUT_DIR: &str = "dist";
pub const DEFAULT_OUTPUT_NAME: &str = "portfolio";

const OUT_DIR_VAR: &str = "PORTFOLIO_OUT_DIR";
const OUTPUT_NAME_VAR: &str = "PORTFOLIO_OUTPUT_NAME";
const RESUME_PATH_VAR: &str = "PORTFOLIO_RESUME_PATH";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid output name {0:?}: must not contain path separators")]
    InvalidOutputName(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    pub out_dir: PathBuf,
    pub output_name: String,
    /// Resume PDF copied into the export; `None` leaves the link dangling.
    pub resume_source: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            output_name: DEFAULT_OUTPUT_NAME.to_owned(),
            resume_source: None,
        }
    }
}

impl ExportConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOutputName`] if the bundle name contains
    /// a path separator.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ExportConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let out_dir = non_blank(OUT_DIR_VAR).unwrap_or_else(|| DEFAULT_OUT_DIR.to_owned());
        let output_name = non_blank(OUTPUT_NAME_VAR).unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_owned());
        if output_name.contains(['/', '\\']) {
            return Err(ConfigError::InvalidOutputName(output_name));
        }

        let resume_source = non_blank(RESUME_PATH_VAR).map(PathBuf::from);

        Ok(Self { out_dir: PathBuf::from(out_dir), output_name, resume_source })
    }

    /// Leptos options used when rendering the document shell.
    #[must_use]
    pub fn leptos_options(&self) -> LeptosOptions {
        LeptosOptions::builder().output_name(self.output_name.clone()).build()
    }
}
