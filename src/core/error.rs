use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the launcher backend.
/// Every fallible module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // ── Diagnostic text ─────────────────────────────────
    #[error("Parse error: {0}")]
    Parse(String),

    // ── Child process ───────────────────────────────────
    #[error("Process error for {path:?}: {source}")]
    Process {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;
