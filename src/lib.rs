//! Lodestone core — source resolution and environment discovery for a
//! Minecraft launcher.
//!
//! Three jobs: race the two catalog mirrors and pick the faster one, hold
//! and query the fetched version manifest, and sweep local storage for
//! installed Java runtimes by probing `java -version` out of process.

pub mod core;

use tracing_subscriber::EnvFilter;

pub use crate::core::error::{LauncherError, LauncherResult};
pub use crate::core::http::build_http_client;
pub use crate::core::java::{detect_java_installations, Bitness, JavaInstallation};
pub use crate::core::sources::{select_fastest_source, ManifestStore, MirrorSource};
pub use crate::core::version::{VersionEntry, VersionFilter, VersionKind};

/// Initialize structured logging for binary consumers.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,lodestone_core=debug")),
        )
        .init();
}
