pub mod manifest;

pub use manifest::{latest_release, latest_snapshot, version_list};
pub use manifest::{VersionEntry, VersionFilter, VersionKind};
