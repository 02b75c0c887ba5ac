// ─── Version Manifest ───
// Parsing and querying of the Mojang version manifest v2. Documents are
// parsed on demand; queries degrade to None on bad remote data instead of
// raising.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Classification of a catalog entry. Types the catalog grows later land
/// in `Other` with their raw text and pass every filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VersionKind {
    Release,
    Snapshot,
    OldBeta,
    OldAlpha,
    Other(String),
}

impl From<String> for VersionKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "release" => VersionKind::Release,
            "snapshot" => VersionKind::Snapshot,
            "old_beta" => VersionKind::OldBeta,
            "old_alpha" => VersionKind::OldAlpha,
            _ => VersionKind::Other(raw),
        }
    }
}

impl From<VersionKind> for String {
    fn from(kind: VersionKind) -> Self {
        match kind {
            VersionKind::Release => "release".into(),
            VersionKind::Snapshot => "snapshot".into(),
            VersionKind::OldBeta => "old_beta".into(),
            VersionKind::OldAlpha => "old_alpha".into(),
            VersionKind::Other(raw) => raw,
        }
    }
}

/// A single entry in the manifest. `release_time` and `sha1` are carried
/// as opaque text; neither is parsed or verified here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VersionKind,
    pub url: String,
    #[serde(rename = "releaseTime")]
    pub release_time: String,
    pub sha1: String,
}

/// Per-kind inclusion flags for `version_list`. The legacy flag governs
/// old_beta and old_alpha together.
#[derive(Debug, Clone, Copy)]
pub struct VersionFilter {
    pub include_release: bool,
    pub include_snapshot: bool,
    pub include_legacy: bool,
}

impl Default for VersionFilter {
    fn default() -> Self {
        Self {
            include_release: true,
            include_snapshot: true,
            include_legacy: true,
        }
    }
}

impl VersionFilter {
    fn matches(self, kind: &VersionKind) -> bool {
        match kind {
            VersionKind::Release => self.include_release,
            VersionKind::Snapshot => self.include_snapshot,
            VersionKind::OldBeta | VersionKind::OldAlpha => self.include_legacy,
            VersionKind::Other(_) => true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ManifestDocument {
    versions: Vec<VersionEntry>,
}

/// Identifier at `latest.release`, or None when the document cannot be
/// parsed or the field path is absent.
pub fn latest_release(document: &str) -> Option<String> {
    latest_pointer(document, "release")
}

/// Identifier at `latest.snapshot`, same contract as `latest_release`.
pub fn latest_snapshot(document: &str) -> Option<String> {
    latest_pointer(document, "snapshot")
}

fn latest_pointer(document: &str, kind: &str) -> Option<String> {
    let root: serde_json::Value = serde_json::from_str(document).ok()?;
    root.get("latest")?.get(kind)?.as_str().map(str::to_string)
}

/// Filtered listing of the catalog's `versions` array, document order
/// preserved, no dedup, no sort.
///
/// None means the document could not be parsed; an empty vec means it
/// parsed and nothing matched. Callers must keep the two apart.
pub fn version_list(document: &str, filter: VersionFilter) -> Option<Vec<VersionEntry>> {
    let parsed: ManifestDocument = serde_json::from_str(document).ok()?;
    debug!("Parsed {} catalog entries", parsed.versions.len());
    Some(
        parsed
            .versions
            .into_iter()
            .filter(|entry| filter.matches(&entry.kind))
            .collect(),
    )
}
