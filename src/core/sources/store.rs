// ─── Manifest Store ───
// The one piece of shared state in the crate: the current catalog text.

use std::sync::{Arc, RwLock};

use reqwest::Client;
use tracing::{info, warn};

use crate::core::version::manifest::{self, VersionEntry, VersionFilter};

use super::mirror::MirrorSource;

/// Shared slot for the current version catalog, last-fetch-wins.
///
/// Acquisition swaps in a new immutable snapshot; queries clone the
/// snapshot out and parse without holding the lock, so concurrent
/// refreshes and reads never observe a half-written document.
#[derive(Debug, Default)]
pub struct ManifestStore {
    current: RwLock<Option<Arc<str>>>,
}

impl ManifestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog from `source` and make it the current manifest.
    ///
    /// Returns false on any ordinary fetch failure — transport error,
    /// non-2xx status, empty body — and leaves the current manifest
    /// untouched. Network conditions never raise here.
    pub async fn initialize(&self, client: &Client, source: MirrorSource) -> bool {
        info!("Fetching version catalog from {}", source);
        self.initialize_from(client, source.manifest_url()).await
    }

    pub(crate) async fn initialize_from(&self, client: &Client, url: &str) -> bool {
        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("Catalog fetch failed: {err}");
                return false;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog fetch returned HTTP {status}");
            return false;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                warn!("Catalog body read failed: {err}");
                return false;
            }
        };
        if body.is_empty() {
            warn!("Catalog fetch returned an empty body");
            return false;
        }

        self.replace(&body);
        true
    }

    /// Swap in a document directly, bypassing the network.
    pub fn replace(&self, document: &str) {
        let mut slot = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(Arc::from(document));
    }

    /// Snapshot of the current manifest, if one has been acquired.
    pub fn snapshot(&self) -> Option<Arc<str>> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Identifier at `latest.release`. `None` when the document (explicit
    /// or current) is absent or cannot be parsed.
    pub fn latest_release(&self, document: Option<&str>) -> Option<String> {
        match document {
            Some(doc) => manifest::latest_release(doc),
            None => manifest::latest_release(&self.snapshot()?),
        }
    }

    /// Identifier at `latest.snapshot`, same contract as `latest_release`.
    pub fn latest_snapshot(&self, document: Option<&str>) -> Option<String> {
        match document {
            Some(doc) => manifest::latest_snapshot(doc),
            None => manifest::latest_snapshot(&self.snapshot()?),
        }
    }

    /// Filtered listing over the given or current document.
    pub fn version_list(
        &self,
        document: Option<&str>,
        filter: VersionFilter,
    ) -> Option<Vec<VersionEntry>> {
        match document {
            Some(doc) => manifest::version_list(doc, filter),
            None => manifest::version_list(&self.snapshot()?, filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SAMPLE: &str = r#"{
        "latest": { "release": "1.21.1", "snapshot": "24w33a" },
        "versions": [
            { "id": "24w33a", "type": "snapshot", "url": "https://example.com/24w33a.json",
              "releaseTime": "2024-08-15T12:24:45+00:00", "sha1": "aaa111" },
            { "id": "1.21.1", "type": "release", "url": "https://example.com/1.21.1.json",
              "releaseTime": "2024-08-08T12:24:45+00:00", "sha1": "bbb222" }
        ]
    }"#;

    #[test]
    fn fresh_store_answers_nothing() {
        let store = ManifestStore::new();
        assert!(store.snapshot().is_none());
        assert_eq!(store.latest_release(None), None);
        assert_eq!(store.version_list(None, VersionFilter::default()), None);
    }

    #[test]
    fn stored_document_roundtrips_byte_for_byte() {
        let store = ManifestStore::new();
        store.replace(SAMPLE);
        assert_eq!(store.latest_release(None).as_deref(), Some("1.21.1"));
        assert_eq!(store.latest_snapshot(None).as_deref(), Some("24w33a"));
    }

    #[test]
    fn explicit_document_wins_over_the_slot() {
        let store = ManifestStore::new();
        store.replace(SAMPLE);
        let other = r#"{ "latest": { "release": "1.7.10", "snapshot": "14w34d" } }"#;
        assert_eq!(store.latest_release(Some(other)).as_deref(), Some("1.7.10"));
        // Slot is untouched by explicit-document queries.
        assert_eq!(store.latest_release(None).as_deref(), Some("1.21.1"));
    }

    #[test]
    fn last_fetch_wins() {
        let store = ManifestStore::new();
        store.replace(SAMPLE);
        store.replace(r#"{ "latest": { "release": "1.20.6", "snapshot": "x" } }"#);
        assert_eq!(store.latest_release(None).as_deref(), Some("1.20.6"));
    }

    #[tokio::test]
    async fn failed_fetch_reports_false_and_keeps_the_slot() {
        let store = ManifestStore::new();
        store.replace(SAMPLE);

        let client = Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .unwrap();
        let ok = store
            .initialize_from(&client, "http://127.0.0.1:9/manifest.json")
            .await;

        assert!(!ok);
        assert_eq!(store.latest_release(None).as_deref(), Some("1.21.1"));
    }
}
