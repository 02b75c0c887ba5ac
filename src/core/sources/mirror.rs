// ─── Mirror Race ───
// Two-way latency race between the known catalog mirrors.

use std::fmt;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::error::LauncherResult;

pub const MOJANG_MANIFEST_URL: &str =
    "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";
pub const BMCLAPI_MANIFEST_URL: &str =
    "https://bmclapi2.bangbang93.com/mc/game/version_manifest_v2.json";

/// The two known catalog mirrors. Mojang is the primary and the fallback
/// whenever the race cannot complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorSource {
    #[default]
    Mojang,
    Bmclapi,
}

impl MirrorSource {
    pub fn manifest_url(self) -> &'static str {
        match self {
            MirrorSource::Mojang => MOJANG_MANIFEST_URL,
            MirrorSource::Bmclapi => BMCLAPI_MANIFEST_URL,
        }
    }
}

impl fmt::Display for MirrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorSource::Mojang => write!(f, "Mojang"),
            MirrorSource::Bmclapi => write!(f, "BMCLAPI"),
        }
    }
}

/// Probe both mirrors in order and return the faster one.
///
/// The probes run one after another, fully awaited, so the race costs the
/// sum of both round trips. The first failed probe short-circuits to
/// Mojang without touching the remaining endpoint; a timed-out probe is a
/// failed probe. Nothing about the decision is cached.
pub async fn select_fastest_source(client: &Client) -> MirrorSource {
    select_between(client, MOJANG_MANIFEST_URL, BMCLAPI_MANIFEST_URL).await
}

pub(crate) async fn select_between(
    client: &Client,
    primary_url: &str,
    secondary_url: &str,
) -> MirrorSource {
    let primary = match probe_latency(client, primary_url).await {
        Ok(latency) => latency,
        Err(err) => {
            warn!("Primary mirror probe failed, staying on Mojang: {err}");
            return MirrorSource::Mojang;
        }
    };

    let secondary = match probe_latency(client, secondary_url).await {
        Ok(latency) => latency,
        Err(err) => {
            warn!("Secondary mirror probe failed, staying on Mojang: {err}");
            return MirrorSource::Mojang;
        }
    };

    let chosen = pick_faster(primary, secondary);
    info!(
        "Mirror race: Mojang {:?} vs BMCLAPI {:?} -> {}",
        primary, secondary, chosen
    );
    chosen
}

/// Wall-clock time from request start to a checked 2xx response.
async fn probe_latency(client: &Client, url: &str) -> LauncherResult<Duration> {
    let start = Instant::now();
    let response = client.get(url).send().await?;
    response.error_for_status()?;
    Ok(start.elapsed())
}

/// Strictly lower secondary latency wins; everything else, ties included,
/// stays on the primary.
fn pick_faster(primary: Duration, secondary: Duration) -> MirrorSource {
    if secondary < primary {
        MirrorSource::Bmclapi
    } else {
        MirrorSource::Mojang
    }
}
