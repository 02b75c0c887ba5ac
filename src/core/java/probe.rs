// ─── Java Probe ───
// Runs `<java> -version` out of process and turns its banner into facts.
// The JVM prints the banner on stderr; stdout is not captured.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::error::{LauncherError, LauncherResult};

const VERSION_MARKER: &str = "version \"";
const BITNESS_MARKER: &str = "64-Bit";

/// A wedged binary is killed after this deadline instead of hanging the scan.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);
const PROBE_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Result of launching the probe process.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// Captured stderr text, complete up to process exit.
    Output(String),
    /// The executable is not there. Callers skip the candidate; this is
    /// not an error.
    Missing,
}

/// Word size reported by a runtime banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bitness {
    #[serde(rename = "32")]
    Bits32,
    #[serde(rename = "64")]
    Bits64,
}

impl Bitness {
    pub fn is_64bit(self) -> bool {
        self == Bitness::Bits64
    }
}

impl fmt::Display for Bitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bitness::Bits32 => write!(f, "32"),
            Bitness::Bits64 => write!(f, "64"),
        }
    }
}

/// Run `<executable> -version` and capture its stderr as text.
///
/// Exactly one child process is spawned per call, and none is left running
/// when the call returns: the child either exits on its own or is killed at
/// the deadline. Exit code is not inspected; only the captured text matters.
#[instrument]
pub fn run_version_probe(executable: &Path) -> LauncherResult<ProbeOutcome> {
    if !executable.exists() {
        return Ok(ProbeOutcome::Missing);
    }

    let mut child = match Command::new(executable)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        // Lost the race with a concurrent uninstall; same as never there.
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ProbeOutcome::Missing)
        }
        Err(source) => {
            return Err(LauncherError::Process {
                path: executable.to_path_buf(),
                source,
            })
        }
    };

    let deadline = Instant::now() + PROBE_TIMEOUT;
    loop {
        match child.try_wait() {
            Ok(Some(_status)) => break,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(LauncherError::Process {
                    path: executable.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        format!("probe did not exit within {PROBE_TIMEOUT:?}"),
                    ),
                });
            }
            Ok(None) => std::thread::sleep(PROBE_POLL_INTERVAL),
            Err(source) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(LauncherError::Process {
                    path: executable.to_path_buf(),
                    source,
                });
            }
        }
    }

    let mut raw = Vec::new();
    if let Some(mut stderr) = child.stderr.take() {
        stderr
            .read_to_end(&mut raw)
            .map_err(|source| LauncherError::Process {
                path: executable.to_path_buf(),
                source,
            })?;
    }

    let text = String::from_utf8_lossy(&raw).into_owned();
    debug!(
        "Probing {:?}: {}",
        executable,
        text.lines().next().unwrap_or("")
    );
    Ok(ProbeOutcome::Output(text))
}

/// Extract the quoted version from a `-version` banner.
///
/// The banner is usually shaped like `openjdk version "21.0.4" ...`; the
/// value between the quotes is returned verbatim.
pub fn extract_version(output: &str) -> LauncherResult<String> {
    let start = output
        .find(VERSION_MARKER)
        .ok_or_else(|| LauncherError::Parse("version marker not found".into()))?
        + VERSION_MARKER.len();
    let end = output[start..]
        .find('"')
        .ok_or_else(|| LauncherError::Parse("version marker not found".into()))?;
    Ok(output[start..start + end].to_string())
}

/// A banner without the `64-Bit` tag is treated as 32-bit. Imprecise, but
/// the tag has been stable across vendors for as long as it matters.
pub fn extract_bitness(output: &str) -> Bitness {
    if output.contains(BITNESS_MARKER) {
        Bitness::Bits64
    } else {
        Bitness::Bits32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const BANNER_64: &str = "openjdk version \"21.0.4\" 2024-07-16 LTS\n\
        OpenJDK Runtime Environment Temurin-21.0.4+7 (build 21.0.4+7-LTS)\n\
        OpenJDK 64-Bit Server VM Temurin-21.0.4+7 (build 21.0.4+7-LTS, mixed mode)";

    #[test]
    fn version_between_quotes() {
        assert_eq!(extract_version(BANNER_64).unwrap(), "21.0.4");
    }

    #[test]
    fn version_with_dots_and_dashes() {
        let banner = "java version \"1.8.0_392-ea-b04\"\nsome trailing line";
        assert_eq!(extract_version(banner).unwrap(), "1.8.0_392-ea-b04");
    }

    #[test]
    fn missing_marker_is_a_parse_error() {
        let err = extract_version("no banner here").unwrap_err();
        assert!(matches!(err, LauncherError::Parse(_)));
    }

    #[test]
    fn missing_closing_quote_is_a_parse_error() {
        let err = extract_version("openjdk version \"21.0.4").unwrap_err();
        assert!(matches!(err, LauncherError::Parse(_)));
    }

    #[test]
    fn bitness_detects_64() {
        assert_eq!(extract_bitness(BANNER_64), Bitness::Bits64);
        assert!(extract_bitness(BANNER_64).is_64bit());
    }

    #[test]
    fn bitness_defaults_to_32() {
        // Bitness never fails, even on text where version extraction does.
        assert_eq!(extract_bitness("no banner here"), Bitness::Bits32);
        assert_eq!(
            extract_bitness("java version \"21.0.4\" Client VM"),
            Bitness::Bits32
        );
    }

    #[test]
    fn probe_of_nonexistent_path_is_missing() {
        let path = PathBuf::from("/definitely/not/a/real/java/binary");
        let outcome = run_version_probe(&path).unwrap();
        assert!(matches!(outcome, ProbeOutcome::Missing));
    }
}
