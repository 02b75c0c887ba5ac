// ─── Java Discovery ───
// Exhaustive sweep of local storage for installed Java runtimes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::core::error::LauncherResult;

use super::probe::{self, Bitness, ProbeOutcome};
use super::roots;

/// One locally installed Java runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JavaInstallation {
    pub version: String,
    pub bitness: Bitness,
    /// Install directory, not including `bin/<exe>`.
    pub install_path: PathBuf,
}

pub(crate) fn java_exe() -> &'static str {
    if cfg!(windows) {
        "java.exe"
    } else {
        "java"
    }
}

/// Scan every search root for installed runtimes.
///
/// This is the slow path of the crate: each root is walked in full and each
/// hit probed, strictly in order, with no parallelism. Results keep scan
/// order; the caller owns the list and nothing is cached.
pub fn detect_java_installations() -> LauncherResult<Vec<JavaInstallation>> {
    detect_java_installations_in(&roots::enumerate_search_roots())
}

/// Scan the given roots, in order.
///
/// A candidate whose executable vanished between the walk and the probe is
/// skipped. Any other probe or extraction failure aborts the whole scan.
pub fn detect_java_installations_in(
    search_roots: &[PathBuf],
) -> LauncherResult<Vec<JavaInstallation>> {
    let mut detected = Vec::new();

    for root in search_roots {
        debug!("Scanning {:?} for {}", root, java_exe());
        for executable in find_candidate_executables(root) {
            // Install dir is the executable's parent-of-parent: <install>/bin/<exe>.
            let Some(install_path) = executable.parent().and_then(Path::parent) else {
                continue;
            };

            // One probe run per extracted fact: version first, then bitness.
            let version_banner = match probe::run_version_probe(&executable)? {
                ProbeOutcome::Output(text) => text,
                ProbeOutcome::Missing => continue,
            };
            let version = probe::extract_version(&version_banner)?;

            let bitness_banner = match probe::run_version_probe(&executable)? {
                ProbeOutcome::Output(text) => text,
                ProbeOutcome::Missing => continue,
            };
            let bitness = probe::extract_bitness(&bitness_banner);

            detected.push(JavaInstallation {
                version,
                bitness,
                install_path: install_path.to_path_buf(),
            });
        }
    }

    info!("Detected {} Java installation(s)", detected.len());
    Ok(detected)
}

/// Recursive search for files named exactly `java.exe` / `java` under `root`.
/// Unreadable directories are skipped, the way `where /R` skips them.
fn find_candidate_executables(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_str() == Some(java_exe()))
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_root_yields_no_installations() {
        let root = tempfile::tempdir().unwrap();
        let detected = detect_java_installations_in(&[root.path().to_path_buf()]).unwrap();
        assert!(detected.is_empty());
    }

    #[test]
    fn candidate_search_matches_exact_name_only() {
        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("jdk-21").join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join(java_exe()), b"").unwrap();
        fs::write(bin.join("javac0"), b"").unwrap();
        fs::write(root.path().join("java.txt"), b"").unwrap();

        let hits = find_candidate_executables(root.path());
        assert_eq!(hits, vec![bin.join(java_exe())]);
    }

    #[test]
    fn nonexistent_root_is_silently_empty() {
        let missing = PathBuf::from("/no/such/volume/anywhere");
        assert!(find_candidate_executables(&missing).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn discovers_runtime_from_probe_banner() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let install = root.path().join("temurin-21");
        let bin = install.join("bin");
        fs::create_dir_all(&bin).unwrap();

        // Stand-in java that prints a canned banner on stderr, like the real one.
        let script = "#!/bin/sh\n\
            echo 'openjdk version \"21.0.4\" 2024-07-16 LTS' >&2\n\
            echo 'OpenJDK 64-Bit Server VM Temurin-21.0.4+7' >&2\n";
        let exe = bin.join("java");
        fs::write(&exe, script).unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

        let detected = detect_java_installations_in(&[root.path().to_path_buf()]).unwrap();
        assert_eq!(detected.len(), 1);
        assert_eq!(detected[0].version, "21.0.4");
        assert_eq!(detected[0].bitness, Bitness::Bits64);
        assert_eq!(detected[0].install_path, install);
    }

    #[cfg(unix)]
    #[test]
    fn unparseable_banner_aborts_the_scan() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("broken-jdk").join("bin");
        fs::create_dir_all(&bin).unwrap();
        let exe = bin.join("java");
        fs::write(&exe, "#!/bin/sh\necho 'not a java banner' >&2\n").unwrap();
        fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

        let err = detect_java_installations_in(&[root.path().to_path_buf()]).unwrap_err();
        assert!(matches!(err, crate::core::error::LauncherError::Parse(_)));
    }
}
