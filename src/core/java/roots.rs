// ─── Search Roots ───
// Per-OS enumeration of the filesystem roots the discovery sweep visits.

use std::path::PathBuf;

/// The 26 fixed drive letters. Letters without a mounted volume simply
/// yield nothing when walked.
#[cfg(windows)]
pub fn enumerate_search_roots() -> Vec<PathBuf> {
    ('A'..='Z')
        .map(|letter| PathBuf::from(format!("{letter}:\\")))
        .collect()
}

/// Mounted filesystems as reported by the OS, deduplicated.
#[cfg(not(windows))]
pub fn enumerate_search_roots() -> Vec<PathBuf> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    let mut roots: Vec<PathBuf> = disks
        .list()
        .iter()
        .map(|disk| disk.mount_point().to_path_buf())
        .collect();
    roots.sort();
    roots.dedup();
    if roots.is_empty() {
        roots.push(PathBuf::from("/"));
    }
    roots
}
