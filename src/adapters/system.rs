use std::path::{Path, PathBuf};
use sysinfo::Disks;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemProbeError {
    #[error("no mount found for {0}")]
    MountNotFound(String),
    #[error("filesystem at {0} reports zero capacity")]
    ZeroCapacity(String),
}

/// The OS 5-minute load average. Platforms without load accounting report
/// zeros rather than an error.
#[must_use]
pub fn load_average_5m() -> f64 {
    sysinfo::System::load_average().five
}

/// Percent of space used on the filesystem backing `path`.
///
/// The backing mount is resolved by longest-prefix match over the mounted
/// disk list, so a path like `/tmp` that lives on the root volume resolves
/// to `/`.
///
/// # Errors
/// Returns an error if no mount covers `path` or the filesystem reports a
/// total capacity of zero.
pub fn disk_usage_percent(path: &Path) -> Result<f64, SystemProbeError> {
    let disks = Disks::new_with_refreshed_list();
    let mounts: Vec<(PathBuf, u64, u64)> = disks
        .iter()
        .map(|disk| (disk.mount_point().to_path_buf(), disk.total_space(), disk.available_space()))
        .collect();

    let (total, available) = best_mount(path, &mounts)
        .ok_or_else(|| SystemProbeError::MountNotFound(path.display().to_string()))?;

    percent_used(total, available).ok_or_else(|| SystemProbeError::ZeroCapacity(path.display().to_string()))
}

fn best_mount(path: &Path, mounts: &[(PathBuf, u64, u64)]) -> Option<(u64, u64)> {
    mounts
        .iter()
        .filter(|(mount, _, _)| path.starts_with(mount))
        .max_by_key(|(mount, _, _)| mount.as_os_str().len())
        .map(|(_, total, available)| (*total, *available))
}

fn percent_used(total: u64, available: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let used = total.saturating_sub(available);
    Some(used as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounts(entries: &[(&str, u64, u64)]) -> Vec<(PathBuf, u64, u64)> {
        entries.iter().map(|(mount, total, available)| (PathBuf::from(mount), *total, *available)).collect()
    }

    #[test]
    fn quarter_free_is_seventy_five_percent_used() {
        let pct = percent_used(100, 25).unwrap();
        assert_eq!(format!("{pct:.2}"), "75.00");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(percent_used(0, 0).is_none());
    }

    #[test]
    fn full_filesystem_is_one_hundred_percent() {
        let pct = percent_used(100, 0).unwrap();
        assert_eq!(format!("{pct:.2}"), "100.00");
    }

    #[test]
    fn longest_prefix_wins() {
        let mounts = mounts(&[("/", 100, 50), ("/var", 200, 100)]);
        assert_eq!(best_mount(Path::new("/var/spool"), &mounts), Some((200, 100)));
    }

    #[test]
    fn falls_back_to_root_mount() {
        let mounts = mounts(&[("/", 100, 50), ("/var", 200, 100)]);
        assert_eq!(best_mount(Path::new("/tmp"), &mounts), Some((100, 50)));
    }

    #[test]
    fn unmatched_path_has_no_mount() {
        let mounts = mounts(&[("/", 100, 50)]);
        assert_eq!(best_mount(Path::new("relative/path"), &mounts), None);
    }
}
