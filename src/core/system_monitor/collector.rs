use std::path::Path;
#[cfg(not(unix))]
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[cfg(not(unix))]
use sysinfo::Disks;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::error::{MonitorError, Result};

/// Source of the three utilization percentages
pub trait MetricsProvider {
    /// Name of the host the readings come from, used in alert text
    fn hostname(&self) -> String;

    /// Global CPU utilization averaged over `sample_window`. Blocks for the window.
    fn cpu_percent(&mut self, sample_window: Duration) -> f64;

    /// Share of physical memory not available to new allocations
    fn memory_percent(&mut self) -> f64;

    /// Usage of the filesystem mounted at or above `path`
    fn disk_percent(&mut self, path: &Path) -> Result<f64>;
}

/// [`MetricsProvider`] backed by `sysinfo`, and `statvfs` for disks on unix
pub struct SysinfoProvider {
    system: System,
    #[cfg(not(unix))]
    disks: Disks,
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Self {
            system: System::new_with_specifics(refresh_kind),
            #[cfg(not(unix))]
            disks: Disks::new_with_refreshed_list(),
        }
    }
}

impl MetricsProvider for SysinfoProvider {
    fn hostname(&self) -> String {
        System::host_name().unwrap_or_else(|| "Unknown".to_string())
    }

    fn cpu_percent(&mut self, sample_window: Duration) -> f64 {
        // Usage is the delta between two refreshes
        self.system.refresh_cpu_usage();
        thread::sleep(sample_window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        self.system.refresh_cpu_usage();

        f64::from(self.system.global_cpu_usage())
    }

    fn memory_percent(&mut self) -> f64 {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let available = self.system.available_memory();
        usage_percent(total, available)
    }

    #[cfg(unix)]
    fn disk_percent(&mut self, path: &Path) -> Result<f64> {
        let resolved = path
            .canonicalize()
            .map_err(|e| MonitorError::filesystem(path, e.to_string()))?;

        let stats = statvfs(&resolved)?;
        log::debug!("statvfs {:?}: {:?}", resolved, stats);

        Ok(stats.usage_percent())
    }

    #[cfg(not(unix))]
    fn disk_percent(&mut self, path: &Path) -> Result<f64> {
        let resolved = path
            .canonicalize()
            .map_err(|e| MonitorError::filesystem(path, e.to_string()))?;

        self.disks.refresh(true);

        let mounts: Vec<(PathBuf, u64, u64)> = self
            .disks
            .iter()
            .map(|disk| {
                (
                    disk.mount_point().to_path_buf(),
                    disk.total_space(),
                    disk.available_space(),
                )
            })
            .collect();

        let (mount, total, available) = find_mount(&mounts, &resolved)
            .cloned()
            .ok_or_else(|| {
                MonitorError::filesystem(path, "no mounted filesystem contains this path")
            })?;
        log::debug!("{:?} resolved to mount point {:?}", path, mount);

        if total == 0 {
            return Err(MonitorError::metric_collection(format!(
                "filesystem at {} reports zero capacity",
                mount.display()
            )));
        }

        Ok(usage_percent(total, available))
    }
}

/// Block counts of a filesystem as reported by `statvfs`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStats {
    pub fragment_size: u64,
    pub blocks: u64,
    /// Free blocks, including the ones reserved for root
    pub free: u64,
    /// Free blocks usable by unprivileged users
    pub available: u64,
}

impl BlockStats {
    /// Used share of the space visible to unprivileged users.
    ///
    /// Reserved blocks count as neither used nor available, the way `df`
    /// reports it.
    pub fn usage_percent(&self) -> f64 {
        let used = self
            .blocks
            .saturating_sub(self.free)
            .saturating_mul(self.fragment_size);
        let available = self.available.saturating_mul(self.fragment_size);
        let user_total = used.saturating_add(available);

        if user_total == 0 {
            return 0.0;
        }
        (used as f64 / user_total as f64) * 100.0
    }
}

#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
fn statvfs(path: &Path) -> Result<BlockStats> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| MonitorError::filesystem(path, e.to_string()))?;

    let mut raw: libc::statvfs = unsafe { std::mem::zeroed() };
    // SAFETY: c_path is NUL-terminated and raw is a valid out-pointer
    if unsafe { libc::statvfs(c_path.as_ptr(), &mut raw) } != 0 {
        let err = std::io::Error::last_os_error();
        return Err(MonitorError::filesystem(path, err.to_string()));
    }

    Ok(BlockStats {
        fragment_size: raw.f_frsize as u64,
        blocks: raw.f_blocks as u64,
        free: raw.f_bfree as u64,
        available: raw.f_bavail as u64,
    })
}

/// Mount entry with the longest mount point that is a prefix of `path`
#[cfg(not(unix))]
fn find_mount<'a>(
    mounts: &'a [(PathBuf, u64, u64)],
    path: &Path,
) -> Option<&'a (PathBuf, u64, u64)> {
    mounts
        .iter()
        .filter(|(mount, _, _)| path.starts_with(mount))
        .max_by_key(|(mount, _, _)| mount.components().count())
}

fn usage_percent(total: u64, available: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let used = total.saturating_sub(available);
    (used as f64 / total as f64) * 100.0
}
