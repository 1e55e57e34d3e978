/// Volume capacity queries.
///
/// Reports used and total bytes for the volume holding a path. Unix uses
/// `statvfs`; Windows uses `GetDiskFreeSpaceExW`.
use crate::error::VolumeError;
use std::io;
use std::path::Path;

/// Capacity of one volume, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub used: u64,
    pub total: u64,
}

impl DiskUsage {
    /// Used share of the volume (0.0–100.0). A zero-capacity volume reports 0.
    pub fn percent_used(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.used as f64 / self.total as f64 * 100.0
    }
}

/// Query used/total capacity for the volume containing `path`.
pub fn disk_usage(path: &Path) -> Result<DiskUsage, VolumeError> {
    let wrap = |source: io::Error| VolumeError {
        path: path.to_path_buf(),
        source,
    };
    // Surface not-found / access-denied as the OS reports them.
    std::fs::metadata(path).map_err(wrap)?;
    query(path).map_err(wrap)
}

#[cfg(unix)]
fn query(path: &Path) -> io::Result<DiskUsage> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    // SAFETY: statvfs is plain data and only written by the call below.
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }

    let frsize = stat.f_frsize as u128;
    let total = (stat.f_blocks as u128).saturating_mul(frsize);
    let free = (stat.f_bfree as u128).saturating_mul(frsize);
    Ok(DiskUsage {
        used: total.saturating_sub(free) as u64,
        total: total as u64,
    })
}

#[cfg(windows)]
fn query(path: &Path) -> io::Result<DiskUsage> {
    use std::os::windows::ffi::OsStrExt;
    use windows::core::PCWSTR;
    use windows::Win32::Storage::FileSystem::GetDiskFreeSpaceExW;

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();

    let mut free_caller: u64 = 0;
    let mut total: u64 = 0;
    let mut free_total: u64 = 0;
    let ok = unsafe {
        GetDiskFreeSpaceExW(
            PCWSTR(wide.as_ptr()),
            Some(&mut free_caller as *mut u64),
            Some(&mut total as *mut u64),
            Some(&mut free_total as *mut u64),
        )
        .is_ok()
    };
    if !ok {
        return Err(io::Error::last_os_error());
    }
    Ok(DiskUsage {
        used: total.saturating_sub(free_total),
        total,
    })
}

#[cfg(not(any(unix, windows)))]
fn query(_path: &Path) -> io::Result<DiskUsage> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "disk usage is not supported on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_used_half() {
        let usage = DiskUsage {
            used: 500 * 1_000_000_000,
            total: 1000 * 1_000_000_000,
        };
        assert_eq!(usage.percent_used(), 50.0);
    }

    #[test]
    fn percent_used_zero_capacity() {
        let usage = DiskUsage { used: 0, total: 0 };
        assert_eq!(usage.percent_used(), 0.0);
    }

    #[test]
    fn temp_dir_has_capacity() {
        let tmp = tempfile::TempDir::new().unwrap();
        let usage = disk_usage(tmp.path()).unwrap();
        assert!(usage.total > 0);
        assert!(usage.used <= usage.total);
    }

    #[test]
    fn missing_path_is_not_found() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let err = disk_usage(&missing).unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.path, missing);
    }
}
