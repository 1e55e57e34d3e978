/// File ownership lookup.
///
/// Ownership is a platform capability: Unix resolves the file's uid to an
/// account name, everything else reports [`OWNER_NOT_APPLICABLE`]. The
/// implementation is chosen once, at startup, by [`default_owner_resolver`].
use crate::model::OWNER_NOT_APPLICABLE;
use compact_str::CompactString;
use std::fs::Metadata;
use std::path::Path;
use std::sync::Arc;

/// Resolves the owning account of a file.
///
/// Called from the scanner thread, hence `Send + Sync`.
pub trait OwnerResolver: Send + Sync {
    fn owner_of(&self, path: &Path, metadata: &Metadata) -> CompactString;
}

/// Resolver for platforms without file ownership.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotApplicable;

impl OwnerResolver for NotApplicable {
    fn owner_of(&self, _path: &Path, _metadata: &Metadata) -> CompactString {
        CompactString::new(OWNER_NOT_APPLICABLE)
    }
}

/// Pick the resolver for the host platform.
pub fn default_owner_resolver() -> Arc<dyn OwnerResolver> {
    #[cfg(unix)]
    {
        Arc::new(unix::AccountOwner::new())
    }
    #[cfg(not(unix))]
    {
        Arc::new(NotApplicable)
    }
}

#[cfg(unix)]
pub use unix::AccountOwner;

#[cfg(unix)]
mod unix {
    use super::OwnerResolver;
    use compact_str::{format_compact, CompactString};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::ffi::CStr;
    use std::fs::Metadata;
    use std::os::unix::fs::MetadataExt;
    use std::path::Path;
    use tracing::debug;

    /// Upper bound for the `getpwuid_r` scratch buffer.
    const MAX_PASSWD_BUF: usize = 1 << 20;

    /// Resolves uids through the system account database.
    ///
    /// A tree usually has a handful of distinct owners, so lookups are
    /// cached per uid for the lifetime of the resolver.
    #[derive(Debug, Default)]
    pub struct AccountOwner {
        cache: Mutex<HashMap<u32, CompactString>>,
    }

    impl AccountOwner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Account name for `uid`, or the uid itself when it has no entry.
        pub fn name_for_uid(&self, uid: u32) -> CompactString {
            if let Some(name) = self.cache.lock().get(&uid) {
                return name.clone();
            }
            let name = match lookup_account(uid) {
                Some(name) => CompactString::from(name),
                None => {
                    debug!("uid {uid} has no account entry; using the numeric id");
                    format_compact!("{uid}")
                }
            };
            self.cache.lock().insert(uid, name.clone());
            name
        }
    }

    impl OwnerResolver for AccountOwner {
        fn owner_of(&self, _path: &Path, metadata: &Metadata) -> CompactString {
            self.name_for_uid(metadata.uid())
        }
    }

    fn lookup_account(uid: u32) -> Option<String> {
        let mut buf: Vec<libc::c_char> = vec![0; 1024];
        loop {
            // SAFETY: `passwd` is plain data; getpwuid_r fills it with pointers
            // into `buf`, which outlives every read below.
            let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = std::ptr::null_mut();
            let rc = unsafe {
                libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
            };

            if rc == libc::ERANGE && buf.len() < MAX_PASSWD_BUF {
                buf.resize(buf.len() * 2, 0);
                continue;
            }
            if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
                return None;
            }
            let name = unsafe { CStr::from_ptr(pwd.pw_name) };
            return Some(name.to_string_lossy().into_owned());
        }
    }
}
