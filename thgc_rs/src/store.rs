//! Key-value storage seam.
//!
//! The desk never touches a global; it is handed something implementing
//! [`KeyValueStore`]. The browser build plugs in `window.localStorage`, tests
//! and previews use [`MemoryStore`], and native tooling can keep inquiries on
//! disk with [`FileStore`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{StoreError, StoreResult};

/// Minimal string key-value store with `localStorage` semantics.
///
/// `set_item` replaces the previous value as a whole. Implementations take
/// `&self` and handle their own interior mutability.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}

/// In-process store. Optionally enforces a byte quota so a full
/// `localStorage` can be reproduced.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any single write larger than `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// Pre-populate a key, e.g. with data written by an older site build.
    pub fn seeded(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.lock().insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written entry.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.quota.is_some_and(|limit| value.len() > limit) {
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                bytes: value.len(),
            });
        }
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use tracing::debug;

    use super::KeyValueStore;
    use crate::error::{StoreError, StoreResult};

    /// Directory-backed store: one `<key>.json` file per key.
    ///
    /// Writes go to a temp file in the same directory and are renamed over
    /// the target, so a failed write leaves the previous value in place.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        root: PathBuf,
    }

    impl FileStore {
        /// Open (and create if needed) a store rooted at `root`.
        pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
            let root = root.into();
            std::fs::create_dir_all(&root)?;
            Ok(Self { root })
        }

        pub fn root(&self) -> &Path {
            &self.root
        }

        fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
            let valid = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
                && !key.starts_with('.');
            if !valid {
                return Err(StoreError::Unavailable(format!(
                    "key '{key}' is not a valid file name"
                )));
            }
            Ok(self.root.join(format!("{key}.json")))
        }
    }

    impl KeyValueStore for FileStore {
        fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
            let path = self.path_for(key)?;
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    debug!(path = %path.display(), bytes = content.len(), "read store key");
                    Ok(Some(content))
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
            let path = self.path_for(key)?;
            let tmp = self.root.join(format!(".{key}.json.tmp"));
            {
                let mut file = std::fs::File::create(&tmp)?;
                file.write_all(value.as_bytes())?;
                file.sync_all()?;
            }
            std::fs::rename(&tmp, &path)?;
            debug!(path = %path.display(), bytes = value.len(), "wrote store key");
            Ok(())
        }
    }
}
