//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used when the client runs natively
//! (desktop shells, tooling, tests). Each key is one file under the base
//! directory whose content is the raw value:
//!
//! ```text
//! <base_dir>/
//! ├── accessToken
//! └── user
//! ```
//!
//! [`FileStore::default_location`] resolves the platform data directory via
//! [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/petperfect/` |
//! | Linux | `~/.local/share/petperfect/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\petperfect\` |

use std::path::PathBuf;

use crate::session::{KeyValueStore, StorageError};

#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// `<data_dir>/petperfect`, or `./petperfect` when the platform has none.
    pub fn default_location() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("petperfect"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AuthSlice, Session};
    use crate::models::{AccountSnapshot, User};

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("petperfect"));

        assert!(store.get("accessToken").is_none());
        store.set("accessToken", "abc").unwrap();
        assert_eq!(store.get("accessToken").as_deref(), Some("abc"));

        store.remove("accessToken").unwrap();
        store.remove("accessToken").unwrap();
        assert!(store.get("accessToken").is_none());
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = AuthSlice::default();
        auth.login_fulfilled(
            Session {
                access_token: "tok".into(),
                account: AccountSnapshot {
                    user: User {
                        id: 3,
                        role_id: 3,
                        ..Default::default()
                    },
                    pet: None,
                },
            },
            &FileStore::new(dir.path().to_path_buf()),
        );

        // Re-open from same directory
        let reopened = AuthSlice::restore(&FileStore::new(dir.path().to_path_buf()));
        assert_eq!(reopened.session, auth.session);
    }
}
