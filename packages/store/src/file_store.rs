//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop. Each key is a
//! single file directly under the base directory, holding the raw value:
//!
//! ```text
//! <base_dir>/
//! ├── users            # JSON array of user records
//! ├── visibleColumns   # JSON object of column flags
//! └── settings         # TOML application config
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/user-management/` |
//! | Linux | `~/.local/share/user-management/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\user-management\` |

use std::path::PathBuf;

use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.entry_path(key), value)?;
        Ok(())
    }
}
