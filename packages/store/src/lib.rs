pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod storage;
pub mod validation;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{AppConfig, IdStrategy};
pub use directory::UserDirectory;
pub use error::{DirectoryError, StoreError, ValidationError};
pub use models::{Column, ColumnVisibility, User, UserDraft, UserField, UserId};
pub use storage::KeyValueStore;
