//! Platform-specific plumbing shared by every entry point.
//!
//! [`make_store`] returns the [`store::KeyValueStore`] for the current target:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): one file per key via [`store::FileStore`]
//! - **WASM without `web`**: an in-memory [`store::MemoryStore`]
//!
//! [`sleep`] is the timer future behind the simulated save/delete delay and
//! notification auto-dismissal.

use std::time::Duration;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Directory name used under the platform data dir.
#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "user-management";

/// Create the platform-appropriate store.
pub fn make_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        tracing::debug!(path = %base.display(), "using file store");
        store::FileStore::new(base)
    }
}

/// Wait for `duration` without blocking the UI thread.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
