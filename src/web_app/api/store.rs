// web_app/api/store.rs - Process-global product collection
//
// The remote variant has no storage engine; the "backend" is a single
// in-process collection initialized once at startup. A Mutex is enough:
// every critical section is short and synchronous, no guard is ever held
// across an await point.

use crate::web_app::store::{ProductStore, StoreError};
use std::sync::{Mutex, OnceLock};

static STORE: OnceLock<Mutex<ProductStore>> = OnceLock::new();
static TEST_STORE_OVERRIDE: Mutex<Option<ProductStore>> = Mutex::new(None);

/// Initialize the global store. Later calls are ignored with a warning.
pub fn init_store(store: ProductStore) {
    tracing::info!("Initializing global product store ({} products)", store.len());
    if STORE.set(Mutex::new(store)).is_err() {
        tracing::warn!("Product store already initialized");
    }
}

/// Replace the collection seen by server functions for the current test.
pub fn set_test_store(store: ProductStore) {
    let mut guard = TEST_STORE_OVERRIDE.lock().unwrap();
    *guard = Some(store);
}

/// Run an operation against the global collection.
///
/// Goes through the test override when one is set, otherwise through the
/// store installed by `init_store` (installing an empty one on first use
/// if the binary never seeded it).
pub fn with_store<T>(op: impl FnOnce(&mut ProductStore) -> T) -> T {
    {
        let mut guard = TEST_STORE_OVERRIDE.lock().unwrap();
        if let Some(ref mut store) = *guard {
            return op(store);
        }
    }

    let store = STORE.get_or_init(|| {
        tracing::warn!("Product store used before initialization, starting empty");
        Mutex::new(ProductStore::new())
    });
    op(&mut store.lock().unwrap())
}

/// Convenience wrapper for fallible operations.
pub fn try_with_store<T>(
    op: impl FnOnce(&mut ProductStore) -> Result<T, StoreError>,
) -> Result<T, StoreError> {
    with_store(op)
}
