use std::path::PathBuf;

use once_cell::sync::Lazy;
use roster_local_data::LocalDataStore;

static LOCAL_DATA_STORE: Lazy<LocalDataStore> = Lazy::new(|| {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("roster-local-data")
        .join("data");
    match LocalDataStore::new(root) {
        Ok(data) => data,
        Err(err) => panic!("failed to load bundled data: {err:#}"),
    }
});

/// The bundled data set, loaded once per test binary.
pub fn static_local_data_store() -> &'static LocalDataStore {
    &LOCAL_DATA_STORE
}
