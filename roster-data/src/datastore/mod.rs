mod data_store;
mod memory;

pub use data_store::DataStore;
pub use memory::MemoryDataStore;
