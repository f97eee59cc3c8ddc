// Persistence for family tree documents
// This crate provides the storage boundary: one document, loaded and replaced whole

mod file;
mod memory;
mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::TreeStore;
