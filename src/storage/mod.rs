//! Persistence for the task collection.
//!
//! The whole collection lives in one storage slot as a JSON array. A load
//! of absent or malformed data yields an empty collection; it is never
//! fatal. A save replaces the slot contents.
//!
//! Backends:
//! - [`JsonFileStorage`]: a file on disk, replaced atomically on save
//! - [`MemoryStorage`]: an in-memory slot for tests and embedding

pub mod codec;
mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use traits::TaskStorage;
