pub mod backend;
pub mod initialize;
pub mod log;
pub mod memory;
pub mod pool;
pub mod sqlite;
pub mod stats;

pub use backend::RecordBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
