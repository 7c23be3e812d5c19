pub mod record;
pub mod summary;
pub mod timestamp;

pub use record::WorkRecord;
pub use summary::Summary;
pub use timestamp::Timestamp;
