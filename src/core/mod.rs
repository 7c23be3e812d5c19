pub mod backup;
pub mod config;
pub mod console;
pub mod log;
pub mod policy;
pub mod store;
