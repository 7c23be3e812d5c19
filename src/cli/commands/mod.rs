//! One handler per subcommand. Each takes the parsed command and the
//! effective configuration.

pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod prompt;
pub mod summary;

use crate::config::Config;
use crate::core::store::RecordStore;
use crate::db::sqlite::SqliteBackend;

fn store_for(cfg: &Config) -> RecordStore<SqliteBackend> {
    RecordStore::new(SqliteBackend::new(cfg.database.clone()))
}

/// Create the records table if missing, for commands that read the database
/// through their own connection.
///
/// Schema creation failures are logged, not returned; the first real read
/// or write reports the problem to the user.
pub(crate) fn ensure_schema(cfg: &Config) {
    store_for(cfg).initialize();
}

/// Open the record store for the configured database and ensure its schema.
pub(crate) fn open_store(cfg: &Config) -> RecordStore<SqliteBackend> {
    let store = store_for(cfg);
    store.initialize();
    store
}
