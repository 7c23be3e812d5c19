use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::RecordStore;
use crate::db::log::{ensure_log_table, ttlog};
use crate::db::pool::DbPool;
use crate::db::sqlite::SqliteBackend;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database and the `work_records` table
///  - the internal log table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // `--db` was already resolved into `cfg.database`
    let custom_db = cli.db.as_ref().map(|_| cfg.database.clone());
    let db_path = Config::init_all(custom_db, cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rWorkTracker…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    // init must report a broken database instead of shrugging it off
    let store = RecordStore::new(SqliteBackend::new(db_path.clone()));
    store.try_initialize()?;

    let pool = DbPool::new(&db_path)?;
    ensure_log_table(&pool.conn)?;

    println!("✅ Database initialized at {}", &db_path);

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rWorkTracker initialization completed!");
    Ok(())
}
