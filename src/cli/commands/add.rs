use crate::cli::parser::Commands;
use crate::cli::commands::open_store;
use crate::config::Config;
use crate::db::log::ttlog_path;
use crate::errors::{AppError, AppResult};
use crate::models::timestamp::{format_for_db, now_local, parse_user_timestamp};
use crate::ui::messages::success;
use crate::utils::hours_label;

/// Validate and record a number of hours.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { hours, at } = cmd {
        //
        // 1. Validate input before touching storage
        //
        let hours = cfg.policy()?.parse_and_check(hours)?;

        //
        // 2. Resolve timestamp (default = now)
        //
        let ts = match at {
            Some(s) => {
                parse_user_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?
            }
            None => now_local(),
        };

        //
        // 3. Write
        //
        let store = open_store(cfg);
        let id = store.try_insert(ts, hours)?;

        let msg = format!("Recorded {} at {}", hours_label(hours), format_for_db(&ts));
        success(&msg);

        ttlog_path(&cfg.database, "add", &format!("record {}", id), &msg);
    }

    Ok(())
}
