use crate::cli::parser::Commands;
use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info};
use crate::utils::formatting::records_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let store = open_store(cfg);

        let records = match store.try_list_all() {
            Ok(r) => r,
            Err(e) => {
                error("Error loading records");
                return Err(e);
            }
        };

        if records.is_empty() {
            info("No records found.");
            return Ok(());
        }

        println!("📅 Work records ({}):\n", records.len());
        print!(
            "{}",
            records_table(&records, &cfg.date_format, cfg.separator())
        );
    }
    Ok(())
}
