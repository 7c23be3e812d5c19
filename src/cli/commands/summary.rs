use crate::cli::parser::Commands;
use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::error;
use crate::utils::colors::colorize_hours;
use crate::utils::formatting::{bold, summary_lines};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Summary) {
        let store = open_store(cfg);

        let (summary, count) = match store
            .try_aggregate()
            .and_then(|s| store.try_list_all().map(|r| (s, r.len())))
        {
            Ok(v) => v,
            Err(e) => {
                error("Error loading summary");
                return Err(e);
            }
        };

        println!("{}", bold("Summary"));
        let values = [summary.today, summary.month, summary.total];
        for (line, value) in summary_lines(&summary).iter().zip(values) {
            println!("  {}", colorize_hours(value, line));
        }
        println!("  Records:    {}", count);
    }
    Ok(())
}
