use crate::cli::parser::Commands;
use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::console::ConsoleSession;
use crate::db::log::ttlog_path;
use crate::errors::AppResult;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Prompt) {
        let policy = cfg.policy()?;
        let store = open_store(cfg);

        let stdin = io::stdin();
        let outcome = ConsoleSession::new(&store, policy, stdin.lock(), io::stdout())
            .with_table_style(&cfg.date_format, cfg.separator())
            .run()?;

        if outcome.recorded > 0 {
            ttlog_path(
                &cfg.database,
                "prompt",
                "",
                &format!("Recorded {} entries interactively", outcome.recorded),
            );
        }
    }
    Ok(())
}
