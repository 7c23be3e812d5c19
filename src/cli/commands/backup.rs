use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde_string;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        BackupLogic::backup(&cfg.database, &expand_tilde_string(file), *compress, *force)?;
    }

    Ok(())
}
