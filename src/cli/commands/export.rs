use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_path;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        let store = open_store(cfg);

        let written = ExportLogic::export(&store, *format, &path, *force)?;

        if written > 0 {
            ttlog_path(
                &cfg.database,
                "export",
                &path.to_string_lossy(),
                &format!("Exported {} records as {}", written, format.as_str()),
            );
        }
    }

    Ok(())
}
