use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                info(format!(
                    "No configuration file at {}, writing defaults first.",
                    path.display()
                ));
                if let Some(dir) = path.parent() {
                    std::fs::create_dir_all(dir)?;
                }
                cfg.save_to(&path)?;
            }
            ConfigLogic::edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}
