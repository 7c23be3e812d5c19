use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// YAML rendering of the effective configuration.
    pub fn render(cfg: &Config) -> AppResult<String> {
        serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", Self::render(cfg)?);
        Ok(())
    }

    /// Platform default editor: `$EDITOR`, `$VISUAL`, then notepad/nano.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in the requested editor, falling back to the default one.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }

        if editor_to_use == default_editor {
            return Err(AppError::Config(format!(
                "failed to run editor '{}'",
                editor_to_use
            )));
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        ));

        if run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "failed to edit configuration file using fallback '{}'",
                default_editor
            )))
        }
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contains_every_key() {
        let yaml = ConfigLogic::render(&Config::default()).unwrap();
        for key in ["database", "min_hours", "max_hours", "separator_char", "date_format"] {
            assert!(yaml.contains(key), "missing {key}");
        }
    }
}
