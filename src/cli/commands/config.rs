use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        if *edit_config {
            edit_with(editor.clone());
        }
    }

    Ok(())
}

/// Spawn the requested editor on the config file, falling back to the
/// platform default when it is unavailable.
fn edit_with(requested: Option<String>) {
    let path = Config::config_file();

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let chosen = requested.unwrap_or_else(|| default_editor.clone());

    for editor in [&chosen, &default_editor] {
        match Command::new(editor).arg(&path).status() {
            Ok(s) if s.success() => {
                messages::success(format!("Configuration file edited using '{}'", editor));
                return;
            }
            Ok(_) | Err(_) if editor != &default_editor => {
                messages::warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor, default_editor
                ));
            }
            Ok(_) | Err(_) => {
                messages::error(format!(
                    "Failed to edit configuration file using '{}'",
                    editor
                ));
                return;
            }
        }
    }
}
