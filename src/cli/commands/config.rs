use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let issues = cfg.check();
            if issues.is_empty() {
                success("Configuration is valid");
            } else {
                for issue in &issues {
                    warning(issue);
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.clone());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    if run_editor(&editor_to_use, path) {
        success(format!(
            "Configuration file edited successfully using '{}'",
            editor_to_use
        ));
        return;
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
    } else {
        error(format!(
            "Failed to edit configuration file using fallback '{}'",
            default_editor
        ));
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
