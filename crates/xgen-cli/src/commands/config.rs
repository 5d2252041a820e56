//! `xgen config` - inspect and initialise the configuration file.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` flag, if given.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::resolve_path(config_file.as_ref());

    match cmd {
        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }

        ConfigCommands::Show => {
            output.print(&render(&config)?)?;
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::InvalidInput {
                    message: format!(
                        "{} already exists; pass --force to overwrite it",
                        path.display()
                    ),
                    source: None,
                });
            }
            if path.exists() {
                output.info(&format!("Overwriting {}", path.display()))?;
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_cli_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, render(&AppConfig::default())?)
                .with_cli_context(|| format!("Failed to write {}", path.display()))?;
            output.success(&format!("Wrote {}", path.display()))?;
        }
    }

    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}
