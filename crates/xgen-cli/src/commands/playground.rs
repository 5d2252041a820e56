//! Implementation of the `xgen playground` command.
//!
//! Responsibility: translate CLI arguments into a `Playground`, generate it
//! on the local filesystem, and report the result.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use xgen_adapters::local_context;
use xgen_core::application::{Generatable, Playground, PlaygroundOptions, Source};

use crate::{
    cli::PlaygroundArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::{BundleKind, GenerationSummary, OutputManager},
};

/// Execute the `xgen playground` command.
#[instrument(skip_all, fields(path = %args.path))]
pub fn execute(args: PlaygroundArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = build_options(&args, &config)?;
    let playground = Playground::with_options(&args.path, options);

    debug!(
        platform = %playground.options().platform,
        sources = playground.options().auxiliary_files.len(),
        "Playground configured"
    );

    playground.generate(&local_context())?;
    info!(path = %playground.path(), "Playground written");

    output.report(&GenerationSummary {
        kind: BundleKind::Playground,
        path: playground.path().to_string(),
        references: Vec::new(),
    })?;
    Ok(())
}

/// Config defaults first, then flags.
pub fn build_options(args: &PlaygroundArgs, config: &AppConfig) -> CliResult<PlaygroundOptions> {
    let mut options = config.defaults.playground_options();

    if let Some(platform) = args.platform {
        options.platform = platform.into();
    }
    if args.no_run_on_edit {
        options.run_on_edit = false;
    }
    if args.no_build_active_scheme {
        options.build_active_scheme = false;
    }

    options.source = if let Some(code) = &args.code {
        Source::Code(code.clone())
    } else if let Some(file) = &args.code_file {
        let code = std::fs::read_to_string(file)
            .with_cli_context(|| format!("Failed to read {}", file.display()))?;
        Source::Code(code)
    } else if let Some(template) = &args.template {
        Source::Template(template.clone())
    } else {
        Source::Default
    };

    options.auxiliary_files = existing_files(&args.sources)?;
    Ok(options)
}

fn existing_files(files: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    files
        .iter()
        .map(|file| {
            if file.is_file() {
                Ok(file.clone())
            } else {
                Err(CliError::FileNotFound { path: file.clone() })
            }
        })
        .collect()
}
