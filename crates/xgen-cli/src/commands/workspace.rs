//! Implementation of the `xgen workspace` command.

use clap::ArgMatches;
use tracing::{debug, info, instrument};

use xgen_adapters::local_context;
use xgen_core::{
    application::{Generatable, Workspace},
    domain::path::{PROJECT_SUFFIX, has_suffix},
};

use crate::{
    cli::{WorkspaceArgs, WorkspaceEntry},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{BundleKind, GenerationSummary, OutputManager},
};

/// Execute the `xgen workspace` command.
///
/// `matches` are the subcommand's matches, used to keep references in
/// command-line order.
#[instrument(skip_all, fields(path = %args.path))]
pub fn execute(
    args: WorkspaceArgs,
    matches: Option<&ArgMatches>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let workspace = build_workspace(&args, matches, &config)?;

    workspace.generate(&local_context())?;
    info!(path = %workspace.path(), "Workspace written");

    output.report(&GenerationSummary {
        kind: BundleKind::Workspace,
        path: workspace.path().to_string(),
        references: workspace
            .references()
            .iter()
            .map(|r| r.path().to_string())
            .collect(),
    })?;
    Ok(())
}

pub fn build_workspace(
    args: &WorkspaceArgs,
    matches: Option<&ArgMatches>,
    config: &AppConfig,
) -> CliResult<Workspace> {
    let mut options = config.defaults.playground_options();
    if let Some(platform) = args.platform {
        options.platform = platform.into();
    }

    let mut workspace = Workspace::new(&args.path);
    for entry in args.entries(matches) {
        debug!(?entry, "adding reference");
        match entry {
            WorkspaceEntry::Reference(path) => workspace.add_reference(path),
            WorkspaceEntry::Project(path) => {
                if !has_suffix(&path, PROJECT_SUFFIX) {
                    return Err(CliError::InvalidInput {
                        message: format!("'{path}' does not point to an Xcode project"),
                        source: None,
                    });
                }
                workspace.add_project(path);
            }
            WorkspaceEntry::NewPlayground(name) => {
                let playground = workspace.add_new_playground(&name);
                *playground.borrow_mut().options_mut() = options.clone();
            }
            WorkspaceEntry::ExistingPlayground(path) => workspace.add_playground_at(path),
        }
    }

    Ok(workspace)
}
