//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No generation logic lives here.

use std::path::PathBuf;

use clap::{ArgGroup, ArgMatches, Args, Parser, Subcommand, ValueEnum};
use xgen_core::domain::Platform;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "xgen",
    bin_name = "xgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Xcode playgrounds and workspaces",
    long_about = "xgen writes Xcode playground bundles and workspaces to disk: \
                  manifests, a starting Contents.swift (stub, inline code or \
                  an .xctemplate), auxiliary sources and nested workspaces.",
    after_help = "EXAMPLES:\n\
        \x20 xgen playground Scratch --platform macos\n\
        \x20 xgen playground Demo --template ~/Templates/Blank --source Helpers.swift\n\
        \x20 xgen workspace Dev --project App/App.xcodeproj --playground Sandbox\n\
        \x20 xgen completions zsh > ~/.zfunc/_xgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a playground bundle.
    #[command(
        visible_alias = "pg",
        about = "Generate a playground",
        after_help = "EXAMPLES:\n\
            \x20 xgen playground Scratch\n\
            \x20 xgen playground Scratch --platform tvos --code 'print(\"hi\")'\n\
            \x20 xgen playground Scratch --code-file main.swift --no-run-on-edit"
    )]
    Playground(PlaygroundArgs),

    /// Generate a workspace.
    #[command(
        visible_alias = "ws",
        about = "Generate a workspace",
        after_help = "EXAMPLES:\n\
            \x20 xgen workspace Dev --project App.xcodeproj --playground Sandbox\n\
            \x20 xgen workspace Dev --existing-playground Old.playground --reference README.md"
    )]
    Workspace(WorkspaceArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 xgen completions bash > ~/.local/share/bash-completion/completions/xgen\n\
            \x20 xgen completions fish > ~/.config/fish/completions/xgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the xgen configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 xgen config path\n\
            \x20 xgen config show\n\
            \x20 xgen config init --force"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Target platform as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    #[value(alias = "iphoneos")]
    Ios,
    #[value(aliases = ["macosx", "osx"])]
    Macos,
    #[value(alias = "appletvos")]
    Tvos,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Macos => Platform::MacOs,
            PlatformArg::Tvos => Platform::TvOs,
        }
    }
}

// ── playground ────────────────────────────────────────────────────────────────

/// Arguments for `xgen playground`.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("content").args(["code", "code_file", "template"])))]
pub struct PlaygroundArgs {
    /// Playground path; `.playground` is appended when missing.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Target platform (defaults to the configured platform).
    #[arg(short = 'p', long = "platform", value_enum, ignore_case = true)]
    pub platform: Option<PlatformArg>,

    /// Swift source for `Contents.swift`, written verbatim.
    #[arg(long = "code", value_name = "TEXT")]
    pub code: Option<String>,

    /// Read `Contents.swift` from this file.
    #[arg(long = "code-file", value_name = "FILE")]
    pub code_file: Option<PathBuf>,

    /// Seed the playground from an `.xctemplate` directory.
    #[arg(short = 't', long = "template", value_name = "DIR")]
    pub template: Option<String>,

    /// Auxiliary source copied into `Sources/` (repeatable).
    #[arg(short = 's', long = "source", value_name = "FILE")]
    pub sources: Vec<PathBuf>,

    /// Do not re-run the playground on every edit.
    #[arg(long = "no-run-on-edit")]
    pub no_run_on_edit: bool,

    /// Do not build the active scheme before running.
    #[arg(long = "no-build-active-scheme")]
    pub no_build_active_scheme: bool,
}

// ── workspace ─────────────────────────────────────────────────────────────────

/// Arguments for `xgen workspace`.
///
/// The four reference flags may be interleaved; the manifest lists them in
/// command-line order (see [`WorkspaceArgs::entries`]).
#[derive(Debug, Args)]
pub struct WorkspaceArgs {
    /// Workspace path; `.xcworkspace` is appended when missing.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Reference an existing file or folder.
    #[arg(short = 'r', long = "reference", value_name = "PATH")]
    pub references: Vec<String>,

    /// Reference an existing Xcode project (must end in `.xcodeproj`).
    #[arg(long = "project", value_name = "PATH")]
    pub projects: Vec<String>,

    /// Create a new playground with this name inside the workspace.
    #[arg(long = "playground", value_name = "NAME")]
    pub playgrounds: Vec<String>,

    /// Reference an existing playground without regenerating it.
    #[arg(long = "existing-playground", value_name = "PATH")]
    pub existing_playgrounds: Vec<String>,

    /// Platform for newly created playgrounds.
    #[arg(short = 'p', long = "platform", value_enum, ignore_case = true)]
    pub platform: Option<PlatformArg>,
}

/// One workspace reference, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEntry {
    Reference(String),
    Project(String),
    NewPlayground(String),
    ExistingPlayground(String),
}

impl WorkspaceArgs {
    /// All reference flags merged into command-line order.
    ///
    /// `matches` must be the `workspace` subcommand's matches. Without
    /// indices the flags are grouped by kind.
    pub fn entries(&self, matches: Option<&ArgMatches>) -> Vec<WorkspaceEntry> {
        let mut indexed: Vec<(usize, WorkspaceEntry)> = Vec::new();
        let mut collect = |id: &str, values: &[String], make: fn(String) -> WorkspaceEntry| {
            let indices: Vec<usize> = matches
                .and_then(|m| m.indices_of(id))
                .map(|i| i.collect())
                .unwrap_or_default();
            for (position, value) in values.iter().enumerate() {
                let index = indices.get(position).copied().unwrap_or(usize::MAX);
                indexed.push((index, make(value.clone())));
            }
        };

        collect("references", &self.references, WorkspaceEntry::Reference);
        collect("projects", &self.projects, WorkspaceEntry::Project);
        collect("playgrounds", &self.playgrounds, WorkspaceEntry::NewPlayground);
        collect(
            "existing_playgrounds",
            &self.existing_playgrounds,
            WorkspaceEntry::ExistingPlayground,
        );

        // Stable: entries without indices keep their grouped order.
        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, entry)| entry).collect()
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `xgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Subcommands of `xgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the configuration file location.
    Path,

    /// Print the effective configuration as TOML.
    Show,

    /// Write a configuration file with the built-in defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(long = "force")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
