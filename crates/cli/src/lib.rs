mod check;
mod exclusions;
mod options;
mod view;

use clap::{Parser, Subcommand, ValueEnum};
use docscope_core::{MissingCheckOptions, Result as CoreResult};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "docscope",
    version,
    about = "Flags symbols that lack documentation comments",
    long_about = "Docscope audits a symbol tree produced by a type-aware analyzer and reports every \
                  symbol inside the selected visibility scope whose documentation comment is \
                  missing or empty."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Report lines through the logger only
    #[default]
    Text,
    /// Also print the report as JSON on stdout
    Json,
    /// Also print a table of violations on stdout
    Table,
}

/// Option overrides shared by the subcommands that read configuration.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// JSON options file (e.g. typedoc.json); unrelated keys are ignored
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Visibility level to validate
    #[arg(long, value_parser = ["public", "protected", "private"])]
    pub level: Option<String>,

    /// Expand each violation with the full record
    #[arg(long)]
    pub verbose: bool,

    /// Disable the check entirely
    #[arg(long)]
    pub disabled: bool,

    /// Extra kind chain to skip, e.g. "Module::Variable" (repeatable)
    #[arg(long, value_name = "KIND_CHAIN")]
    pub ignore: Vec<String>,
}

impl OptionArgs {
    /// Options from the config file (or defaults), with flags layered on top.
    pub fn resolve(&self) -> CoreResult<MissingCheckOptions> {
        let mut options = match &self.config {
            Some(path) => MissingCheckOptions::from_file(path)?,
            None => MissingCheckOptions::default(),
        };
        if let Some(level) = &self.level {
            options.level = level.clone();
        }
        options.verbose |= self.verbose;
        options.disabled |= self.disabled;
        options.ignore.extend(self.ignore.iter().cloned());
        Ok(options)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a symbol tree for missing documentation
    #[command(
        long_about = "Loads a reflection JSON dump, audits it and reports each violation. \
                            Exits with status 1 when any violation was found."
    )]
    Check {
        /// Path to the reflection JSON dump
        #[arg(value_name = "TREE_JSON")]
        tree: PathBuf,

        #[command(flatten)]
        options: OptionArgs,

        /// Additional output on stdout
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write logs to daily rolling files in this directory
        #[arg(long, value_name = "DIR")]
        log_dir: Option<PathBuf>,
    },
    /// Show the active exclusion table
    Exclusions {
        #[command(flatten)]
        options: OptionArgs,

        /// Print the JSON schema of the check report instead
        #[arg(long)]
        schema: bool,
    },
    /// List the recognized options and their defaults
    Options,
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_dir = match &cli.command {
        Commands::Check { log_dir, .. } => log_dir.clone(),
        _ => None,
    };
    let _guard = docscope_core::logging::init_logging("check", log_dir.as_deref());

    match cli.command {
        Commands::Check {
            tree,
            options,
            format,
            ..
        } => check::run(tree, options, format),
        Commands::Exclusions { options, schema } => exclusions::run(options, schema),
        Commands::Options => options::run(),
    }
}
