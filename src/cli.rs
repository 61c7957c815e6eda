use std::path::PathBuf;

use clap::Parser;

use cordwrap::config::DEFAULT_ORG;
use cordwrap::{RunConfig, WrapResult};

/// Cordwrap - build a Cordova mobile shell around a web front-end
#[derive(Parser, Debug)]
#[command(name = "cordwrap")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run inside the front-end project directory (must contain package.json).")]
pub struct Cli {
    /// Project slug; names the wrapper directory, package id and app
    pub project: String,

    /// Delete any existing wrapper project first (asks for confirmation)
    #[arg(long)]
    pub clean: bool,

    /// Prompt for a custom display name
    #[arg(long)]
    pub rename: bool,

    /// Rebuild an existing wrapper project (skips create and plugins)
    #[arg(long)]
    pub rebuild_only: bool,

    /// Plugin list file, one Cordova plugin id per line
    #[arg(short = 'f', long = "plugin-file")]
    pub plugin_file: Option<PathBuf>,

    /// Reverse-domain prefix for the package id
    #[arg(long, default_value = DEFAULT_ORG)]
    pub org: String,

    /// Skip interactive confirmations (for scripted use)
    #[arg(short, long)]
    pub yes: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Derive the immutable run configuration from the parsed arguments
    /// and the invocation directory.
    pub fn into_config(self, project_root: &std::path::Path) -> WrapResult<RunConfig> {
        let mut config = RunConfig::derive(&self.project, &self.org, project_root)?;
        config.plugin_file = self.plugin_file;
        config.clean = self.clean;
        config.rename = self.rename;
        config.rebuild_only = self.rebuild_only;
        config.yes = self.yes;
        config.json = self.json;
        Ok(config)
    }
}
