//! Cordwrap CLI - Cordova shell build orchestrator
//!
//! Usage: cordwrap <PROJECT> [--clean] [--rename] [--rebuild-only]
//!                 [-f <PLUGIN_FILE>] [--org <PREFIX>] [--json]
//!
//! Runs inside the front-end project directory and drives the Cordova
//! and Angular CLIs to produce an installable APK in `../apks`.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cordwrap::workspace::CleanOutcome;
use cordwrap::{PipelineEvent, ProcessRunner, TerminalPrompter, WrapError};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = try_main(cli) {
        if json {
            println!(
                "{}",
                serde_json::json!({ "event": "error", "message": err.to_string() })
            );
        } else {
            eprintln!("✗ {err}");
        }
        let code = err
            .downcast_ref::<WrapError>()
            .map_or(1, WrapError::exit_code);
        std::process::exit(code);
    }
}

fn try_main(cli: Cli) -> Result<()> {
    let project_root =
        std::env::current_dir().context("cannot determine current working directory")?;

    let json = cli.json;
    let verbose = cli.verbose > 0;
    let config = cli.into_config(&project_root)?;

    // Interactive phases need a terminal unless --yes covers them.
    if !config.rebuild_only {
        let needs_terminal = (config.clean && !config.yes) || config.rename;
        if needs_terminal && !TerminalPrompter::available() {
            let action = if config.clean && !config.yes {
                "clean"
            } else {
                "rename"
            };
            return Err(WrapError::NotInteractive {
                action: action.to_string(),
            }
            .into());
        }
    }

    if !json {
        println!("📦 Cordwrap");
        println!("Project: {}", config.slug);
        println!("Wrapper: {}", config.wrapper_dir.display());
        if config.rebuild_only {
            println!("Mode: Rebuild only");
        }
        println!();
    }

    let runner = ProcessRunner::new(json, verbose);

    cordwrap::pipeline::run(&config, &runner, &TerminalPrompter, |event| {
        if json {
            println!("{}", event.to_json());
        } else {
            render_event(event);
        }
    })?;

    if !json {
        println!();
        println!("🟢 Done.");
    }

    Ok(())
}

fn render_event(event: &PipelineEvent) {
    match event {
        PipelineEvent::Prepared {
            display_name,
            cleaned,
        } => {
            match cleaned {
                CleanOutcome::Deleted => println!("🧹 Removed previous wrapper project"),
                CleanOutcome::NothingToDelete => {
                    println!("Project does not already exist. Continuing...")
                }
                CleanOutcome::NotRequested => {}
            }
            println!("✓ Workspace ready (display name: {display_name})");
        }
        PipelineEvent::Created { wrapper_dir } => {
            println!("✓ Created wrapper project: {wrapper_dir}");
        }
        PipelineEvent::PluginsInstalled { count } => {
            if *count > 0 {
                println!("✓ Installed {count} plugins");
            }
        }
        PipelineEvent::FrontendBuilt { staged_files } => {
            println!("✓ Front-end built: staged {staged_files} files");
        }
        PipelineEvent::NativeBuilt => {
            println!("✓ Native build complete");
        }
        PipelineEvent::Collected { apk, install_hint } => {
            println!("📱 APK ready: {apk}");
            println!("To install, connect a device and run:");
            println!("  {install_hint}");
        }
    }
}
