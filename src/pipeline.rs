//! Run orchestration
//!
//! The whole run is a strictly ordered sequence: prepare, create,
//! plugins, front-end build, native build, collect. Any error aborts the
//! remainder; there is no retry or partial-completion recovery.
//! `--rebuild-only` starts directly at the front-end build.
//!
//! Progress is reported through `PipelineEvent` values handed to a
//! caller-supplied callback, so the binary decides between human output
//! and JSON event lines.

use crate::artifacts;
use crate::build;
use crate::config::RunConfig;
use crate::error::WrapResult;
use crate::plugins;
use crate::prompt::Prompter;
use crate::runner::CommandRunner;
use crate::scaffold;
use crate::workspace::{self, CleanOutcome};

/// Progress events emitted by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Workspace checked; display name resolved
    Prepared {
        display_name: String,
        cleaned: CleanOutcome,
    },
    /// Wrapper project scaffolded with its platform target
    Created { wrapper_dir: String },
    /// Plugins installed from the plugin file
    PluginsInstalled { count: usize },
    /// Front-end built and staged into the wrapper
    FrontendBuilt { staged_files: usize },
    /// Native build finished
    NativeBuilt,
    /// APK copied to the output directory
    Collected { apk: String, install_hint: String },
}

impl PipelineEvent {
    /// One JSON object per event, for `--json` mode.
    pub fn to_json(&self) -> String {
        let value = match self {
            PipelineEvent::Prepared {
                display_name,
                cleaned,
            } => serde_json::json!({
                "event": "prepared",
                "display_name": display_name,
                "cleaned": match cleaned {
                    CleanOutcome::NotRequested => "not_requested",
                    CleanOutcome::Deleted => "deleted",
                    CleanOutcome::NothingToDelete => "nothing_to_delete",
                },
            }),
            PipelineEvent::Created { wrapper_dir } => serde_json::json!({
                "event": "created",
                "wrapper_dir": wrapper_dir,
            }),
            PipelineEvent::PluginsInstalled { count } => serde_json::json!({
                "event": "plugins_installed",
                "count": count,
            }),
            PipelineEvent::FrontendBuilt { staged_files } => serde_json::json!({
                "event": "frontend_built",
                "staged_files": staged_files,
            }),
            PipelineEvent::NativeBuilt => serde_json::json!({ "event": "native_built" }),
            PipelineEvent::Collected { apk, install_hint } => serde_json::json!({
                "event": "collected",
                "apk": apk,
                "install_hint": install_hint,
            }),
        };
        value.to_string()
    }
}

/// Execute the full run.
pub fn run<F>(
    config: &RunConfig,
    runner: &dyn CommandRunner,
    prompter: &dyn Prompter,
    mut on_event: F,
) -> WrapResult<()>
where
    F: FnMut(&PipelineEvent),
{
    if !config.rebuild_only {
        let prepared = workspace::prepare(config, prompter)?;
        on_event(&PipelineEvent::Prepared {
            display_name: prepared.display_name.clone(),
            cleaned: prepared.clean,
        });

        scaffold::create_project(config, &prepared.display_name, runner)?;
        on_event(&PipelineEvent::Created {
            wrapper_dir: config.wrapper_dir.display().to_string(),
        });

        let ids = plugins::install_plugins(config, runner)?;
        on_event(&PipelineEvent::PluginsInstalled { count: ids.len() });
    }

    let staged_files = build::build_frontend(config, runner)?;
    on_event(&PipelineEvent::FrontendBuilt { staged_files });

    build::build_native(config, runner)?;
    on_event(&PipelineEvent::NativeBuilt);

    let collected = artifacts::collect(config)?;
    on_event(&PipelineEvent::Collected {
        apk: collected.display().to_string(),
        install_hint: artifacts::install_hint(&collected),
    });

    Ok(())
}
