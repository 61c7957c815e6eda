//! Front-end and native builds
//!
//! Runs the Angular production build, stages its output into the
//! wrapper's `www/` directory, injects the bridge script into the built
//! entry page, and triggers the Cordova build.

use crate::config::RunConfig;
use crate::error::WrapResult;
use crate::fsops::copy_tree;
use crate::patch::inject_bridge_script;
use crate::runner::CommandRunner;

/// Build the front-end and stage the output into the wrapper.
///
/// Returns the number of staged files.
pub fn build_frontend(config: &RunConfig, runner: &dyn CommandRunner) -> WrapResult<usize> {
    runner.run(
        "ng",
        &[
            "build",
            "--configuration=production",
            "--aot",
            "--base-href",
            "./",
        ],
        &config.project_root,
    )?;

    let staged = copy_tree(&config.dist_dir(), &config.www_dir())?;

    inject_bridge_script(&config.www_dir().join("index.html"))?;

    Ok(staged)
}

/// Run the native build inside the wrapper project.
pub fn build_native(config: &RunConfig, runner: &dyn CommandRunner) -> WrapResult<()> {
    runner.run("cordova", &["build"], &config.wrapper_dir)
}
