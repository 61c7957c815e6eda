//! Plugin installation
//!
//! Reads a plugin list file (one Cordova plugin id per line) and installs
//! each into the wrapper project. Blank lines and `#` comments are
//! skipped.

use std::fs;
use std::path::Path;

use crate::config::RunConfig;
use crate::error::{WrapError, WrapResult};
use crate::runner::CommandRunner;

/// Parse plugin ids out of the list file content.
///
/// Each surviving line, trimmed of surrounding whitespace, is a full
/// plugin id as the scaffold tool expects it (e.g.
/// `cordova-plugin-camera`).
pub fn parse_plugin_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Read the plugin list file.
pub fn read_plugin_list(path: &Path) -> WrapResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| WrapError::PluginFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_plugin_lines(&content))
}

/// Install every listed plugin into the wrapper project.
///
/// No-op when no plugin file was supplied. Returns the installed ids.
pub fn install_plugins(config: &RunConfig, runner: &dyn CommandRunner) -> WrapResult<Vec<String>> {
    let Some(path) = &config.plugin_file else {
        return Ok(Vec::new());
    };

    let ids = read_plugin_list(path)?;
    for id in &ids {
        runner.run("cordova", &["plugin", "add", id], &config.wrapper_dir)?;
    }
    Ok(ids)
}
