//! Text patching
//!
//! The wrapper manifest (config.xml) and built index.html are edited by
//! literal substring substitution, never by parsing the underlying
//! format. A missing target substring is a silent no-op.

use std::fs;
use std::path::Path;

use crate::error::WrapResult;

/// Script tag loaded by the built page so web content can reach the
/// native bridge at runtime.
pub const BRIDGE_SCRIPT_TAG: &str =
    r#"<script type="text/javascript" src="cordova.js"></script>"#;

const HEAD_CLOSE: &str = "</head>";

/// Replace every literal occurrence of `old` with `new`.
pub fn replace_literal(content: &str, old: &str, new: &str) -> String {
    content.replace(old, new)
}

/// Rewrite `path` with every occurrence of `old` replaced by `new`.
///
/// No-op (the file is rewritten unchanged) when `old` does not occur.
pub fn replace_in_file(path: &Path, old: &str, new: &str) -> WrapResult<()> {
    let content = fs::read_to_string(path)?;
    fs::write(path, replace_literal(&content, old, new))?;
    Ok(())
}

/// Rewrite the `<name>` element of a wrapper manifest from the generated
/// app name to the chosen display name.
pub fn set_widget_name(config_xml: &Path, app_name: &str, display_name: &str) -> WrapResult<()> {
    let old = format!("<name>{app_name}</name>");
    let new = format!("<name>{display_name}</name>");
    replace_in_file(config_xml, &old, &new)
}

/// Insert the bridge script tag immediately before `</head>`.
///
/// Skips files that already carry the tag so rebuilds never inject it
/// twice.
pub fn inject_bridge_script(index_html: &Path) -> WrapResult<()> {
    let content = fs::read_to_string(index_html)?;
    if content.contains(BRIDGE_SCRIPT_TAG) {
        return Ok(());
    }
    let patched = replace_literal(
        &content,
        HEAD_CLOSE,
        &format!("{BRIDGE_SCRIPT_TAG}\n{HEAD_CLOSE}"),
    );
    fs::write(index_html, patched)?;
    Ok(())
}
