//! Artifact collection
//!
//! Moves the debug APK produced by the native build into the shared
//! output directory and builds the device-install hint for the user.

use std::path::PathBuf;

use crate::config::RunConfig;
use crate::error::WrapResult;
use crate::fsops::collect_file;

/// Copy the debug APK into the output directory.
///
/// Returns the collected path. A missing APK is a `MissingArtifact`
/// error rather than a failed copy subprocess.
pub fn collect(config: &RunConfig) -> WrapResult<PathBuf> {
    let apk = config.debug_apk();
    collect_file(&apk, &config.output_dir)?;
    Ok(config
        .output_dir
        .join(apk.file_name().expect("debug apk path ends in a file name")))
}

/// Command the user runs next to install the APK on a connected device.
pub fn install_hint(collected: &std::path::Path) -> String {
    format!("adb install -r {}", collected.display())
}
