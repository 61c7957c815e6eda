//! Run configuration
//!
//! All names and paths for one run are derived up front from the project
//! slug and the invocation directory, then treated as immutable. Phases
//! receive the config by reference; nothing mutates process-wide state
//! like the current working directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{WrapError, WrapResult};

/// Default reverse-domain prefix for the generated package id.
pub const DEFAULT_ORG: &str = "com.crymbledev";

/// Immutable configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// User-supplied project slug (`-p` in the original script)
    pub slug: String,
    /// Wrapper project directory name: `<slug>-cordova`
    pub wrapper_dir_name: String,
    /// Reverse-domain package id: `<org>.<slug>`
    pub package_id: String,
    /// Internal app name: lowercased slug
    pub app_name: String,
    /// Display name written into the wrapper's config.xml
    pub display_name: String,
    /// Front-end build output directory name under `dist/`
    pub dist_name: String,

    /// Front-end project root (invocation directory)
    pub project_root: PathBuf,
    /// Parent of the project root; siblings live here
    pub parent_root: PathBuf,
    /// Wrapper project directory: `<parent>/<slug>-cordova`
    pub wrapper_dir: PathBuf,
    /// Shared APK output directory: `<parent>/apks`
    pub output_dir: PathBuf,

    /// Optional plugin list file
    pub plugin_file: Option<PathBuf>,

    pub clean: bool,
    pub rename: bool,
    pub rebuild_only: bool,
    pub yes: bool,
    pub json: bool,
}

impl RunConfig {
    /// Derive a config from the slug and the project root directory.
    ///
    /// The front-end build tool writes its output to `dist/<name>` where
    /// `<name>` is the workspace directory name, i.e. the parent of the
    /// project root in the expected `<workspace>/application` layout.
    pub fn derive(slug: &str, org: &str, project_root: &Path) -> WrapResult<Self> {
        let parent_root = project_root
            .parent()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} has no parent directory", project_root.display()),
                )
            })?
            .to_path_buf();

        let dist_name = parent_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| slug.to_string());

        let wrapper_dir_name = format!("{slug}-cordova");
        let app_name = slug.to_lowercase();

        Ok(Self {
            wrapper_dir: parent_root.join(&wrapper_dir_name),
            output_dir: parent_root.join("apks"),
            package_id: format!("{org}.{slug}"),
            display_name: app_name.clone(),
            slug: slug.to_string(),
            wrapper_dir_name,
            app_name,
            dist_name,
            project_root: project_root.to_path_buf(),
            parent_root,
            plugin_file: None,
            clean: false,
            rename: false,
            rebuild_only: false,
            yes: false,
            json: false,
        })
    }

    /// Path to the wrapper project's manifest.
    pub fn config_xml(&self) -> PathBuf {
        self.wrapper_dir.join("config.xml")
    }

    /// Path to the wrapper's web-asset directory.
    pub fn www_dir(&self) -> PathBuf {
        self.wrapper_dir.join("www")
    }

    /// Path the front-end build writes its output to.
    pub fn dist_dir(&self) -> PathBuf {
        self.project_root.join("dist").join(&self.dist_name)
    }

    /// Path of the debug APK produced by `cordova build`.
    pub fn debug_apk(&self) -> PathBuf {
        self.wrapper_dir
            .join("platforms/android/app/build/outputs/apk/debug/app-debug.apk")
    }
}

/// Check for the project-root marker file.
///
/// The run must start inside the front-end project; `package.json` is the
/// marker. Nothing else is validated - the front-end build tool owns the
/// rest of the layout.
pub fn check_marker(project_root: &Path) -> WrapResult<()> {
    if project_root.join("package.json").exists() {
        Ok(())
    } else {
        Err(WrapError::MarkerNotFound {
            root: project_root.to_path_buf(),
        })
    }
}
