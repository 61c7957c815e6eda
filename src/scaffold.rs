//! Wrapper project creation
//!
//! Drives the Cordova CLI to scaffold the wrapper project and its Android
//! platform target, then patches the manifest display name. Every command
//! runs in an explicit directory; the process cwd is never changed.

use crate::config::RunConfig;
use crate::error::WrapResult;
use crate::patch::set_widget_name;
use crate::runner::CommandRunner;

/// Platform target added to every wrapper project.
pub const PLATFORM: &str = "android";

/// Create the wrapper project and add the platform target.
pub fn create_project(
    config: &RunConfig,
    display_name: &str,
    runner: &dyn CommandRunner,
) -> WrapResult<()> {
    runner.run(
        "cordova",
        &[
            "create",
            &config.wrapper_dir_name,
            &config.package_id,
            &config.app_name,
        ],
        &config.parent_root,
    )?;

    runner.run("cordova", &["platform", "add", PLATFORM], &config.wrapper_dir)?;

    set_widget_name(&config.config_xml(), &config.app_name, display_name)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ORG;
    use crate::error::WrapError;
    use crate::runner::MockRunner;
    use std::fs;
    use tempfile::tempdir;

    fn config_with_manifest(dir: &std::path::Path) -> RunConfig {
        let config = RunConfig::derive("shop", DEFAULT_ORG, &dir.join("application")).unwrap();
        fs::create_dir_all(&config.wrapper_dir).unwrap();
        fs::write(
            config.config_xml(),
            r#"<widget id="com.crymbledev.shop"><name>shop</name></widget>"#,
        )
        .unwrap();
        config
    }

    #[test]
    fn create_project_command_sequence_and_dirs() {
        let dir = tempdir().unwrap();
        let config = config_with_manifest(dir.path());
        let runner = MockRunner::new();

        create_project(&config, "Shop App", &runner).unwrap();

        assert_eq!(
            runner.commands(),
            vec![
                "cordova create shop-cordova com.crymbledev.shop shop".to_string(),
                "cordova platform add android".to_string(),
            ]
        );
        let cwds = runner.cwds();
        assert_eq!(cwds[0], config.parent_root);
        assert_eq!(cwds[1], config.wrapper_dir);
    }

    #[test]
    fn create_project_patches_display_name() {
        let dir = tempdir().unwrap();
        let config = config_with_manifest(dir.path());

        create_project(&config, "Shop App", &MockRunner::new()).unwrap();

        let manifest = fs::read_to_string(config.config_xml()).unwrap();
        assert!(manifest.contains("<name>Shop App</name>"));
        assert!(!manifest.contains("<name>shop</name>"));
    }

    #[test]
    fn create_project_stops_on_failed_create() {
        let dir = tempdir().unwrap();
        let config = config_with_manifest(dir.path());
        let runner = MockRunner::failing_at(0);

        let err = create_project(&config, "Shop App", &runner).unwrap_err();
        assert!(matches!(err, WrapError::CommandFailed { .. }));
        assert_eq!(runner.commands().len(), 1);
    }
}
