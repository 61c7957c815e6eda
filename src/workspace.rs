//! Workspace preparation
//!
//! Confirms the run starts inside the front-end project, optionally
//! deletes a previous wrapper project (with confirmation), and resolves
//! the display name.

use std::fs;

use crate::config::{check_marker, RunConfig};
use crate::error::{WrapError, WrapResult};
use crate::prompt::Prompter;

/// What happened to a pre-existing wrapper directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// `--clean` was not requested
    NotRequested,
    /// Previous wrapper project deleted
    Deleted,
    /// `--clean` requested but no wrapper directory existed
    NothingToDelete,
}

/// Result of workspace preparation.
#[derive(Debug)]
pub struct Prepared {
    pub display_name: String,
    pub clean: CleanOutcome,
}

/// Run the preparation phase.
///
/// Declining the clean confirmation aborts the whole run; with `--yes`
/// the confirmation is skipped.
pub fn prepare(config: &RunConfig, prompter: &dyn Prompter) -> WrapResult<Prepared> {
    check_marker(&config.project_root)?;

    let clean = if config.clean {
        let confirmed = config.yes
            || prompter.confirm(&format!(
                "Are you sure you want to delete cordova project {}?",
                config.wrapper_dir_name
            ))?;
        if !confirmed {
            return Err(WrapError::Aborted);
        }

        if config.wrapper_dir.exists() {
            fs::remove_dir_all(&config.wrapper_dir)?;
            CleanOutcome::Deleted
        } else {
            CleanOutcome::NothingToDelete
        }
    } else {
        CleanOutcome::NotRequested
    };

    let display_name = if config.rename {
        prompter.input("Enter display name for app", &config.display_name)?
    } else {
        config.display_name.clone()
    };

    Ok(Prepared {
        display_name,
        clean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ORG;
    use crate::prompt::ScriptedPrompter;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path) -> RunConfig {
        let root = dir.join("application");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("package.json"), "{}").unwrap();
        RunConfig::derive("shop", DEFAULT_ORG, &root).unwrap()
    }

    #[test]
    fn prepare_fails_without_marker() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("application");
        fs::create_dir_all(&root).unwrap();
        let config = RunConfig::derive("shop", DEFAULT_ORG, &root).unwrap();

        let err = prepare(&config, &ScriptedPrompter::new(vec![], vec![])).unwrap_err();
        assert!(matches!(err, WrapError::MarkerNotFound { .. }));
    }

    #[test]
    fn prepare_default_display_name() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let prepared = prepare(&config, &ScriptedPrompter::new(vec![], vec![])).unwrap();
        assert_eq!(prepared.display_name, "shop");
        assert_eq!(prepared.clean, CleanOutcome::NotRequested);
    }

    #[test]
    fn prepare_rename_uses_prompted_name() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.rename = true;

        let prompter = ScriptedPrompter::new(vec![], vec!["Shop App"]);
        let prepared = prepare(&config, &prompter).unwrap();
        assert_eq!(prepared.display_name, "Shop App");
    }

    #[test]
    fn prepare_clean_declined_aborts_without_deleting() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.clean = true;
        fs::create_dir_all(&config.wrapper_dir).unwrap();

        let prompter = ScriptedPrompter::new(vec![false], vec![]);
        let err = prepare(&config, &prompter).unwrap_err();

        assert!(matches!(err, WrapError::Aborted));
        assert!(config.wrapper_dir.exists());
    }

    #[test]
    fn prepare_clean_confirmed_deletes_wrapper() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.clean = true;
        fs::create_dir_all(config.wrapper_dir.join("www")).unwrap();

        let prompter = ScriptedPrompter::new(vec![true], vec![]);
        let prepared = prepare(&config, &prompter).unwrap();

        assert_eq!(prepared.clean, CleanOutcome::Deleted);
        assert!(!config.wrapper_dir.exists());
    }

    #[test]
    fn prepare_clean_yes_skips_confirmation() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.clean = true;
        config.yes = true;

        // No scripted confirms: prompting would panic
        let prompter = ScriptedPrompter::new(vec![], vec![]);
        let prepared = prepare(&config, &prompter).unwrap();
        assert_eq!(prepared.clean, CleanOutcome::NothingToDelete);
    }
}
