//! Cordwrap - Cordova shell build orchestrator
//!
//! Cordwrap wraps an existing web front-end project into an installable
//! mobile application: it scaffolds a Cordova wrapper project, installs
//! plugins, runs the front-end production build, stages the output into
//! the wrapper, triggers the native build, and collects the APK.

pub mod artifacts;
pub mod build;
pub mod config;
pub mod error;
pub mod fsops;
pub mod patch;
pub mod pipeline;
pub mod plugins;
pub mod prompt;
pub mod runner;
pub mod scaffold;
pub mod workspace;

// Re-exports for convenience
pub use config::{check_marker, RunConfig, DEFAULT_ORG};
pub use error::{WrapError, WrapResult};
pub use pipeline::{run, PipelineEvent};
pub use prompt::{Prompter, TerminalPrompter};
pub use runner::{CommandRunner, ProcessRunner};
