//! Interactive prompts
//!
//! Confirmation and text input are behind the `Prompter` trait so the
//! orchestration logic stays testable without a real terminal. The live
//! implementation uses `dialoguer`.

use is_terminal::IsTerminal;

use crate::error::{WrapError, WrapResult};

/// Source of interactive answers.
pub trait Prompter {
    /// Yes/no question, defaulting to no.
    fn confirm(&self, prompt: &str) -> WrapResult<bool>;

    /// Free-text question with a default answer.
    fn input(&self, prompt: &str, default: &str) -> WrapResult<String>;
}

/// Prompter backed by dialoguer on the controlling terminal.
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Whether interactive prompting is possible at all.
    pub fn available() -> bool {
        std::io::stdin().is_terminal()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> WrapResult<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| WrapError::Io(std::io::Error::other(e)))
    }

    fn input(&self, prompt: &str, default: &str) -> WrapResult<String> {
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| WrapError::Io(std::io::Error::other(e)))
    }
}

/// Scripted prompter for tests: answers in order from fixed lists.
#[cfg(test)]
pub struct ScriptedPrompter {
    confirms: std::sync::Mutex<std::collections::VecDeque<bool>>,
    inputs: std::sync::Mutex<std::collections::VecDeque<String>>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(confirms: Vec<bool>, inputs: Vec<&str>) -> Self {
        Self {
            confirms: std::sync::Mutex::new(confirms.into()),
            inputs: std::sync::Mutex::new(inputs.into_iter().map(String::from).collect()),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn confirm(&self, _prompt: &str) -> WrapResult<bool> {
        Ok(self
            .confirms
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected confirm prompt"))
    }

    fn input(&self, _prompt: &str, default: &str) -> WrapResult<String> {
        Ok(self
            .inputs
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| default.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_prompter_pops_in_order() {
        let prompter = ScriptedPrompter::new(vec![true, false], vec!["Foo App"]);
        assert!(prompter.confirm("delete?").unwrap());
        assert!(!prompter.confirm("delete?").unwrap());
        assert_eq!(prompter.input("name", "x").unwrap(), "Foo App");
        // Falls back to the default once answers run out
        assert_eq!(prompter.input("name", "fallback").unwrap(), "fallback");
    }
}
