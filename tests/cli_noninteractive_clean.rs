//! `--clean` needs a confirmation; without a terminal it must fail fast
//! instead of hanging on a prompt, unless `--yes` covers it.

use std::process::Command;

#[test]
fn test_clean_without_terminal_fails_and_suggests_yes() {
    let bin = env!("CARGO_BIN_EXE_cordwrap");
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("package.json"), "{}").unwrap();

    let output = Command::new(bin)
        .args(["shop", "--clean"])
        .current_dir(dir.path())
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--yes"),
        "expected hint about --yes, got:\n{}",
        stderr
    );
}
