use std::process::Command;

#[test]
fn test_help_mentions_project_root_requirement() {
    let bin = env!("CARGO_BIN_EXE_cordwrap");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("must contain package.json"),
        "help output should mention the package.json precondition; got:\n{}",
        stdout
    );
    assert!(stdout.contains("--rebuild-only"));
    assert!(stdout.contains("--plugin-file"));
}
