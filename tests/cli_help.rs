use std::process::Command;

#[test]
fn test_help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_gxr"))
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("build"), "help output:\n{}", stdout);
    assert!(stdout.contains("watch"), "help output:\n{}", stdout);
}

#[test]
fn test_help_subcommand_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_gxr"))
        .arg("help")
        .output()
        .unwrap();

    assert!(output.status.success());
}

#[test]
fn test_bare_invocation_prints_help_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_gxr")).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("build"), "help output:\n{}", text);
    assert!(text.contains("watch"), "help output:\n{}", text);
}

#[test]
fn test_unknown_command_exits_one() {
    let output = Command::new(env!("CARGO_BIN_EXE_gxr"))
        .arg("deploy")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_version_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_gxr"))
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}
