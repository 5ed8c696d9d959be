use std::process::Command;

#[test]
fn help_lists_logging_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_reverse-brainrot"))
        .arg("--help")
        .output()
        .expect("failed to invoke reverse-brainrot --help");

    assert!(output.status.success(), "--help should exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--verbose"));
}
