use std::process::Command;

/// Runs the built binary and checks the full observable contract:
/// stdout is exactly the greeting plus one newline, stderr is empty,
/// and the exit code is zero.
#[test]
fn prints_exact_greeting() {
    let bin = env!("CARGO_BIN_EXE_greetr");

    let output = Command::new(bin)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn greetr");

    assert!(output.status.success(), "greetr exited with {}", output.status);
    assert_eq!(
        output.stdout,
        b"hello, world\n",
        "unexpected stdout: {:?}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(
        output.stderr.is_empty(),
        "expected empty stderr, got: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Repeated runs produce byte-identical output.
#[test]
fn output_is_deterministic() {
    let bin = env!("CARGO_BIN_EXE_greetr");

    let first = Command::new(bin)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn greetr");
    let second = Command::new(bin)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn greetr");

    assert_eq!(first.stdout, second.stdout, "stdout varied between runs");
}
