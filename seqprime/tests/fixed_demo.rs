//! Integration tests that run the `seqprime` binary and check its output.

use std::process::Command;
use std::process::Output;

fn run_seqprime<'a>(args: impl IntoIterator<Item = &'a str>) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqprime"))
        .args(args)
        .output()
        .expect("failed to run the seqprime binary")
}

#[test]
fn bare_invocation_prints_ten_terms_and_the_verdict_for_29() {
    let output = run_seqprime([]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\ntrue\n"
    );
}

#[test]
fn zero_terms_prints_only_the_verdict() {
    let output = run_seqprime(["--num-terms", "0", "--candidate", "4"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "false\n");
}

#[test]
fn term_count_beyond_64_bits_does_not_wrap() {
    let output = run_seqprime(["--num-terms", "101", "--candidate", "2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 102);
    assert_eq!(lines[100], "354224848179261915075");
    assert_eq!(lines[101], "true");
}

#[test]
fn negative_candidate_is_not_prime() {
    let output = run_seqprime(["--num-terms", "0", "--candidate", "-5"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "false\n");
}

#[test]
fn negative_term_count_fails_with_exit_code_one() {
    let output = run_seqprime(["--num-terms", "-3"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("must be non-negative"),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
