//! End-to-end tests for the `user-fixtures` binary.
//!
//! Environment fallbacks can only be exercised safely in a child process, so
//! these tests run the built binary with a controlled environment.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::process::{Command, Output};

use rstest::rstest;
use user_fixtures::{UserRecord, UserRules};

fn run_binary(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_user-fixtures"));
    command.args(args).env_remove("RUST_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("run user-fixtures")
}

fn parse_users(output: &Output) -> Vec<UserRecord> {
    serde_json::from_slice(&output.stdout).expect("stdout holds a JSON array")
}

#[rstest]
#[case(&[("USER_FIXTURES_MIN_LENGTH", "4")])]
#[case(&[("USER_FIXTURES_DOMAINS", "aol")])]
#[case(&[("USER_FIXTURES_ID_LENGTH", "3"), ("USER_FIXTURES_MAX_LENGTH", "30")])]
fn demo_ignores_rule_values_from_environment(#[case] env: &[(&str, &str)]) {
    let output = run_binary(&["--demo", "--seed", "1", "--compact"], env);

    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let demo = UserRules::demo();
    let users = parse_users(&output);
    assert_eq!(users.len(), 3);
    for user in users {
        assert_eq!(user.id.to_string().len(), 7);
        let length = user.username.chars().count();
        assert!((4..=12).contains(&length), "{}", user.username);
        assert!(
            demo.email_rules
                .domains
                .iter()
                .any(|domain| user.email.ends_with(&format!("@{domain}.com"))),
            "{}",
            user.email
        );
    }
}

#[test]
fn environment_rule_values_apply_without_demo() {
    let output = run_binary(
        &["--seed", "1", "--compact"],
        &[("USER_FIXTURES_DOMAINS", "aol"), ("USER_FIXTURES_COUNT", "2")],
    );

    assert!(output.status.success());
    let users = parse_users(&output);
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|user| user.email.ends_with("@aol.com")));
}

#[test]
fn demo_with_command_line_rule_value_fails() {
    let output = run_binary(&["--demo", "--min-length", "4"], &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--min-length"), "{stderr}");
}

#[test]
fn empty_domain_label_fails() {
    let output = run_binary(&["--domains", ""], &[]);

    assert!(!output.status.success());
}

#[test]
fn icon_urls_fall_back_to_environment() {
    let output = run_binary(
        &["--demo", "--seed", "4", "--count", "1"],
        &[
            ("USER_FIXTURES_SMALL_ICON", "s.png"),
            ("USER_FIXTURES_LARGE_ICON", "l.png"),
        ],
    );

    assert!(output.status.success());
    let users = parse_users(&output);
    let user = users.first().expect("one user");
    assert_eq!(user.profile_icon.small, "s.png");
    assert_eq!(user.profile_icon.medium, "");
    assert_eq!(user.profile_icon.large, "l.png");
}
