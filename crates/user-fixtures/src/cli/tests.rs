//! Unit tests for the fixture CLI helpers.

use rstest::rstest;

use super::*;
use crate::error::GenerationError;
use crate::record::GeneratedId;

fn parse(args: &[&str]) -> Options {
    let argv = std::iter::once("user-fixtures").chain(args.iter().copied());
    parse_args(argv).expect("parse args")
}

fn parse_err(args: &[&str]) -> clap::Error {
    let argv = std::iter::once("user-fixtures").chain(args.iter().copied());
    parse_args(argv).expect_err("expected parse failure")
}

#[test]
fn defaults_mirror_library_rules() {
    let options = parse(&[]);

    assert_eq!(options.count, DEFAULT_COUNT);
    assert_eq!(options.seed, None);
    assert_eq!(options.rules(), UserRules::default());
}

#[test]
fn rule_flags_map_onto_user_rules() {
    let options = parse(&[
        "--id-length",
        "7",
        "--numeric-ids",
        "--symbols",
        "--allowed-symbols",
        "_,-",
        "--no-numbers",
        "--min-length",
        "4",
        "--max-length",
        "12",
        "--domains",
        "gmail,example",
        "--small-icon",
        "s.png",
    ]);

    let rules = options.rules();

    assert_eq!(
        rules.id_rules,
        IdRules {
            length: 7,
            parse_string: false,
        }
    );
    assert_eq!(
        rules.username_rules,
        UsernameRules {
            symbols: true,
            allowed_symbols: Some(vec!["_".to_owned(), "-".to_owned()]),
            numbers: false,
            minimum_length: 4,
            maximum_length: 12,
        }
    );
    assert_eq!(rules.email_rules.domains, vec!["gmail", "example"]);
    assert_eq!(rules.profile_images.small, "s.png");
    assert_eq!(rules.profile_images.medium, "");
}

#[test]
fn demo_flag_uses_demo_rules_with_icons() {
    let options = parse(&["--demo", "--large-icon", "l.png"]);

    let rules = options.rules();

    assert_eq!(rules.username_rules, UserRules::demo().username_rules);
    assert_eq!(rules.profile_images.large, "l.png");
}

#[rstest]
#[case("--symbols")]
#[case("--no-numbers")]
#[case("--numeric-ids")]
fn demo_flag_conflicts_with_rule_flags(#[case] flag: &str) {
    let err = parse_err(&["--demo", flag]);

    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    assert!(err.to_string().contains(flag), "{err}");
}

#[rstest]
#[case(&["--demo", "--min-length", "4"])]
#[case(&["--demo", "--domains", "aol"])]
#[case(&["--demo", "--id-length", "5"])]
fn demo_flag_conflicts_with_rule_values(#[case] args: &[&str]) {
    let err = parse_err(args);

    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn demo_flag_ignores_defaulted_rule_values() {
    let options = parse(&["--demo", "--count", "2"]);

    assert!(options.demo);
    assert_eq!(options.min_length, DEFAULT_MINIMUM_LENGTH);
    assert_eq!(options.rules().username_rules.maximum_length, 12);
}

#[test]
fn allowed_symbols_require_symbols_flag() {
    assert!(parse_args(["user-fixtures", "--allowed-symbols", "_"]).is_err());
}

#[test]
fn invalid_numbers_are_rejected() {
    assert!(parse_args(["user-fixtures", "--count", "many"]).is_err());
}

#[test]
fn empty_domain_labels_are_rejected() {
    let err = parse_err(&["--domains", ""]);

    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn output_flag_is_not_accepted() {
    let err = parse_err(&["--output", "users.json"]);

    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn execute_renders_requested_count() {
    let options = parse(&["--count", "4", "--seed", "2026"]);

    let json = execute(&options).expect("execute");
    let users: Vec<UserRecord> = serde_json::from_str(&json).expect("valid JSON");

    assert_eq!(users.len(), 4);
}

#[test]
fn execute_is_reproducible_with_a_seed() {
    let options = parse(&["--seed", "99", "--compact"]);

    let first = execute(&options).expect("first run");
    let second = execute(&options).expect("second run");

    assert_eq!(first, second);
}

#[test]
fn numeric_ids_render_as_json_numbers() {
    let options = parse(&["--seed", "5", "--numeric-ids", "--count", "2"]);

    let json = execute(&options).expect("execute");
    let users: Vec<UserRecord> = serde_json::from_str(&json).expect("valid JSON");

    assert!(users.iter().all(|u| matches!(u.id, GeneratedId::Numeric(_))));
}

#[test]
fn execute_reports_invalid_rules() {
    let options = parse(&["--min-length", "9", "--max-length", "3"]);

    let err = execute(&options).expect_err("expected error");

    assert_eq!(
        err,
        CliError::Generation {
            source: GenerationError::InvalidLengthBounds {
                minimum: 9,
                maximum: 3,
            },
        }
    );
}

#[test]
fn compact_rendering_is_single_line() {
    let users = vec![UserRecord {
        id: GeneratedId::Text("1234567".to_owned()),
        username: "LushElle042".to_owned(),
        email: "lushtan@gmail.com".to_owned(),
        profile_icon: ProfileIcon::default(),
    }];

    let compact = render_json(&users, true).expect("render");
    let pretty = render_json(&users, false).expect("render");

    assert!(!compact.contains('\n'));
    assert!(pretty.contains('\n'));
    assert!(compact.contains(r#""profileIcon":{"small":"","medium":"","large":""}"#));
}
