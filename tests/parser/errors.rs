//! Parse errors carry line numbers and name the defect.

use groundplan_foundation::ErrorKind;
use groundplan_parser::{parse_file, parse_str};

fn parse_error(source: &str) -> (String, usize) {
    let err = parse_str(source).unwrap_err();
    match err.kind {
        ErrorKind::ParseError { message, line } => (message, line),
        other => panic!("expected a parse error, got: {other}"),
    }
}

#[test]
fn missing_start_is_rejected() {
    let (message, _) = parse_error(
        "\
finish: b
****
action: step
preconds:
add: b
delete:
",
    );
    assert!(message.contains("start"));
}

#[test]
fn missing_finish_is_rejected() {
    let (message, _) = parse_error(
        "\
start: a
****
action: step
preconds: a
add: b
delete:
",
    );
    assert!(message.contains("finish"));
}

#[test]
fn incomplete_action_block_cites_its_opening_line() {
    let (message, line) = parse_error(
        "\
start: a
finish: b
****
action: broken
preconds: a
add: b
",
    );
    assert!(message.contains("delete"));
    assert_eq!(line, 3);
}

#[test]
fn garbage_outside_a_block_cites_its_own_line() {
    let (message, line) = parse_error("start: a\nnonsense without a colon\n");
    assert!(message.contains("nonsense"));
    assert_eq!(line, 2);
}

#[test]
fn unknown_sections_are_rejected_in_and_out_of_blocks() {
    let (_, line) = parse_error("weight: 9\n");
    assert_eq!(line, 1);

    let (_, line) = parse_error(
        "\
start: a
finish: b
****
action: step
cost: 4
",
    );
    assert_eq!(line, 5);
}

#[test]
fn duplicate_sections_in_a_block_are_rejected() {
    let (message, _) = parse_error(
        "\
start: a
finish: b
****
action: step
preconds: a
preconds: a
add: b
delete:
",
    );
    assert!(message.contains("duplicate"));
}

#[test]
fn bad_priority_values_are_rejected() {
    let (message, _) = parse_error(
        "\
start: a
finish: b
****
action: step
preconds: a
add: b
delete:
priority: heavy
",
    );
    assert!(message.contains("priority"));

    let (message, _) = parse_error(
        "\
start: a
finish: b
****
action: step
preconds: a
add: b
delete:
priority: 0
",
    );
    assert!(message.contains(">= 1"));
}

#[test]
fn file_without_actions_fails_validation() {
    let err = parse_str("start: a\nfinish: b\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyRuleList));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = parse_file("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
