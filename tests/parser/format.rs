//! Happy-path parsing of the problem-file format.

use groundplan_parser::{parse_file, parse_str};
use std::path::PathBuf;

fn problems_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("problems")
}

#[test]
fn parses_the_shipped_monkeys_problem() {
    let problem = parse_file(problems_dir().join("monkeys.txt")).unwrap();

    assert_eq!(problem.initial().len(), 4);
    assert_eq!(problem.goal().len(), 1);
    assert_eq!(problem.rules().len(), 5);

    let names: Vec<_> = problem.rules().iter().map(|r| r.name()).collect();
    assert_eq!(
        names,
        vec![
            "push-chair",
            "climb-chair",
            "drop-ball",
            "grasp-bananas",
            "eat-bananas"
        ]
    );

    // Explicit priorities survive; unspecified ones default to 1.
    assert_eq!(problem.rules()[0].priority(), 1);
    assert_eq!(problem.rules()[3].priority(), 3);
    assert_eq!(problem.rules()[4].priority(), 3);
}

#[test]
fn sections_may_be_empty() {
    let problem = parse_str(
        "\
start: a
finish: b
****
action: pure-add
preconds:
add: b
delete:
",
    )
    .unwrap();

    let rule = &problem.rules()[0];
    assert!(rule.preconditions().is_empty());
    assert!(rule.deletes().is_empty());
    assert_eq!(rule.adds().len(), 1);
}

#[test]
fn whitespace_and_blank_lines_are_tolerated() {
    let problem = parse_str(
        "

start:   a ,  b

finish: c

****
action:   spaced out
preconds: a, , b,
add: c
delete:
",
    )
    .unwrap();

    assert_eq!(problem.initial().len(), 2);
    assert_eq!(problem.rules()[0].name(), "spaced out");
    assert_eq!(problem.rules()[0].preconditions().len(), 2);
}

#[test]
fn crlf_line_endings_parse() {
    let source = "start: a\r\nfinish: b\r\n****\r\naction: step\r\npreconds: a\r\nadd: b\r\ndelete:\r\n";
    let problem = parse_str(source).unwrap();
    assert_eq!(problem.rules()[0].name(), "step");
}

#[test]
fn repeated_facts_collapse_into_the_set() {
    let problem = parse_str(
        "\
start: a, a, a
finish: b
****
action: step
preconds: a
add: b
delete:
",
    )
    .unwrap();

    assert_eq!(problem.initial().len(), 1);
}
