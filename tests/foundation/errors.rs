//! Integration tests for the error taxonomy.

use groundplan_foundation::{Error, ErrorKind, SearchLimit};

#[test]
fn parse_errors_carry_line_numbers() {
    let err = Error::parse("missing 'add:'", 7);
    match err.kind {
        ErrorKind::ParseError { ref message, line } => {
            assert_eq!(line, 7);
            assert!(message.contains("add"));
        }
        ref other => panic!("unexpected kind: {other}"),
    }
    assert!(format!("{err}").contains("line 7"));
}

#[test]
fn unknown_strategy_names_the_offender() {
    let err = Error::unknown_strategy("astar");
    assert!(format!("{err}").contains("astar"));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = io.into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn search_limits_display_their_bound() {
    assert_eq!(
        format!("{}", SearchLimit::MaxNodes { limit: 10_000 }),
        "max nodes (10000) exceeded"
    );
    assert_eq!(
        format!("{}", SearchLimit::MaxDepth { limit: 100 }),
        "max depth (100) exceeded"
    );
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::empty_rule_list());
}
