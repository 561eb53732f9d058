//! Integration tests for rule application and problem construction.

use groundplan_foundation::{ErrorKind, Problem, ProblemBuilder};
use proptest::prelude::*;

const NONE: [&str; 0] = [];

// =============================================================================
// Rule Application
// =============================================================================

#[test]
fn apply_deletes_then_adds() {
    let problem = Problem::builder()
        .initial(["monkey-on-floor", "chair-at-door"])
        .goal(["chair-at-centre"])
        .rule(
            "push-chair",
            ["chair-at-door", "monkey-on-floor"],
            ["chair-at-centre"],
            ["chair-at-door"],
        )
        .build()
        .unwrap();

    let rule = &problem.rules()[0];
    assert!(rule.is_applicable(problem.initial()));

    let next = rule.apply(problem.initial());
    let interner = problem.interner();
    assert!(next.contains(interner.get("chair-at-centre").unwrap()));
    assert!(!next.contains(interner.get("chair-at-door").unwrap()));
    assert!(next.contains(interner.get("monkey-on-floor").unwrap()));
}

#[test]
fn fact_in_both_adds_and_deletes_ends_up_present() {
    // Delete-then-add ordering: the add wins.
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["a"])
        .rule("churn", ["a"], ["a"], ["a"])
        .build()
        .unwrap();

    let next = problem.rules()[0].apply(problem.initial());
    assert!(next.contains(problem.interner().get("a").unwrap()));
}

#[test]
fn rule_with_unmet_preconditions_is_not_applicable() {
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["c"])
        .rule("needs-b", ["a", "b"], ["c"], NONE)
        .build()
        .unwrap();

    assert!(!problem.rules()[0].is_applicable(problem.initial()));
}

#[test]
fn empty_preconditions_always_apply() {
    let problem = Problem::builder()
        .initial(NONE)
        .goal(["c"])
        .rule("spontaneous", NONE, ["c"], NONE)
        .build()
        .unwrap();

    assert!(problem.rules()[0].is_applicable(problem.initial()));
}

// =============================================================================
// Problem Construction
// =============================================================================

#[test]
fn goal_satisfaction_is_subset_containment() {
    let problem = Problem::builder()
        .initial(["a", "b", "c"])
        .goal(["a", "c"])
        .rule("noop", ["a"], NONE, NONE)
        .build()
        .unwrap();

    assert!(problem.is_goal(problem.initial()));
}

#[test]
fn rule_order_is_preserved() {
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["z"])
        .rule("first", ["a"], ["b"], NONE)
        .rule("second", ["b"], ["z"], NONE)
        .build()
        .unwrap();

    let names: Vec<_> = problem.rules().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn structural_defects_are_construction_errors() {
    let err = Problem::builder().initial(["a"]).goal(["b"]).build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyRuleList));

    let err = Problem::builder()
        .initial(["a"])
        .goal(["b"])
        .rule("", ["a"], ["b"], NONE)
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnnamedRule { .. }));

    let err = Problem::builder()
        .initial(["a"])
        .goal(["b"])
        .rule_with_priority("weightless", ["a"], ["b"], NONE, 0)
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidPriority { .. }));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0u32..16).prop_map(|n| format!("f{n}")), 0..8)
}

proptest! {
    #[test]
    fn apply_never_mutates_its_input(
        initial in arb_tokens(),
        adds in arb_tokens(),
        deletes in arb_tokens(),
    ) {
        let problem = Problem::builder()
            .initial(initial)
            .goal(["f0"])
            .rule("mutate", NONE, adds, deletes)
            .build()
            .unwrap();

        let before = problem.initial().clone();
        let _ = problem.rules()[0].apply(problem.initial());
        prop_assert_eq!(problem.initial(), &before);
    }

    #[test]
    fn apply_is_idempotent_when_effects_are_settled(
        initial in arb_tokens(),
        adds in arb_tokens(),
        deletes in arb_tokens(),
    ) {
        let problem = Problem::builder()
            .initial(initial)
            .goal(["f0"])
            .rule("settle", NONE, adds, deletes)
            .build()
            .unwrap();

        // After one application the adds are present and the deletes
        // absent (minus add/delete overlap), so a second application
        // changes nothing.
        let rule = &problem.rules()[0];
        let once = rule.apply(problem.initial());
        let twice = rule.apply(&once);
        prop_assert_eq!(once, twice);
    }
}
