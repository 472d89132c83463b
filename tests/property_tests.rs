//! Property-based tests for guard parsing and name reconciliation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use indexmap::IndexSet;
use proptest::prelude::*;
use statechart::chart::{DescriptionMap, Descriptions};
use statechart::guard::{parse_guard, tokenize, GuardExpr, TokenKind};

fn is_keyword(name: &str) -> bool {
    matches!(name, "and" | "or" | "not")
}

/// Wrap anything that is not a factor so it can sit under `not` or `and`.
fn as_factor(expr: GuardExpr) -> GuardExpr {
    match expr {
        GuardExpr::Condition(_) | GuardExpr::Not(_) | GuardExpr::Parenthesized(_) => expr,
        other => GuardExpr::parenthesized(other),
    }
}

/// Wrap disjunctions so they can sit directly under `or`.
fn as_term(expr: GuardExpr) -> GuardExpr {
    match expr {
        GuardExpr::Or(_) => GuardExpr::parenthesized(expr),
        other => other,
    }
}

prop_compose! {
    fn arbitrary_name()(name in "[a-z][a-z0-9]{0,5}".prop_filter("keywords are reserved", |n| !is_keyword(n))) -> String {
        name
    }
}

prop_compose! {
    fn keyword_prefixed_name()(
        keyword in prop_oneof![Just("and"), Just("or"), Just("not")],
        suffix in "[a-z0-9]{1,5}",
    ) -> String {
        format!("{keyword}{suffix}")
    }
}

/// Expressions shaped the way the parser produces them.
fn arbitrary_expr() -> impl Strategy<Value = GuardExpr> {
    let leaf = arbitrary_name().prop_map(GuardExpr::Condition);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| GuardExpr::not(as_factor(e))),
            inner.clone().prop_map(GuardExpr::parenthesized),
            prop::collection::vec(inner.clone(), 2..4)
                .prop_map(|v| GuardExpr::And(v.into_iter().map(as_factor).collect())),
            prop::collection::vec(inner, 2..4)
                .prop_map(|v| GuardExpr::Or(v.into_iter().map(as_term).collect())),
        ]
    })
}

fn collect_leaves(expr: &GuardExpr, out: &mut Vec<String>) {
    match expr {
        GuardExpr::Condition(name) => out.push(name.clone()),
        GuardExpr::Not(inner) | GuardExpr::Parenthesized(inner) => collect_leaves(inner, out),
        GuardExpr::And(operands) | GuardExpr::Or(operands) => {
            for operand in operands {
                collect_leaves(operand, out);
            }
        }
    }
}

proptest! {
    #[test]
    fn render_then_parse_is_identity(expr in arbitrary_expr()) {
        let rendered = expr.to_string();
        let parsed = parse_guard(&rendered).unwrap();
        prop_assert_eq!(&parsed, &expr);
        prop_assert_eq!(parsed.to_string(), rendered);
    }

    #[test]
    fn keyword_prefixed_identifiers_lex_as_names(name in keyword_prefixed_name()) {
        let tokens = tokenize(&name).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Name);
        prop_assert_eq!(tokens[0].text(), Some(name.as_str()));
        prop_assert_eq!(parse_guard(&name).unwrap(), GuardExpr::Condition(name.clone()));
    }

    #[test]
    fn lexing_always_ends_with_single_end(expr in arbitrary_expr()) {
        let tokens = tokenize(&expr.to_string()).unwrap();
        let ends = tokens.iter().filter(|t| t.kind() == TokenKind::End).count();
        prop_assert_eq!(ends, 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::End));
    }

    #[test]
    fn condition_names_are_first_occurrences_of_leaves(expr in arbitrary_expr()) {
        let mut leaves = Vec::new();
        collect_leaves(&expr, &mut leaves);
        let expected: IndexSet<String> = leaves.into_iter().collect();
        let names = expr.condition_names();
        prop_assert_eq!(names.len(), expected.len());
        prop_assert!(names.iter().eq(expected.iter()));
    }

    #[test]
    fn parsing_is_deterministic(expr in arbitrary_expr()) {
        let rendered = expr.to_string();
        prop_assert_eq!(parse_guard(&rendered).unwrap(), parse_guard(&rendered).unwrap());
    }

    #[test]
    fn descriptions_views_partition_declared_names(
        declared in prop::collection::vec(arbitrary_name(), 0..8),
        used in prop::collection::vec(arbitrary_name(), 0..8),
    ) {
        let declared: DescriptionMap = declared.into_iter().map(|n| (n, None)).collect();
        let used: IndexSet<String> = used.into_iter().collect();
        let descriptions = Descriptions::new(declared.clone(), used.clone());

        let all_used = descriptions.all_used();
        let all_unused = descriptions.all_unused();

        for name in declared.keys() {
            prop_assert!(all_used.contains_key(name) != all_unused.contains_key(name));
        }
        for name in &used {
            prop_assert!(all_used.contains_key(name));
        }
        prop_assert_eq!(all_used.len(), used.len());
        prop_assert_eq!(descriptions.all().len(), all_used.len() + all_unused.len());
    }
}
