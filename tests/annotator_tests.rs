// tests/annotator_tests.rs

use codefield_lang::annotate::{TokenVariant, annotate};
use codefield_lang::ast::TokenKind;
use codefield_lang::lexer::tokenize;

fn symbols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Identifier Validity
// ============================================================================

#[test]
fn test_identifier_validity_is_exact_membership() {
    let tokens = tokenize("sum + total");
    let annotated = annotate(&tokens, &symbols(&["sum"]));

    assert!(annotated[0].valid);
    assert!(!annotated[4].valid);
}

#[test]
fn test_membership_is_case_sensitive() {
    let tokens = tokenize("Sum");
    let annotated = annotate(&tokens, &symbols(&["sum"]));
    assert!(!annotated[0].valid);
}

// ============================================================================
// Hints
// ============================================================================

#[test]
fn test_hints_are_strict_prefix_completions() {
    let tokens = tokenize("su");
    let annotated = annotate(&tokens, &symbols(&["sum", "sub", "add", "su"]));

    // "su" itself is excluded: only strictly longer completions count
    assert_eq!(annotated[0].hints, vec!["sum", "sub"]);
    // ...and exact membership still makes the token valid
    assert!(annotated[0].valid);
}

#[test]
fn test_hints_keep_supplied_order() {
    let tokens = tokenize("s");
    let annotated = annotate(&tokens, &symbols(&["sub", "sum", "set"]));
    assert_eq!(annotated[0].hints, vec!["sub", "sum", "set"]);
}

#[test]
fn test_hints_are_case_sensitive() {
    let tokens = tokenize("su");
    let annotated = annotate(&tokens, &symbols(&["Sum", "sub"]));
    assert_eq!(annotated[0].hints, vec!["sub"]);
}

#[test]
fn test_non_identifiers_get_no_hints() {
    let tokens = tokenize("1 + \"s\"");
    let annotated = annotate(&tokens, &symbols(&["sum"]));
    for t in &annotated {
        assert!(t.hints.is_empty(), "Unexpected hints on {:?}", t.token.kind);
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_number_validity_counts_dots() {
    let test_cases = vec![
        ("1", true),
        ("1.2", true),
        ("1.", true),
        (".5", true),
        ("1.2.3", false),
        ("..", false),
    ];

    for (input, expected) in test_cases {
        let tokens = tokenize(input);
        let annotated = annotate(&tokens, &[]);
        assert_eq!(annotated[0].valid, expected, "Failed for input: {}", input);
    }
}

// ============================================================================
// Other Kinds
// ============================================================================

#[test]
fn test_unknown_tokens_are_invalid() {
    let tokens = tokenize("$");
    let annotated = annotate(&tokens, &[]);
    assert!(!annotated[0].valid);
    assert!(annotated[0].hints.is_empty());
}

#[test]
fn test_operators_are_unconditionally_valid() {
    // Even a merged run that no evaluator would accept passes here;
    // strict operator validation is the caller's responsibility
    let tokens = tokenize("1 +-+ 2");
    let annotated = annotate(&tokens, &[]);
    let op = annotated
        .iter()
        .find(|t| t.token.kind == TokenKind::Operator)
        .unwrap();
    assert!(op.valid);
}

#[test]
fn test_structural_tokens_are_valid() {
    let tokens = tokenize("( ) [ ] , \"s\" true");
    let annotated = annotate(&tokens, &[]);
    for t in &annotated {
        assert!(t.valid, "Expected valid for {:?}", t.token.kind);
    }
}

// ============================================================================
// Call Variant
// ============================================================================

#[test]
fn test_identifier_before_paren_is_call_position() {
    let tokens = tokenize("sum(1)");
    let annotated = annotate(&tokens, &symbols(&["sum"]));
    assert_eq!(annotated[0].variant, Some(TokenVariant::CallExpression));
}

#[test]
fn test_call_variant_skips_whitespace() {
    let tokens = tokenize("sum  (1)");
    let annotated = annotate(&tokens, &symbols(&["sum"]));
    assert_eq!(annotated[0].variant, Some(TokenVariant::CallExpression));
}

#[test]
fn test_no_call_variant_without_paren() {
    let tokens = tokenize("sum + 1");
    let annotated = annotate(&tokens, &symbols(&["sum"]));
    assert_eq!(annotated[0].variant, None);

    let tokens = tokenize("sum");
    let annotated = annotate(&tokens, &symbols(&["sum"]));
    assert_eq!(annotated[0].variant, None);
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_annotation_is_idempotent() {
    let tokens = tokenize("su + 1.2.3 * $");
    let syms = symbols(&["sum", "sub"]);

    let first = annotate(&tokens, &syms);
    let second = annotate(&tokens, &syms);
    assert_eq!(first, second);
}

#[test]
fn test_whitespace_passes_through_valid() {
    let tokens = tokenize("  ");
    let annotated = annotate(&tokens, &[]);
    assert!(annotated[0].valid);
    assert_eq!(annotated[0].token.kind, TokenKind::Whitespace);
}
