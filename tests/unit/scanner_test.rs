//! Scanner semantics: rule behavior, ordering, and verdict scenarios

use entlint::models::Severity;
use entlint::scanner::EntityValidator;

fn validator() -> EntityValidator {
    EntityValidator::new().expect("built-in rules compile")
}

#[test]
fn test_unterminated_entity_is_flagged() {
    let issues = validator().scan_line(1, "<p>Caf&eacute Paris</p>");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line, 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(
        issues[0].description,
        "Unterminated entity reference (missing semicolon)"
    );
    assert_eq!(issues[0].matched_text, "&eacute");
}

#[test]
fn test_terminated_entity_is_not_flagged() {
    let issues = validator().scan_line(1, "<p>Caf&eacute; Paris</p>");
    assert!(issues.is_empty());
}

#[test]
fn test_amp_without_semicolon_is_unterminated() {
    let issues = validator().scan_line(1, "Tom &amp Jerry");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[0].matched_text, "&amp");
}

#[test]
fn test_amp_with_semicolon_is_double_escaped_only() {
    // `&amp;` is a terminated run, so the unterminated rule never fires;
    // the double-escaped rule always does.
    let issues = validator().scan_line(1, "Fish &amp; Chips");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].description, "Double-escaped entity");
    assert_eq!(issues[0].matched_text, "&amp;");
}

#[test]
fn test_each_double_escape_reported_separately() {
    let issues =
        validator().scan_line(1, "<a href=\"https://example.com\">Link &amp; More &amp;</a>");

    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    assert!(issues.iter().all(|i| i.matched_text == "&amp;"));
}

#[test]
fn test_mixed_line_reports_in_rule_order() {
    let issues = validator().scan_line(1, "<p>Caf&eacute Paris &amp; Co</p>");

    assert_eq!(issues.len(), 2);
    // Unterminated-entity findings come before double-escaped findings on
    // the same line.
    assert_eq!(issues[0].severity, Severity::Error);
    assert_eq!(issues[0].matched_text, "&eacute");
    assert_eq!(issues[1].severity, Severity::Warning);
    assert_eq!(issues[1].matched_text, "&amp;");
}

#[test]
fn test_multiple_matches_of_one_rule_keep_line_order() {
    let issues = validator().scan_line(1, "&foo and &bar");

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].matched_text, "&foo");
    assert_eq!(issues[1].matched_text, "&bar");
}

#[test]
fn test_url_with_gate_marker_is_flagged() {
    let issues = validator()
        .scan_line(1, "Visit https://example.com/rawtracksqodeinteractivecomlanding/page");

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Fix);
    assert_eq!(issues[0].description, "Malformed URL parameter - missing protocol");
    assert_eq!(
        issues[0].matched_text,
        "https://example.com/rawtracksqodeinteractivecomlanding/page"
    );
}

#[test]
fn test_url_without_gate_marker_is_clean() {
    let issues = validator().scan_line(1, "Visit https://example.com/landing/page");
    assert!(issues.is_empty());
}

#[test]
fn test_gate_marker_without_url_is_clean() {
    let issues = validator().scan_line(1, "see rawtracksqodeinteractivecomlanding page");
    assert!(issues.is_empty());
}

#[test]
fn test_each_url_match_on_a_gated_line_is_flagged() {
    let issues = validator()
        .scan_line(1, "https://a.com rawtracksqodeinteractivecomlanding https://b.com");

    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.severity == Severity::Fix));
}

#[test]
fn test_scan_numbers_lines_from_one() {
    let issues = validator().scan("ok line\n&foo\n&amp; here");

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].line, 2);
    assert_eq!(issues[0].matched_text, "&foo");
    assert_eq!(issues[1].line, 3);
    assert_eq!(issues[1].matched_text, "&amp;");
}

#[test]
fn test_empty_document_is_clean() {
    assert!(validator().scan("").is_empty());
}

#[test]
fn test_scan_is_idempotent() {
    let content = "<p>Caf&eacute Paris &amp; Co</p>\nhttps://example.com/rawtracksqodeinteractivecomlanding\n";
    let v = validator();

    assert_eq!(v.scan(content), v.scan(content));
}

#[test]
fn test_trailing_carriage_return_does_not_terminate_entity() {
    // CRLF input: split('\n') leaves the `\r` on the line.
    let issues = validator().scan("&foo\r\n&bar\r\n");

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].line, 1);
    assert_eq!(issues[1].line, 2);
}
