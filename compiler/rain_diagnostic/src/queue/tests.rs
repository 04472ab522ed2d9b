use pretty_assertions::assert_eq;
use rain_ir::{Position, SourceId, Span};

use super::*;
use crate::ErrorCode;

fn err_at(line: u32, column: u32, msg: &str) -> Diagnostic {
    Diagnostic::error(
        ErrorCode::E0003,
        msg,
        Position::new(SourceId::ANONYMOUS, line, column),
        Span::new(0, 0),
    )
}

fn positions(diags: &[Diagnostic]) -> Vec<(u32, u32)> {
    diags.iter().map(|d| (d.pos.line, d.pos.column)).collect()
}

#[test]
fn default_config() {
    let config = DiagnosticConfig::default();
    assert_eq!(config.error_limit, 10);
    assert!(config.dedupe);
}

#[test]
fn flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(err_at(3, 1, "c"));
    queue.add(err_at(1, 4, "a"));
    queue.add(err_at(1, 2, "b"));

    let flushed = queue.flush();
    assert_eq!(positions(&flushed), vec![(1, 2), (1, 4), (3, 1)]);
    assert!(queue.is_empty());
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn same_position_keeps_insertion_order() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(err_at(2, 0, "first"));
    queue.add(err_at(1, 0, "early"));
    queue.add(err_at(2, 0, "second"));

    let messages: Vec<_> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["early", "first", "second"]);
}

#[test]
fn error_limit_drops_extra_errors() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited().with_error_limit(2));
    assert!(queue.add(err_at(1, 0, "a")));
    assert!(queue.add(err_at(1, 1, "b")));
    assert!(queue.limit_reached());
    assert!(!queue.add(err_at(1, 2, "c")));

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dropped(), 1);
}

#[test]
fn duplicates_do_not_count_toward_the_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default().with_error_limit(2));
    assert!(queue.add(err_at(1, 0, "a")));
    assert!(!queue.add(err_at(1, 0, "a")));
    assert!(queue.add(err_at(1, 1, "b")));
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.dropped(), 0);
}

#[test]
fn dedupe_drops_identical_reports() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(err_at(1, 0, "invalid digit")));
    assert!(!queue.add(err_at(1, 0, "invalid digit")));
    assert!(queue.add(err_at(1, 1, "invalid digit")));
    assert_eq!(queue.len(), 2);
}

#[test]
fn dedupe_off_keeps_everything() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let kept = queue.extend([err_at(1, 0, "x"), err_at(1, 0, "x")]);
    assert_eq!(kept, 2);
}
