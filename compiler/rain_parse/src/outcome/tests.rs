use pretty_assertions::assert_eq;
use rain_ir::TokenKind;

use super::{Furthest, ParseOutcome};
use crate::ExpectedKinds;

#[test]
fn ok_tags_progress() {
    assert!(matches!(ParseOutcome::ok(1, true), ParseOutcome::ConsumedOk { value: 1 }));
    assert!(matches!(ParseOutcome::ok(1, false), ParseOutcome::EmptyOk { value: 1 }));
    assert!(ParseOutcome::ok(1, false).is_ok());
}

#[test]
fn map_preserves_variant() {
    let mapped = ParseOutcome::empty_ok(2).map(|v| v * 10);
    assert!(matches!(mapped, ParseOutcome::EmptyOk { value: 20 }));

    let err: ParseOutcome<i32> =
        ParseOutcome::empty_err(ExpectedKinds::single(TokenKind::IDENTIFIER), 3);
    assert!(matches!(
        err.map(|v| v + 1),
        ParseOutcome::EmptyErr { position: 3, .. }
    ));
}

#[test]
fn into_result_splits() {
    assert_eq!(ParseOutcome::consumed_ok("x").into_result(), Ok("x"));
    let err: ParseOutcome<()> = ParseOutcome::empty_err(ExpectedKinds::new(), 0);
    assert!(err.is_err());
    assert_eq!(err.value(), None);
}

#[test]
fn furthest_keeps_deepest_failure() {
    let mut furthest = Furthest::new(0);
    furthest.record(&ExpectedKinds::single(TokenKind::DEC_INTEGER), 0);
    furthest.record(&ExpectedKinds::single(TokenKind::SIGN_RPAREN), 4);
    furthest.record(&ExpectedKinds::single(TokenKind::IDENTIFIER), 2);
    furthest.record(&ExpectedKinds::single(TokenKind::SIGN_ADD), 4);

    match furthest.into_outcome::<()>() {
        ParseOutcome::EmptyErr { expected, position } => {
            assert_eq!(position, 4);
            assert_eq!(
                expected.iter().collect::<Vec<_>>(),
                vec![TokenKind::SIGN_RPAREN, TokenKind::SIGN_ADD]
            );
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
