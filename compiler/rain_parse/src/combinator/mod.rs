//! Generic grammar building blocks.
//!
//! A grammar rule is a type implementing [`Rule`]; a successfully parsed
//! node is a value of that same type. Combinators are generic types over
//! other rules:
//!
//! | Combinator         | Matches                                   | Node holds            |
//! |--------------------|-------------------------------------------|-----------------------|
//! | `Terminal<K>`      | one token of kind `K`                     | the token's index     |
//! | `Discard<K>`       | one token of kind `K`                     | nothing               |
//! | `Repetition<R>`    | zero or more `R`                          | `Vec<R>`              |
//! | `Sequence<(A, ..)>`| every member in order (1..=6 members)     | `(A, ..)`             |
//! | `Choice<(A, ..)>`  | the first alternative that parses (1..=8) | `AltN<A, ..>` + index |
//!
//! A failed parse never moves the stream, and a failed sequence drops the
//! members it had already built.

mod choice;
mod repetition;
mod sequence;
mod terminal;

pub use choice::{Alt1, Alt2, Alt3, Alt4, Alt5, Alt6, Alt7, Alt8, Alternatives, Choice};
pub use repetition::Repetition;
pub use sequence::{MemberFailure, RuleList, Sequence};
pub use terminal::{Discard, Terminal};

use rain_lexer::TokenStream;

use crate::{ExpectedKinds, ParseOutcome};

/// A grammar rule whose parsed node is `Self`.
pub trait Rule: Sized {
    /// Cheap check of whether this rule could start at the cursor. Never
    /// consumes. For sequences only the first member is consulted, so a
    /// `true` here does not promise that [`Rule::parse`] succeeds.
    fn lookahead(stream: &mut TokenStream<'_>) -> bool;

    /// Kinds that can start this rule, for failure reports.
    fn first() -> ExpectedKinds;

    /// Parse at the cursor. On failure the cursor is left where it was.
    fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self>;
}
