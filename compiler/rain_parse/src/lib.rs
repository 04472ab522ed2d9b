//! Parser for Rain.
//!
//! Grammar rules are types. A rule implements [`Rule`] and a successfully
//! parsed node is a value of the rule's type, so the shape of the syntax
//! tree is the shape of the grammar.
//!
//! - [`combinator`]: the generic building blocks ([`Terminal`],
//!   [`Discard`], [`Repetition`], [`Sequence`], [`Choice`]).
//! - [`grammar`]: the arithmetic expression grammar built from them.
//! - [`Parser`] / [`parse_expression`]: entry points that report
//!   [`ParseError`]s.
//!
//! Failed rules never move the token cursor and never leave partially
//! built nodes behind.

pub mod combinator;
mod error;
mod expected;
pub mod grammar;
mod outcome;
mod parser;
mod stack;

pub use combinator::{Choice, Discard, Repetition, Rule, Sequence, Terminal};
pub use error::ParseError;
pub use expected::ExpectedKinds;
pub use grammar::Expression;
pub use outcome::ParseOutcome;
pub use parser::{parse_expression, Parser};
pub use stack::ensure_sufficient_stack;
