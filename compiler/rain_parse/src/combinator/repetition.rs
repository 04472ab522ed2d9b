use rain_lexer::TokenStream;

use super::Rule;
use crate::{ExpectedKinds, ParseOutcome};

/// Zero or more `R`, greedily.
///
/// Always succeeds. Stops at the first item whose lookahead or parse
/// fails, and after an item that matched without consuming anything (it
/// would match again forever).
#[derive(Debug, PartialEq, Eq)]
pub struct Repetition<R> {
    items: Vec<R>,
}

impl<R> Repetition<R> {
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn into_items(self) -> Vec<R> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }
}

impl<'a, R> IntoIterator for &'a Repetition<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<R: Rule> Rule for Repetition<R> {
    #[inline]
    fn lookahead(_stream: &mut TokenStream<'_>) -> bool {
        true
    }

    fn first() -> ExpectedKinds {
        R::first()
    }

    fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self> {
        let start = stream.position();
        let mut items = Vec::new();
        while R::lookahead(stream) {
            let before = stream.position();
            match R::parse(stream) {
                ParseOutcome::ConsumedOk { value } => items.push(value),
                ParseOutcome::EmptyOk { .. } | ParseOutcome::EmptyErr { .. } => break,
            }
            debug_assert!(stream.position() > before);
        }
        ParseOutcome::ok(Repetition { items }, stream.position() > start)
    }
}
