//! Top-level parse entry points.

use rain_ir::{Token, TokenIdx};
use rain_lexer::TokenStream;
use tracing::debug;

use crate::combinator::Rule;
use crate::grammar::Expression;
use crate::{ParseError, ParseOutcome};

/// Drives grammar rules over a borrowed [`TokenStream`] and turns failed
/// outcomes into [`ParseError`]s.
pub struct Parser<'a, 'src> {
    stream: &'a mut TokenStream<'src>,
}

impl<'a, 'src> Parser<'a, 'src> {
    pub fn new(stream: &'a mut TokenStream<'src>) -> Self {
        Parser { stream }
    }

    pub fn stream(&self) -> &TokenStream<'src> {
        &*self.stream
    }

    /// Parse one `R` at the cursor. On failure the cursor is unchanged.
    pub fn parse<R: Rule>(&mut self) -> Result<R, ParseError> {
        let start = self.stream.position();
        match R::parse(self.stream) {
            ParseOutcome::ConsumedOk { value } | ParseOutcome::EmptyOk { value } => {
                debug!(start, end = self.stream.position(), "parsed");
                Ok(value)
            }
            ParseOutcome::EmptyErr { expected, position } => {
                debug_assert_eq!(self.stream.position(), start);
                let found = self.token_at(position);
                debug!(start, stopped_at = position, %expected, found = %found.kind, "parse failed");
                Err(ParseError::Unexpected {
                    expected,
                    found: found.kind,
                    position: found.pos,
                    span: found.span,
                })
            }
        }
    }

    /// Parse one `R` that must be followed by the end of input.
    ///
    /// On failure the cursor is back where it started, even when `R` itself
    /// matched.
    pub fn parse_complete<R: Rule>(&mut self) -> Result<R, ParseError> {
        let mark = self.stream.mark();
        let value = self.parse::<R>()?;
        let next = *self.stream.peek();
        if next.kind.is_endmark() {
            return Ok(value);
        }
        self.stream.restore(mark);
        debug!(start = mark.index(), found = %next.kind, "trailing input");
        Err(ParseError::TrailingInput {
            found: next.kind,
            position: next.pos,
            span: next.span,
        })
    }

    /// The token where a failed rule stopped. The rule peeked it, so it is
    /// already materialized; fall back to the cursor token otherwise.
    fn token_at(&mut self, position: usize) -> Token<'src> {
        let materialized = u32::try_from(position)
            .ok()
            .and_then(|raw| self.stream.token(TokenIdx::from_raw(raw)))
            .copied();
        match materialized {
            Some(token) => token,
            None => *self.stream.peek(),
        }
    }
}

/// Parse a whole expression; the input must end right after it.
pub fn parse_expression(stream: &mut TokenStream<'_>) -> Result<Expression, ParseError> {
    Parser::new(stream).parse_complete::<Expression>()
}

#[cfg(test)]
mod tests;
