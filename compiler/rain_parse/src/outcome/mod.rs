//! Progress-aware parse outcome.
//!
//! | Progress | Result | Variant      | Meaning                          |
//! |----------|--------|--------------|----------------------------------|
//! | Consumed | Ok     | `ConsumedOk` | Matched one or more tokens       |
//! | Empty    | Ok     | `EmptyOk`    | Matched without consuming        |
//! | Empty    | Err    | `EmptyErr`   | No match; cursor is where it was |
//!
//! Every combinator restores the cursor on failure, so there is no
//! "consumed and failed" state: a failed rule never moves the stream.

use crate::ExpectedKinds;

#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// Consumed input and succeeded.
    ConsumedOk { value: T },
    /// Succeeded without consuming input (e.g. an empty repetition).
    EmptyOk { value: T },
    /// Failed; the cursor is unchanged.
    EmptyErr {
        /// Kinds that would have let matching continue.
        expected: ExpectedKinds,
        /// Token index where matching stopped. May lie past the rule's
        /// start when a nested sequence got partway before failing.
        position: usize,
    },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        Self::ConsumedOk { value }
    }

    #[inline]
    pub fn empty_ok(value: T) -> Self {
        Self::EmptyOk { value }
    }

    #[inline]
    pub fn empty_err(expected: ExpectedKinds, position: usize) -> Self {
        Self::EmptyErr { expected, position }
    }

    /// Success, tagged with whether the cursor moved.
    #[inline]
    pub fn ok(value: T, consumed: bool) -> Self {
        if consumed {
            Self::ConsumedOk { value }
        } else {
            Self::EmptyOk { value }
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. } | Self::EmptyOk { .. })
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Map the success value, preserving the outcome variant.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseOutcome<U> {
        match self {
            Self::ConsumedOk { value } => ParseOutcome::ConsumedOk { value: f(value) },
            Self::EmptyOk { value } => ParseOutcome::EmptyOk { value: f(value) },
            Self::EmptyErr { expected, position } => ParseOutcome::EmptyErr { expected, position },
        }
    }

    /// Discard progress information.
    pub fn into_result(self) -> Result<T, (ExpectedKinds, usize)> {
        match self {
            Self::ConsumedOk { value } | Self::EmptyOk { value } => Ok(value),
            Self::EmptyErr { expected, position } => Err((expected, position)),
        }
    }

    pub fn value(self) -> Option<T> {
        self.into_result().ok()
    }
}

/// The failure that got furthest into the input, with the expected kinds
/// of every attempt that stopped there merged together.
#[derive(Debug)]
pub(crate) struct Furthest {
    expected: ExpectedKinds,
    position: usize,
}

impl Furthest {
    pub(crate) fn new(position: usize) -> Self {
        Furthest {
            expected: ExpectedKinds::new(),
            position,
        }
    }

    pub(crate) fn record(&mut self, expected: &ExpectedKinds, position: usize) {
        if position > self.position {
            self.expected = expected.clone();
            self.position = position;
        } else if position == self.position {
            self.expected.merge(expected);
        }
    }

    pub(crate) fn into_outcome<T>(self) -> ParseOutcome<T> {
        ParseOutcome::EmptyErr {
            expected: self.expected,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests;
