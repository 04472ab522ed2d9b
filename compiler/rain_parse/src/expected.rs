//! Sets of token kinds a failed rule would have accepted.

use std::fmt;

use rain_ir::TokenKind;
use smallvec::SmallVec;

/// Token kinds that would have let a rule continue, in first-seen order.
///
/// Most failures expect one to four kinds, so the set lives inline.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ExpectedKinds {
    kinds: SmallVec<[TokenKind; 4]>,
}

impl ExpectedKinds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(kind: TokenKind) -> Self {
        let mut set = Self::new();
        set.insert(kind);
        set
    }

    pub fn insert(&mut self, kind: TokenKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    pub fn merge(&mut self, other: &ExpectedKinds) {
        for &kind in &other.kinds {
            self.insert(kind);
        }
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.kinds.iter().copied()
    }
}

impl fmt::Debug for ExpectedKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds.iter()).finish()
    }
}

/// `A`, `A or B`, `A, B or C`.
impl fmt::Display for ExpectedKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.kinds.len();
        if n == 0 {
            return f.write_str("nothing");
        }
        for (i, kind) in self.kinds.iter().enumerate() {
            if i > 0 {
                f.write_str(if i + 1 == n { " or " } else { ", " })?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

impl FromIterator<TokenKind> for ExpectedKinds {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut set = Self::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}
