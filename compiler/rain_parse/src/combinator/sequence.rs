use rain_lexer::TokenStream;
use tracing::trace;

use super::Rule;
use crate::{ExpectedKinds, ParseOutcome};

/// Where a sequence stopped: which member failed and what it wanted.
#[derive(Debug)]
pub struct MemberFailure {
    pub member: usize,
    pub expected: ExpectedKinds,
    pub position: usize,
}

/// A fixed list of rules parsed one after another.
///
/// Implemented for tuples of one to six rules.
pub trait RuleList: Sized {
    const LEN: usize;

    /// Lookahead of the first member only.
    fn lookahead(stream: &mut TokenStream<'_>) -> bool;

    fn first() -> ExpectedKinds;

    /// Parse every member in order. Stops at the first failure; members
    /// built before it are dropped on the way out.
    fn parse_members(stream: &mut TokenStream<'_>) -> Result<Self, MemberFailure>;
}

#[inline]
fn member<R: Rule>(stream: &mut TokenStream<'_>, member: usize) -> Result<R, MemberFailure> {
    R::parse(stream)
        .into_result()
        .map_err(|(expected, position)| MemberFailure {
            member,
            expected,
            position,
        })
}

macro_rules! rule_list {
    ($len:literal; $head:ident => $head_var:ident $(, $index:literal $ty:ident => $var:ident)*) => {
        impl<$head: Rule $(, $ty: Rule)*> RuleList for ($head, $($ty,)*) {
            const LEN: usize = $len;

            #[inline]
            fn lookahead(stream: &mut TokenStream<'_>) -> bool {
                <$head as Rule>::lookahead(stream)
            }

            fn first() -> ExpectedKinds {
                <$head as Rule>::first()
            }

            fn parse_members(stream: &mut TokenStream<'_>) -> Result<Self, MemberFailure> {
                let $head_var = member::<$head>(stream, 0)?;
                $(let $var = member::<$ty>(stream, $index)?;)*
                Ok(($head_var, $($var,)*))
            }
        }
    };
}

rule_list!(1; A => a);
rule_list!(2; A => a, 1 B => b);
rule_list!(3; A => a, 1 B => b, 2 C => c);
rule_list!(4; A => a, 1 B => b, 2 C => c, 3 D => d);
rule_list!(5; A => a, 1 B => b, 2 C => c, 3 D => d, 4 E => e);
rule_list!(6; A => a, 1 B => b, 2 C => c, 3 D => d, 4 E => e, 5 F => f);

/// Every member of `L`, in order.
///
/// On failure the cursor goes back to where the sequence started and no
/// member node survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence<L> {
    items: L,
}

impl<L> Sequence<L> {
    #[inline]
    pub fn items(&self) -> &L {
        &self.items
    }

    #[inline]
    pub fn into_items(self) -> L {
        self.items
    }
}

impl<L: RuleList> Rule for Sequence<L> {
    #[inline]
    fn lookahead(stream: &mut TokenStream<'_>) -> bool {
        L::lookahead(stream)
    }

    fn first() -> ExpectedKinds {
        L::first()
    }

    fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self> {
        let mark = stream.mark();
        trace!(start = mark.index(), members = L::LEN, "sequence");
        match L::parse_members(stream) {
            Ok(items) => ParseOutcome::ok(Sequence { items }, stream.position() > mark.index()),
            Err(failure) => {
                stream.restore(mark);
                trace!(
                    start = mark.index(),
                    member = failure.member,
                    stopped_at = failure.position,
                    "sequence rolled back"
                );
                ParseOutcome::empty_err(failure.expected, failure.position)
            }
        }
    }
}
