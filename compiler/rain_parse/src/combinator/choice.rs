use std::fmt;

use rain_lexer::TokenStream;
use tracing::trace;

use super::Rule;
use crate::outcome::Furthest;
use crate::{ExpectedKinds, ParseOutcome};

/// An ordered list of alternative rules.
///
/// Implemented for tuples of one to eight rules, so a choice with no
/// alternatives cannot be written.
pub trait Alternatives {
    /// The parsed node: one variant per alternative.
    type Alt;

    /// True if any alternative's lookahead passes.
    fn lookahead(stream: &mut TokenStream<'_>) -> bool;

    fn first() -> ExpectedKinds;

    /// Try each alternative in order; lookahead filters, parse decides.
    fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self::Alt>;

    /// Zero-based index of the alternative that matched.
    fn index(alt: &Self::Alt) -> usize;
}

macro_rules! alternatives {
    ($(#[$doc:meta])* $alt:ident; $($index:literal $ty:ident $variant:ident),+) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $alt<$($ty),+> {
            $($variant($ty),)+
        }

        impl<$($ty),+> $alt<$($ty),+> {
            pub fn index(&self) -> usize {
                match self {
                    $($alt::$variant(_) => $index,)+
                }
            }
        }

        impl<$($ty: Rule),+> Alternatives for ($($ty,)+) {
            type Alt = $alt<$($ty),+>;

            #[inline]
            fn lookahead(stream: &mut TokenStream<'_>) -> bool {
                $(<$ty as Rule>::lookahead(stream))||+
            }

            fn first() -> ExpectedKinds {
                let mut expected = ExpectedKinds::new();
                $(expected.merge(&<$ty as Rule>::first());)+
                expected
            }

            fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self::Alt> {
                let start = stream.position();
                let mut furthest = Furthest::new(start);
                $(
                    if <$ty as Rule>::lookahead(stream) {
                        match <$ty as Rule>::parse(stream).map($alt::$variant) {
                            ParseOutcome::EmptyErr { expected, position } => {
                                furthest.record(&expected, position);
                            }
                            matched => {
                                trace!(start, alternative = $index, "choice");
                                return matched;
                            }
                        }
                    } else {
                        furthest.record(&<$ty as Rule>::first(), start);
                    }
                )+
                trace!(start, "choice exhausted");
                furthest.into_outcome()
            }

            #[inline]
            fn index(alt: &Self::Alt) -> usize {
                alt.index()
            }
        }
    };
}

alternatives!(
    /// Node of a one-way choice.
    Alt1; 0 A First
);
alternatives!(
    /// Node of a two-way choice.
    Alt2; 0 A First, 1 B Second
);
alternatives!(Alt3; 0 A First, 1 B Second, 2 C Third);
alternatives!(Alt4; 0 A First, 1 B Second, 2 C Third, 3 D Fourth);
alternatives!(Alt5; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth);
alternatives!(Alt6; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth, 5 F Sixth);
alternatives!(Alt7; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth, 5 F Sixth, 6 G Seventh);
alternatives!(
    Alt8; 0 A First, 1 B Second, 2 C Third, 3 D Fourth, 4 E Fifth, 5 F Sixth, 6 G Seventh, 7 H Eighth
);

/// The first alternative of `L` that parses, in declared order.
///
/// Order is the only disambiguation: no longest match, no ambiguity
/// report. On failure the expected kinds of every alternative that got
/// furthest are merged.
pub struct Choice<L: Alternatives> {
    alt: L::Alt,
}

impl<L: Alternatives> Choice<L> {
    #[inline]
    pub fn alt(&self) -> &L::Alt {
        &self.alt
    }

    #[inline]
    pub fn into_alt(self) -> L::Alt {
        self.alt
    }

    /// Zero-based index of the selected alternative.
    #[inline]
    pub fn index(&self) -> usize {
        L::index(&self.alt)
    }
}

impl<L: Alternatives> fmt::Debug for Choice<L>
where
    L::Alt: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice")
            .field("index", &self.index())
            .field("alt", &self.alt)
            .finish()
    }
}

impl<L: Alternatives> Rule for Choice<L> {
    #[inline]
    fn lookahead(stream: &mut TokenStream<'_>) -> bool {
        L::lookahead(stream)
    }

    fn first() -> ExpectedKinds {
        L::first()
    }

    fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self> {
        L::parse(stream).map(|alt| Choice { alt })
    }
}
