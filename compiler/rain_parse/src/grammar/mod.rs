//! Arithmetic expression grammar.
//!
//! Precedence comes from nesting alone; there is no left recursion:
//!
//! ```text
//! Expression     = Additive
//! Additive       = Multiplicative ( ('+' | '-') Multiplicative )*
//! Multiplicative = Primary ( ('*' | '/' | '%') Primary )*
//! Primary        = Literal | IDENTIFIER | '(' Expression ')'
//! Literal        = DEC | BIN | HEX | OCT | FLOAT | STRING | CHAR
//! ```
//!
//! Each layer is a newtype over its combinator shape. The `operands` and
//! `operators` accessors flatten the `first (op rest)*` shape into two
//! ordered lists.

use rain_ir::{TokenIdx, TokenKind};
use rain_lexer::TokenStream;

use crate::combinator::{Alt2, Alt3, Alt7, Choice, Discard, Repetition, Rule, Sequence, Terminal};
use crate::stack::ensure_sufficient_stack;
use crate::{ExpectedKinds, ParseOutcome};

const DEC: u16 = TokenKind::DEC_INTEGER.bits();
const BIN: u16 = TokenKind::BIN_INTEGER.bits();
const HEX: u16 = TokenKind::HEX_INTEGER.bits();
const OCT: u16 = TokenKind::OCT_INTEGER.bits();
const FLOAT: u16 = TokenKind::FLOAT.bits();
const STRING: u16 = TokenKind::LITERAL_STRING.bits();
const CHAR: u16 = TokenKind::LITERAL_CHAR.bits();
const IDENT: u16 = TokenKind::IDENTIFIER.bits();
const LPAREN: u16 = TokenKind::SIGN_LPAREN.bits();
const RPAREN: u16 = TokenKind::SIGN_RPAREN.bits();
const ADD: u16 = TokenKind::SIGN_ADD.bits();
const SUB: u16 = TokenKind::SIGN_SUB.bits();
const MUL: u16 = TokenKind::SIGN_MUL.bits();
const DIV: u16 = TokenKind::SIGN_DIV.bits();
const MOD: u16 = TokenKind::SIGN_MOD.bits();

/// Forwards [`Rule`] to the wrapped combinator.
macro_rules! newtype_rule {
    ($name:ident($inner:ty)) => {
        impl Rule for $name {
            #[inline]
            fn lookahead(stream: &mut TokenStream<'_>) -> bool {
                <$inner as Rule>::lookahead(stream)
            }

            fn first() -> ExpectedKinds {
                <$inner as Rule>::first()
            }

            fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self> {
                <$inner as Rule>::parse(stream).map($name)
            }
        }
    };
}

type LiteralKinds = (
    Terminal<DEC>,
    Terminal<BIN>,
    Terminal<HEX>,
    Terminal<OCT>,
    Terminal<FLOAT>,
    Terminal<STRING>,
    Terminal<CHAR>,
);

/// A single literal token.
#[derive(Debug)]
pub struct Literal(Choice<LiteralKinds>);

newtype_rule!(Literal(Choice<LiteralKinds>));

impl Literal {
    pub fn token(&self) -> TokenIdx {
        match self.0.alt() {
            Alt7::First(t) => t.index(),
            Alt7::Second(t) => t.index(),
            Alt7::Third(t) => t.index(),
            Alt7::Fourth(t) => t.index(),
            Alt7::Fifth(t) => t.index(),
            Alt7::Sixth(t) => t.index(),
            Alt7::Seventh(t) => t.index(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self.0.alt() {
            Alt7::First(t) => t.kind(),
            Alt7::Second(t) => t.kind(),
            Alt7::Third(t) => t.kind(),
            Alt7::Fourth(t) => t.kind(),
            Alt7::Fifth(t) => t.kind(),
            Alt7::Sixth(t) => t.kind(),
            Alt7::Seventh(t) => t.kind(),
        }
    }
}

type Parenthesized = Sequence<(Discard<LPAREN>, Expression, Discard<RPAREN>)>;

/// A literal, an identifier, or a parenthesized expression.
#[derive(Debug)]
pub struct Primary(Choice<(Literal, Terminal<IDENT>, Parenthesized)>);

newtype_rule!(Primary(Choice<(Literal, Terminal<IDENT>, Parenthesized)>));

/// Borrowed view of what a [`Primary`] matched.
#[derive(Debug, Clone, Copy)]
pub enum PrimaryRef<'a> {
    Literal(&'a Literal),
    Identifier(TokenIdx),
    Parenthesized(&'a Expression),
}

impl Primary {
    pub fn get(&self) -> PrimaryRef<'_> {
        match self.0.alt() {
            Alt3::First(literal) => PrimaryRef::Literal(literal),
            Alt3::Second(ident) => PrimaryRef::Identifier(ident.index()),
            Alt3::Third(paren) => PrimaryRef::Parenthesized(&paren.items().1),
        }
    }

    /// Which alternative matched: 0 literal, 1 identifier, 2 parenthesized.
    pub fn index(&self) -> usize {
        self.0.index()
    }
}

type MulKinds = (Terminal<MUL>, Terminal<DIV>, Terminal<MOD>);

/// `*`, `/` or `%`.
#[derive(Debug)]
pub struct MulOp(Choice<MulKinds>);

newtype_rule!(MulOp(Choice<MulKinds>));

impl MulOp {
    pub fn token(&self) -> TokenIdx {
        match self.0.alt() {
            Alt3::First(t) => t.index(),
            Alt3::Second(t) => t.index(),
            Alt3::Third(t) => t.index(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self.0.alt() {
            Alt3::First(t) => t.kind(),
            Alt3::Second(t) => t.kind(),
            Alt3::Third(t) => t.kind(),
        }
    }
}

/// `+` or `-`.
#[derive(Debug)]
pub struct AddOp(Choice<(Terminal<ADD>, Terminal<SUB>)>);

newtype_rule!(AddOp(Choice<(Terminal<ADD>, Terminal<SUB>)>));

impl AddOp {
    pub fn token(&self) -> TokenIdx {
        match self.0.alt() {
            Alt2::First(t) => t.index(),
            Alt2::Second(t) => t.index(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self.0.alt() {
            Alt2::First(t) => t.kind(),
            Alt2::Second(t) => t.kind(),
        }
    }
}

type MulChain = Sequence<(Primary, Repetition<Sequence<(MulOp, Primary)>>)>;

/// `Primary ( ('*' | '/' | '%') Primary )*`
#[derive(Debug)]
pub struct Multiplicative(MulChain);

newtype_rule!(Multiplicative(MulChain));

impl Multiplicative {
    pub fn first_operand(&self) -> &Primary {
        &self.0.items().0
    }

    /// Every operand, left to right.
    pub fn operands(&self) -> Vec<&Primary> {
        let (first, rest) = self.0.items();
        std::iter::once(first)
            .chain(rest.iter().map(|pair| &pair.items().1))
            .collect()
    }

    /// Every operator token, left to right. One fewer than the operands.
    pub fn operators(&self) -> Vec<TokenIdx> {
        self.0
            .items()
            .1
            .iter()
            .map(|pair| pair.items().0.token())
            .collect()
    }

    /// Operator kinds, in the same order as [`Multiplicative::operators`].
    pub fn operator_kinds(&self) -> Vec<TokenKind> {
        self.0
            .items()
            .1
            .iter()
            .map(|pair| pair.items().0.kind())
            .collect()
    }
}

type AddChain = Sequence<(Multiplicative, Repetition<Sequence<(AddOp, Multiplicative)>>)>;

/// `Multiplicative ( ('+' | '-') Multiplicative )*`
#[derive(Debug)]
pub struct Additive(AddChain);

newtype_rule!(Additive(AddChain));

impl Additive {
    pub fn first_operand(&self) -> &Multiplicative {
        &self.0.items().0
    }

    /// Every operand, left to right.
    pub fn operands(&self) -> Vec<&Multiplicative> {
        let (first, rest) = self.0.items();
        std::iter::once(first)
            .chain(rest.iter().map(|pair| &pair.items().1))
            .collect()
    }

    /// Every operator token, left to right. One fewer than the operands.
    pub fn operators(&self) -> Vec<TokenIdx> {
        self.0
            .items()
            .1
            .iter()
            .map(|pair| pair.items().0.token())
            .collect()
    }

    pub fn operator_kinds(&self) -> Vec<TokenKind> {
        self.0
            .items()
            .1
            .iter()
            .map(|pair| pair.items().0.kind())
            .collect()
    }
}

/// Grammar entry point.
///
/// Boxed because it recurses through [`Primary`].
#[derive(Debug)]
pub struct Expression(Box<Additive>);

impl Expression {
    pub fn additive(&self) -> &Additive {
        &self.0
    }

    pub fn operands(&self) -> Vec<&Multiplicative> {
        self.0.operands()
    }

    pub fn operators(&self) -> Vec<TokenIdx> {
        self.0.operators()
    }
}

impl Rule for Expression {
    #[inline]
    fn lookahead(stream: &mut TokenStream<'_>) -> bool {
        Additive::lookahead(stream)
    }

    fn first() -> ExpectedKinds {
        Additive::first()
    }

    fn parse(stream: &mut TokenStream<'_>) -> ParseOutcome<Self> {
        ensure_sufficient_stack(|| Additive::parse(stream))
            .map(|additive| Expression(Box::new(additive)))
    }
}
