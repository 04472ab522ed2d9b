//! Rain IR - shared front-end data types.
//!
//! This crate holds the types every front-end stage agrees on:
//! - Source identity (`SourceId`, `SourceMap`)
//! - Byte spans and line/column positions
//! - Token kinds (bit-packed, see [`TokenKind`]), tokens, and the
//!   append-only [`TokenList`] addressed by [`TokenIdx`]
//!
//! # Design Philosophy
//!
//! - **Index, don't point**: tokens are referred to by `TokenIdx`, so the
//!   token storage may grow without invalidating anything handed out earlier.
//! - **Copy everything small**: `Position`, `Span`, `TokenKind` are all `Copy`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;
mod source_map;
mod span;
mod token;

pub use position::Position;
pub use source_map::{SourceId, SourceMap};
pub use span::Span;
pub use token::{KindFlags, Token, TokenIdx, TokenKind, TokenList};
