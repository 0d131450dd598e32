//! # textcomb - Parsec-style parser combinators over UTF-8 text
//!
//! textcomb provides composable parsers that are combined into larger ones
//! from small building blocks, with the commit-on-consume error discipline
//! of the Parsec lineage:
//!
//! - **Four-way outcomes**: every parse is a success or failure crossed
//!   with whether input was consumed, and combinators preserve that
//!   distinction exactly
//! - **Precise blame**: "expected" labels accumulate across alternatives
//!   and zero-width parses, and are rendered de-duplicated with line and
//!   column information
//! - **Selective backtracking**: alternation never backtracks across
//!   consumed input unless the caller opts in with `attempt`
//! - **Zero panics**: all parsing errors flow through `Reply` and
//!   `Message` values
//!
//! Parsers are plain values over a copyable [`Cursor`]; running one is a
//! read-only traversal of the input.

pub mod and;
pub mod attempt;
pub mod bind;
pub mod cursor;
pub mod expected;
pub mod fix;
pub mod fold;
pub mod inspect;
pub mod label;
pub mod lexeme;
pub mod lift;
pub mod longest_match;
pub mod look_ahead;
pub mod many;
pub mod map;
pub mod message;
pub mod not_followed_by;
pub mod observing;
pub mod or;
pub mod parser;
pub mod pure;
pub mod reply;
pub mod run;
pub mod satisfy;
pub mod sep_by;
pub mod string;
pub mod take;

pub use cursor::{Cursor, EndOfInput, Position};
pub use expected::Expected;
pub use message::Message;
pub use parser::{boxed, from_fn, BoxedParser, Parser};
pub use reply::Reply;
pub use run::{parse, parse_with_eoi, parse_with_left_over};
