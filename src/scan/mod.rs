//! The token stream record data is scanned from.
//!
//! A lexer turns zonefile text into a sequence of [`Token`]s. Record data
//! scanning pulls these tokens one at a time through the [`TokenStream`]
//! trait. The lexer and the scanner may run concurrently, connected by a
//! channel, or the lexer may produce all tokens upfront.

pub use self::stream::{TokenStream, Tokens};
pub use self::token::{Pos, Token, TokenKind};

pub mod stream;
pub mod token;
