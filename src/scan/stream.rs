//! Pulling tokens from a lexer.

use super::token::{Pos, Token};
use std::boxed::Box;
use std::collections::{vec_deque, VecDeque};
use std::sync::mpsc;
use std::vec::Vec;

//------------ TokenStream ---------------------------------------------------

/// A source of tokens.
///
/// Reading the next token may block until the lexer has produced it. Once
/// the source is exhausted, it has to return an end of file token and keep
/// doing so for every further call. Scanning relies on that to stop at the
/// end of the stream even if the last entry lacks a line feed.
///
/// A stream only ever has one consumer and tokens can’t be pushed back.
pub trait TokenStream {
    /// Returns the next token.
    fn next_token(&mut self) -> Token;
}

impl<T: TokenStream + ?Sized> TokenStream for &mut T {
    fn next_token(&mut self) -> Token {
        T::next_token(self)
    }
}

impl<T: TokenStream + ?Sized> TokenStream for Box<T> {
    fn next_token(&mut self) -> Token {
        T::next_token(self)
    }
}

//------------ Tokens --------------------------------------------------------

/// A sequence of tokens produced ahead of time.
#[derive(Clone, Debug, Default)]
pub struct Tokens {
    /// The tokens not yet taken.
    tokens: VecDeque<Token>,

    /// The position of the end of the source, if known.
    end: Option<Pos>,
}

impl Tokens {
    /// Creates an empty token sequence.
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends a token to the end of the sequence.
    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token)
    }

    /// Sets the position reported with the final end of file tokens.
    #[must_use]
    pub fn with_end(mut self, pos: impl Into<Pos>) -> Self {
        self.end = Some(pos.into());
        self
    }

    /// Returns the number of tokens not yet taken.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// Returns whether all tokens have been taken.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenStream for Tokens {
    fn next_token(&mut self) -> Token {
        match self.tokens.pop_front() {
            Some(token) => token,
            None => match self.end {
                Some(pos) => Token::eof().at(pos),
                None => Token::eof(),
            },
        }
    }
}

//--- From, FromIterator, and IntoIterator

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Tokens {
            tokens: tokens.into(),
            end: None,
        }
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Tokens {
            tokens: iter.into_iter().collect(),
            end: None,
        }
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = vec_deque::IntoIter<Token>;

    /// Converts the sequence into an iterator over the remaining tokens.
    ///
    /// Other than the stream, the iterator doesn’t end in end of file
    /// tokens.
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

//------------ Channels ------------------------------------------------------

/// Tokens handed over by a lexer running in another thread.
///
/// Dropping the sender ends the stream.
impl TokenStream for mpsc::Receiver<Token> {
    fn next_token(&mut self) -> Token {
        self.recv().unwrap_or_else(|_| Token::eof())
    }
}

/// Tokens handed over by a lexer running as a Tokio task.
///
/// Dropping the sender ends the stream. Since receiving blocks the current
/// thread, the stream must not be drained from within an async context.
#[cfg(feature = "tokio")]
impl TokenStream for tokio::sync::mpsc::Receiver<Token> {
    fn next_token(&mut self) -> Token {
        self.blocking_recv().unwrap_or_else(Token::eof)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::TokenKind;
    use std::thread;

    #[test]
    fn tokens_end_in_eof_forever() {
        let mut tokens: Tokens =
            vec![Token::string("a"), Token::newline()].into();
        assert_eq!(tokens.next_token(), Token::string("a"));
        assert_eq!(tokens.next_token(), Token::newline());
        for _ in 0..3 {
            assert_eq!(tokens.next_token().kind(), TokenKind::Eof);
        }
    }

    #[test]
    fn tokens_end_position() {
        let mut tokens = Tokens::new().with_end(Pos::new(4, 1));
        assert_eq!(tokens.next_token().pos(), Some(Pos::new(4, 1)));
    }

    #[test]
    fn channel_stream() {
        let (tx, mut rx) = mpsc::sync_channel(1);
        let lexer = thread::spawn(move || {
            for word in ["a", "b", "c"] {
                tx.send(Token::string(word)).unwrap();
            }
        });
        assert_eq!(rx.next_token().text(), "a");
        assert_eq!(rx.next_token().text(), "b");
        assert_eq!(rx.next_token().text(), "c");
        assert_eq!(rx.next_token().kind(), TokenKind::Eof);
        assert_eq!(rx.next_token().kind(), TokenKind::Eof);
        lexer.join().unwrap();
    }

    #[cfg(feature = "tokio")]
    #[test]
    fn tokio_channel_stream() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(1);
        let lexer = thread::spawn(move || {
            tx.blocking_send(Token::string("a")).unwrap();
            tx.blocking_send(Token::newline()).unwrap();
        });
        assert_eq!(rx.next_token().text(), "a");
        assert_eq!(rx.next_token().kind(), TokenKind::Newline);
        assert_eq!(rx.next_token().kind(), TokenKind::Eof);
        lexer.join().unwrap();
    }
}
