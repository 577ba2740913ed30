//! Lexical tokens.

use core::fmt;
use std::string::String;

//------------ TokenKind -----------------------------------------------------

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A word of data.
    String,

    /// White space separating two words.
    Blank,

    /// The end of an entry.
    Newline,

    /// The end of the token stream.
    Eof,
}

impl TokenKind {
    /// Returns whether the kind ends an entry.
    ///
    /// Both a newline and the end of the stream end an entry, the latter so
    /// that the last entry doesn’t need a line feed.
    pub fn is_end(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            TokenKind::String => "string",
            TokenKind::Blank => "blank",
            TokenKind::Newline => "newline",
            TokenKind::Eof => "end of file",
        })
    }
}

//------------ Pos -----------------------------------------------------------

/// The human-friendly position of a token in its source.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    line: usize,
    col: usize,
}

impl Pos {
    pub fn new(line: usize, col: usize) -> Pos {
        Pos { line, col }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

impl From<(usize, usize)> for Pos {
    fn from(src: (usize, usize)) -> Pos {
        Pos {
            line: src.0,
            col: src.1,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

//------------ Token ---------------------------------------------------------

/// A lexical token.
///
/// A token has a kind and the text it was made from. For newline and end of
/// file tokens the text is usually empty. The text of a blank token is the
/// white space the lexer found, which matters for TXT records that keep it.
///
/// Tokens optionally know where in the source they were found.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    kind: TokenKind,
    text: String,
    pos: Option<Pos>,
}

impl Token {
    /// Creates a new token from its kind and text.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
            pos: None,
        }
    }

    /// Creates a word token.
    pub fn string(text: impl Into<String>) -> Self {
        Self::new(TokenKind::String, text)
    }

    /// Creates a blank token with the given white space.
    pub fn blank(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Blank, text)
    }

    /// Creates a newline token.
    pub fn newline() -> Self {
        Self::new(TokenKind::Newline, "\n")
    }

    /// Creates an end of file token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Attaches a source position to the token.
    #[must_use]
    pub fn at(mut self, pos: impl Into<Pos>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }

    /// Returns whether this is a word token.
    pub fn is_string(&self) -> bool {
        self.kind == TokenKind::String
    }

    /// Returns whether the token ends an entry.
    pub fn is_end(&self) -> bool {
        self.kind.is_end()
    }

    /// Converts the token into its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

//--- Display

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.text),
            kind => fmt::Display::fmt(&kind, f),
        }?;
        if let Some(pos) = self.pos {
            write!(f, " at {}", pos)?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", Token::string("foo")), "\"foo\"");
        assert_eq!(
            format!("{}", Token::string("foo").at(Pos::new(3, 7))),
            "\"foo\" at line 3, column 7"
        );
        assert_eq!(format!("{}", Token::blank("  ")), "blank");
        assert_eq!(format!("{}", Token::eof()), "end of file");
    }

    #[test]
    fn ends() {
        assert!(Token::newline().is_end());
        assert!(Token::eof().is_end());
        assert!(!Token::blank(" ").is_end());
        assert!(!Token::string("x").is_end());
    }
}
