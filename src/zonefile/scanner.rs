//! Scanning the fields of record data from a token stream.

use super::error::{ErrorKind, ParseError};
use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::serial::Timestamp;
use crate::scan::{Token, TokenKind, TokenStream};
use core::str::FromStr;
use std::string::String;
use std::vec::Vec;

//------------ RdataScanner --------------------------------------------------

/// A scanner for the record data of a single record.
///
/// The scanner wraps a token stream and knows the record type it is
/// scanning for so that failures can be reported as errors of that type.
/// Each `scan_` method takes the tokens for exactly one field and decodes
/// them. Separators between fields are taken through
/// [`scan_blank`][Self::scan_blank].
///
/// Record data either has a fixed number of fields, in which case the
/// remainder of the entry has to be checked via
/// [`finish`][Self::finish] afterwards, or it runs to the end of the
/// entry. The methods that scan such trailing data consume the newline or
/// end of file token that ends the entry.
#[derive(Debug)]
pub struct RdataScanner<S> {
    stream: S,
    rtype: Rtype,
}

impl<S> RdataScanner<S> {
    /// Creates a scanner for record data of `rtype`.
    pub fn new(stream: S, rtype: Rtype) -> Self {
        RdataScanner { stream, rtype }
    }

    /// Returns the record type being scanned.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the underlying stream.
    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Creates a malformed field error for the given token.
    pub fn bad(&self, token: Token) -> ParseError {
        ParseError::new(ErrorKind::BadRdata(self.rtype), token)
    }
}

impl<S: TokenStream> RdataScanner<S> {
    /// Takes the next token from the stream.
    pub fn next_token(&mut self) -> Token {
        self.stream.next_token()
    }

    /// Takes the separator between two fields.
    pub fn scan_blank(&mut self) -> Result<(), ParseError> {
        let token = self.next_token();
        if token.kind() == TokenKind::Blank {
            Ok(())
        } else {
            Err(ParseError::new(ErrorKind::ExpectedBlank(self.rtype), token))
        }
    }

    /// Takes a word token.
    ///
    /// Anything else means the field is missing.
    pub fn scan_word(&mut self) -> Result<Token, ParseError> {
        let token = self.next_token();
        if token.is_string() {
            Ok(token)
        } else {
            Err(self.bad(token))
        }
    }

    /// Takes a word and converts it via `op`.
    ///
    /// If `op` fails, the word becomes part of a malformed field error.
    pub fn scan_with<T, F>(&mut self, op: F) -> Result<T, ParseError>
    where
        F: FnOnce(&str) -> Option<T>,
    {
        let token = self.scan_word()?;
        match op(token.text()) {
            Some(value) => Ok(value),
            None => Err(self.bad(token)),
        }
    }

    /// Scans a word as it is.
    pub fn scan_text(&mut self) -> Result<String, ParseError> {
        self.scan_word().map(Token::into_text)
    }

    /// Scans an unsigned integer in decimal notation.
    ///
    /// The type decides on the range. A value too large for it is an error.
    pub fn scan_int<T: FromStr>(&mut self) -> Result<T, ParseError> {
        self.scan_with(|text| {
            // `from_str` happily takes a leading plus sign.
            if text.is_empty() || !text.bytes().all(|ch| ch.is_ascii_digit())
            {
                return None;
            }
            T::from_str(text).ok()
        })
    }

    /// Scans an IPv4 or IPv6 address.
    pub fn scan_addr<A: FromStr>(&mut self) -> Result<A, ParseError> {
        self.scan_with(|text| A::from_str(text).ok())
    }

    /// Scans a domain name.
    pub fn scan_name(&mut self) -> Result<Name, ParseError> {
        self.scan_with(|text| Name::from_str(text).ok())
    }

    /// Scans a record type given through its mnemonic.
    pub fn scan_rtype(&mut self) -> Result<Rtype, ParseError> {
        self.scan_with(|text| Rtype::from_bytes(text.as_bytes()))
    }

    /// Scans a signature timestamp.
    pub fn scan_timestamp(&mut self) -> Result<Timestamp, ParseError> {
        self.scan_with(|text| Timestamp::from_str(text).ok())
    }

    /// Scans the words up to the end of the entry into a single string.
    ///
    /// If `keep_blanks` is `true`, the white space between the words is
    /// kept verbatim. Otherwise it is dropped and the words are simply
    /// concatenated.
    pub fn scan_remainder(
        &mut self,
        keep_blanks: bool,
    ) -> Result<String, ParseError> {
        let mut res = String::new();
        loop {
            let token = self.next_token();
            match token.kind() {
                TokenKind::String => res.push_str(token.text()),
                TokenKind::Blank => {
                    if keep_blanks {
                        res.push_str(token.text())
                    }
                }
                TokenKind::Newline | TokenKind::Eof => return Ok(res),
            }
        }
    }

    /// Scans a type bitmap up to the end of the entry.
    ///
    /// The record types are kept in the order they appear in. Neither
    /// duplicates nor the order are checked.
    pub fn scan_type_bitmap(&mut self) -> Result<Vec<Rtype>, ParseError> {
        let mut res = Vec::new();
        loop {
            let token = self.next_token();
            match token.kind() {
                TokenKind::String => {
                    match Rtype::from_bytes(token.text().as_bytes()) {
                        Some(rtype) => res.push(rtype),
                        None => {
                            return Err(ParseError::new(
                                ErrorKind::BadTypeBitmap(self.rtype),
                                token,
                            ))
                        }
                    }
                }
                TokenKind::Blank => {}
                TokenKind::Newline | TokenKind::Eof => return Ok(res),
            }
        }
    }

    /// Checks that there is nothing left in the entry.
    ///
    /// The record data may be followed by white space and then has to end
    /// with a newline or the end of file.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        let mut token = self.next_token();
        if token.kind() == TokenKind::Blank {
            token = self.next_token();
        }
        if token.is_end() {
            Ok(())
        } else {
            Err(ParseError::new(ErrorKind::GarbageAfterRdata, token))
        }
    }
}

//============ Testing =======================================================
