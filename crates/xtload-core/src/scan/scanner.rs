// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! The model-load stream scanner.
//!
//! [`Scanner`] drives a byte source through a single-lookahead state machine
//! and pushes each recognized token to its [`TokenSink`]. One scan call runs
//! to completion: the source is owned by the invocation and released before
//! control returns, on every path.
//!
//! # Production rules
//!
//! Each production step first discards whitespace (space and the `\t`..`\r`
//! control run, vertical tab included), then classifies on the lookahead
//! byte:
//!
//! - `'` or `"` — quoted literal, delimiters kept in the payload; adjacent
//!   runs of the same quote kind join into one token, which is what makes
//!   SQL-style doubled quotes (`'it''s'`) a single literal
//! - `,` `(` `)` `;` — punctuation
//! - `-` — a second dash starts a comment running to end of line; a digit
//!   makes the dash a numeric sign; anything else is an error
//! - digits — numeric literal: consecutive digits and `.` bytes (integers
//!   and reals emit the same [`Token::Value`] kind)
//! - ASCII letter or `_` — identifier over letters, digits, underscores
//!
//! Every consumed byte is committed to the current token; there is no
//! backtracking. Inputs that stall naive scanners — an unterminated quote,
//! a stray byte no rule accepts — fail fast with a [`ScanError`] instead.
//!
//! # Examples
//!
//! ```
//! use xtload_core::scan::{tokenize, Token};
//!
//! let tokens = tokenize("INSERT INTO R805 VALUES (-4, 'name');")?;
//! assert_eq!(tokens[0], Token::Identifier("INSERT".into()));
//! assert_eq!(tokens[5], Token::Value("-4".into()));
//! assert_eq!(tokens[7], Token::Value("'name'".into()));
//! assert_eq!(tokens.last(), Some(&Token::Semicolon));
//! # Ok::<(), xtload_core::scan::ScanError>(())
//! ```

use std::fs::File;
use std::io::{BufReader, Read};

use camino::Utf8Path;
use ecow::EcoString;
use tracing::{debug, warn};

use super::cursor::Cursor;
use super::{ScanError, Token, TokenSink};

/// Scans model-load streams into a [`TokenSink`].
///
/// The sink is the scanner's only configuration, fixed at construction.
/// A scanner may be reused across any number of scans; each invocation
/// owns its own source and lookahead, so no state leaks between scans.
#[derive(Debug)]
pub struct Scanner<S> {
    sink: S,
}

impl<S: TokenSink> Scanner<S> {
    /// Creates a scanner that reports to `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns the sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the scanner and returns the sink, typically to collect
    /// tokens captured by a `Vec<Token>` sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Scans an in-memory text.
    ///
    /// The text's raw bytes become the source; acquiring it cannot fail,
    /// so any error is a lexical one.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::UnterminatedLiteral`] or
    /// [`ScanError::UnexpectedCharacter`] for malformed input.
    pub fn scan_text(&mut self, text: &str) -> Result<(), ScanError> {
        debug!(bytes = text.len(), "tokenizing text");
        self.run(text.as_bytes())
    }

    /// Opens and scans the named file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::SourceUnavailable`] if the file cannot be
    /// opened (no tokens are emitted and nothing is left open), or any
    /// error [`scan_reader`](Scanner::scan_reader) can produce.
    pub fn scan_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<(), ScanError> {
        let path = path.as_ref();
        debug!(path = %path, "tokenizing file");
        let file = match File::open(path) {
            Ok(file) => file,
            Err(source) => {
                let err = ScanError::SourceUnavailable {
                    path: path.to_owned(),
                    source,
                };
                warn!(error = %err, "scan aborted");
                return Err(err);
            }
        };
        self.run(BufReader::new(file))
    }

    /// Scans an arbitrary byte source.
    ///
    /// This is the seam text and file scanning lower onto. The reader is
    /// moved into the scan and dropped before the call returns, success
    /// or failure.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::ReadFailure`] if a read fails mid-scan (the
    /// scan stops at the failure point; a partially scanned token is
    /// discarded), or a lexical error for malformed input.
    pub fn scan_reader<R: Read>(&mut self, reader: R) -> Result<(), ScanError> {
        debug!("tokenizing reader");
        self.run(reader)
    }

    fn run<R: Read>(&mut self, reader: R) -> Result<(), ScanError> {
        let mut cursor = Cursor::new(reader);
        let result = self.process(&mut cursor);
        // the source is released here, before any reporting
        drop(cursor);
        if let Err(err) = &result {
            warn!(error = %err, "scan aborted");
        }
        result
    }

    /// The tokenizer loop: production steps until the lookahead reaches
    /// end of input, checked before each attempt.
    fn process<R: Read>(&mut self, cursor: &mut Cursor<R>) -> Result<(), ScanError> {
        while !cursor.at_end() {
            let step = next_token(cursor);
            if let Some(source) = cursor.take_failure() {
                // a failed read invalidates whatever the step was building
                return Err(ScanError::ReadFailure {
                    offset: cursor.offset(),
                    source,
                });
            }
            if let Some(token) = step? {
                self.sink.token(token);
            }
        }
        if let Some(source) = cursor.take_failure() {
            // the very first fill failed; nothing was ever consumed
            return Err(ScanError::ReadFailure {
                offset: cursor.offset(),
                source,
            });
        }
        self.sink.end_of_stream();
        Ok(())
    }
}

/// Scans `text` and collects the emitted tokens.
///
/// Convenience over [`Scanner`] with a `Vec<Token>` sink.
///
/// # Examples
///
/// ```
/// use xtload_core::scan::{tokenize, Token};
///
/// let tokens = tokenize("a,b")?;
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Identifier("a".into()),
///         Token::Comma,
///         Token::Identifier("b".into()),
///     ],
/// );
/// # Ok::<(), xtload_core::scan::ScanError>(())
/// ```
///
/// # Errors
///
/// Returns the first [`ScanError`] the scan hits.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(Vec::new());
    scanner.scan_text(text)?;
    Ok(scanner.into_sink())
}

/// One token-production attempt: discard whitespace, then classify on the
/// lookahead byte. `Ok(None)` means only trailing whitespace remained.
fn next_token<R: Read>(cursor: &mut Cursor<R>) -> Result<Option<Token>, ScanError> {
    // whitespace is ' ' plus the '\t'..='\r' control run; vertical tab is
    // in the set, which `u8::is_ascii_whitespace` would miss
    while matches!(cursor.peek(), Some(b'\t'..=b'\r' | b' ')) {
        cursor.advance();
    }
    let Some(byte) = cursor.peek() else {
        return Ok(None);
    };
    match byte {
        b'\'' | b'"' => quoted(cursor, byte).map(Some),
        b',' => {
            cursor.advance();
            Ok(Some(Token::Comma))
        }
        b'(' => {
            cursor.advance();
            Ok(Some(Token::LeftParen))
        }
        b')' => {
            cursor.advance();
            Ok(Some(Token::RightParen))
        }
        b';' => {
            cursor.advance();
            Ok(Some(Token::Semicolon))
        }
        b'-' => dash(cursor).map(Some),
        b'0'..=b'9' => Ok(Some(number(cursor, Vec::new()))),
        b'A'..=b'Z' | b'a'..=b'z' | b'_' => Ok(Some(identifier(cursor))),
        _ => Err(ScanError::UnexpectedCharacter {
            character: char::from(byte),
            offset: cursor.offset(),
        }),
    }
}

/// Consumes one quoted literal, delimiters included in the payload.
///
/// After a closing quote, a lookahead that reopens the same quote kind
/// continues the same token, so adjacent runs concatenate: `'it''s'` is one
/// literal, `'a' 'b'` is two.
fn quoted<R: Read>(cursor: &mut Cursor<R>, quote: u8) -> Result<Token, ScanError> {
    let start = cursor.offset();
    let mut text = Vec::new();
    while cursor.peek() == Some(quote) {
        cursor.advance();
        text.push(quote);
        loop {
            match cursor.advance() {
                Some(b) if b == quote => {
                    text.push(quote);
                    break;
                }
                Some(b) => text.push(b),
                None => {
                    return Err(ScanError::UnterminatedLiteral {
                        delimiter: char::from(quote),
                        offset: start,
                    });
                }
            }
        }
    }
    Ok(Token::Value(into_text(text)))
}

/// A consumed dash is either the start of a `--` comment, the sign of a
/// numeric literal, or an error. The dash is committed before looking at
/// what follows; there is no backtracking.
fn dash<R: Read>(cursor: &mut Cursor<R>) -> Result<Token, ScanError> {
    let start = cursor.offset();
    cursor.advance();
    match cursor.peek() {
        Some(b'-') => {
            let mut text = vec![b'-'];
            while let Some(b) = cursor.peek() {
                if b == b'\n' || b == b'\r' {
                    // the line terminator is not part of the comment
                    break;
                }
                cursor.advance();
                text.push(b);
            }
            Ok(Token::Comment(into_text(text)))
        }
        Some(b) if b.is_ascii_digit() => Ok(number(cursor, vec![b'-'])),
        _ => Err(ScanError::UnexpectedCharacter {
            character: '-',
            offset: start,
        }),
    }
}

/// Consumes consecutive digits and `.` bytes into a single value token.
/// `text` may already hold a sign from the dash branch.
fn number<R: Read>(cursor: &mut Cursor<R>, mut text: Vec<u8>) -> Token {
    while let Some(b) = cursor.peek() {
        if b.is_ascii_digit() || b == b'.' {
            cursor.advance();
            text.push(b);
        } else {
            break;
        }
    }
    Token::Value(into_text(text))
}

/// Consumes consecutive ASCII letters, digits, and underscores.
fn identifier<R: Read>(cursor: &mut Cursor<R>) -> Token {
    let mut text = Vec::new();
    while let Some(b) = cursor.peek() {
        if b.is_ascii_alphanumeric() || b == b'_' {
            cursor.advance();
            text.push(b);
        } else {
            break;
        }
    }
    Token::Identifier(into_text(text))
}

/// Token boundaries are byte decisions; payload bytes that are not valid
/// UTF-8 are carried through lossily.
fn into_text(bytes: Vec<u8>) -> EcoString {
    match String::from_utf8(bytes) {
        Ok(s) => s.into(),
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned().into(),
    }
}
