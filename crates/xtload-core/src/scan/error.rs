// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! Scan failure reporting.
//!
//! A scan produces at most one failure, the first one it hits. I/O failures
//! (`SourceUnavailable`, `ReadFailure`) chain the underlying [`io::Error`];
//! lexical failures (`UnterminatedLiteral`, `UnexpectedCharacter`) carry the
//! byte offset where scanning stopped. All variants implement
//! [`miette::Diagnostic`] so hosts can render uniform reports.

use std::io;

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// A failed scan.
///
/// Whatever the failure, the source is already released by the time the
/// error reaches the caller, no partially scanned token has been emitted,
/// and the consumer has received every token produced before the failure
/// point (and no end-of-stream notification).
#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    /// The named file could not be opened; the scan never started.
    #[error("cannot open `{path}`")]
    #[diagnostic(code(xtload::scan::source_unavailable))]
    SourceUnavailable {
        /// The file that was requested.
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failed while advancing the cursor; the scan drained and
    /// stopped at the failure point.
    #[error("read failed after {offset} bytes")]
    #[diagnostic(code(xtload::scan::read_failure))]
    ReadFailure {
        /// Bytes successfully consumed before the failed read.
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// End of input inside a quoted literal; the partial literal is
    /// discarded, never emitted.
    #[error("unterminated quoted literal at byte {offset}: no closing {delimiter}")]
    #[diagnostic(
        code(xtload::scan::unterminated_literal),
        help("quoted literals close with the quote that opened them; double the quote to embed it")
    )]
    UnterminatedLiteral {
        /// The quote character the literal opened with.
        delimiter: char,
        /// Offset of the opening quote.
        offset: u64,
    },

    /// A byte no production branch accepts, including a bare `-` that
    /// starts neither a comment nor a number.
    #[error("unexpected character `{}` at byte {offset}", .character.escape_default())]
    #[diagnostic(code(xtload::scan::unexpected_character))]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Offset of the offending character.
        offset: u64,
    },
}

impl ScanError {
    /// Byte offset at which the scan stopped, for failures detected
    /// mid-stream. `SourceUnavailable` has no offset: nothing was read.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        match self {
            Self::SourceUnavailable { .. } => None,
            Self::ReadFailure { offset, .. }
            | Self::UnterminatedLiteral { offset, .. }
            | Self::UnexpectedCharacter { offset, .. } => Some(*offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_messages() {
        let err = ScanError::SourceUnavailable {
            path: "models/missing.xtuml".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "cannot open `models/missing.xtuml`");

        let err = ScanError::ReadFailure {
            offset: 17,
            source: io::Error::other("disk error"),
        };
        assert_eq!(err.to_string(), "read failed after 17 bytes");

        let err = ScanError::UnterminatedLiteral {
            delimiter: '\'',
            offset: 4,
        };
        assert_eq!(
            err.to_string(),
            "unterminated quoted literal at byte 4: no closing '"
        );

        let err = ScanError::UnexpectedCharacter {
            character: '*',
            offset: 9,
        };
        assert_eq!(err.to_string(), "unexpected character `*` at byte 9");
    }

    #[test]
    fn unprintable_characters_are_escaped() {
        let err = ScanError::UnexpectedCharacter {
            character: '\u{1}',
            offset: 0,
        };
        assert_eq!(err.to_string(), "unexpected character `\\u{1}` at byte 0");
    }

    #[test]
    fn offsets() {
        let unavailable = ScanError::SourceUnavailable {
            path: "x".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(unavailable.offset(), None);

        let unterminated = ScanError::UnterminatedLiteral {
            delimiter: '"',
            offset: 12,
        };
        assert_eq!(unterminated.offset(), Some(12));
    }

    #[test]
    fn io_failures_chain_their_cause() {
        let err = ScanError::ReadFailure {
            offset: 0,
            source: io::Error::other("disk error"),
        };
        let cause = err.source().map(ToString::to_string);
        assert_eq!(cause.as_deref(), Some("disk error"));
    }
}
