// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! Token types for model-load stream scanning.
//!
//! This module defines the tagged token value the scanner hands to its
//! consumer, one call per token, in source order.
//!
//! # Token Shapes
//!
//! Model-load streams are SQL-like instance dumps, so the token set is
//! deliberately small:
//!
//! - `'name'` and `"f81d4fae-…"` quoted literals, and `-17` / `3.14`
//!   numeric literals, all emitted as [`Token::Value`]
//! - `INSERT`, `R805`, table and keyword names as [`Token::Identifier`]
//! - `-- comment` lines as [`Token::Comment`]
//! - `,` `(` `)` `;` punctuation
//!
//! Quoted payloads keep their delimiters verbatim; the consumer decides
//! what a value means (the scanner does not distinguish integers from
//! reals, nor enforce UUID shape on double-quoted literals). Tokens are
//! cheap to clone ([`EcoString`] payloads), so capture-style consumers can
//! store them freely.

use ecow::EcoString;

/// A classified lexical unit from a model-load stream.
///
/// Tokens are ephemeral: the scanner produces one, hands it to the
/// consumer, and retains no history. [`Display`](std::fmt::Display)
/// renders exactly the payload-contributing characters, so concatenating
/// the rendering of every token from a scan reproduces the input with
/// whitespace removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A literal value: a quoted string with its delimiters verbatim
    /// (`'name'`, `"f81d4fae-7dec-11d0-a765-00a0c91e6bf6"`) or a numeric
    /// literal (`42`, `-17`, `3.14`).
    Value(EcoString),

    /// An identifier: `INSERT`, `R805`, `my_table`.
    Identifier(EcoString),

    /// A `--` line comment, both dashes included, line terminator excluded.
    Comment(EcoString),

    /// Value separator: `,`
    Comma,

    /// Left parenthesis: `(`
    LeftParen,

    /// Right parenthesis: `)`
    RightParen,

    /// Statement terminator: `;`
    Semicolon,
}

impl Token {
    /// Returns `true` if this token is a literal value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this token is an identifier.
    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }

    /// Returns `true` if this token is a comment.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns `true` if this token is punctuation.
    #[must_use]
    pub const fn is_punctuation(&self) -> bool {
        matches!(
            self,
            Self::Comma | Self::LeftParen | Self::RightParen | Self::Semicolon
        )
    }

    /// Returns the payload text if this token carries one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(s) | Self::Identifier(s) | Self::Comment(s) => Some(s),
            Self::Comma | Self::LeftParen | Self::RightParen | Self::Semicolon => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Payload-carrying tokens display their text verbatim; quoted
            // values already contain their delimiters.
            Self::Value(s) | Self::Identifier(s) | Self::Comment(s) => write!(f, "{s}"),
            // Fixed-text tokens
            Self::Comma => write!(f, ","),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Semicolon => write!(f, ";"),
        }
    }
}
