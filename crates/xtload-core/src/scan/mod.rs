// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! Lexical scanning of model-load streams.
//!
//! This module contains the scanner, its token types, and the consumer
//! seam the token stream is pushed through.
//!
//! # Scanning
//!
//! A [`Scanner`] reads one byte source per invocation — in-memory text, a
//! file, or any [`Read`](std::io::Read) — and reports each token to its
//! [`TokenSink`] as it is recognized. `Vec<Token>` is a sink, so collecting
//! a stream needs no ceremony:
//!
//! ```
//! use xtload_core::scan::{tokenize, Token};
//!
//! let tokens = tokenize("INSERT INTO R805 VALUES (-4);")?;
//! assert_eq!(tokens.len(), 8);
//! assert!(tokens[4].is_punctuation());
//! assert_eq!(tokens[5], Token::Value("-4".into()));
//! # Ok::<(), xtload_core::scan::ScanError>(())
//! ```
//!
//! See [`Scanner`] for the production rules and [`Token`] for the token
//! shapes of the format.
//!
//! # Error Handling
//!
//! A scan stops at its first failure and returns it as a [`ScanError`];
//! tokens recognized before the failure point have already been delivered,
//! and the source is released on every path. I/O failures chain their
//! underlying cause; lexical failures carry the byte offset where scanning
//! stopped.

mod cursor;
mod error;
mod scanner;
mod sink;
mod token;


pub use error::ScanError;
pub use scanner::{Scanner, tokenize};
pub use sink::TokenSink;
pub use token::Token;
