// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! xtUML model-load tooling core.
//!
//! This crate contains the scanning front of the model-load pipeline:
//! - Lexical scanning of model-load streams (tokenization)
//! - The consumer seam the token stream is pushed through
//! - Scan failure reporting
//!
//! Sources come from in-memory text, files, or any byte reader; what the
//! tokens mean is the consumer's business.

#![doc = include_str!("../../../README.md")]

pub mod scan;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::scan::{ScanError, Scanner, Token, TokenSink, tokenize};
}
