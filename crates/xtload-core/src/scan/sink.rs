// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! The consumer seam for scanned tokens.
//!
//! A scan pushes tokens outward: the scanner calls its sink once per token,
//! synchronously, in source order, on the caller's thread. Consumers range
//! from full statement parsers down to `Vec<Token>`, which collects the
//! stream for later inspection and is the natural sink for tests.

use super::Token;

/// Receives the token stream produced by a scan.
///
/// Implementations must not assume anything beyond the call order: one
/// [`token`](TokenSink::token) call per token, in source order, followed by
/// exactly one [`end_of_stream`](TokenSink::end_of_stream) call if (and only
/// if) the scan reached the end of its source without failing. A scan that
/// returns an error delivers every token produced before the failure point
/// and no end-of-stream notification.
pub trait TokenSink {
    /// Called once per scanned token, in source order.
    fn token(&mut self, token: Token);

    /// Called once when the source is exhausted and the scan succeeded.
    ///
    /// The default body does nothing; consumers that only care about the
    /// tokens themselves can ignore this notification.
    fn end_of_stream(&mut self) {}
}

/// Collects the token stream; the end-of-stream notification is dropped.
impl TokenSink for Vec<Token> {
    fn token(&mut self, token: Token) {
        self.push(token);
    }
}
