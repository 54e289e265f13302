// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! Single-byte lookahead over a readable source.
//!
//! The cursor is the only scanning state carried between token-production
//! steps: one buffered byte (`None` once the source is exhausted) and the
//! count of bytes consumed so far. Reads happen one byte at a time, so the
//! lookahead never runs ahead of what the scanner has committed to.

use std::io::{self, Read};

/// A consuming cursor with one byte of lookahead.
///
/// The lookahead invariant holds from construction onward: before every
/// classification decision, [`peek`](Cursor::peek) is the next unconsumed
/// byte of the source, or `None` at end of input. Construction primes the
/// lookahead with the first byte.
///
/// A failed read is not raised to the caller mid-scan. The cursor records
/// the error, treats the stream as exhausted, and never touches the source
/// again; the scan loop drains normally and reports the recorded failure
/// once cleanup is done.
#[derive(Debug)]
pub struct Cursor<R> {
    input: R,
    lookahead: Option<u8>,
    offset: u64,
    failure: Option<io::Error>,
}

impl<R: Read> Cursor<R> {
    /// Creates a cursor over `input` and primes the lookahead.
    pub fn new(input: R) -> Self {
        let mut cursor = Self {
            input,
            lookahead: None,
            offset: 0,
            failure: None,
        };
        cursor.lookahead = cursor.fill();
        cursor
    }

    /// Returns the lookahead byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.lookahead
    }

    /// Consumes and returns the lookahead byte, then refills the lookahead
    /// from the source. Returns `None` at end of input.
    pub fn advance(&mut self) -> Option<u8> {
        let current = self.lookahead.take()?;
        self.offset += 1;
        self.lookahead = self.fill();
        Some(current)
    }

    /// Returns `true` once the lookahead has reached end of input.
    pub fn at_end(&self) -> bool {
        self.lookahead.is_none()
    }

    /// Number of bytes consumed so far; equivalently, the stream position
    /// of the current lookahead byte.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Takes the read failure recorded while advancing, if any.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }

    /// Reads the next byte from the source. Interrupted reads are retried;
    /// any other error marks the stream exhausted and is recorded.
    fn fill(&mut self) -> Option<u8> {
        if self.failure.is_some() {
            return None;
        }
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.failure = Some(e);
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves `data`, then fails every subsequent read.
    struct FailingReader {
        data: &'static [u8],
        pos: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos < self.data.len() {
                buf[0] = self.data[self.pos];
                self.pos += 1;
                Ok(1)
            } else {
                Err(io::Error::other("backing store went away"))
            }
        }
    }

    /// Reports `Interrupted` once, then serves `data`.
    struct InterruptedReader {
        data: &'static [u8],
        pos: usize,
        interrupted: bool,
    }

    impl Read for InterruptedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            if self.pos < self.data.len() {
                buf[0] = self.data[self.pos];
                self.pos += 1;
                Ok(1)
            } else {
                Ok(0)
            }
        }
    }

    #[test]
    fn advances_through_bytes_in_order() {
        let mut cursor = Cursor::new(b"ab".as_slice());
        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.offset(), 0);

        assert_eq!(cursor.advance(), Some(b'a'));
        assert_eq!(cursor.peek(), Some(b'b'));
        assert_eq!(cursor.offset(), 1);

        assert_eq!(cursor.advance(), Some(b'b'));
        assert!(cursor.at_end());
        assert_eq!(cursor.offset(), 2);

        // exhausted cursor stays exhausted
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.offset(), 2);
        assert!(cursor.take_failure().is_none());
    }

    #[test]
    fn empty_input_is_end_immediately() {
        let cursor = Cursor::new(b"".as_slice());
        assert!(cursor.at_end());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn read_failure_exhausts_the_stream() {
        let mut cursor = Cursor::new(FailingReader { data: b"ab", pos: 0 });
        assert_eq!(cursor.advance(), Some(b'a'));
        assert_eq!(cursor.advance(), Some(b'b'));

        // the refill after 'b' hit the error
        assert!(cursor.at_end());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.offset(), 2);

        let failure = cursor.take_failure();
        assert!(failure.is_some());
        // the failure is reported once
        assert!(cursor.take_failure().is_none());
    }

    #[test]
    fn failure_on_first_read_is_recorded() {
        let mut cursor = Cursor::new(FailingReader { data: b"", pos: 0 });
        assert!(cursor.at_end());
        assert!(cursor.take_failure().is_some());
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let mut cursor = Cursor::new(InterruptedReader {
            data: b"x",
            pos: 0,
            interrupted: false,
        });
        assert_eq!(cursor.advance(), Some(b'x'));
        assert!(cursor.at_end());
        assert!(cursor.take_failure().is_none());
    }
}
