// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scanner crash safety testing.
//!
//! This target feeds arbitrary byte sequences to the scanner and asserts
//! that it never panics. Malformed input must come back as a `ScanError`,
//! never a crash.
//!
//! # Success Criteria
//!
//! The scanner passes fuzzing if:
//! - It never panics on any input (including invalid UTF-8)
//! - It always returns `Ok` with tokens or a single `ScanError`
//! - No assertions fail during scanning

#![no_main]

use libfuzzer_sys::fuzz_target;
use xtload_core::scan::{Scanner, tokenize};

fuzz_target!(|data: &[u8]| {
    // Raw bytes through the reader entry point.
    // Success = no panic. We don't care whether the scan errored.
    let mut scanner = Scanner::new(Vec::new());
    let _ = scanner.scan_reader(data);

    // The same bytes as text, when they are valid UTF-8.
    if let Ok(source) = std::str::from_utf8(data) {
        let _ = tokenize(source);
    }
});
