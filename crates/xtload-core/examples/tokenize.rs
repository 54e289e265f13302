// Copyright 2026 The xtload Authors
// SPDX-License-Identifier: Apache-2.0

//! Example demonstrating the scanning API.
//!
//! This example shows how to collect a token stream, feed a custom sink,
//! and handle the failure cases a host has to expect.

use xtload_core::scan::{Scanner, Token, TokenSink, tokenize};

/// A streaming consumer: tallies token kinds as they arrive instead of
/// storing the stream.
#[derive(Default)]
struct Stats {
    values: usize,
    identifiers: usize,
    comments: usize,
    punctuation: usize,
    complete: bool,
}

impl TokenSink for Stats {
    fn token(&mut self, token: Token) {
        match token {
            Token::Value(_) => self.values += 1,
            Token::Identifier(_) => self.identifiers += 1,
            Token::Comment(_) => self.comments += 1,
            _ => self.punctuation += 1,
        }
    }

    fn end_of_stream(&mut self) {
        self.complete = true;
    }
}

fn main() {
    println!("xtload Scanning Example\n");
    println!("=======================\n");

    // Example 1: collect a statement into a Vec
    println!("1. Collecting Tokens");
    let source = "INSERT INTO R805 VALUES (\"f81d4fae-7dec-11d0-a765-00a0c91e6bf6\", 'position', -4, 7.5);";
    println!("   Source: {source}");
    let tokens = tokenize(source).expect("well-formed statement");
    println!("   Tokens ({}):", tokens.len());
    for token in &tokens {
        println!("     - {token:?}");
    }
    println!();

    // Example 2: doubled quotes scan as one literal
    println!("2. Doubled Quotes");
    let tokens = tokenize("'it''s'").expect("well-formed literal");
    println!("   Source: 'it''s'");
    println!("   Scans to a single token: {:?}", tokens[0]);
    println!();

    // Example 3: a streaming sink
    println!("3. Streaming Consumer");
    let mut scanner = Scanner::new(Stats::default());
    scanner
        .scan_text("-- disposition\nINSERT INTO tbl VALUES (1, 'a');")
        .expect("well-formed statement");
    let stats = scanner.into_sink();
    println!(
        "   {} values, {} identifiers, {} comments, {} punctuation; complete: {}",
        stats.values, stats.identifiers, stats.comments, stats.punctuation, stats.complete
    );
    println!();

    // Example 4: malformed input
    println!("4. Malformed Input");
    match tokenize("INSERT INTO tbl VALUES ('oops") {
        Ok(_) => println!("   unexpectedly fine"),
        Err(err) => println!("   Error: {err} (offset {:?})", err.offset()),
    }
    println!();

    // Example 5: missing file
    println!("5. Missing File");
    let mut scanner = Scanner::new(Vec::new());
    match scanner.scan_file("does/not/exist.xtuml") {
        Ok(()) => println!("   unexpectedly fine"),
        Err(err) => println!("   Error: {err}"),
    }
    println!();

    println!("Scanning Example Complete!");
}
