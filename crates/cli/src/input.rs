//! Whitespace-token reader over any `BufRead`.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// One parsed operator entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Number(i64),
    /// `q` or `Q`.
    Quit,
    /// Input stream exhausted.
    Eof,
}

/// Splits input into whitespace-separated tokens, spanning lines.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next raw token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next integer or quit marker.
    ///
    /// Any other token is answered with `Invalid input` on `out` and skipped.
    pub fn next_input(&mut self, out: &mut impl Write) -> io::Result<Input> {
        loop {
            let Some(token) = self.next_token()? else {
                return Ok(Input::Eof);
            };
            if let Ok(n) = token.parse::<i64>() {
                return Ok(Input::Number(n));
            }
            if token.eq_ignore_ascii_case("q") {
                return Ok(Input::Quit);
            }
            tracing::debug!(token = %token, "unparsable input skipped");
            writeln!(out, "Invalid input")?;
        }
    }
}
