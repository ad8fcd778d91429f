//! Byte-level tokenizer.
//!
//! A token is a maximal run of *meaningful* bytes: ASCII alphanumerics plus any byte with the
//! high bit set. The second rule keeps multi-byte UTF-8 sequences intact without decoding them.
//! Everything else separates tokens and is never part of one.
//!
//! The scan is forward-only and borrows the input; tokens are sub-slices, never copies.

use std::iter::FusedIterator;

/// True if `b` belongs to a token.
#[inline]
pub fn is_meaningful(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b & 0x80 != 0
}

/// Position of a token inside its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// Byte offset of the first token byte.
    pub start: usize,
    /// Number of bytes in the token (always >= 1).
    pub len: usize,
}

impl Token {
    /// The token's bytes within `data`.
    ///
    /// `data` must be the buffer the token was produced from.
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.start..self.start + self.len]
    }
}

/// Iterator over the tokens of a byte buffer, left to right.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    /// Start tokenizing `data` at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor: just past the last token returned, or past trailing separators
    /// once the iterator is exhausted.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Advance to the next token and return its span.
    pub fn next_span(&mut self) -> Option<Token> {
        let data = self.data;
        let mut start = self.pos;
        while start < data.len() && !is_meaningful(data[start]) {
            start += 1;
        }
        if start == data.len() {
            self.pos = start;
            return None;
        }

        let mut end = start + 1;
        while end < data.len() && is_meaningful(data[end]) {
            end += 1;
        }
        self.pos = end;
        Some(Token {
            start,
            len: end - start,
        })
    }

    /// Iterate over token spans instead of slices.
    pub fn spans(self) -> Spans<'a> {
        Spans(self)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.data;
        self.next_span().map(|t| t.slice(data))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Iterator over token spans; see [`Tokens::spans`].
#[derive(Debug, Clone)]
pub struct Spans<'a>(Tokens<'a>);

impl Iterator for Spans<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.0.next_span()
    }
}

impl FusedIterator for Spans<'_> {}

/// Tokenize `data`.
pub fn tokens(data: &[u8]) -> Tokens<'_> {
    Tokens::new(data)
}
