//! Bounded input cursor with single-step putback.
//!
//! The cursor owns a fixed buffer of [`INPUT_CAPACITY`] bytes. At most
//! [`MAX_INPUT_LEN`] bytes are usable; the byte at `len` is always a `0x00`
//! sentinel. Unlike a C string, the sentinel is not how end of input is
//! detected: [`InputCursor::next_byte`] compares the position against
//! `len`, so interior null bytes are ordinary input.
//!
//! # Position Invariant
//!
//! `0 <= pos <= len`. The position only moves forward, except for
//! [`InputCursor::putback`], which rewinds exactly one byte and never goes
//! below zero.

use crate::token::Span;

/// Total buffer size, including the sentinel slot.
pub const INPUT_CAPACITY: usize = 100;

/// Longest input kept by [`InputCursor::set_input`]. Longer input is truncated.
pub const MAX_INPUT_LEN: usize = INPUT_CAPACITY - 1;

/// Caller-owned scanning session over a bounded byte buffer.
#[derive(Clone, Debug)]
pub struct InputCursor {
    /// Input bytes followed by zero fill.
    buf: [u8; INPUT_CAPACITY],
    /// Number of input bytes kept (at most [`MAX_INPUT_LEN`]).
    len: usize,
    /// Next byte to read.
    pos: usize,
}

impl Default for InputCursor {
    fn default() -> Self {
        Self {
            buf: [0; INPUT_CAPACITY],
            len: 0,
            pos: 0,
        }
    }
}

impl InputCursor {
    /// Create a cursor loaded with `text`.
    pub fn new(text: &str) -> Self {
        let mut cursor = Self::default();
        cursor.set_input(text);
        cursor
    }

    /// Replace the session: copy at most [`MAX_INPUT_LEN`] bytes of `text`
    /// and rewind to position 0.
    ///
    /// Truncation is by byte, so a multi-byte character straddling the
    /// limit is cut. Every byte classifies as something, so this is harmless.
    pub fn set_input(&mut self, text: &str) {
        let bytes = text.as_bytes();
        let len = bytes.len().min(MAX_INPUT_LEN);
        if len < bytes.len() {
            tracing::debug!(
                given = bytes.len(),
                kept = len,
                "input truncated to cursor capacity"
            );
        }
        self.buf = [0; INPUT_CAPACITY];
        self.buf[..len].copy_from_slice(&bytes[..len]);
        self.len = len;
        self.pos = 0;
    }

    /// Read the byte at the current position and advance.
    ///
    /// Returns `None` once the input is exhausted; the position does not
    /// move past `len`.
    #[inline]
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.current()?;
        self.pos += 1;
        Some(byte)
    }

    /// Byte at the current position, without advancing.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        if self.pos < self.len {
            Some(self.buf[self.pos])
        } else {
            None
        }
    }

    /// Rewind one byte so the last byte read is returned again.
    ///
    /// No-op at position 0.
    #[inline]
    pub fn putback(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    /// Skip ASCII blanks (space, tab, CR, LF). Returns the number skipped.
    pub fn eat_blanks(&mut self) -> usize {
        let start = self.pos;
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.current() {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Current read position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of input bytes kept.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no input bytes are loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` once every input byte has been read.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// The loaded input, without the sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> &[u8] {
        &self.buf[self.pos..self.len]
    }

    /// Bytes covered by `span`, clamped to the loaded input.
    pub fn slice(&self, span: Span) -> &[u8] {
        let end = span.end.min(self.len);
        let start = span.start.min(end);
        &self.buf[start..end]
    }
}

#[cfg(test)]
mod tests;
