//! Scanning lowercase alphanumeric words out of a byte stream.
//!
//! A word is a run of ASCII letters and digits. Apostrophes inside a run
//! are dropped without ending the word, so `don't` scans as `dont`.
//! Every other byte separates words.
use crate::memory;
use std::io::{self, Bytes, Read};

/// Upper bound on what `read_word` reserves before it has seen the word.
const INITIAL_WORD_CAPACITY: usize = 32;

/// Buffer limit used when callers have no better bound.
/// At most `DEFAULT_WORD_LIMIT - 1` characters end up in a word.
pub const DEFAULT_WORD_LIMIT: usize = 256;

/// Reads successive words from a byte stream.
///
/// The reader pulls one byte at a time, so wrap unbuffered sources
/// (files, stdin) in a `BufReader` first.
pub struct WordReader<R> {
    bytes: Bytes<R>,
}

impl<R: Read> WordReader<R> {
    pub fn new(inner: R) -> Self {
        WordReader {
            bytes: inner.bytes(),
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }

    /// Read the next word into `buf`, replacing its previous content.
    ///
    /// At most `limit - 1` characters are written, mirroring a fixed buffer
    /// that keeps one position for a terminator. Returns the number of
    /// characters written, or `None` once the stream is exhausted.
    ///
    /// The byte that ends a word is consumed. A word cut short by the limit
    /// is not: the rest of the run is returned by the following call.
    ///
    /// Panics if `limit` is 0.
    pub fn read_word(&mut self, buf: &mut String, limit: usize) -> io::Result<Option<usize>> {
        assert!(limit > 0, "word limit must be at least 1");
        buf.clear();
        memory::reserve_str(buf, (limit - 1).min(INITIAL_WORD_CAPACITY));

        // skip everything up to the first character of the next word
        let first = loop {
            match self.next_byte()? {
                None => return Ok(None),
                Some(b) if b.is_ascii_alphanumeric() => break b,
                Some(_) => (),
            }
        };

        let mut budget = limit - 1;
        if budget == 0 {
            return Ok(Some(0));
        }
        buf.push(char::from(first.to_ascii_lowercase()));
        budget -= 1;

        while budget > 0 {
            match self.next_byte()? {
                Some(b) if b.is_ascii_alphanumeric() => {
                    buf.push(char::from(b.to_ascii_lowercase()));
                    budget -= 1;
                }
                // does not count against the limit
                Some(b'\'') => (),
                _ => break,
            }
        }
        Ok(Some(buf.len()))
    }

    /// Turn the reader into an iterator over owned words.
    pub fn words(self, limit: usize) -> Words<R> {
        Words {
            reader: self,
            limit,
        }
    }
}

/// Iterator returned by `WordReader::words`.
pub struct Words<R> {
    reader: WordReader<R>,
    limit: usize,
}

impl<R: Read> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = String::new();
        match self.reader.read_word(&mut word, self.limit) {
            Ok(Some(_)) => Some(Ok(word)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
