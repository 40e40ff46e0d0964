//! word-htable -- a fixed-capacity open addressing table of word counts
//!
//! Words are folded into a 32-bit hash with a base-31 polynomial,
//! wrapping on overflow:
//!
//! hash("ab") = 'b' + 31 * ('a' + 31 * 0)
//!
//! Probing reuses one step function for the first slot and every
//! following one:
//!
//! step(x) = 1 + (x mod (capacity - 1))
//!
//! |   0   |   1   |   2   |  ...  | capacity - 1 |
//! | never |<---------- probed slots ------------>|
//!
//! The first probe is step(hash(word)), after that step(current slot).
//! For a slot i < capacity - 1 this is i + 1, the last slot wraps back
//! to slot 1. Slot 0 is never handed out, so a table of capacity c holds
//! at most c - 1 distinct words. The table never grows; once it is full,
//! new words are rejected while known words keep counting.
//!
mod error;
pub mod logger;
pub mod memory;
pub mod tokenizer;

pub use error::TableError;
pub use tokenizer::{WordReader, Words, DEFAULT_WORD_LIMIT};

use log::debug;
use std::io::{self, Write};

/// Result of walking the probe sequence of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The word is stored at this slot.
    Match(usize),
    /// The sequence reached this empty slot before finding the word.
    Vacant(usize),
    /// The probe bound ran out on occupied, non-matching slots.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordTable {
    capacity: usize,
    num_keys: usize,
    keys: Vec<Option<Box<str>>>,
    frequencies: Vec<u32>,
}

impl WordTable {
    /// Create a table with `capacity` slots, all of them empty.
    ///
    /// The step function reduces modulo `capacity - 1`, so at least two
    /// slots are required. Probe coverage is best for prime capacities.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        if capacity < 2 {
            return Err(TableError::CapacityTooSmall { capacity });
        }
        debug!("Creating word table with {} slots", capacity);
        Ok(WordTable {
            capacity,
            num_keys: 0,
            keys: memory::allocate_slots(capacity, None),
            frequencies: memory::allocate_slots(capacity, 0),
        })
    }

    /// Number of slots. Fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Compute the load factor.
    pub fn fill_rate(&self) -> f64 {
        self.num_keys as f64 / self.capacity as f64
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Hashing and probing
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

    /// Fold a word into an unsigned integer, base 31.
    /// Overflow wraps around and is part of the hash.
    /// Bytes are folded as unsigned values, which only matters for non-ASCII words.
    fn word_to_int(word: &str) -> u32 {
        word.bytes()
            .fold(0_u32, |hash, b| u32::from(b).wrapping_add(hash.wrapping_mul(31)))
    }

    /// Map a hash or a slot index to the next slot to probe.
    #[inline]
    fn step(&self, key: u64) -> usize {
        let next = 1 + (key % (self.capacity as u64 - 1));
        next as usize % self.capacity
    }

    /// Walk the probe sequence of `word` for at most `max_probes` slots.
    ///
    /// Search and insert share this walk so that a word is always looked
    /// up along the same slots it was stored on.
    fn probe(&self, word: &str, max_probes: usize) -> Probe {
        let mut position = self.step(u64::from(WordTable::word_to_int(word)));
        for _ in 0..max_probes {
            match &self.keys[position] {
                None => return Probe::Vacant(position),
                Some(key) if &**key == word => return Probe::Match(position),
                Some(_) => position = self.step(position as u64),
            }
        }
        Probe::Exhausted
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Basic operation
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

    /// Get the count for `word`, 0 if it is not in the table.
    pub fn search(&self, word: &str) -> u32 {
        match self.probe(word, self.capacity) {
            Probe::Match(position) => self.frequencies[position],
            Probe::Vacant(_) | Probe::Exhausted => 0,
        }
    }

    /// Get the count for `word`, or None if it is not in the table.
    pub fn get_count(&self, word: &str) -> Option<u32> {
        match self.search(word) {
            0 => None,
            count => Some(count),
        }
    }

    /// Count one occurrence of `word` and return its new count.
    ///
    /// Counts saturate at `u32::MAX`.
    /// A word not yet present claims the first empty slot on its probe
    /// sequence and starts at 1. Fails with `TableError::Full` when
    /// `capacity + 1` probes hit neither the word nor an empty slot.
    pub fn try_insert(&mut self, word: &str) -> Result<u32, TableError> {
        if word.is_empty() {
            return Err(TableError::EmptyWord);
        }
        match self.probe(word, self.capacity + 1) {
            Probe::Vacant(position) => {
                self.keys[position] = Some(memory::allocate_str(word));
                self.frequencies[position] = 1;
                self.num_keys += 1;
                Ok(1)
            }
            Probe::Match(position) => {
                // a count never wraps back to the 0 sentinel
                let count = self.frequencies[position].saturating_add(1);
                self.frequencies[position] = count;
                Ok(count)
            }
            Probe::Exhausted => {
                debug!(
                    "No slot left for {:?} ({} of {} slots used)",
                    word, self.num_keys, self.capacity
                );
                Err(TableError::Full {
                    capacity: self.capacity,
                })
            }
        }
    }

    /// Count one occurrence of `word` and return its new count.
    ///
    /// Returns 0 if the word could not be stored. An occupied slot never
    /// has a count of 0, so 0 always means "not inserted".
    pub fn insert(&mut self, word: &str) -> u32 {
        self.try_insert(word).unwrap_or(0)
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    // Enumeration and output
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

    /// Occupied slots as (slot, frequency, word), in slot order.
    fn occupied(&self) -> impl Iterator<Item = (usize, u32, &str)> + '_ {
        self.keys
            .iter()
            .zip(self.frequencies.iter())
            .enumerate()
            .filter_map(|(slot, (key, &frequency))| {
                key.as_deref().map(|word| (slot, frequency, word))
            })
    }

    /// Iterate over (frequency, word) pairs in slot order.
    /// This is not insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.occupied().map(|(_, frequency, word)| (frequency, word))
    }

    /// Call `f` with (frequency, word) for every occupied slot, in slot order.
    pub fn for_each_occupied<F>(&self, mut f: F)
    where
        F: FnMut(u32, &str),
    {
        for (frequency, word) in self.iter() {
            f(frequency, word);
        }
    }

    /// Write one `frequency, word` line per occupied slot.
    pub fn print<W: Write>(&self, stream: &mut W) -> io::Result<()> {
        for (frequency, word) in self.iter() {
            writeln!(stream, "{}, {}", frequency, word)?;
        }
        Ok(())
    }

    /// Write every occupied slot with its index, padded to fixed width.
    ///
    /// Format per line: slot, slot, frequency (5 columns each), word.
    pub fn print_entire_table<W: Write>(&self, stream: &mut W) -> io::Result<()> {
        for (slot, frequency, word) in self.occupied() {
            writeln!(stream, "{:5} {:5} {:5}   {}", slot, slot, frequency, word)?;
        }
        Ok(())
    }

    /// Release all stored words and both slot arrays.
    ///
    /// Dropping the table has the same effect; this only makes the end of
    /// its lifetime explicit at the call site.
    pub fn free(self) {
        debug!(
            "Freeing word table ({} of {} slots used)",
            self.num_keys, self.capacity
        );
    }
}
