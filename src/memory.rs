//! Fail-fast allocation helpers.
//!
//! Running out of memory is not something the table or the tokenizer
//! can recover from. Every helper here either hands back the requested
//! storage or terminates the process after a diagnostic; there is no
//! error value for callers to check.
use std::process;

const ALLOCATION_FAILED: &str = "Memory allocation failed.";

fn allocation_failed() -> ! {
    eprintln!("{}", ALLOCATION_FAILED);
    process::exit(1);
}

/// Allocate exactly `len` slots, each initialized to `fill`.
pub fn allocate_slots<T: Clone>(len: usize, fill: T) -> Vec<T> {
    let mut slots = Vec::new();
    if slots.try_reserve_exact(len).is_err() {
        allocation_failed();
    }
    slots.resize(len, fill);
    slots
}

/// Copy `word` into newly allocated owned storage.
pub fn allocate_str(word: &str) -> Box<str> {
    let mut owned = String::new();
    if owned.try_reserve_exact(word.len()).is_err() {
        allocation_failed();
    }
    owned.push_str(word);
    owned.into_boxed_str()
}

/// Make room for at least `additional` more bytes in `buf`.
pub fn reserve_str(buf: &mut String, additional: usize) {
    if buf.try_reserve(additional).is_err() {
        allocation_failed();
    }
}
