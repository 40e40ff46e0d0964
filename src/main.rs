use clap::builder::RangedU64ValueParser;
use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use thiserror::Error;
use word_htable::logger::initialize_logger;
use word_htable::{TableError, WordReader, WordTable, DEFAULT_WORD_LIMIT};

/// Count word frequencies in a fixed-size hash table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of slots in the table. It never grows.
    #[arg(short, long, default_value_t = 113)]
    capacity: usize,

    /// Print slot indices along with every entry.
    #[arg(short, long)]
    entire: bool,

    /// Word buffer limit; longer words are split.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WORD_LIMIT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    limit: usize,

    /// Read words from this file instead of stdin.
    file: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn count_words<R: Read>(table: &mut WordTable, input: R, limit: usize) -> Result<usize, CliError> {
    let mut reader = WordReader::new(input);
    let mut word = String::new();
    let mut dropped = 0;

    while reader.read_word(&mut word, limit)?.is_some() {
        if word.is_empty() {
            continue;
        }
        match table.try_insert(&word) {
            Ok(_) => (),
            Err(TableError::Full { capacity }) => {
                if dropped == 0 {
                    warn!(
                        "Table with {} slots is full, new words are not counted",
                        capacity
                    );
                }
                dropped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(dropped)
}

fn run(args: Args) -> Result<(), CliError> {
    let mut table = WordTable::new(args.capacity)?;

    let dropped = match &args.file {
        Some(path) => count_words(&mut table, BufReader::new(File::open(path)?), args.limit)?,
        None => count_words(&mut table, BufReader::new(io::stdin().lock()), args.limit)?,
    };
    if dropped > 0 {
        info!("{} words were not counted", dropped);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.entire {
        table.print_entire_table(&mut out)?;
    } else {
        table.print(&mut out)?;
    }
    out.flush()?;

    table.free();
    Ok(())
}

fn main() -> Result<(), CliError> {
    initialize_logger();
    run(Args::parse())
}
