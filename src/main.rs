use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use pairdex::{input, matcher, report};

#[derive(Debug, Parser)]
#[command(version, about = "Match Russian strings against English text|comment entries by affinity index")]
struct Args {
    /// File with one Russian string per line
    russian_file: PathBuf,

    /// File with one English text|comment entry per line
    english_file: PathBuf,

    /// Character separating English text from its comment
    #[clap(short, long, default_value_t = '|')]
    delimiter: char,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let ru_lines = input::read_lines(&args.russian_file)?;
    let en_lines = input::read_lines(&args.english_file)?;

    let mut ru_entries = input::parse_russian(ru_lines);
    let mut en_entries = input::parse_english(en_lines, args.delimiter)?;

    let started = Instant::now();

    for entry in &mut ru_entries {
        entry.score();
    }
    for entry in &mut en_entries {
        entry.score();
    }

    matcher::sort_russian(&mut ru_entries);
    matcher::sort_english(&mut en_entries);

    let pairings = report::pair_entries(&ru_entries, &en_entries);
    let elapsed = started.elapsed();

    for pairing in &pairings {
        println!("{}", pairing);
        println!();
    }
    println!("elapsed: {} ms", elapsed.as_millis());

    Ok(())
}
