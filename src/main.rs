//! Wordle Hints - CLI
//!
//! Narrows a dictionary to the words consistent with the board feedback you
//! describe on the command line.

use anyhow::{Context, Result};
use clap::Parser;
use wordle_hints::{
    board::parse_board, commands::find_hints, logging::init_logger, output::print_hints_result,
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Filter a word list down to the candidates consistent with board feedback",
    version,
    author
)]
struct Cli {
    /// Dictionary file, one word per line
    #[arg(short = 'w', long, default_value = "dictionary.txt")]
    wordlist: String,

    /// Board width in tiles
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// A guessed row with per-tile marks, e.g. CRANE:cp--a (c/g=correct, p/y=present, a/-=absent)
    #[arg(short = 'r', long = "row")]
    rows: Vec<String>,

    /// A single tile reading LETTER:POSITION:KIND, e.g. A:0:correct
    #[arg(short = 't', long = "tile")]
    tiles: Vec<String>,

    /// Show at most this many matching words
    #[arg(short, long)]
    limit: Option<usize>,

    /// Enable debug logging (rule consolidation details)
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let dictionary = load_from_file(&cli.wordlist, cli.width)
        .with_context(|| format!("Failed to read wordlist '{}'", cli.wordlist))?;
    anyhow::ensure!(
        !dictionary.is_empty(),
        "Wordlist '{}' contains no words of width {}",
        cli.wordlist,
        cli.width
    );

    let observations =
        parse_board(&cli.rows, &cli.tiles, cli.width).context("Invalid board description")?;

    let result = find_hints(&dictionary, observations);
    print_hints_result(&result, cli.limit);

    Ok(())
}
