//! Parses a board encoding from the command line and reports the winner.
//!
//! ```text
//! cargo run --example declare -- "x,x,x,o,o, , , , "
//! ```

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use winline::{Board, Mark, declare_winner};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let encoding = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "o, ,x,o,x, ,x, , ".to_string());
    let board: Board = encoding.parse()?;

    println!("{board}");
    match declare_winner(&board) {
        Mark::Empty => println!("no winner"),
        winner => println!("winner: {winner}"),
    }

    Ok(())
}
