use crate::reports;
use clap::Args;
use lexiclash::config::Config;
use lexiclash::dictionary::Dictionary;
use lexiclash::solver;
use lexiclash::{Board, BoardIndex, LexiResult, Scorer};
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    #[command(flatten)]
    pub config: Config,

    /// Board file (.json grid or plain text)
    #[arg(short, long)]
    pub board: String,

    /// Word list, one word per line
    #[arg(short = 'w', long)]
    pub dict: String,

    /// Rows to print
    #[arg(short, long, default_value_t = 50)]
    pub limit: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SolveArgs, scorer: &Scorer) -> LexiResult<()> {
    let board = Board::load_from_file(&args.board)?;
    let dictionary = Dictionary::load_from_file(&args.dict)?;
    info!("📖 {} words loaded from {}", dictionary.len(), args.dict);

    let start = Instant::now();
    let index = BoardIndex::build(&board);
    let solved = solver::solve(&board, &index, &dictionary, scorer.params().min_word_length);
    info!("⏱️  Solved in {:.2?}", start.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solved)?);
        return Ok(());
    }

    reports::print_board(&board, None);
    reports::print_solutions(&solved, args.limit);
    Ok(())
}
