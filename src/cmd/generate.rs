use crate::reports;
use clap::Args;
use lexiclash::generator::generate_board;
use lexiclash::lang::Language;
use lexiclash::LexiResult;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(short = 'L', long, default_value_t = Language::English)]
    pub lang: Language,

    #[arg(short, long, default_value_t = 4)]
    pub rows: usize,

    #[arg(short, long, default_value_t = 4)]
    pub cols: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the board as JSON to this file
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: GenerateArgs) -> LexiResult<()> {
    let mut rng = match args.seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let board = generate_board(&mut rng, args.lang, args.rows, args.cols)?;

    match &args.out {
        Some(path) => {
            fs::write(path, serde_json::to_string(&board)?)?;
            info!("💾 Board {} written to {}", board.fingerprint(), path);
        }
        None => reports::print_board(&board, None),
    }
    Ok(())
}
