use crate::reports;
use clap::Args;
use lexiclash::api::{self, BoardCache, SubmissionOutcome};
use lexiclash::config::Config;
use lexiclash::{Board, Cell, LexiError, LexiResult, Scorer, SearchLimits};

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    #[command(flatten)]
    pub config: Config,

    /// Board file (.json grid or plain text)
    #[arg(short, long)]
    pub board: String,

    /// Words to look for
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Combo level applied to every word
    #[arg(short = 'c', long, default_value_t = 0, allow_negative_numbers = true)]
    pub combo: i32,

    /// Verify this traced path ("row,col row,col ...") for the first word
    /// instead of searching
    #[arg(long)]
    pub trace: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: FindArgs, config: &Config, scorer: &Scorer) -> LexiResult<()> {
    let board = Board::load_from_file(&args.board)?;
    let cache = BoardCache::new();
    let limits = SearchLimits {
        max_steps: config.search.max_search_steps,
    };

    let outcomes: Vec<SubmissionOutcome> = match &args.trace {
        Some(trace) => {
            let cells = parse_trace(trace)?;
            vec![api::verify_claimed_path(
                &board,
                &args.words[0],
                cells,
                args.combo,
                scorer,
            )]
        }
        None => args
            .words
            .iter()
            .map(|w| api::validate_submission(&board, w, args.combo, scorer, &cache, limits))
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    let highlight = match outcomes.as_slice() {
        [only] => only.path.as_ref(),
        _ => None,
    };
    reports::print_board(&board, highlight);
    reports::print_submissions(&outcomes);
    Ok(())
}

fn parse_trace(trace: &str) -> LexiResult<Vec<Cell>> {
    trace
        .split_whitespace()
        .map(|pair| {
            let (r, c) = pair
                .split_once(',')
                .ok_or_else(|| LexiError::Config(format!("Bad trace step '{}'", pair)))?;
            let row = r
                .trim()
                .parse()
                .map_err(|_| LexiError::Config(format!("Bad row in trace step '{}'", pair)))?;
            let col = c
                .trim()
                .parse()
                .map_err(|_| LexiError::Config(format!("Bad column in trace step '{}'", pair)))?;
            Ok(Cell::new(row, col))
        })
        .collect()
}
