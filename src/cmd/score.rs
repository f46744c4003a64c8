use crate::reports;
use clap::Args;
use lexiclash::config::Config;
use lexiclash::{LexiError, LexiResult, Scorer};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Submitted words, in order
    pub words: Vec<String>,

    /// Combo level per word, comma separated (missing levels count as 0)
    #[arg(long)]
    pub combos: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) -> LexiResult<()> {
    let levels = match &args.combos {
        Some(s) => Some(parse_levels(s)?),
        None => None,
    };

    let summary = scorer.score_words(&args.words, levels.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_score_summary(&summary);
    }
    Ok(())
}

fn parse_levels(s: &str) -> LexiResult<Vec<i32>> {
    s.split(',')
        .map(|p| {
            p.trim()
                .parse()
                .map_err(|_| LexiError::Config(format!("Invalid combo level '{}'", p.trim())))
        })
        .collect()
}
