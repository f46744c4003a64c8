use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use lexiclash::config::Config;
use lexiclash::Scorer;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "LexiClash board engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring/search settings. Flags typed on the command
    /// line take precedence over it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check words against a board
    Find(cmd::find::FindArgs),
    /// Score a list of submitted words
    Score(cmd::score::ScoreArgs),
    /// List every dictionary word on a board
    Solve(cmd::solve::SolveArgs),
    /// Generate a random board
    Generate(cmd::generate::GenerateArgs),
}

fn resolve_config(cli_config: &Config, file: Option<&str>, sub_matches: &ArgMatches) -> Config {
    let Some(path) = file else {
        return cli_config.clone();
    };

    info!("⚙️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path).unwrap_or_else(|e| {
        error!("Failed to load config '{}': {}", path, e);
        process::exit(1);
    });
    config.merge_from_cli(cli_config, sub_matches);
    config
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Find(args) => (Some(&args.config), "find"),
        Commands::Score(args) => (Some(&args.config), "score"),
        Commands::Solve(args) => (Some(&args.config), "solve"),
        Commands::Generate(_) => (None, "generate"),
    };

    let config = match (cli_config, matches.subcommand_matches(sub_name)) {
        (Some(c), Some(sub_matches)) => resolve_config(c, cli.config.as_deref(), sub_matches),
        _ => Config::default(),
    };

    let scorer = Scorer::new(config.scoring.clone()).unwrap_or_else(|e| {
        error!("❌ Invalid scoring settings: {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Find(args) => cmd::find::run(args, &config, &scorer),
        Commands::Score(args) => cmd::score::run(args, &scorer),
        Commands::Solve(args) => cmd::solve::run(args, &scorer),
        Commands::Generate(args) => cmd::generate::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
