use clap::{Args, Command, FromArgMatches};
use lexiclash::config::{Config, DedupPolicy, ScoringParams};
use lexiclash::{LexiError, Scorer};
use std::fs;

fn parse_cli(args: &[&str]) -> (Config, clap::ArgMatches) {
    let cmd = Config::augment_args(Command::new("test"));
    let matches = cmd.try_get_matches_from(args).unwrap();
    let config = Config::from_arg_matches(&matches).unwrap();
    (config, matches)
}

#[test]
fn test_default_combo_table() {
    let table = ScoringParams::default().combo_table().unwrap();
    assert_eq!(table, vec![100, 110, 120, 140, 160, 180, 200]);
}

#[test]
fn test_custom_combo_table() {
    let params = ScoringParams {
        combo_multipliers: " 1, 1.5 ,3".to_string(),
        ..Default::default()
    };
    assert_eq!(params.combo_table().unwrap(), vec![100, 150, 300]);

    let scorer = Scorer::new(params).unwrap();
    assert_eq!(scorer.combo_multiplier(1), 1.5);
    assert_eq!(scorer.combo_multiplier(9), 3.0);
    assert_eq!(scorer.word_score("plans", 1), 6);
}

#[test]
fn test_rejects_bad_combo_table() {
    for bad in ["", "1.0,,1.2", "1.0,abc", "1.0,-1", "1.0,100.5", "1.0,1e12", "inf"] {
        let params = ScoringParams {
            combo_multipliers: bad.to_string(),
            ..Default::default()
        };
        assert!(
            matches!(params.combo_table(), Err(LexiError::Config(_))),
            "'{}' should be rejected",
            bad
        );
        assert!(Scorer::new(params).is_err());
    }
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexiclash.json");
    fs::write(
        &path,
        r#"{ "scoring": { "dedup": "normalized" }, "search": { "max_search_steps": 5000 } }"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.scoring.dedup, DedupPolicy::Normalized);
    assert_eq!(config.scoring.min_word_length, 2);
    assert_eq!(config.search.max_search_steps, Some(5000));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load_from_file(dir.path().join("nope.json"));
    assert!(matches!(result, Err(LexiError::Io(_))));
}

#[test]
fn test_cli_overrides_only_typed_flags() {
    let mut config = Config::default();
    config.scoring.min_word_length = 4;
    config.scoring.dedup = DedupPolicy::CaseInsensitive;

    let (cli, matches) = parse_cli(&["test", "--dedup", "normalized", "--max-search-steps", "10"]);
    config.merge_from_cli(&cli, &matches);

    assert_eq!(config.scoring.dedup, DedupPolicy::Normalized);
    assert_eq!(config.search.max_search_steps, Some(10));
    // Left at its clap default on the command line, so the file value wins.
    assert_eq!(config.scoring.min_word_length, 4);
}

#[test]
fn test_multiplier_ceiling_and_saturation() {
    let params = ScoringParams {
        combo_multipliers: "1.0,100".to_string(),
        ..Default::default()
    };
    let scorer = Scorer::new(params).unwrap();
    assert_eq!(scorer.params().combo_multipliers, "1.0,100");
    assert_eq!(scorer.combo_multiplier(1), 100.0);
    assert_eq!(scorer.word_score("plans", 1), 400);

    // Past u32 range the score pins at the maximum
    let huge = "x".repeat(45_000_000);
    assert_eq!(scorer.word_score(&huge, 1), u32::MAX);
    assert_eq!(scorer.word_score(&huge, 0), 44_999_999);
}
