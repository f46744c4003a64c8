use lexiclash::api::{validate_submission, verify_claimed_path, BoardCache, RejectReason};
use lexiclash::config::ScoringParams;
use lexiclash::{Board, Cell, Scorer, SearchLimits};
use std::sync::Arc;

fn board() -> Board {
    Board::parse("plan\nxzsq\nwert\nyuio").unwrap()
}

#[test]
fn test_cache_shares_one_index_per_board() {
    let cache = BoardCache::new();
    let board = board();
    let first = cache.index_for(&board);
    let second = cache.index_for(&Board::parse("p l a n\nx z s q\nw e r t\ny u i o").unwrap());
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    cache.index_for(&Board::parse("ab\ncd").unwrap());
    assert_eq!(cache.len(), 2);

    assert!(cache.evict(board.fingerprint()));
    assert!(!cache.evict(board.fingerprint()));
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_accepts_word_on_board() {
    let cache = BoardCache::new();
    let scorer = Scorer::default();
    let outcome = validate_submission(&board(), "plans", 3, &scorer, &cache, SearchLimits::unbounded());

    assert!(outcome.accepted);
    assert_eq!(outcome.reason, None);
    assert_eq!(outcome.score, 5);
    assert_eq!(outcome.combo_level, 3);
    assert_eq!(outcome.path.map(|p| p.len()), Some(5));
}

#[test]
fn test_rejections() {
    let cache = BoardCache::new();
    let scorer = Scorer::new(ScoringParams {
        min_word_length: 3,
        ..Default::default()
    })
    .unwrap();
    let board = board();

    let short = validate_submission(&board, "pl", 0, &scorer, &cache, SearchLimits::unbounded());
    assert_eq!(short.reason, Some(RejectReason::TooShort));
    // Rejected before any index is built
    assert!(cache.is_empty());

    let missing = validate_submission(&board, "plank", 0, &scorer, &cache, SearchLimits::unbounded());
    assert!(!missing.accepted);
    assert_eq!(missing.reason, Some(RejectReason::NotOnBoard));
    assert_eq!(missing.score, 0);
    assert_eq!(missing.path, None);
}

#[test]
fn test_search_budget_rejects() {
    let cache = BoardCache::new();
    let scorer = Scorer::default();
    let board = Board::parse("aaaa\naaaa\naabb\naabc").unwrap();
    let outcome = validate_submission(&board, "aaaaac", 0, &scorer, &cache, SearchLimits::steps(50));
    assert_eq!(outcome.reason, Some(RejectReason::SearchAborted));
}

#[test]
fn test_claimed_paths() {
    let scorer = Scorer::default();
    let board = board();
    let trace = vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3)];

    let ok = verify_claimed_path(&board, "plan", trace.clone(), 0, &scorer);
    assert!(ok.accepted);
    assert_eq!(ok.score, 3);

    let wrong_word = verify_claimed_path(&board, "plat", trace, 0, &scorer);
    assert_eq!(wrong_word.reason, Some(RejectReason::InvalidPath));

    let jump = vec![Cell::new(0, 0), Cell::new(0, 2)];
    let skipped = verify_claimed_path(&board, "pa", jump, 0, &scorer);
    assert_eq!(skipped.reason, Some(RejectReason::InvalidPath));
}

#[test]
fn test_outcome_serializes_camel_case() {
    let cache = BoardCache::new();
    let outcome = validate_submission(&board(), "zzz", 1, &Scorer::default(), &cache, SearchLimits::unbounded());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["comboLevel"], 1);
    assert_eq!(json["reason"], "not_on_board");
    assert_eq!(json["accepted"], false);
}
