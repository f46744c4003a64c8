use lexiclash::board::index::build_index;
use lexiclash::{find_path, Board, BoardIndex, Cell, PathSearch, SearchLimits, SearchOutcome};
use rstest::rstest;

fn cells(pairs: &[(usize, usize)]) -> Vec<Cell> {
    pairs.iter().map(|&p| Cell::from(p)).collect()
}

#[test]
fn test_cat_on_two_by_two() {
    let board = Board::from_rows(&[["c", "a"], ["t", "x"]]).unwrap();
    let path = find_path(&board, "cat", None).expect("cat should be on the board");
    assert_eq!(path.cells(), cells(&[(0, 0), (0, 1), (1, 0)]).as_slice());
    assert!(path.verify(&board, "cat").is_ok());
}

#[test]
fn test_cannot_reuse_a_cell() {
    let board = Board::parse("cat\nxyz\nqrs").unwrap();
    assert_eq!(find_path(&board, "caaat", None), None);
    assert_eq!(find_path(&board, "cac", None), None);
}

#[test]
fn test_hebrew_final_letter_matches_regular_tile() {
    // מלך: the board only carries the regular kaf
    let board = Board::from_rows(&[["מ", "ל"], ["כ", "א"]]).unwrap();
    let path = find_path(&board, "מלך", None).expect("final kaf should match");
    assert_eq!(path.cells(), cells(&[(0, 0), (0, 1), (1, 0)]).as_slice());

    // And the other way round: a final-form tile matches a regular letter.
    let board = Board::from_rows(&[["ש", "ל"], ["ו", "ם"]]).unwrap();
    assert!(find_path(&board, "שלומ", None).is_some());
}

#[test]
fn test_case_is_folded() {
    let board = Board::parse("CA\nTX").unwrap();
    assert!(find_path(&board, "cat", None).is_some());
    assert!(find_path(&board, "CaT", None).is_some());
}

#[rstest]
#[case("ab", true)]
#[case("abcfihgd", true)] // spiral around the edge
#[case("aei", true)] // diagonal
#[case("aec", true)] // two diagonals
#[case("ac", false)] // not adjacent
#[case("abca", false)] // would revisit 'a'
#[case("z", false)]
fn test_three_by_three(#[case] word: &str, #[case] expected: bool) {
    let board = Board::parse("abc\ndef\nghi").unwrap();
    let found = find_path(&board, word, None);
    assert_eq!(found.is_some(), expected, "word {}", word);
    if let Some(path) = found {
        assert!(path.verify(&board, word).is_ok());
    }
}

#[test]
fn test_longer_than_board_short_circuits() {
    let board = Board::parse("ab\nba").unwrap();
    // A zero step budget would abort any real search, so NotFound here
    // means no search was attempted.
    let outcome = PathSearch::new(&board, None)
        .with_limits(SearchLimits::steps(0))
        .search("ababa");
    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[test]
fn test_missing_letters_short_circuit() {
    let board = Board::parse("aaa\naaa\naaa").unwrap();
    let outcome = PathSearch::new(&board, None)
        .with_limits(SearchLimits::steps(0))
        .search("aaz");
    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[test]
fn test_step_budget_aborts_hard_search() {
    // 'c' only touches 'b's, so every run of a's dead-ends.
    let board = Board::parse("aaaa\naaaa\naabb\naabc").unwrap();
    let word = "aaaaac";
    let bounded = PathSearch::new(&board, None)
        .with_limits(SearchLimits::steps(50))
        .search(word);
    assert_eq!(bounded, SearchOutcome::Aborted { steps: 50 });

    let unbounded = PathSearch::new(&board, None).search(word);
    assert_eq!(unbounded, SearchOutcome::NotFound);
}

#[test]
fn test_reuses_supplied_index() {
    let board = Board::parse("cat\ndog").unwrap();
    let index = BoardIndex::build(&board);
    let search = PathSearch::new(&board, Some(&index));
    assert!(std::ptr::eq(search.index(), &index));
    assert!(search.find("cat").is_some());
    assert!(search.find("dog").is_some());
    assert!(search.find("cog").is_some());
    assert!(search.find("god").is_some());
}

#[test]
fn test_stale_index_is_replaced() {
    let board = Board::parse("cat\ndog").unwrap();
    let other = build_index(vec![vec!["x".to_string()]]).unwrap();
    let search = PathSearch::new(&board, Some(&other));
    assert!(!std::ptr::eq(search.index(), &other));
    assert!(search.index().matches(&board));
    assert!(search.find("cat").is_some());
}

#[test]
fn test_search_is_deterministic() {
    let board = Board::parse("aba\nbab\naba").unwrap();
    let first = find_path(&board, "abab", None);
    for _ in 0..5 {
        assert_eq!(find_path(&board, "abab", None), first);
    }
}

#[test]
fn test_concurrent_searches_share_index() {
    let board = Board::parse("clas\nxehw\niord\nyzqu").unwrap();
    let index = BoardIndex::build(&board);
    let words = ["lex", "clash", "hero", "sal", "nope"];

    std::thread::scope(|s| {
        let handles: Vec<_> = words
            .iter()
            .map(|w| {
                let (board, index) = (&board, &index);
                s.spawn(move || find_path(board, w, Some(index)).map(|p| p.verify(board, w)))
            })
            .collect();

        for (w, h) in words.iter().zip(handles) {
            let result = h.join().unwrap();
            match *w {
                "nope" => assert!(result.is_none()),
                _ => assert_eq!(result, Some(Ok(())), "{}", w),
            }
        }
    });
}

#[test]
fn test_word_as_long_as_a_wide_strip() {
    // One path through every cell; the walk must not grow the call stack.
    let n = 25_000;
    let board = Board::parse(&"a".repeat(n)).unwrap();
    assert_eq!((board.rows(), board.cols()), (1, n));

    let path = find_path(&board, &"a".repeat(n), None).expect("the strip spells the word");
    assert_eq!(path.len(), n);
    assert_eq!(path.cells()[n - 1], Cell::new(0, n - 1));
    assert!(path.verify(&board, &"a".repeat(n)).is_ok());
}
