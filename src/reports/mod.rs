use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lexiclash::api::SubmissionOutcome;
use lexiclash::search::Path;
use lexiclash::solver::SolvedWord;
use lexiclash::{Board, PlayerScoreSummary};

/// Prints the grid. Cells on `path` are highlighted and tagged with their
/// step number.
pub fn print_board(board: &Board, path: Option<&Path>) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in 0..board.rows() {
        let cells: Vec<Cell> = (0..board.cols())
            .map(|col| {
                let here = lexiclash::Cell::new(row, col);
                let tile = board.tile(here).unwrap_or(" ");
                let step = path.and_then(|p| p.cells().iter().position(|&c| c == here));
                match step {
                    Some(i) => Cell::new(format!("{} {}", tile, i + 1))
                        .fg(Color::Green)
                        .add_attribute(Attribute::Bold)
                        .set_alignment(CellAlignment::Center),
                    None => Cell::new(tile).set_alignment(CellAlignment::Center),
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_submissions(outcomes: &[SubmissionOutcome]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Result"),
        Cell::new("Combo"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Path"),
    ]);

    for o in outcomes {
        let result = match (o.accepted, o.reason) {
            (true, _) => Cell::new("accepted").fg(Color::Green),
            (false, Some(reason)) => Cell::new(reason.to_string()).fg(Color::Red),
            (false, None) => Cell::new("rejected").fg(Color::Red),
        };
        let path = o
            .path
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            Cell::new(&o.word).add_attribute(Attribute::Bold),
            result,
            Cell::new(o.combo_level).set_alignment(CellAlignment::Right),
            Cell::new(o.score)
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
            Cell::new(path),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_score_summary(summary: &PlayerScoreSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Combo"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for e in &summary.entries {
        table.add_row(vec![
            Cell::new(&e.word),
            Cell::new(e.combo_level).set_alignment(CellAlignment::Right),
            Cell::new(e.score).set_alignment(CellAlignment::Right),
        ]);
    }

    table.add_row(vec![
        Cell::new(format!("Total ({} unique)", summary.unique_count)).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(summary.total)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);
    println!("\n{}", table);
}

pub fn print_solutions(solved: &[SolvedWord], limit: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Path"),
    ]);

    for (i, s) in solved.iter().take(limit).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(&s.word).add_attribute(Attribute::Bold),
            Cell::new(s.score).set_alignment(CellAlignment::Right),
            Cell::new(s.path.to_string()),
        ]);
    }
    println!("\n{}", table);

    if solved.len() > limit {
        println!("... and {} more", solved.len() - limit);
    }
}
