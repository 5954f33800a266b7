//! End-to-end checks of move selection through the engine facade.

use std::time::Duration;

use ataxxer_core::{Board, Cell, Color, Square, generate_moves, has_any_move};
use ataxxer_engine::eval::features::FeatureVector;
use ataxxer_engine::eval::mobility::mobility;
use ataxxer_engine::eval::phase::Phase;
use ataxxer_engine::{
    BeamSelector, Decision, Engine, EngineConfig, SearchControl, Searcher, StrategyKind, evaluate,
    is_terminal, terminal_score,
};

const BUDGET: Duration = Duration::from_secs(60);

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn engine(strategy: StrategyKind, max_depth: u8) -> Engine {
    Engine::new(EngineConfig {
        strategy,
        max_depth,
        ..EngineConfig::default()
    })
}

/// A handful of positions covering opening, middlegame, pass and endgame shapes.
fn positions() -> Vec<Board> {
    [
        "R......B/......../......../......../......../......../......../B......R",
        "RRR..B.B/RR.BBB../..R...../...RB.../......../.BB...../B.....RR/BB.....R",
        "RB....../BB....../......../......../......../......../......../........",
        "......../......../......../...RB.../......../......../......../........",
        "RRRRRRRR/RRRRRRRR/RRRRBBBB/RRRB..BB/BBBB.BBB/BBBBBBBB/RRRRRRRR/RRRRRRRR",
        "RRRRRRRR/RRRRRRRR/RRRRRRRR/RRRRRRRR/BBBBBBBB/BBBBBBBB/BBBBBBBB/BBBBBBBB",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect()
}

#[test]
fn pass_iff_no_legal_move() {
    for board in positions() {
        for color in Color::ALL {
            for strategy in [StrategyKind::AlphaBeta, StrategyKind::Beam] {
                let decision = engine(strategy, 2).choose_move(&board, color, BUDGET);
                assert_eq!(
                    decision.is_pass(),
                    !has_any_move(&board, color),
                    "{strategy} for {color} on {board}"
                );
            }
        }
    }
}

#[test]
fn every_move_is_legal() {
    for board in positions() {
        for color in Color::ALL {
            let legal = generate_moves(&board, color);
            for strategy in [StrategyKind::AlphaBeta, StrategyKind::Beam] {
                if let Decision::Move(mv) = engine(strategy, 3).choose_move(&board, color, BUDGET) {
                    assert!(legal.contains(mv), "{strategy} chose illegal {mv} for {color} on {board}");
                }
            }
        }
    }
}

#[test]
fn evaluation_is_pure() {
    for board in positions() {
        for color in Color::ALL {
            assert_eq!(evaluate(&board, color), evaluate(&board, color));
        }
    }
}

#[test]
fn alpha_beta_is_deterministic() {
    let board: Board = "RRR..B.B/RR.BBB../..R...../...RB.../......../.BB...../B.....RR/BB.....R"
        .parse()
        .unwrap();
    let searcher = Searcher::new(3);
    let first = searcher.search(&board, Color::Red, &SearchControl::new_infinite(), |_, _, _, _| {});
    let second = searcher.search(&board, Color::Red, &SearchControl::new_infinite(), |_, _, _, _| {});
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
    assert_eq!(first.nodes, second.nodes);

    let engine = engine(StrategyKind::AlphaBeta, 3);
    assert_eq!(
        engine.choose_move(&board, Color::Blue, BUDGET),
        engine.choose_move(&board, Color::Blue, BUDGET)
    );
}

#[test]
fn beam_choice_stays_within_top_scores() {
    for board in positions() {
        for color in Color::ALL {
            let moves = generate_moves(&board, color);
            if moves.is_empty() {
                continue;
            }
            let empty_after = board.empty_count() - 1;
            let weights = Phase::from_empty_count(empty_after).weights();
            let mut scores: Vec<i32> = moves
                .as_slice()
                .iter()
                .map(|&mv| {
                    let after = board.make_move(mv, color);
                    FeatureVector::extract(&board, &after, mv, color, empty_after).score(weights)
                })
                .collect();
            scores.sort_unstable_by(|a, b| b.cmp(a));
            let floor = scores[scores.len().min(16) - 1];

            let result = BeamSelector::default().select(&board, color);
            if result.rejected < scores.len().min(16) {
                assert!(result.score >= floor, "{} below beam floor {floor}", result.score);
            } else {
                assert_eq!(result.score, scores[0]);
            }
        }
    }
}

#[test]
fn suicide_filter_cannot_fire_on_cell_mobility() {
    // Every Red move leaves Red walled in while Blue keeps open space, yet
    // cell mobility tops out at 64 so the 70-point gap is out of reach.
    let board: Board = "R.RB..../RRRB..../BBBB..../......B./......../.B...B../.......B/........"
        .parse()
        .unwrap();
    let moves = generate_moves(&board, Color::Red);
    assert_eq!(moves.len(), 5);

    for mv in &moves {
        let after = board.make_move(*mv, Color::Red);
        assert_eq!(mobility(&after, Color::Red), 0);
        let gap = mobility(&after, Color::Blue) as i32 - mobility(&after, Color::Red) as i32;
        assert!(gap <= 64, "cell mobility gap {gap} exceeds the board");
    }

    let empty_after = board.empty_count() - 1;
    let weights = Phase::from_empty_count(empty_after).weights();
    let mut top: Option<(_, i32)> = None;
    for &mv in &moves {
        let after = board.make_move(mv, Color::Red);
        let score = FeatureVector::extract(&board, &after, mv, Color::Red, empty_after).score(weights);
        if top.is_none_or(|(_, best)| score > best) {
            top = Some((mv, score));
        }
    }

    let result = BeamSelector::default().select(&board, Color::Red);
    assert_eq!(result.rejected, 0);
    assert_eq!(result.best_move, top.map(|(mv, _)| mv), "the top-scored candidate is played");

    for board in positions() {
        for color in Color::ALL {
            assert_eq!(BeamSelector::default().select(&board, color).rejected, 0, "{color} on {board}");
        }
    }
}

#[test]
fn clone_with_flip_scenario() {
    let mut board = Board::empty();
    board.set_cell(sq(3, 3), Cell::Occupied(Color::Red));
    board.set_cell(sq(3, 4), Cell::Occupied(Color::Blue));

    let flipping = generate_moves(&board, Color::Red)
        .as_slice()
        .iter()
        .copied()
        .find(|mv| !mv.is_jump() && mv.dest().distance(sq(3, 4)) == 1)
        .expect("a clone next to the blue piece exists");
    let after = board.make_move(flipping, Color::Red);
    assert_eq!(after.cell(sq(3, 4)), Cell::Occupied(Color::Red));

    for strategy in [StrategyKind::AlphaBeta, StrategyKind::Beam] {
        let decision = engine(strategy, 3).choose_move(&board, Color::Red, BUDGET);
        let Decision::Move(mv) = decision else {
            panic!("{strategy} passed with moves available");
        };
        assert_eq!(
            board.make_move(mv, Color::Red).cell(sq(3, 4)),
            Cell::Occupied(Color::Red),
            "{strategy} should take the blue piece, played {mv}"
        );
    }
}

#[test]
fn forced_pass_scenario() {
    // Red's corner piece is walled in by Blue; Blue has open space.
    let board: Board = "RBB...../BBB...../BBB...../......../......../......../......../........"
        .parse()
        .unwrap();
    assert!(!has_any_move(&board, Color::Red));
    assert!(has_any_move(&board, Color::Blue));
    for strategy in [StrategyKind::AlphaBeta, StrategyKind::Beam] {
        assert_eq!(engine(strategy, 8).choose_move(&board, Color::Red, BUDGET), Decision::Pass);
    }
}

#[test]
fn double_pass_terminal_scenario() {
    let board: Board = "RRRRRRRR/RRRRRRRR/RRRRRRRR/RRRRRRRR/BBBBBBBB/BBBBBBBB/BBBBBBBB/BBBBBBBB"
        .parse()
        .unwrap();
    assert!(is_terminal(&board));
    assert_eq!(terminal_score(&board, Color::Red), 0);
    assert_eq!(terminal_score(&board, Color::Blue), 0);
    for color in Color::ALL {
        assert_eq!(engine(StrategyKind::AlphaBeta, 8).choose_move(&board, color, BUDGET), Decision::Pass);
    }
}

#[test]
fn tiny_budget_still_moves() {
    let board = Board::starting_position();
    let engine = engine(StrategyKind::AlphaBeta, 8);
    let decision = engine.choose_move(&board, Color::Red, Duration::from_millis(1));
    assert!(!decision.is_pass());
}
