//! Agent behavior pinned through the public API.

use std::time::Duration;

use ultimate_ttt::{
    Agent, Coord, MctsAgent, MctsConfig, MetaBoard, MinimaxAgent, MinimaxConfig, MoveOutcome,
    RandomAgent, Side, Status, arena,
};

mod common;
use common::layout_from_sub_grids;

#[test]
fn minimax_returns_the_only_legal_move_at_every_depth() {
    // Sub-board 4 is forced and has a single empty cell at (5, 5).
    let layout = layout_from_sub_grids([
        "OO.......",
        ".........",
        ".........",
        ".........",
        "XXOOOXXX.",
        ".........",
        ".........",
        ".........",
        ".........",
    ]);

    for depth in 1..=4 {
        let mut board = MetaBoard::from_layout(&layout, Side::X, Some(4)).unwrap();
        let only = board.legal_moves()[0];
        assert_eq!(board.legal_moves().len(), 1);

        let mut agent = MinimaxAgent::new(MinimaxConfig::new().with_depth(depth));
        assert_eq!(agent.choose_move(&mut board).unwrap(), only);
        assert_eq!(only, Coord::new(5, 5).unwrap());
    }
}

#[test]
fn minimax_leaves_the_live_board_untouched() {
    let mut board = MetaBoard::new();
    board.make_move(Coord::new(4, 4).unwrap());
    let reference = board.clone();

    let mut agent = MinimaxAgent::new(MinimaxConfig::new().with_depth(2));
    let chosen = agent.choose_move(&mut board).unwrap();

    assert_eq!(board, reference);
    assert!(board.legal_moves().contains(&chosen));
}

#[test]
fn mcts_visit_counts_stay_within_playout_budget() {
    let mut board = MetaBoard::new();
    let mut agent = MctsAgent::new(
        MctsConfig::new().with_time_budget(Duration::from_millis(30)),
    );
    agent.choose_move(&mut board).unwrap();

    let playouts = agent.playouts();
    assert!(playouts > 0);
    for stats in agent.stats().values() {
        assert!(stats.visits >= 1);
        assert!(u64::from(stats.visits) <= playouts);
    }
}

#[test]
fn mcts_leaves_the_live_board_untouched() {
    let mut board = MetaBoard::new();
    board.make_move(Coord::new(0, 0).unwrap());
    let reference = board.clone();

    let mut agent = MctsAgent::new(
        MctsConfig::new().with_time_budget(Duration::from_millis(20)),
    );
    let chosen = agent.choose_move(&mut board).unwrap();

    assert_eq!(board, reference);
    assert!(board.legal_moves().contains(&chosen));
}

#[test]
fn every_agent_rejects_a_finished_game() {
    let layout = layout_from_sub_grids([
        "XXX...OO.", "XXX...OO.", "XXX...OO.", "O..O.....", ".........", ".........",
        ".........", ".........", ".........",
    ]);
    let mut board = MetaBoard::from_layout(&layout, Side::O, None).unwrap();
    assert_eq!(board.status(), Status::Won(Side::X));

    let mut agents: Vec<Box<dyn Agent>> = vec![
        Box::new(MinimaxAgent::new(MinimaxConfig::new().with_depth(1))),
        Box::new(MctsAgent::new(
            MctsConfig::new().with_time_budget(Duration::from_millis(5)),
        )),
        Box::new(RandomAgent::new(Some(0))),
    ];
    for agent in &mut agents {
        assert!(agent.choose_move(&mut board).is_err());
    }
}

#[test]
fn scripted_agents_finish_a_full_game() {
    let mut x = MinimaxAgent::new(MinimaxConfig::new().with_depth(1));
    let mut o = RandomAgent::new(Some(11));

    let mut board = MetaBoard::new();
    while board.status() == Status::Ongoing {
        let agent: &mut dyn Agent = match board.turn() {
            Side::X => &mut x,
            Side::O => &mut o,
        };
        let chosen = agent.choose_move(&mut board).unwrap();
        assert_ne!(board.make_move(chosen), MoveOutcome::Illegal);
    }
    assert!(board.legal_moves().is_empty());
}

#[test]
fn arena_series_bookkeeping_adds_up() {
    let mut first = RandomAgent::new(Some(5));
    let mut second = RandomAgent::new(Some(6));

    let report = arena::run_series(&mut first, &mut second, 8, |_| {}).unwrap();

    assert_eq!(report.games, 8);
    assert_eq!(report.first_wins + report.second_wins + report.ties, 8);
}

#[test]
fn arena_report_serializes_to_json() {
    let mut first = RandomAgent::new(Some(9));
    let mut second = RandomAgent::new(Some(10));
    let report = arena::run_series(&mut first, &mut second, 2, |_| {}).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"games\":2"));
}
