//! Fixed-depth minimax over a fully materialized game tree.
//!
//! No pruning and no transposition table: the tree holds one node per
//! reachable position up to the configured depth, so cost grows as the
//! branching factor (up to 81 early in a game) raised to the depth. The
//! default depth of 4 is already expensive from an open position;
//! callers wanting faster answers lower the depth.

use super::Agent;
use crate::{
    Error, MetaBoard, Result, Side, Status,
    types::Coord,
};

/// Configuration for [`MinimaxAgent`].
#[derive(Debug, Clone)]
pub struct MinimaxConfig {
    /// Search depth in plies. Clamped to at least 1.
    pub depth: usize,
}

impl MinimaxConfig {
    pub fn new() -> Self {
        Self { depth: 4 }
    }

    /// Set the search depth (minimum 1).
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth.max(1);
        self
    }
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Index into the search tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

/// A node owning an independent copy of the position it represents.
struct SearchNode {
    board: MetaBoard,
    children: Vec<NodeId>,
}

impl SearchNode {
    fn new(board: MetaBoard) -> Self {
        Self {
            board,
            children: Vec::new(),
        }
    }
}

/// Arena-allocated game tree: nodes in a contiguous vector, referenced
/// by index, avoiding per-node allocation and ownership cycles.
#[derive(Default)]
struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    fn add(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Expand a node to the given remaining depth, one child per legal
    /// move. Terminal positions simply produce no children and become
    /// leaves wherever they appear.
    fn expand(&mut self, id: NodeId, depth: usize) {
        if depth == 0 {
            return;
        }

        let moves = self.nodes[id.0].board.legal_moves();
        let mut children = Vec::with_capacity(moves.len());
        for mv in moves {
            let mut child_board = self.nodes[id.0].board.clone();
            child_board.make_move(mv);
            children.push(self.add(SearchNode::new(child_board)));
        }

        for &child in &children {
            self.expand(child, depth - 1);
        }
        self.nodes[id.0].children = children;
    }

    /// Recursive backup: leaves return the static evaluation, internal
    /// nodes alternate max and min.
    fn minimax(&self, id: NodeId, side: Side, maximizing: bool) -> f64 {
        let node = &self.nodes[id.0];
        if node.children.is_empty() {
            return evaluate(&node.board, side);
        }

        let child_values = node
            .children
            .iter()
            .map(|&child| self.minimax(child, side, !maximizing));
        if maximizing {
            child_values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            child_values.fold(f64::INFINITY, f64::min)
        }
    }
}

/// Static evaluation from `side`'s perspective.
///
/// A decided game is ±1. Anything else is a weighted count: ±0.1 per
/// sub-board won or lost, ±0.05 per ongoing sub-board where `side`
/// holds more or fewer marks than the opponent.
fn evaluate(board: &MetaBoard, side: Side) -> f64 {
    match board.status() {
        Status::Won(winner) if winner == side => 1.0,
        Status::Won(_) => -1.0,
        _ => {
            let mut score = 0.0;
            for sub in board.sub_boards() {
                match sub.status() {
                    Status::Won(winner) if winner == side => score += 0.1,
                    Status::Won(_) => score -= 0.1,
                    Status::Tie => {}
                    Status::Ongoing => {
                        let own = sub.mark_count(side);
                        let theirs = sub.mark_count(side.opponent());
                        if own > theirs {
                            score += 0.05;
                        } else if own < theirs {
                            score -= 0.05;
                        }
                    }
                }
            }
            score
        }
    }
}

/// Agent choosing moves by exhaustive fixed-depth minimax.
pub struct MinimaxAgent {
    config: MinimaxConfig,
    name: String,
}

impl MinimaxAgent {
    pub fn new(config: MinimaxConfig) -> Self {
        let name = format!("minimax(d{})", config.depth);
        Self { config, name }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(MinimaxConfig::default())
    }
}

impl Agent for MinimaxAgent {
    /// Build the tree rooted at the current position and pick the root
    /// child with the strictly highest backed-up value; ties keep the
    /// first move in `legal_moves()` order.
    fn choose_move(&mut self, board: &mut MetaBoard) -> Result<Coord> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }
        let side = board.turn();

        // Root children are materialized from the live board under the
        // snapshot discipline: apply, clone the position out, restore.
        let snapshot = board.snapshot();
        let mut tree = SearchTree::default();
        let mut root_children = Vec::with_capacity(moves.len());
        for &mv in &moves {
            board.make_move(mv);
            root_children.push(tree.add(SearchNode::new(board.clone())));
            board.restore(&snapshot);
        }
        for &child in &root_children {
            tree.expand(child, self.config.depth.saturating_sub(1));
        }

        // The root mover's choice is scored as the opponent's decision
        // layer, one ply down.
        let mut best: Option<(f64, Coord)> = None;
        for (&child, &mv) in root_children.iter().zip(&moves) {
            let value = tree.minimax(child, side, false);
            if best.is_none_or(|(best_value, _)| value > best_value) {
                best = Some((value, mv));
            }
        }

        Ok(best.map(|(_, mv)| mv).expect("at least one legal move"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn evaluate_scores_decided_games() {
        // X owns the top row of sub-boards.
        let won = "XXX...OO.";
        let layout = sub_grids([
            won, won, won, "O..O.....", ".........", ".........", ".........", ".........",
            ".........",
        ]);
        let board = MetaBoard::from_layout(&layout, Side::O, None).unwrap();

        assert_eq!(evaluate(&board, Side::X), 1.0);
        assert_eq!(evaluate(&board, Side::O), -1.0);
    }

    #[test]
    fn evaluate_weights_sub_boards_and_advantage() {
        // Sub 0 won by X, sub 1 won by O, sub 2 holds an extra X mark.
        let layout = sub_grids([
            "XXX.OO...",
            "OOOXX....",
            "X........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ]);
        let board = MetaBoard::from_layout(&layout, Side::O, None).unwrap();

        // +0.1 (sub 0) - 0.1 (sub 1) + 0.05 (sub 2 advantage)
        assert!((evaluate(&board, Side::X) - 0.05).abs() < 1e-12);
        assert!((evaluate(&board, Side::O) + 0.05).abs() < 1e-12);
    }

    #[test]
    fn single_legal_move_is_returned_at_any_depth() {
        // Sub-board 4 has one empty cell and is the forced target.
        let layout = sub_grids([
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
            assert_eq!(board.legal_moves().len(), 1);
            let reference = board.clone();

            let mut agent = MinimaxAgent::new(MinimaxConfig::new().with_depth(depth));
            let chosen = agent.choose_move(&mut board).unwrap();

            assert_eq!(chosen, coord(5, 5), "depth {depth}");
            assert_eq!(board, reference, "search must restore the board");
        }
    }

    #[test]
    fn immediate_meta_win_is_taken() {
        // X has sub-boards 0 and 4; completing sub-board 8's top row wins
        // the main diagonal outright.
        let layout = sub_grids([
            "XXX.OO...",
            "OO.O.....",
            ".........",
            ".........",
            "XXXOO....",
            ".........",
            ".........",
            ".........",
            "XX..O....",
        ]);
        let mut board = MetaBoard::from_layout(&layout, Side::X, Some(8)).unwrap();

        let mut agent = MinimaxAgent::new(MinimaxConfig::new().with_depth(2));
        let chosen = agent.choose_move(&mut board).unwrap();
        assert_eq!(chosen, coord(6, 8));

        assert_eq!(board.make_move(chosen), crate::MoveOutcome::Legal(Status::Won(Side::X)));
    }

    #[test]
    fn ties_keep_the_first_legal_move() {
        // Depth 1 from an empty board: every reply scores the same lone
        // +0.05 advantage, so the first legal move wins the tie.
        let mut board = MetaBoard::new();
        let first = board.legal_moves()[0];

        let mut agent = MinimaxAgent::new(MinimaxConfig::new().with_depth(1));
        assert_eq!(agent.choose_move(&mut board).unwrap(), first);
    }

    #[test]
    fn finished_game_yields_no_move() {
        let won = "XXX...OO.";
        let layout = sub_grids([
            won, won, won, "O..O.....", ".........", ".........", ".........", ".........",
            ".........",
        ]);
        let mut board = MetaBoard::from_layout(&layout, Side::O, None).unwrap();

        let mut agent = MinimaxAgent::default();
        assert!(matches!(
            agent.choose_move(&mut board),
            Err(Error::NoLegalMoves)
        ));
    }

    fn sub_grids(grids: [&str; 9]) -> String {
        let mut layout = String::new();
        for band in 0..3 {
            for row in 0..3 {
                for board in [3 * band, 3 * band + 1, 3 * band + 2] {
                    layout.push_str(&grids[board][3 * row..3 * row + 3]);
                }
                layout.push('\n');
            }
        }
        layout
    }
}
