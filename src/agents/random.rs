//! Uniform-random baseline agent.

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::Agent;
use crate::{Error, MetaBoard, Result, types::Coord};

/// Agent that picks uniformly among the legal moves.
///
/// Useful as a comparison baseline and as a beginner-friendly opponent.
pub struct RandomAgent {
    rng: StdRng,
    name: String,
}

impl RandomAgent {
    /// Create a new random agent. A seed makes its play reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        Self {
            rng,
            name: "random".to_string(),
        }
    }

    /// Set or reset the RNG seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &mut MetaBoard) -> Result<Coord> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chooses_a_legal_move() {
        let mut board = MetaBoard::new();
        let mut agent = RandomAgent::new(Some(7));

        let chosen = agent.choose_move(&mut board).unwrap();
        assert!(board.legal_moves().contains(&chosen));
    }

    #[test]
    fn seeded_agents_agree() {
        let mut board = MetaBoard::new();
        let mut first = RandomAgent::new(Some(42));
        let mut second = RandomAgent::new(Some(42));

        assert_eq!(
            first.choose_move(&mut board).unwrap(),
            second.choose_move(&mut board).unwrap()
        );
    }

    #[test]
    fn finished_game_yields_no_move() {
        // Tied game: four 5-X tie patterns balanced by five 4-X patterns.
        let tie_x = "XXOOOXXXO";
        let tie_o = "OOXXXOOOX";
        let grids = [tie_x, tie_o, tie_x, tie_o, tie_x, tie_o, tie_x, tie_o, tie_o];
        let mut layout = String::new();
        for band in 0..3 {
            for row in 0..3 {
                for board_idx in [3 * band, 3 * band + 1, 3 * band + 2] {
                    layout.push_str(&grids[board_idx][3 * row..3 * row + 3]);
                }
            }
        }
        let mut board = MetaBoard::from_layout(&layout, crate::Side::X, None).unwrap();

        let mut agent = RandomAgent::default();
        assert!(matches!(
            agent.choose_move(&mut board),
            Err(Error::NoLegalMoves)
        ));
    }
}
