use chess_demo_core::{
    game::{Board, Move},
    Adversary,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// An adversary that grabs material when it can: it draws a uniformly
/// random legal move, then, if any captures are available, redraws
/// uniformly among the captures instead. No lookahead, no evaluation.
pub struct CaptureBot<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> CaptureBot<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl CaptureBot<StdRng> {
    /// Deterministic bot: the same seed picks the same moves on the same
    /// boards.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for CaptureBot<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> Adversary for CaptureBot<R> {
    fn choose_move(&mut self, board: &Board) -> Move {
        let moves = board.legal_moves(board.side_to_move);
        let mut choice = moves[self.rng.gen_range(0..moves.len())];

        // An occupied destination is always an enemy piece; friendly
        // captures never make it into the legal move list.
        let captures: Vec<Move> = moves
            .into_iter()
            .filter(|m| board[m.to].is_some())
            .collect();
        if !captures.is_empty() {
            choice = captures[self.rng.gen_range(0..captures.len())];
        }

        choice
    }
}
