use game::{Board, Move};

pub mod debug;
pub mod game;
pub mod movegen;
pub mod renderer;
pub mod rules;
pub mod session;

/// A move picker for one side. Implementations select from
/// `board.legal_moves(board.side_to_move)`; calling one on a board where
/// that set is empty is a caller error.
pub trait Adversary {
    fn choose_move(&mut self, board: &Board) -> Move;
}
