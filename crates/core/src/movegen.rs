use crate::game::{Board, Color, Move, Square};

impl Board {
    /// All legal moves for `color`, by testing every source/destination
    /// pair on the board. The scan is rank-major ascending (source rank,
    /// source file, destination rank, destination file), so the order is
    /// fully deterministic: two calls on equal boards return identical
    /// vectors. Adversary indexing relies on that.
    ///
    /// With 64 x 64 candidate pairs each running a full legality check
    /// this is brute force, but on an 8x8 board it is plenty fast for
    /// interactive play and for the node-count tests.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();

        for from_rank in 0..8 {
            for from_file in 0..8 {
                let from = Square::new(from_file, from_rank);
                if !self[from].is_some_and(|piece| piece.color == color) {
                    continue;
                }

                for to_rank in 0..8 {
                    for to_file in 0..8 {
                        let to = Square::new(to_file, to_rank);
                        if self.is_legal(from, to) {
                            moves.push(Move::new(from, to));
                        }
                    }
                }
            }
        }

        moves
    }
}
