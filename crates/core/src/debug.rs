use crate::game::Board;

/// Count the leaf nodes of the legal-move tree rooted at `board`, `depth`
/// plies deep. A direct cross-check of the move generator: known
/// positions have known node counts, and any legality bug shows up as a
/// count drift somewhere in the tree.
pub fn perft(board: &Board, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(board.side_to_move);
    if depth == 1 {
        return moves.len();
    }

    moves
        .iter()
        .map(|m| {
            let mut next = board.clone();
            next.apply(m);
            perft(&next, depth - 1)
        })
        .sum()
}
