// Start position node counts per
// https://www.chessprogramming.org/Perft_Results; castling, en passant
// and promotion cannot occur within four plies of the opening, so the
// classical values hold for this ruleset. The sparse positions are
// counted by hand.

#[cfg(test)]
mod perft {
    use chess_demo_core::{debug, game::Board};
    use paste::paste;

    macro_rules! perft_test {
        ($i:expr, $fen:ident, $name:ident) => {
            paste! {
                #[test]
                fn [<$name _ $i>]() {
                    let board = Board::from_fen($fen).unwrap();
                    assert_eq!(debug::perft(&board, $i), [<$fen _NODES>][$i - 1]);
                }
            }
        };
    }

    const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";
    const DEFAULT_FEN_NODES: [usize; 4] = [20, 400, 8902, 197_281];

    const KINGS_FEN: &str = "8/8/4k3/8/8/4K3/8/8 w";
    const KINGS_FEN_NODES: [usize; 2] = [8, 57];

    const ROOK_FEN: &str = "k7/8/8/8/8/8/8/K6R w";
    const ROOK_FEN_NODES: [usize; 2] = [16, 43];

    perft_test!(1, DEFAULT_FEN, default);
    perft_test!(2, DEFAULT_FEN, default);
    perft_test!(3, DEFAULT_FEN, default);
    perft_test!(4, DEFAULT_FEN, default);

    perft_test!(1, KINGS_FEN, kings);
    perft_test!(2, KINGS_FEN, kings);

    perft_test!(1, ROOK_FEN, rook);
    perft_test!(2, ROOK_FEN, rook);

    #[test]
    fn depth_zero_is_one_node() {
        assert_eq!(debug::perft(&Board::new(), 0), 1);
    }
}
