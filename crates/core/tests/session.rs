#[cfg(test)]
mod session {
    use chess_demo_core::{
        game::{Board, Color, GameStatus, Move, Square},
        session::Game,
        Adversary,
    };

    /// Deterministic stand-in adversary: always the first move in
    /// enumeration order.
    struct FirstMove;

    impl Adversary for FirstMove {
        fn choose_move(&mut self, board: &Board) -> Move {
            board.legal_moves(board.side_to_move)[0]
        }
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn new_game_starts_fresh() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_game_over());
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn out_of_turn_moves_are_rejected() {
        let mut game = Game::new();

        // Black piece while white is to move, then an empty square.
        assert_eq!(game.attempt_move(sq("e7"), sq("e5")), None);
        assert_eq!(game.attempt_move(sq("e4"), sq("e5")), None);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn illegal_moves_are_rejected() {
        let mut game = Game::new();
        assert_eq!(game.attempt_move(sq("e2"), sq("e5")), None);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.board().side_to_move, Color::White);
    }

    #[test]
    fn legal_moves_are_played() {
        let mut game = Game::new();
        let status = game.attempt_move(sq("e2"), sq("e4"));

        assert_eq!(status, Some(GameStatus::InProgress));
        assert_eq!(game.board().side_to_move, Color::Black);
        assert!(game.board()[sq("e4")].is_some());
    }

    #[test]
    fn fools_mate_ends_and_latches_the_game() {
        let mut game = Game::new();
        let status = game.replay("f2f3 e7e5 g2g4 d8h4").unwrap();

        assert_eq!(status, GameStatus::Checkmate(Color::White));
        assert!(game.is_game_over());

        // Nothing further is accepted, and the status stays latched.
        assert_eq!(game.attempt_move(sq("e2"), sq("e3")), None);
        assert_eq!(game.status(), GameStatus::Checkmate(Color::White));
    }

    #[test]
    fn check_is_reported_but_does_not_end_the_game() {
        let mut game = Game::new();
        let status = game.replay("e2e4 e7e5 d1h5 b8c6 h5f7").unwrap();

        assert_eq!(status, GameStatus::Check(Color::Black));
        assert!(!game.is_game_over());
    }

    #[test]
    fn replay_rejects_bad_input() {
        let mut game = Game::new();
        assert!(game.replay("e2e4 e2e4").is_err());

        let mut game = Game::new();
        assert!(game.replay("e2").is_err());
    }

    #[test]
    fn reset_restores_the_opening() {
        let mut game = Game::new();
        game.replay("f2f3 e7e5 g2g4 d8h4").unwrap();
        assert!(game.is_game_over());

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(
            game.board().legal_moves(Color::White),
            Board::new().legal_moves(Color::White)
        );
        assert!(game.attempt_move(sq("e2"), sq("e4")).is_some());
    }

    #[test]
    fn adversary_plays_for_the_side_to_move() {
        let mut game = Game::new();
        game.attempt_move(sq("e2"), sq("e4")).unwrap();

        let (m, status) = game.adversary_move(&mut FirstMove);

        // First black move in enumeration order: the a-pawn's double
        // step, reached before the single step by the ascending rank
        // scan.
        assert_eq!(m, Move::new(sq("a7"), sq("a5")));
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.board().side_to_move, Color::White);
    }
}
