use anyhow::{ensure, Result};

use crate::{
    game::{Board, GameStatus, Move, Square},
    Adversary,
};

/// A full game session: a board plus the alternation and termination
/// bookkeeping around it. Callers submit moves for the side to move;
/// `Game` rejects out-of-turn and illegal submissions without touching
/// the board, and latches the status once checkmate or stalemate is
/// reached so no further moves are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    game_over: Option<GameStatus>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            game_over: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The latched terminal status if the game has ended, otherwise the
    /// current status of the side to move.
    pub fn status(&self) -> GameStatus {
        self.game_over.unwrap_or_else(|| self.board.status())
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Submit a move for the side to move. Returns the status after the
    /// move, or `None` if the move was rejected: game already over, `from`
    /// not holding a piece of the side to move, or the move illegal. A
    /// rejected move leaves the game untouched and the same side to move.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Option<GameStatus> {
        if self.game_over.is_some() {
            return None;
        }

        let side = self.board.side_to_move;
        if !self.board[from].is_some_and(|piece| piece.color == side) {
            return None;
        }

        if !self.board.is_legal(from, to) {
            return None;
        }

        Some(self.play(&Move::new(from, to)))
    }

    /// Let `adversary` pick and play a move for the side to move, and
    /// return it with the resulting status.
    ///
    /// The game must not be over: a finished game has no legal moves to
    /// offer, so the adversary has nothing to choose from. Check
    /// [`Self::is_game_over`] first.
    pub fn adversary_move(&mut self, adversary: &mut impl Adversary) -> (Move, GameStatus) {
        let m = adversary.choose_move(&self.board);
        (m, self.play(&m))
    }

    /// Play out a whitespace-separated move list ("e2e4 e7e5 ..."),
    /// stopping with an error at the first rejected move. Returns the
    /// status after the final move.
    pub fn replay(&mut self, moves: &str) -> Result<GameStatus> {
        for m in moves.split_whitespace() {
            let m: Move = m.parse()?;
            ensure!(
                self.attempt_move(m.from, m.to).is_some(),
                "illegal move: {m}"
            );
        }

        Ok(self.status())
    }

    /// Back to the opening position with White to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn play(&mut self, m: &Move) -> GameStatus {
        self.board.apply(m);

        let status = self.board.status();
        if status.is_game_over() {
            self.game_over = Some(status);
        }

        status
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
