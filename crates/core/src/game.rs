use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{anyhow, bail, Context, Result};

type Grid = [[Option<Piece>; 8]; 8];

/// The whole game state: an 8x8 grid of squares, each empty or holding one
/// piece, plus the side whose turn it is. Everything else (check, status,
/// legal moves) is derived from this on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    pub side_to_move: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Set on every move of the piece and never reset. Only consulted for
    /// pawn double-step eligibility.
    pub has_moved: bool,
}

/// Derived from the board on demand, always describing the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate(Color),
    Stalemate,
}

impl Board {
    /// Opening position, in the two-field form `from_fen` parses.
    pub const START_FEN: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

    /// Standard opening position, white to move.
    pub fn new() -> Self {
        Self::from_fen(Self::START_FEN).unwrap()
    }

    /// A board with no pieces on it, white to move. Place pieces through
    /// the `IndexMut` impl.
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
        }
    }

    /// Parses the two fields of FEN this state actually has: piece
    /// placement and side to move, e.g. `"8/8/4k3/8/8/4K3/8/8 w"`.
    /// Castling, en-passant and counter fields do not exist in this rule
    /// subset and are rejected as trailing data.
    pub fn from_fen(fen: &str) -> Result<Board> {
        let mut fields = fen.split_ascii_whitespace();
        let placement = fields.next().context("empty fen string")?;
        let side = fields.next().context("missing side to move")?;
        if fields.next().is_some() {
            bail!("trailing data after side to move");
        }

        let mut grid: Grid = [[None; 8]; 8];
        let mut rank = 7usize;
        let mut file = 0usize;

        for c in placement.chars() {
            match c {
                '1'..='8' => file += (c as u8 - b'0') as usize,
                '/' => {
                    rank = rank.checked_sub(1).context("too many ranks")?;
                    file = 0;
                }
                _ => {
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match c.to_ascii_lowercase() {
                        'k' => PieceKind::King,
                        'q' => PieceKind::Queen,
                        'r' => PieceKind::Rook,
                        'b' => PieceKind::Bishop,
                        'n' => PieceKind::Knight,
                        'p' => PieceKind::Pawn,
                        _ => bail!("invalid fen character: {c}"),
                    };

                    if file > 7 {
                        bail!("rank {} overflows the board", rank + 1);
                    }
                    grid[rank][file] = Some(Piece::new(color, kind));
                    file += 1;
                }
            }
        }

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            _ => bail!("invalid side to move: {side}"),
        };

        Ok(Self { grid, side_to_move })
    }

    pub fn to_fen(&self) -> String {
        let placement = (0..8u8)
            .rev()
            .map(|rank| {
                let mut rank_str = String::new();

                let mut consecutive_empty = 0;
                for file in 0..8u8 {
                    match self[Square::new(file, rank)] {
                        Some(piece) => {
                            if consecutive_empty > 0 {
                                rank_str.push_str(&consecutive_empty.to_string());
                                consecutive_empty = 0;
                            }

                            rank_str.push_str(&piece.to_string());
                        }
                        None => consecutive_empty += 1,
                    }
                }

                if consecutive_empty > 0 {
                    rank_str.push_str(&consecutive_empty.to_string());
                }

                rank_str
            })
            .collect::<Vec<_>>()
            .join("/");

        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };

        format!("{placement} {side}")
    }

    /// First square holding the given side's king, scanning rank 0 upward.
    /// `None` on degenerate boards without one; nothing here enforces that
    /// exactly one exists.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square::new(file, rank);
                if self[sq].is_some_and(|p| p.color == color && p.kind == PieceKind::King) {
                    return Some(sq);
                }
            }
        }

        None
    }

    /// Applies an already-validated move: the destination is overwritten
    /// (capturing by discard), the source cleared, the piece marked as
    /// moved, a pawn reaching its last rank promoted to a queen, and the
    /// side to move flipped.
    ///
    /// Panics if the source square is empty; callers validate first.
    pub fn apply(&mut self, m: &Move) {
        let mut piece = self[m.from]
            .take()
            .expect("apply called with an empty source square");

        piece.has_moved = true;
        if piece.kind == PieceKind::Pawn && m.to.rank == piece.color.promotion_rank() {
            piece.kind = PieceKind::Queen;
        }

        self[m.to] = Some(piece);
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Status for the side to move, from the check/has-moves decision
    /// table. A board without that side's king counts as not in check
    /// rather than faulting.
    pub fn status(&self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.in_check(side);
        let has_moves = !self.legal_moves(side).is_empty();

        match (in_check, has_moves) {
            (true, true) => GameStatus::Check(side),
            (true, false) => GameStatus::Checkmate(side),
            (false, true) => GameStatus::InProgress,
            (false, false) => GameStatus::Stalemate,
        }
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.grid[index.rank as usize][index.file as usize]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.grid[index.rank as usize][index.file as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank a pawn of this color starts on, and may double-step from.
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank on which a pawn of this color promotes.
    pub fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Color::White => "white",
                Color::Black => "black",
            }
        )
    }
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = match self.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };

        let c = match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        };

        write!(f, "{c}")
    }
}

impl GameStatus {
    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "{color} is in checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

fn char_to_file(c: char) -> Result<u8> {
    match c {
        'a'..='h' => Ok(c as u8 - b'a'),
        _ => Err(anyhow!("invalid file: {c}")),
    }
}

fn file_to_char(file: u8) -> char {
    (b'a' + file) as char
}

/// A coordinate on the board, both parts in `0..8`. Rank 0 is white's home
/// rank, so squares print in the usual algebraic form: file 4, rank 1 is
/// `"e2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// The square offset by `(files, ranks)`, or `None` when that runs off
    /// the board.
    pub fn offset(&self, offset: (i8, i8)) -> Option<Self> {
        let sq = Self {
            file: self.file.checked_add_signed(offset.0)?,
            rank: self.rank.checked_add_signed(offset.1)?,
        };

        (sq.file < 8 && sq.rank < 8).then_some(sq)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", file_to_char(self.file), self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        let [file, rank] = chars.as_slice() else {
            bail!("invalid square: {s}");
        };

        let file = char_to_file(*file)?;
        let rank = rank
            .to_digit(10)
            .filter(|r| (1..=8).contains(r))
            .with_context(|| format!("invalid rank: {rank}"))? as u8
            - 1;

        Ok(Self { file, rank })
    }
}

/// A source/destination pair. Transient: produced by enumeration or parsed
/// from coordinate notation, then applied or discarded. No promotion field
/// since promotion is always to a queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if !s.is_ascii() || s.len() != 4 {
            bail!("invalid move: {s}");
        }

        Ok(Self {
            from: s[0..2].parse()?,
            to: s[2..4].parse()?,
        })
    }
}
