use crate::game::{Board, Color, Move, Piece, PieceKind, Square};

impl Board {
    /// Raw attack reachability: could the piece on `from` move to `to`,
    /// looking only at shape, path and destination occupancy? Check
    /// detection runs on this level. It deliberately ignores whether the
    /// move would expose the mover's own king; that one-way layering is
    /// what keeps legality and check detection from recursing into each
    /// other.
    pub fn attack_reach(&self, from: Square, to: Square) -> bool {
        if from == to {
            return false;
        }

        let Some(piece) = self[from] else {
            return false;
        };

        // No friendly captures.
        if self[to].is_some_and(|dest| dest.color == piece.color) {
            return false;
        }

        if !self.shape_ok(piece, from, to) {
            return false;
        }

        self.path_clear(piece.kind, from, to)
    }

    /// Full legality: raw reachability plus self-check prevention. The
    /// move is simulated on a scratch copy of the board and rejected if it
    /// leaves the mover's own king attacked. An illegal move is simply
    /// `false`; the board is never touched.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self[from] else {
            return false;
        };

        if !self.attack_reach(from, to) {
            return false;
        }

        let mut scratch = self.clone();
        scratch.apply(&Move::new(from, to));
        !scratch.in_check(piece.color)
    }

    /// Whether the given side's king is attacked, i.e. any opposing piece
    /// has raw attack reach onto its square. A board with no king of that
    /// color is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            return false;
        };

        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square::new(file, rank);
                if self[sq].is_some_and(|p| p.color != color) && self.attack_reach(sq, king) {
                    return true;
                }
            }
        }

        false
    }

    /// Does the move's geometry match the piece kind, ignoring
    /// obstructions? Pawns are the exception that also consults occupancy,
    /// since their capture and non-capture moves differ.
    fn shape_ok(&self, piece: Piece, from: Square, to: Square) -> bool {
        let dr = to.rank as i8 - from.rank as i8;
        let df = to.file as i8 - from.file as i8;

        match piece.kind {
            PieceKind::Pawn => self.pawn_shape_ok(piece, from, to),
            PieceKind::Rook => dr == 0 || df == 0,
            PieceKind::Knight => {
                (dr.abs() == 2 && df.abs() == 1) || (dr.abs() == 1 && df.abs() == 2)
            }
            PieceKind::Bishop => dr.abs() == df.abs(),
            PieceKind::Queen => (dr == 0 || df == 0) || dr.abs() == df.abs(),
            PieceKind::King => dr.abs() <= 1 && df.abs() <= 1,
        }
    }

    fn pawn_shape_ok(&self, pawn: Piece, from: Square, to: Square) -> bool {
        let direction = pawn.color.pawn_direction();
        let dr = to.rank as i8 - from.rank as i8;
        let df = to.file as i8 - from.file as i8;

        if df == 0 {
            // Forward moves need an empty destination; pawns never capture
            // straight ahead.
            if self[to].is_some() {
                return false;
            }

            if dr == direction {
                return true;
            }

            // Double step: from the start rank only, before the pawn has
            // moved, through an empty intermediate square.
            if dr == 2 * direction && !pawn.has_moved && from.rank == pawn.color.pawn_start_rank()
            {
                return from
                    .offset((0, direction))
                    .is_some_and(|mid| self[mid].is_none());
            }

            false
        } else {
            // Diagonal steps are capture-only: exactly one file across, one
            // rank forward, onto an opposing piece.
            df.abs() == 1
                && dr == direction
                && self[to].is_some_and(|dest| dest.color != pawn.color)
        }
    }

    /// Every square strictly between `from` and `to` must be empty for the
    /// sliding pieces. Knights, kings and pawns resolve obstruction in
    /// their shape rules and skip this.
    fn path_clear(&self, kind: PieceKind, from: Square, to: Square) -> bool {
        if !matches!(
            kind,
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen
        ) {
            return true;
        }

        let step = (
            (to.file as i8 - from.file as i8).signum(),
            (to.rank as i8 - from.rank as i8).signum(),
        );

        let mut current = from.offset(step);
        while let Some(sq) = current {
            if sq == to {
                return true;
            }

            if self[sq].is_some() {
                return false;
            }

            current = sq.offset(step);
        }

        // The ray ran off the board without reaching `to`; shape checks
        // rule this out for callers, but it is well-defined anyway.
        true
    }
}
