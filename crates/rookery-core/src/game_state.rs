//! Game state: make/undo, castling and en passant bookkeeping, draw detection.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveText, PromotionPiece};
use crate::color::Color;
use crate::error::{BoardError, GameError};
use crate::movegen::{Check, LegalMoves, MoveGenerator, Pin, is_attacked};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::zobrist;

/// Plies without a capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;

/// Occurrences of a position after which the game is drawn.
pub const REPETITION_LIMIT: u32 = 3;

/// Why a game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
            DrawReason::InsufficientMaterial => "insufficient material",
        };
        f.write_str(text)
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Checkmate { winner: Color },
    Draw(DrawReason),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

/// Legal moves and classification of the current position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Analysis {
    legal: LegalMoves,
    outcome: Option<Outcome>,
}

/// Everything needed to take a move back.
#[derive(Debug, Clone)]
struct HistoryEntry {
    mv: Move,
    promoted: Option<Piece>,
    enpassant_before: Option<Square>,
    fifty_before: u32,
    key_before: u64,
    analysis_before: Analysis,
}

/// A game in progress.
///
/// The legal moves of the current position are computed as soon as the
/// position is reached and restored from history on undo, so every query is
/// a plain read.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    king_locations: [Square; Color::COUNT],
    enpassant_possible: Option<Square>,
    move_history: Vec<HistoryEntry>,
    castle_rights_history: Vec<CastleRights>,
    fifty_move_counter: u32,
    repetitions: HashMap<u64, u32>,
    position_key: u64,
    analysis: Analysis,
    generator: MoveGenerator,
}

impl GameState {
    /// Start a new game from the standard starting position.
    pub fn new() -> GameState {
        let board = Board::starting_position();
        GameState::assemble(board, Color::White, [Square::E1, Square::E8], CastleRights::ALL, None)
    }

    /// Start a game from an arbitrary set-up.
    ///
    /// The board must hold exactly one king per side and no pawns on the
    /// first or eighth rank, and the side that just moved must not be in
    /// check. An en passant square must sit behind a pawn that could have
    /// just made a double push.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        enpassant_possible: Option<Square>,
    ) -> Result<GameState, GameError> {
        board.validate()?;
        let king = |color: Color| {
            board.find_king(color).ok_or(BoardError::InvalidKingCount {
                color: match color {
                    Color::White => "white",
                    Color::Black => "black",
                },
                count: 0,
            })
        };
        let kings = [king(Color::White)?, king(Color::Black)?];

        let them = side_to_move.flip();
        if is_attacked(&board, kings[them.index()], them) {
            return Err(BoardError::OpponentInCheck { color: them }.into());
        }
        if let Some(square) = enpassant_possible
            && !double_push_target(&board, square, them)
        {
            return Err(BoardError::InvalidEnPassant { square }.into());
        }

        Ok(GameState::assemble(board, side_to_move, kings, castle_rights, enpassant_possible))
    }

    fn assemble(
        board: Board,
        side_to_move: Color,
        king_locations: [Square; Color::COUNT],
        castle_rights: CastleRights,
        enpassant_possible: Option<Square>,
    ) -> GameState {
        let mut state = GameState {
            board,
            side_to_move,
            king_locations,
            enpassant_possible,
            move_history: Vec::new(),
            castle_rights_history: vec![castle_rights],
            fifty_move_counter: 0,
            repetitions: HashMap::new(),
            position_key: zobrist::position_key(&board, side_to_move, castle_rights, enpassant_possible),
            analysis: Analysis::default(),
            generator: MoveGenerator::new(),
        };
        state.analysis = state.analyze();
        state
    }

    // --- Queries ---

    /// Legal moves of the side to move. Castling moves come last.
    #[inline]
    pub fn valid_moves(&self) -> &[Move] {
        &self.analysis.legal.moves
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Return `true` if the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.analysis.legal.in_check
    }

    /// Friendly pieces pinned to the king of the side to move.
    #[inline]
    pub fn pins(&self) -> &[Pin] {
        &self.analysis.legal.pins
    }

    /// Enemy pieces giving check to the side to move.
    #[inline]
    pub fn checks(&self) -> &[Check] {
        &self.analysis.legal.checks
    }

    /// Return `true` if the side to move is checkmated.
    #[inline]
    pub fn checkmate(&self) -> bool {
        matches!(self.analysis.outcome, Some(Outcome::Checkmate { .. }))
    }

    /// Return `true` if the game is drawn for any reason, not only stalemate.
    #[inline]
    pub fn stalemate(&self) -> bool {
        matches!(self.analysis.outcome, Some(Outcome::Draw(_)))
    }

    /// How the game ended, or `None` while it is still going.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.analysis.outcome
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    /// Current castling rights.
    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights_history
            .last()
            .copied()
            .unwrap_or(CastleRights::NONE)
    }

    /// The square a pawn may capture onto en passant this ply.
    #[inline]
    pub fn enpassant_possible(&self) -> Option<Square> {
        self.enpassant_possible
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    /// How many times the current position has been reached by a move.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(&self.position_key).copied().unwrap_or(0)
    }

    /// Zobrist key of the current position.
    #[inline]
    pub fn position_key(&self) -> u64 {
        self.position_key
    }

    /// Number of moves made so far.
    #[inline]
    pub fn ply(&self) -> usize {
        self.move_history.len()
    }

    /// The most recently made move.
    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().map(|entry| entry.mv)
    }

    /// Resolve move text such as `e2e4` against the legal moves.
    ///
    /// The returned move carries the legal move's flags. A promotion letter
    /// in the text is ignored here; pass it to [`GameState::make_move_promoting`].
    pub fn parse_move(&self, text: &str) -> Result<Move, GameError> {
        let parsed: MoveText = text.parse()?;
        self.find_legal(parsed.start, parsed.end)
            .ok_or_else(|| GameError::IllegalMove {
                mv: format!("{}{}", parsed.start, parsed.end),
            })
    }

    fn find_legal(&self, start: Square, end: Square) -> Option<Move> {
        self.valid_moves()
            .iter()
            .find(|mv| mv.start() == start && mv.end() == end)
            .copied()
    }

    // --- Make / undo ---

    /// Make `mv`, promoting to a queen if it is a promotion.
    pub fn make_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.make_move_promoting(mv, PromotionPiece::Queen.text_char())
    }

    /// Make `mv`, promoting to the piece named by `choice` (`q`, `r`, `b`,
    /// `n`, any case; anything else means queen).
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalMove`] if no legal move shares `mv`'s squares.
    pub fn make_move_promoting(&mut self, mv: Move, choice: char) -> Result<(), GameError> {
        let mv = self
            .find_legal(mv.start(), mv.end())
            .ok_or_else(|| GameError::IllegalMove { mv: mv.text() })?;

        let us = self.side_to_move;
        let (from, to) = (mv.start(), mv.end());
        let piece = mv.piece_moved();

        // --- Board ---
        self.board.take(from);
        let promoted = mv
            .is_pawn_promotion()
            .then(|| Piece::new(PromotionPiece::from_choice(choice).to_piece_kind(), us));
        self.board.set(to, Some(promoted.unwrap_or(piece)));

        if mv.is_enpassant_move() {
            self.board.take(mv.enpassant_victim_square());
        }

        if mv.is_castle_move() {
            let (rook_from, rook_to) = castle_rook_squares(from, to);
            let rook = self.board.take(rook_from);
            self.board.set(rook_to, rook);
        }

        if piece.kind() == PieceKind::King {
            self.king_locations[us.index()] = to;
        }

        // --- Bookkeeping ---
        let enpassant_before = self.enpassant_possible;
        self.enpassant_possible = if piece.kind() == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Some(Square::at((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };

        let rights = revoke_castle_rights(self.castle_rights(), piece, from);
        self.castle_rights_history.push(rights);

        let fifty_before = self.fifty_move_counter;
        if mv.is_capture() || piece.kind() == PieceKind::Pawn {
            self.fifty_move_counter = 0;
        } else {
            self.fifty_move_counter += 1;
        }

        self.side_to_move = us.flip();

        let key_before = self.position_key;
        self.position_key =
            zobrist::position_key(&self.board, self.side_to_move, rights, self.enpassant_possible);
        *self.repetitions.entry(self.position_key).or_insert(0) += 1;

        let analysis_before = std::mem::take(&mut self.analysis);
        self.move_history.push(HistoryEntry {
            mv,
            promoted,
            enpassant_before,
            fifty_before,
            key_before,
            analysis_before,
        });

        self.analysis = self.analyze();

        trace!(mv = %mv, ply = self.ply(), key = self.position_key, "make");
        self.debug_check_invariants();
        Ok(())
    }

    /// Take back the last move. Returns `false` if there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(entry) = self.move_history.pop() else {
            return false;
        };
        self.castle_rights_history.pop();

        if let Some(count) = self.repetitions.get_mut(&self.position_key) {
            *count = count.saturating_sub(1);
        }

        let mv = entry.mv;
        let (from, to) = (mv.start(), mv.end());
        let piece = mv.piece_moved();
        let us = self.side_to_move.flip();

        self.board.set(from, Some(piece));
        if mv.is_enpassant_move() {
            self.board.set(to, None);
            self.board.set(mv.enpassant_victim_square(), mv.piece_captured());
        } else {
            self.board.set(to, mv.piece_captured());
        }

        if mv.is_castle_move() {
            let (rook_from, rook_to) = castle_rook_squares(from, to);
            let rook = self.board.take(rook_to);
            self.board.set(rook_from, rook);
        }

        if piece.kind() == PieceKind::King {
            self.king_locations[us.index()] = from;
        }

        self.side_to_move = us;
        self.enpassant_possible = entry.enpassant_before;
        self.fifty_move_counter = entry.fifty_before;
        self.position_key = entry.key_before;
        self.analysis = entry.analysis_before;

        trace!(mv = %mv, promoted = ?entry.promoted, ply = self.ply(), "undo");
        self.debug_check_invariants();
        true
    }

    // --- Classification ---

    fn analyze(&self) -> Analysis {
        let us = self.side_to_move;
        let legal = self.generator.legal_moves(
            &self.board,
            us,
            self.king_location(us),
            self.enpassant_possible,
            self.castle_rights(),
        );

        let outcome = if legal.moves.is_empty() && legal.in_check {
            Some(Outcome::Checkmate { winner: us.flip() })
        } else if legal.moves.is_empty() {
            Some(Outcome::Draw(DrawReason::Stalemate))
        } else if self.fifty_move_counter >= FIFTY_MOVE_LIMIT {
            Some(Outcome::Draw(DrawReason::FiftyMoveRule))
        } else if self.repetition_count() >= REPETITION_LIMIT {
            Some(Outcome::Draw(DrawReason::ThreefoldRepetition))
        } else if self.insufficient_material() {
            Some(Outcome::Draw(DrawReason::InsufficientMaterial))
        } else {
            None
        };

        if let Some(outcome) = outcome {
            debug!(%outcome, ply = self.ply(), "game over");
        }

        Analysis { legal, outcome }
    }

    /// Bare kings, or bare kings plus a single bishop or knight.
    pub fn insufficient_material(&self) -> bool {
        let mut minors = 0;
        for (_, piece) in self.board.pieces() {
            match piece.kind() {
                PieceKind::King => {}
                PieceKind::Bishop | PieceKind::Knight => minors += 1,
                _ => return false,
            }
        }
        minors <= 1
    }

    #[inline]
    fn debug_check_invariants(&self) {
        debug_assert_eq!(self.move_history.len() + 1, self.castle_rights_history.len());
        debug_assert!(Color::ALL.into_iter().all(|color| {
            self.board.piece_at(self.king_location(color)) == Some(Piece::new(PieceKind::King, color))
        }));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `square` is the square skipped by a double push `mover` could
/// have just made: empty, with the pushed pawn in front of it and the pawn's
/// start square empty.
fn double_push_target(board: &Board, square: Square, mover: Color) -> bool {
    let step = mover.pawn_step();
    let skipped_row = mover.pawn_start_row() as i8 + step;
    if square.row() as i8 != skipped_row || !board.is_empty(square) {
        return false;
    }
    let pawn = Square::at((skipped_row + step) as u8, square.col());
    let start = Square::at(mover.pawn_start_row(), square.col());
    board.piece_at(pawn) == Some(Piece::new(PieceKind::Pawn, mover)) && board.is_empty(start)
}

/// Rook start and end squares for a castling king move `from` -> `to`.
fn castle_rook_squares(from: Square, to: Square) -> (Square, Square) {
    let side = if to.col() > from.col() {
        CastleSide::KingSide
    } else {
        CastleSide::QueenSide
    };
    let rook_from = Square::at(from.row(), side.rook_col());
    let rook_to = Square::at(from.row(), (from.col() as i8 + side.king_delta() / 2) as u8);
    (rook_from, rook_to)
}

/// Rights left after `piece` leaves `from`.
///
/// Only the mover's own king and rooks revoke rights; a rook captured on its
/// corner leaves the opponent's right in place.
fn revoke_castle_rights(rights: CastleRights, piece: Piece, from: Square) -> CastleRights {
    let color = piece.color();
    match piece.kind() {
        PieceKind::King => rights.remove_color(color),
        PieceKind::Rook if from.row() == color.back_row() => CastleSide::ALL
            .into_iter()
            .filter(|side| from.col() == side.rook_col())
            .fold(rights, |acc, side| acc.remove(CastleRights::flag(color, side))),
        _ => rights,
    }
}
