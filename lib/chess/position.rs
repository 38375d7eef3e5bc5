use crate::chess::{Color, IllegalMove, Move, Outcome, Piece, Rules, Square};
use derive_more::{DebugCustom, Display, Error, From};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use shakmaty as sm;
use std::ops::Range;
use std::str::FromStr;
use tracing::{debug, instrument};

/// The current position on the chess board.
///
/// This type guarantees that it only holds valid positions. It also
/// remembers every position reached since the last capture or pawn move, so
/// that repetitions can be told apart.
#[derive(DebugCustom, Display, Default, Clone, Eq, PartialEq)]
#[debug(fmt = "Position({})", self)]
#[display(
    fmt = "{}",
    "sm::fen::Fen::from_position(self.chess.clone(), sm::EnPassantMode::Legal)"
)]
pub struct Position {
    chess: sm::Chess,
    history: Vec<u64>,
}

impl Arbitrary for Position {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Position>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..256, any::<Selector>()).prop_map(|(moves, selector)| {
            let mut pos = Position::default();

            for _ in 0..moves {
                if pos.outcome().is_some() {
                    break;
                }

                match selector.try_select(pos.moves()) {
                    None => break,
                    Some(m) => {
                        if pos.try_apply(m).is_err() {
                            break;
                        }
                    }
                }
            }

            pos
        })
    }
}

impl Position {
    /// The side to move.
    pub fn turn(&self) -> Color {
        sm::Position::turn(&self.chess).into()
    }

    /// The number of halfmoves since the last capture or pawn advance.
    ///
    /// It resets to 0 whenever a piece is captured or a pawn is moved.
    pub fn halfmoves(&self) -> u32 {
        sm::Position::halfmoves(&self.chess)
    }

    /// This position's [zobrist hash].
    ///
    /// [zobrist hash]: https://www.chessprogramming.org/Zobrist_Hashing
    pub fn zobrist(&self) -> u64 {
        let z: sm::zobrist::Zobrist64 =
            sm::zobrist::ZobristHash::zobrist_hash(&self.chess, sm::EnPassantMode::Legal);
        z.0
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> {
        sm::Position::board(&self.chess)
            .clone()
            .into_iter()
            .map(|(s, p)| (p.into(), s.into()))
    }

    /// How many other times this position has occurred.
    pub fn repetitions(&self) -> usize {
        let zobrist = self.zobrist();
        self.history.iter().filter(|&&z| z == zobrist).count()
    }

    /// Whether this position is a [checkmate].
    ///
    /// [checkmate]: https://www.chessprogramming.org/Checkmate
    pub fn is_checkmate(&self) -> bool {
        sm::Position::is_checkmate(&self.chess)
    }

    /// Whether this position is a [stalemate].
    ///
    /// [stalemate]: https://www.chessprogramming.org/Stalemate
    pub fn is_stalemate(&self) -> bool {
        sm::Position::is_stalemate(&self.chess)
    }

    /// Whether this position has [insufficient material].
    ///
    /// [insufficient material]: https://www.chessprogramming.org/Material#InsufficientMaterial
    pub fn is_material_insufficient(&self) -> bool {
        sm::Position::is_insufficient_material(&self.chess)
    }

    /// Whether the game is drawn by the [75-move rule].
    ///
    /// [75-move rule]: https://en.wikipedia.org/wiki/Fifty-move_rule#Seventy-five-move_rule
    pub fn is_draw_by_75_move_rule(&self) -> bool {
        self.halfmoves() >= 150
    }

    /// Whether the game is drawn by [fivefold repetition].
    ///
    /// [fivefold repetition]: https://en.wikipedia.org/wiki/Threefold_repetition#Fivefold_repetition
    pub fn is_draw_by_fivefold_repetition(&self) -> bool {
        self.repetitions() >= 4
    }

    /// An iterator over the legal [`Move`]s that can be played in this position.
    ///
    /// Castling is expressed as the king moving two squares. There are no
    /// legal moves once the game is over, whatever the reason.
    pub fn moves(&self) -> impl ExactSizeIterator<Item = Move> {
        let legals: Vec<Move> = if self.outcome().is_some() {
            Vec::new()
        } else {
            sm::Position::legal_moves(&self.chess)
                .iter()
                .filter_map(|vm| Move::try_from(sm::uci::Uci::from_standard(vm)).ok())
                .collect()
        };

        legals.into_iter()
    }
}

impl Rules for Position {
    fn side_to_move(&self) -> Color {
        self.turn()
    }

    fn piece_at(&self, s: Square) -> Option<Piece> {
        sm::Position::board(&self.chess)
            .piece_at(s.into())
            .map(Piece::from)
    }

    fn legal_moves_from(&self, s: Square) -> Vec<Move> {
        self.moves().filter(|m| m.whence() == s).collect()
    }

    #[instrument(level = "trace", skip(self), err)]
    fn try_apply(&mut self, m: Move) -> Result<(), IllegalMove> {
        if self.outcome().is_some() {
            return Err(IllegalMove(m));
        }

        let vm = sm::Position::legal_moves(&self.chess)
            .into_iter()
            .find(|vm| Move::try_from(sm::uci::Uci::from_standard(vm)) == Ok(m))
            .ok_or(IllegalMove(m))?;

        if vm.is_zeroing() {
            self.history.clear();
        } else {
            self.history.push(self.zobrist());
        }

        sm::Position::play_unchecked(&mut self.chess, &vm);
        debug!(position = %self, "played `{}`", m);
        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate() {
            Some(Outcome::Checkmate(!self.turn()))
        } else if self.is_stalemate() {
            Some(Outcome::Stalemate)
        } else if self.is_material_insufficient() {
            Some(Outcome::DrawByInsufficientMaterial)
        } else if self.is_draw_by_75_move_rule() {
            Some(Outcome::DrawBy75MoveRule)
        } else if self.is_draw_by_fivefold_repetition() {
            Some(Outcome::DrawByFivefoldRepetition)
        } else {
            None
        }
    }
}

/// The reason why parsing the FEN string failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParsePositionError {
    InvalidFen(InvalidFen),
    IllegalPosition(IllegalPosition),
}

/// The reason why the string is not valid FEN.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum InvalidFen {
    #[display(fmt = "syntax error at the piece placement field")]
    InvalidPlacement,
    #[display(fmt = "syntax error at the side to move field")]
    InvalidTurn,
    #[display(fmt = "syntax error at the castling rights field")]
    InvalidCastlingRights,
    #[display(fmt = "syntax error at the en passant square field")]
    InvalidEnPassantSquare,
    #[display(fmt = "syntax error at the halfmove clock field")]
    InvalidHalfmoveClock,
    #[display(fmt = "syntax error at the fullmove counter field")]
    InvalidFullmoves,
    #[display(fmt = "unspecified syntax error")]
    InvalidSyntax,
}

#[doc(hidden)]
impl From<sm::fen::ParseFenError> for InvalidFen {
    fn from(e: sm::fen::ParseFenError) -> Self {
        use InvalidFen::*;
        match e {
            sm::fen::ParseFenError::InvalidBoard => InvalidPlacement,
            sm::fen::ParseFenError::InvalidTurn => InvalidTurn,
            sm::fen::ParseFenError::InvalidCastling => InvalidCastlingRights,
            sm::fen::ParseFenError::InvalidEpSquare => InvalidEnPassantSquare,
            sm::fen::ParseFenError::InvalidHalfmoveClock => InvalidHalfmoveClock,
            sm::fen::ParseFenError::InvalidFullmoves => InvalidFullmoves,
            _ => InvalidSyntax,
        }
    }
}

/// The reason why the position represented by the FEN string is illegal.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalPosition {
    #[display(fmt = "at least one side has no king")]
    MissingKing,
    #[display(fmt = "at least one side has multiple kings")]
    TooManyKings,
    #[display(fmt = "there are pawns on the back-rank")]
    PawnsOnBackRank,
    #[display(fmt = "the player in check is not to move")]
    OppositeCheck,
    #[display(fmt = "invalid en passant square; wrong rank, occupied, or missing pushed pawn")]
    InvalidEnPassantSquare,
    #[display(fmt = "invalid castling rights")]
    InvalidCastlingRights,
    #[display(fmt = "no sequence of legal moves can reach this position")]
    Other,
}

#[doc(hidden)]
impl From<sm::PositionError<sm::Chess>> for IllegalPosition {
    fn from(e: sm::PositionError<sm::Chess>) -> Self {
        let kinds = e.kinds();

        if kinds.contains(sm::PositionErrorKinds::MISSING_KING) {
            IllegalPosition::MissingKing
        } else if kinds.contains(sm::PositionErrorKinds::TOO_MANY_KINGS) {
            IllegalPosition::TooManyKings
        } else if kinds.contains(sm::PositionErrorKinds::PAWNS_ON_BACKRANK) {
            IllegalPosition::PawnsOnBackRank
        } else if kinds.contains(sm::PositionErrorKinds::OPPOSITE_CHECK) {
            IllegalPosition::OppositeCheck
        } else if kinds.contains(sm::PositionErrorKinds::INVALID_EP_SQUARE) {
            IllegalPosition::InvalidEnPassantSquare
        } else if kinds.contains(sm::PositionErrorKinds::INVALID_CASTLING_RIGHTS) {
            IllegalPosition::InvalidCastlingRights
        } else {
            IllegalPosition::Other
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fen: sm::fen::Fen = s.parse().map_err(InvalidFen::from)?;
        let chess: sm::Chess = fen
            .into_position(sm::CastlingMode::Standard)
            .map_err(IllegalPosition::from)?;

        Ok(Position {
            chess,
            history: Vec::new(),
        })
    }
}
