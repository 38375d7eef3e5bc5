use crate::chess::{Color, Move, Outcome, Piece, Square};
use derive_more::{Display, Error};
use test_strategy::Arbitrary;

/// Represents a [`Move`] rejected by the rules of chess.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary, Error)]
#[display(fmt = "move `{}` is illegal in this position", _0)]
pub struct IllegalMove(#[error(not(source))] pub Move);

/// Trait for types that know the rules of chess.
///
/// Implementors own the canonical board and are the only authority on
/// legality, whose turn it is and when the game is over.
#[cfg_attr(test, mockall::automock)]
pub trait Rules {
    /// The side to move.
    fn side_to_move(&self) -> Color;

    /// The [`Piece`] on the given [`Square`], if any.
    fn piece_at(&self, s: Square) -> Option<Piece>;

    /// The legal [`Move`]s that depart from the given [`Square`].
    fn legal_moves_from(&self, s: Square) -> Vec<Move>;

    /// Play a [`Move`] if legal, otherwise leave the board untouched.
    fn try_apply(&mut self, m: Move) -> Result<(), IllegalMove>;

    /// The [`Outcome`] of the game, once it is over.
    fn outcome(&self) -> Option<Outcome>;

    /// Whether the game has come to an end.
    fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The [`Square`] occupied by the king of the given [`Color`], if any.
    fn king_of(&self, c: Color) -> Option<Square> {
        let king = Piece(c, crate::chess::Role::King);
        Square::iter().find(|&s| self.piece_at(s) == Some(king))
    }
}
