use crate::chess::Outcome;
use derive_more::Display;

#[cfg(test)]
use test_strategy::Arbitrary;

/// The stage a game is in.
///
/// A game only ever moves from [`Phase::Active`] to [`Phase::Over`], never back.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Phase {
    /// Players are still making moves.
    #[default]
    #[display(fmt = "active")]
    Active,
    /// The game has ended.
    #[display(fmt = "over ({})", _0)]
    Over(Outcome),
}

impl Phase {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Over(_))
    }

    /// The [`Outcome`] of the game, once it is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match *self {
            Phase::Over(o) => Some(o),
            Phase::Active => None,
        }
    }
}
