use crate::chess::{Role, Square};
use derive_more::{Display, Error};
use shakmaty as sm;
use std::fmt::{self, Formatter};
use test_strategy::Arbitrary;

/// A chess move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[filter(#self.whence != #self.whither)]
pub struct Move {
    whence: Square,
    whither: Square,
    promotion: Option<Role>,
}

impl Move {
    /// Constructs a [`Move`].
    pub fn new(whence: Square, whither: Square, promotion: Option<Role>) -> Self {
        Move {
            whence,
            whither,
            promotion,
        }
    }

    /// The source [`Square`].
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination [`Square`].
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The [`Role`] a pawn is promoted to, if any.
    pub fn promotion(&self) -> Option<Role> {
        self.promotion
    }
}

/// Prints the move in pure coordinate notation, e.g. `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.whence, self.whither)?;
        match self.promotion {
            Some(r) => write!(f, "{}", r.letter().to_ascii_lowercase()),
            None => Ok(()),
        }
    }
}

/// The reason why a move in UCI notation could not be expressed as a [`Move`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "drops and null moves do not exist in standard chess")]
pub struct Unrepresentable;

#[doc(hidden)]
impl TryFrom<sm::uci::Uci> for Move {
    type Error = Unrepresentable;

    fn try_from(m: sm::uci::Uci) -> Result<Self, Self::Error> {
        match m {
            sm::uci::Uci::Normal {
                from,
                to,
                promotion,
            } => Ok(Move::new(from.into(), to.into(), promotion.map(Role::from))),

            _ => Err(Unrepresentable),
        }
    }
}

#[doc(hidden)]
impl From<Move> for sm::uci::Uci {
    fn from(m: Move) -> Self {
        sm::uci::Uci::Normal {
            from: m.whence().into(),
            to: m.whither().into(),
            promotion: m.promotion().map(sm::Role::from),
        }
    }
}
