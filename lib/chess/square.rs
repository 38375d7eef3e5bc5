use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use shakmaty as sm;
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A square of the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
#[display(fmt = "{}{}", file, rank)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    pub fn new(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// This square's [`File`].
    pub fn file(&self) -> File {
        self.file
    }

    /// This square's [`Rank`].
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// An iterator over all 64 squares, rank by rank starting from `a1`.
    pub fn iter() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64u8).map(|i| Square {
            file: File::ALL[usize::from(i % 8)],
            rank: Rank::ALL[usize::from(i / 8)],
        })
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "invalid file")]
    InvalidFile(ParseFileError),
    #[display(fmt = "invalid rank")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or(s.len(), |(i, _)| i);

        Ok(Square {
            file: s[..i].parse()?,
            rank: s[i..].parse()?,
        })
    }
}

#[doc(hidden)]
impl From<sm::Square> for Square {
    fn from(s: sm::Square) -> Self {
        Square::new(s.file().into(), s.rank().into())
    }
}

#[doc(hidden)]
impl From<Square> for sm::Square {
    fn from(s: Square) -> Self {
        sm::Square::from_coords(s.file().into(), s.rank().into())
    }
}
