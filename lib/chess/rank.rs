use derive_more::{Display, Error};
use shakmaty as sm;
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A row of the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    /// All ranks, from white's side to black's side.
    #[rustfmt::skip]
    pub const ALL: [Rank; 8] = [
        Rank::First, Rank::Second, Rank::Third, Rank::Fourth,
        Rank::Fifth, Rank::Sixth, Rank::Seventh, Rank::Eighth,
    ];

    /// The rank at the given index, counting from zero on white's side.
    pub fn new(i: u8) -> Option<Self> {
        Rank::ALL.get(usize::from(i)).copied()
    }

    /// This rank's index, counting from zero on white's side.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "expected digit in the range `1..=8`")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}

#[doc(hidden)]
impl From<sm::Rank> for Rank {
    fn from(r: sm::Rank) -> Self {
        match r {
            sm::Rank::First => Rank::First,
            sm::Rank::Second => Rank::Second,
            sm::Rank::Third => Rank::Third,
            sm::Rank::Fourth => Rank::Fourth,
            sm::Rank::Fifth => Rank::Fifth,
            sm::Rank::Sixth => Rank::Sixth,
            sm::Rank::Seventh => Rank::Seventh,
            sm::Rank::Eighth => Rank::Eighth,
        }
    }
}

#[doc(hidden)]
impl From<Rank> for sm::Rank {
    fn from(r: Rank) -> Self {
        match r {
            Rank::First => sm::Rank::First,
            Rank::Second => sm::Rank::Second,
            Rank::Third => sm::Rank::Third,
            Rank::Fourth => sm::Rank::Fourth,
            Rank::Fifth => sm::Rank::Fifth,
            Rank::Sixth => sm::Rank::Sixth,
            Rank::Seventh => sm::Rank::Seventh,
            Rank::Eighth => sm::Rank::Eighth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn rank_can_be_constructed_from_its_index(r: Rank) {
        assert_eq!(Rank::new(r.index()), Some(r));
    }

    #[proptest]
    fn rank_index_is_out_of_range(#[strategy(8u8..)] i: u8) {
        assert_eq!(Rank::new(i), None);
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_if_not_a_digit_between_1_and_8(
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Rank>(), Err(ParseRankError));
    }

    #[proptest]
    fn rank_has_an_equivalent_shakmaty_representation(r: Rank) {
        assert_eq!(Rank::from(sm::Rank::from(r)), r);
    }
}
