use derive_more::{Display, Error};
use shakmaty as sm;
use std::str::FromStr;
use test_strategy::Arbitrary;

/// A column of the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
pub enum File {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
}

impl File {
    /// All files, from the queen side to the king side.
    #[rustfmt::skip]
    pub const ALL: [File; 8] = [
        File::A, File::B, File::C, File::D, File::E, File::F, File::G, File::H,
    ];

    /// The file at the given index, counting from zero on the queen side.
    pub fn new(i: u8) -> Option<Self> {
        File::ALL.get(usize::from(i)).copied()
    }

    /// This file's index, counting from zero on the queen side.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "expected lowercase letter in the range `a..=h`")]
pub struct ParseFileError;

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(File::A),
            "b" => Ok(File::B),
            "c" => Ok(File::C),
            "d" => Ok(File::D),
            "e" => Ok(File::E),
            "f" => Ok(File::F),
            "g" => Ok(File::G),
            "h" => Ok(File::H),
            _ => Err(ParseFileError),
        }
    }
}

#[doc(hidden)]
impl From<sm::File> for File {
    fn from(f: sm::File) -> Self {
        match f {
            sm::File::A => File::A,
            sm::File::B => File::B,
            sm::File::C => File::C,
            sm::File::D => File::D,
            sm::File::E => File::E,
            sm::File::F => File::F,
            sm::File::G => File::G,
            sm::File::H => File::H,
        }
    }
}

#[doc(hidden)]
impl From<File> for sm::File {
    fn from(f: File) -> Self {
        match f {
            File::A => sm::File::A,
            File::B => sm::File::B,
            File::C => sm::File::C,
            File::D => sm::File::D,
            File::E => sm::File::E,
            File::F => sm::File::F,
            File::G => sm::File::G,
            File::H => sm::File::H,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn file_can_be_constructed_from_its_index(f: File) {
        assert_eq!(File::new(f.index()), Some(f));
    }

    #[proptest]
    fn file_index_is_out_of_range(#[strategy(8u8..)] i: u8) {
        assert_eq!(File::new(i), None);
    }

    #[proptest]
    fn parsing_printed_file_is_an_identity(f: File) {
        assert_eq!(f.to_string().parse(), Ok(f));
    }

    #[proptest]
    fn parsing_file_fails_if_not_a_lowercase_letter_between_a_and_h(
        #[filter(!('a'..='h').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<File>(), Err(ParseFileError));
    }

    #[proptest]
    fn file_has_an_equivalent_shakmaty_representation(f: File) {
        assert_eq!(File::from(sm::File::from(f)), f);
    }
}
