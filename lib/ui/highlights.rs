use crate::chess::{Rules, Square};
use crate::ui::Selection;
use arrayvec::ArrayVec;
use derive_more::Display;
use tracing::instrument;

#[cfg(test)]
use test_strategy::Arbitrary;

/// The decoration drawn on a highlighted [`Square`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Mark {
    /// The square of the piece currently selected.
    #[display(fmt = "selection")]
    Selection,
    /// A destination that leaves nothing behind.
    #[display(fmt = "quiet")]
    Quiet,
    /// A destination occupied by an opponent piece.
    #[display(fmt = "capture")]
    Capture,
}

/// The set of decorations derived from the board and the [`Selection`].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Highlights(ArrayVec<(Square, Mark), 64>);

impl Highlights {
    /// Computes the highlights for the current [`Selection`].
    ///
    /// Nothing is highlighted while idle. Otherwise the selected square gets a ring
    /// and every legal destination from it is marked as either a quiet move or a capture.
    #[instrument(level = "trace", skip(rules))]
    pub fn new<R: Rules + ?Sized>(rules: &R, selection: Selection) -> Self {
        let mut highlights = Highlights::default();

        if let Selection::Selected(whence) = selection {
            highlights.0.push((whence, Mark::Selection));

            let mover = rules.piece_at(whence).map(|p| p.color());
            for m in rules.legal_moves_from(whence) {
                let whither = m.whither();
                if highlights.get(whither).is_some() {
                    continue;
                }

                let mark = match (mover, rules.piece_at(whither)) {
                    (Some(c), Some(p)) if p.color() == !c => Mark::Capture,
                    _ => Mark::Quiet,
                };

                if highlights.0.try_push((whither, mark)).is_err() {
                    break;
                }
            }
        }

        highlights
    }

    /// Whether nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of highlighted squares.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The [`Mark`] on the given [`Square`], if any.
    pub fn get(&self, s: Square) -> Option<Mark> {
        self.0.iter().find(|(x, _)| *x == s).map(|&(_, m)| m)
    }

    /// An iterator over the highlighted squares and their marks.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Square, Mark)> + '_ {
        self.0.iter().copied()
    }
}
