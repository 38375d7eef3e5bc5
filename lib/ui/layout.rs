use crate::chess::{File, Rank, Square};
use derive_more::{Constructor, Display};

#[cfg(test)]
use test_strategy::Arbitrary;

/// A position on the canvas, in pixels from the top-left corner.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(Arbitrary))]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// An axis-aligned rectangle on the canvas.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// The point halfway across both axes.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Whether the point lies within this rectangle.
    pub fn contains(&self, p: Point) -> bool {
        (self.x..self.x + self.width).contains(&p.x)
            && (self.y..self.y + self.height).contains(&p.y)
    }
}

/// The geometry of a square canvas split into an 8x8 grid of equal cells.
///
/// White is at the bottom, so rank 1 is the lowest row on screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub struct Layout {
    #[cfg_attr(test, strategy(1i32..=128))]
    cell: i32,
}

impl Layout {
    const MAX_CELL: i32 = i32::MAX / 8;

    /// The layout of a canvas `size` pixels wide and tall.
    ///
    /// The board covers the largest multiple of eight pixels that fits, up to
    /// the largest board whose pixels are all addressable by a [`Point`].
    pub fn new(size: u32) -> Self {
        let cell = (size / 8).clamp(1, Self::MAX_CELL as u32);
        Layout { cell: cell as i32 }
    }

    /// The side length of a cell.
    pub fn cell(&self) -> i32 {
        self.cell
    }

    /// The side length of the board.
    pub fn size(&self) -> i32 {
        self.cell * 8
    }

    /// The whole board.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.size(), self.size())
    }

    /// The center of the board.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// The [`Square`] under the given point, or `None` if it falls off the board.
    pub fn square_at(&self, p: Point) -> Option<Square> {
        if !self.bounds().contains(p) {
            return None;
        }

        let column = u8::try_from(p.x / self.cell).ok()?;
        let row = u8::try_from(p.y / self.cell).ok()?;
        Some(Square::new(File::new(column)?, Rank::new(7 - row)?))
    }

    /// The cell occupied by the given [`Square`].
    pub fn cell_of(&self, s: Square) -> Rect {
        let column = i32::from(s.file().index());
        let row = 7 - i32::from(s.rank().index());
        Rect::new(column * self.cell, row * self.cell, self.cell, self.cell)
    }
}
