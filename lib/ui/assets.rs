use crate::chess::{Color, Piece};
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use std::{io, ops::Index, path::PathBuf, sync::Arc};
use tracing::{debug, instrument};

/// The pixels of a [`Sprite`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Texture {
    /// A character rendered with the system font.
    Glyph(char),
    /// An encoded image.
    Image(Arc<[u8]>),
}

/// The image of a [`Piece`] scaled to fill one cell.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Sprite {
    pub piece: Piece,
    pub size: u32,
    pub texture: Texture,
}

/// The reason why a [`Sprite`] could not be loaded.
#[derive(Debug, Display, Error)]
pub enum AssetError {
    #[display(fmt = "no sprite for the {} at `{}`", piece, "path.display()")]
    Missing { piece: Piece, path: PathBuf },

    #[display(fmt = "the sprite for the {} at `{}` is empty", piece, "path.display()")]
    Empty { piece: Piece, path: PathBuf },

    #[display(fmt = "failed to read the sprite for the {} at `{}`", piece, "path.display()")]
    Unreadable {
        piece: Piece,
        path: PathBuf,
        source: io::Error,
    },
}

/// Trait for types that provide piece sprites.
#[cfg_attr(test, mockall::automock)]
pub trait Assets {
    /// Loads the [`Sprite`] of a [`Piece`] at the given size.
    fn load(&self, piece: Piece, size: u32) -> Result<Sprite, AssetError>;
}

/// Sprites drawn from the Unicode chess figures.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Glyphs;

impl Assets for Glyphs {
    fn load(&self, piece: Piece, size: u32) -> Result<Sprite, AssetError> {
        Ok(Sprite {
            piece,
            size,
            texture: Texture::Glyph(piece.figure()),
        })
    }
}

/// Sprites read from image files in a directory.
///
/// Each piece is expected at `<dir>/<c><R>.png`, where `c` is either `w` or `b`
/// and `R` is the upper case letter of the piece's role, e.g. `wK.png` or `bP.png`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    /// Sprites from the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Directory { root: root.into() }
    }

    /// The file expected to hold the sprite of a [`Piece`].
    pub fn path_of(&self, piece: Piece) -> PathBuf {
        let c = match piece.color() {
            Color::White => 'w',
            Color::Black => 'b',
        };

        self.root.join(format!("{}{}.png", c, piece.role().letter()))
    }
}

impl Assets for Directory {
    #[instrument(level = "trace", skip(self), err)]
    fn load(&self, piece: Piece, size: u32) -> Result<Sprite, AssetError> {
        let path = self.path_of(piece);
        let bytes = match std::fs::read(&path) {
            Ok(bytes) if bytes.is_empty() => return Err(AssetError::Empty { piece, path }),
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AssetError::Missing { piece, path })
            }
            Err(source) => {
                return Err(AssetError::Unreadable {
                    piece,
                    path,
                    source,
                })
            }
        };

        debug!(%piece, path = %path.display(), len = bytes.len(), "loaded sprite");

        Ok(Sprite {
            piece,
            size,
            texture: Texture::Image(bytes.into()),
        })
    }
}

/// The sprites of all twelve pieces, resolved up front.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SpriteSheet(ArrayVec<Sprite, 12>);

impl SpriteSheet {
    /// Loads every sprite at the given size, failing on the first one missing.
    #[instrument(level = "trace", skip(assets), err)]
    pub fn load<A: Assets + ?Sized>(assets: &A, size: u32) -> Result<Self, AssetError> {
        let sprites: ArrayVec<_, 12> = Piece::iter()
            .map(|p| assets.load(p, size))
            .collect::<Result<_, _>>()?;

        Ok(SpriteSheet(sprites))
    }
}

impl Index<Piece> for SpriteSheet {
    type Output = Sprite;

    fn index(&self, p: Piece) -> &Self::Output {
        &self.0[p.color() as usize * 6 + p.role() as usize]
    }
}
