use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(test)]
use test_strategy::Arbitrary;

/// A color in the sRGB space.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(Arbitrary))]
#[display(fmt = "#{:02x}{:02x}{:02x}", _0, _1, _2)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Rgb(0, 0, 0);
    pub const RED: Self = Rgb(255, 0, 0);
    pub const GREEN: Self = Rgb(0, 255, 0);
}

/// The colors used to draw the board and its decorations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// The color of light squares.
    pub light: Rgb,
    /// The color of dark squares.
    pub dark: Rgb,
    /// The outline around the selected square.
    pub selection: Rgb,
    /// The dot on quiet destinations.
    pub quiet: Rgb,
    /// The ring on capturing destinations.
    pub capture: Rgb,
    /// The cross over the losing king.
    pub cross: Rgb,
    /// The text announcing the outcome.
    pub banner: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            light: Rgb(240, 217, 181),
            dark: Rgb(181, 136, 99),
            selection: Rgb::GREEN,
            quiet: Rgb::BLACK,
            capture: Rgb::RED,
            cross: Rgb::RED,
            banner: Rgb::RED,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing a [`Theme`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse theme")]
pub struct ParseThemeError(ron::de::SpannedError);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
