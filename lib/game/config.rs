use crate::ui::{Layout, Theme};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroU32, str::FromStr, time::Duration};

#[cfg(test)]
use proptest::prelude::*;

/// The reason why parsing game configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

/// Runtime configuration for a [`Game`][`crate::game::Game`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The side length of the canvas in pixels.
    #[cfg_attr(test, strategy(8u32..=4096))]
    pub size: u32,

    /// The number of frames drawn per second.
    #[cfg_attr(test, strategy((1..=120u32).prop_filter_map("zero", NonZeroU32::new)))]
    pub fps: NonZeroU32,

    /// How long the final position stays on screen before the outcome is announced.
    #[cfg_attr(test, strategy((0..=10_000u64).prop_map(Duration::from_millis)))]
    #[serde(with = "humantime_serde")]
    pub linger: Duration,

    /// The font size of the text announcing the outcome.
    #[cfg_attr(test, strategy(1u32..=256))]
    pub banner: u32,

    /// The colors of the board and its decorations.
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: 640,
            fps: NonZeroU32::new(15).unwrap_or(NonZeroU32::MIN),
            linger: Duration::from_millis(200),
            banner: 74,
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// The geometry of the board.
    pub fn layout(&self) -> Layout {
        Layout::new(self.size)
    }

    /// The interval between consecutive frames.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.get()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Config {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
