use crate::ui::{Frame, Point};
use derive_more::Display;

#[cfg(test)]
use test_strategy::Arbitrary;

/// Something the player did.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Event {
    /// The pointer was pressed at the given point on the canvas.
    #[display(fmt = "press at {}", _0)]
    Press(Point),
    /// The player asked to close the window.
    #[display(fmt = "close")]
    Close,
}

/// Trait for types that display frames and collect player input.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Surface {
    /// The reason why the surface failed.
    type Error;

    /// The next pending [`Event`], if any, without blocking.
    ///
    /// Events are returned in the order they arrived.
    fn poll(&mut self) -> Result<Option<Event>, Self::Error>;

    /// Blocks until the next [`Event`] arrives.
    fn wait(&mut self) -> Result<Event, Self::Error>;

    /// Displays a [`Frame`], replacing whatever was displayed before.
    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
