mod assets;
mod canvas;
mod highlights;
mod layout;
mod renderer;
mod selector;
mod theme;

pub use assets::*;
pub use canvas::*;
pub use highlights::*;
pub use layout::*;
pub use renderer::*;
pub use selector::*;
pub use theme::*;
