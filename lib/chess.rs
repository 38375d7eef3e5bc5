mod color;
mod file;
mod r#move;
mod outcome;
mod piece;
mod position;
mod rank;
mod role;
mod rules;
mod square;

pub use color::*;
pub use file::*;
pub use outcome::*;
pub use piece::*;
pub use position::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use rules::*;
pub use square::*;
