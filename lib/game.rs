mod config;
mod pacer;
mod phase;
mod session;
mod surface;

pub use config::*;
pub use pacer::*;
pub use phase::*;
pub use session::*;
pub use surface::*;
