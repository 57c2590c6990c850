pub mod collision;
pub mod combat;
pub mod movement;

pub use collision::*;
pub use combat::*;
pub use movement::*;
