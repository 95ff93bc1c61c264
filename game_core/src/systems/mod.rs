pub mod collision;
pub mod difficulty;
pub mod gc;
pub mod movement;
pub mod scoring;
pub mod spawning;

pub use collision::*;
pub use difficulty::*;
pub use gc::*;
pub use movement::*;
pub use scoring::*;
pub use spawning::*;
