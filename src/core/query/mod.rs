pub mod engine;
pub mod group;

pub use engine::*;
pub use group::*;
