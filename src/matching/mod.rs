//! Matching module containing name comparison, signal scoring, and the
//! decision engine

pub mod engine;
pub mod name;
pub mod score;

pub use engine::*;
pub use name::*;
pub use score::*;
