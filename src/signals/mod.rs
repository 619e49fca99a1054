//! Signal evaluation interfaces.

pub mod change;
pub mod decision;
pub mod engine;
pub mod scoring;

pub use change::*;
pub use decision::*;
pub use engine::*;
pub use scoring::*;
