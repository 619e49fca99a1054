//! Core application primitives (HTTP surface, scheduler, runtime wiring)

pub mod http;
pub mod runtime;
pub mod scheduler;

pub use http::*;
pub use runtime::*;
pub use scheduler::*;
