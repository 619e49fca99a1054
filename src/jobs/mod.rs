//! The signal pipeline, split into steps that share a `JobContext`.

pub mod context;
pub mod handlers;
pub mod types;
pub mod workflow;

pub use context::JobContext;
pub use types::{Analysis, MarketSnapshot, NotificationOutcome, RunOutcome};
pub use workflow::run_pipeline;
