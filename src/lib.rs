//! Bitcoin price watcher: polls market data, computes technical indicators,
//! derives a BUY/SELL/WAIT signal and notifies when the signal changes.

pub mod common;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use error::BotError;
