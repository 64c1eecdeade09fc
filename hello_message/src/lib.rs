//! Holds a single text message and writes it to standard output.

pub mod config;
pub mod errors;
pub mod run;

mod holder;
pub use holder::*;

mod tracing_config;

pub use tracing_config::build_subscriber;
