use crate::{config::LoggingConfig, errors::RunError, MessageHolder};
use tracing_subscriber::util::SubscriberInitExt;

pub const GREETING: &str = "Hello, World!";

/// Set up logging, then write [`GREETING`] to standard output once.
pub fn run_hello() -> Result<(), RunError> {
    let log_config = LoggingConfig::builtin()?;
    crate::build_subscriber(log_config).try_init()?;

    let holder = MessageHolder::new(GREETING);
    holder.emit()?;

    tracing::debug!("Done");

    Ok(())
}
