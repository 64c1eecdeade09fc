use thiserror::Error;

/// An error that could occur when writing a message out
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write message: {0}")]
    Write(#[from] std::io::Error),
}

/// An error in the built-in logging configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid logging config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can stop [`run_hello`](crate::run::run_hello) from completing
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("couldn't install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}
