use thiserror::Error;

/// Errors surfaced by précis components and their collaborators.
#[derive(Debug, Error)]
pub enum PrecisError {
    /// Invalid configuration, rejected at construction time.
    #[error("Config error: {0}")]
    Config(String),

    /// The generation backend failed.
    #[error("Model error: {0}")]
    Model(String),

    /// The token-counting backend failed.
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Cooperative cancellation was requested.
    #[error("Operation cancelled")]
    Cancelled,
}
