use thiserror::Error;

/// Errors surfaced by the wallet orchestration layer.
///
/// Only `ConnectRejected` is ever shown to the user; everything else either
/// degrades a capability or is rejected synchronously at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("unknown connector `{0}`")]
    UnknownConnector(String),

    /// A connect or disconnect is already in flight. Requests are rejected,
    /// never queued.
    #[error("another wallet operation is in progress")]
    Busy,

    #[error("connection rejected: {0}")]
    ConnectRejected(String),

    #[error("wallet provider error: {0}")]
    Provider(String),

    #[error("name lookup failed: {0}")]
    Lookup(String),
}
