//! Wallet-connector orchestration for the PredFi dapp.
//!
//! The UI crate only ever talks to wallets through the types here: the
//! [`ConnectorRegistry`] knows which connectors exist, the
//! [`SessionController`] owns the single page-wide session, and the
//! [`IdentityResolver`] turns a connected address into something readable.

pub mod config;
pub mod connector;
pub mod error;
pub mod identity;
pub mod registry;
pub mod session;

pub use config::ProviderConfig;
pub use connector::{Address, Connector, ConnectorKind, WalletProvider};
pub use error::WalletError;
pub use identity::{address_slice, Identity, IdentityResolver, NameService};
pub use registry::ConnectorRegistry;
pub use session::{Session, SessionController, SessionStatus};
