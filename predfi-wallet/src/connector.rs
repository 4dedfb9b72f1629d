//! Connector model and the capability surface each connector wraps.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::WalletError;

/// Opaque account identifier as reported by the wallet provider.
pub type Address = String;

/// How a connector reaches its wallet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorKind {
    /// Browser-extension wallet injected into the page.
    Injected,
    /// Hosted web wallet, the fallback when no extension is installed.
    WebWallet,
    /// Mobile wallet reached through a deep link.
    Mobile,
    /// Built lazily in a browser context because its constructor touches
    /// browser-only globals.
    HostManaged,
}

/// The capability surface of one wallet SDK. Everything SDK-specific stays
/// behind this trait.
#[async_trait(?Send)]
pub trait WalletProvider {
    async fn connect(&self) -> Result<Address, WalletError>;
    async fn disconnect(&self) -> Result<(), WalletError>;
}

/// One way of reaching a wallet.
#[derive(Clone)]
pub struct Connector {
    pub id: String,
    pub kind: ConnectorKind,
    provider: Rc<dyn WalletProvider>,
}

impl Connector {
    pub fn new(
        id: impl Into<String>,
        kind: ConnectorKind,
        provider: Rc<dyn WalletProvider>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            provider,
        }
    }

    pub fn provider(&self) -> Rc<dyn WalletProvider> {
        Rc::clone(&self.provider)
    }
}

// Connectors are compared by identity; the provider handle carries no
// meaningful equality.
impl PartialEq for Connector {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.kind == other.kind
    }
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}
