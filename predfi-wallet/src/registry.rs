//! Discovery and merge of usable wallet connectors.

use std::cell::RefCell;

use crate::connector::Connector;
use crate::error::WalletError;

/// The page-wide set of usable connectors.
///
/// Built once at startup from the statically available sources, then mutated
/// exactly once more when the deferred host-managed connector settles.
/// Snapshots are cheap clones and never block.
#[derive(Default)]
pub struct ConnectorRegistry {
    connectors: RefCell<Vec<Connector>>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connectors<I>(batch: I) -> Self
    where
        I: IntoIterator<Item = Connector>,
    {
        let registry = Self::new();
        registry.merge(batch);
        registry
    }

    /// Current snapshot. Safe to call every render.
    pub fn list(&self) -> Vec<Connector> {
        self.connectors.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<Connector> {
        self.connectors.borrow().iter().find(|c| c.id == id).cloned()
    }

    /// Merge a batch of connectors into the snapshot. A later entry replaces
    /// an earlier one with the same id.
    pub fn merge<I>(&self, batch: I)
    where
        I: IntoIterator<Item = Connector>,
    {
        let mut connectors = self.connectors.borrow_mut();
        for connector in batch {
            if let Some(slot) = connectors.iter_mut().find(|c| c.id == connector.id) {
                *slot = connector;
            } else {
                connectors.push(connector);
            }
        }
    }

    /// Append a host-managed connector once its deferred construction has
    /// settled. Failed construction leaves the registry without it; that is
    /// a degraded capability, not a fatal error.
    pub fn install_deferred(&self, outcome: Result<Connector, WalletError>) {
        match outcome {
            Ok(connector) => self.merge([connector]),
            Err(err) => tracing::warn!("host-managed connector unavailable: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use async_trait::async_trait;

    use super::*;
    use crate::connector::{Address, ConnectorKind, WalletProvider};

    struct StubProvider(&'static str);

    #[async_trait(?Send)]
    impl WalletProvider for StubProvider {
        async fn connect(&self) -> Result<Address, WalletError> {
            Ok(self.0.to_string())
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            Ok(())
        }
    }

    fn connector(id: &str, kind: ConnectorKind) -> Connector {
        Connector::new(id, kind, Rc::new(StubProvider("0x0")))
    }

    fn ids(registry: &ConnectorRegistry) -> Vec<String> {
        registry.list().into_iter().map(|c| c.id).collect()
    }

    #[test]
    fn merge_is_last_write_wins_on_duplicate_ids() {
        let registry = ConnectorRegistry::with_connectors([
            connector("argentX", ConnectorKind::Injected),
            connector("braavos", ConnectorKind::Injected),
        ]);
        registry.merge([connector("argentX", ConnectorKind::WebWallet)]);

        assert_eq!(ids(&registry), vec!["argentX", "braavos"]);
        let replaced = registry.get("argentX").unwrap();
        assert_eq!(replaced.kind, ConnectorKind::WebWallet);
    }

    #[test]
    fn deferred_install_appends_exactly_once() {
        let registry = ConnectorRegistry::with_connectors([
            connector("argentX", ConnectorKind::Injected),
            connector("braavos", ConnectorKind::Injected),
        ]);

        registry.install_deferred(Ok(connector("controller", ConnectorKind::HostManaged)));

        assert_eq!(ids(&registry), vec!["argentX", "braavos", "controller"]);
    }

    #[test]
    fn failed_deferred_install_degrades_silently() {
        let registry =
            ConnectorRegistry::with_connectors([connector("argentX", ConnectorKind::Injected)]);

        registry.install_deferred(Err(WalletError::Provider("no window object".to_string())));

        assert_eq!(ids(&registry), vec!["argentX"]);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let registry = ConnectorRegistry::new();
        assert!(registry.get("argentX").is_none());
    }
}
