//! Human-readable identity for a connected address.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::connector::Address;
use crate::error::WalletError;

/// External name lookup, e.g. the Starknet ID resolver.
#[async_trait(?Send)]
pub trait NameService {
    async fn lookup_name(&self, address: &str) -> Result<Option<String>, WalletError>;
}

/// Resolved view over one address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub address: Address,
    pub resolved_name: Option<String>,
    pub is_resolving: bool,
}

impl Identity {
    pub fn display_name(&self) -> String {
        self.resolved_name
            .clone()
            .unwrap_or_else(|| address_slice(&self.address))
    }
}

/// Deterministic short form of an address, e.g. `0x1234...abcd`.
pub fn address_slice(address: &str) -> String {
    if address.len() > 12 {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}

struct ResolverState {
    current: Option<Identity>,
    /// Bumped whenever the tracked address changes; a lookup that settles
    /// under an older epoch is discarded.
    epoch: u64,
}

/// Caches one identity per page session, lazily per distinct address.
pub struct IdentityResolver {
    service: Rc<dyn NameService>,
    state: RefCell<ResolverState>,
}

impl IdentityResolver {
    pub fn new(service: Rc<dyn NameService>) -> Self {
        Self {
            service,
            state: RefCell::new(ResolverState {
                current: None,
                epoch: 0,
            }),
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.state.borrow().current.clone()
    }

    /// Drop the cached identity, e.g. after disconnect.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.current = None;
        state.epoch += 1;
    }

    /// Begin (or reuse) resolution for `address` and return the immediately
    /// displayable view: the address slice with `is_resolving` set while a
    /// lookup is outstanding. Follow up with [`run_lookup`](Self::run_lookup)
    /// to settle it.
    pub fn resolve(&self, address: Address) -> Identity {
        let mut state = self.state.borrow_mut();
        if let Some(current) = &state.current {
            if current.address == address {
                return current.clone();
            }
        }
        state.epoch += 1;
        let identity = Identity {
            address,
            resolved_name: None,
            is_resolving: true,
        };
        state.current = Some(identity.clone());
        identity
    }

    /// Drive the outstanding lookup for `address` to completion.
    ///
    /// Issues at most one service call per distinct address. A settlement
    /// arriving after the address changed again is discarded; lookup errors
    /// silently degrade to the address slice.
    pub async fn run_lookup(&self, address: Address) -> Identity {
        let token = {
            let state = self.state.borrow();
            let outstanding = matches!(
                &state.current,
                Some(current) if current.address == address && current.is_resolving
            );
            outstanding.then_some(state.epoch)
        };
        let token = match token {
            Some(token) => token,
            // Nothing outstanding for this address.
            None => return self.resolve(address),
        };

        let name = match self.service.lookup_name(&address).await {
            Ok(name) => name.filter(|name| !name.is_empty()),
            Err(err) => {
                tracing::debug!("name lookup for {address} failed: {err}");
                None
            }
        };

        let mut state = self.state.borrow_mut();
        if state.epoch != token {
            tracing::debug!("discarding stale name lookup for {address}");
            return state.current.clone().unwrap_or(Identity {
                address,
                resolved_name: None,
                is_resolving: false,
            });
        }
        match state.current.as_mut() {
            Some(current) => {
                current.resolved_name = name;
                current.is_resolving = false;
                current.clone()
            }
            None => Identity {
                address,
                resolved_name: name,
                is_resolving: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use futures::channel::oneshot;
    use futures::join;
    use tokio::task::yield_now;

    use super::*;

    #[derive(Default)]
    struct FakeNameService {
        names: HashMap<String, String>,
        gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl FakeNameService {
        fn with_name(mut self, address: &str, name: &str) -> Self {
            self.names.insert(address.to_string(), name.to_string());
            self
        }

        fn gate(&self, address: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(address.to_string(), rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl NameService for FakeNameService {
        async fn lookup_name(&self, address: &str) -> Result<Option<String>, WalletError> {
            self.calls.borrow_mut().push(address.to_string());
            let gate = self.gates.borrow_mut().remove(address);
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.fail {
                return Err(WalletError::Lookup("service unreachable".to_string()));
            }
            Ok(self.names.get(address).cloned())
        }
    }

    fn resolver(service: FakeNameService) -> (IdentityResolver, Rc<FakeNameService>) {
        let service = Rc::new(service);
        (IdentityResolver::new(service.clone()), service)
    }

    #[test]
    fn address_slice_is_deterministic_prefix_and_suffix() {
        assert_eq!(address_slice("0xABC123456789789"), "0xABC1...9789");
        // Short addresses pass through untouched.
        assert_eq!(address_slice("0xABC"), "0xABC");
    }

    #[tokio::test]
    async fn resolve_returns_fallback_while_lookup_is_outstanding() {
        let (resolver, _service) = resolver(FakeNameService::default());

        let view = resolver.resolve("0xABC123456789789".to_string());
        assert!(view.is_resolving);
        assert_eq!(view.display_name(), "0xABC1...9789");

        let settled = resolver.run_lookup("0xABC123456789789".to_string()).await;
        assert!(!settled.is_resolving);
        assert_eq!(settled.resolved_name, None);
        // No name found: the slice stays the permanent display value.
        assert_eq!(settled.display_name(), "0xABC1...9789");
    }

    #[tokio::test]
    async fn resolved_name_replaces_fallback() {
        let (resolver, _service) =
            resolver(FakeNameService::default().with_name("0xABC123456789789", "alice.stark"));

        resolver.resolve("0xABC123456789789".to_string());
        let settled = resolver.run_lookup("0xABC123456789789".to_string()).await;
        assert_eq!(settled.display_name(), "alice.stark");
    }

    #[tokio::test]
    async fn lookup_failure_degrades_to_fallback() {
        let (resolver, _service) = resolver(FakeNameService {
            fail: true,
            ..FakeNameService::default()
        });

        resolver.resolve("0xABC123456789789".to_string());
        let settled = resolver.run_lookup("0xABC123456789789".to_string()).await;
        assert!(!settled.is_resolving);
        assert_eq!(settled.display_name(), "0xABC1...9789");
    }

    #[tokio::test]
    async fn one_lookup_per_distinct_address() {
        let (resolver, service) =
            resolver(FakeNameService::default().with_name("0xABC123456789789", "alice.stark"));

        resolver.resolve("0xABC123456789789".to_string());
        resolver.run_lookup("0xABC123456789789".to_string()).await;

        // A second resolve for the same address reuses the settled entry.
        let cached = resolver.resolve("0xABC123456789789".to_string());
        assert!(!cached.is_resolving);
        let settled = resolver.run_lookup("0xABC123456789789".to_string()).await;
        assert_eq!(settled.display_name(), "alice.stark");
        assert_eq!(*service.calls.borrow(), vec!["0xABC123456789789"]);
    }

    #[tokio::test]
    async fn stale_lookup_never_overwrites_newer_address() {
        let first = "0xAAAAAAAAAAAAAAAA".to_string();
        let second = "0xBBBBBBBBBBBBBBBB".to_string();
        let service = FakeNameService::default()
            .with_name(&first, "old.stark")
            .with_name(&second, "new.stark");
        let settle_first = service.gate(&first);
        let (resolver, _service) = resolver(service);

        resolver.resolve(first.clone());
        let (stale, _) = join!(resolver.run_lookup(first.clone()), async {
            yield_now().await;
            // Address changes before the first lookup settles.
            resolver.resolve(second.clone());
            let settled = resolver.run_lookup(second.clone()).await;
            assert_eq!(settled.display_name(), "new.stark");
            settle_first.send(()).unwrap();
        });

        assert_eq!(stale.address, second);
        let current = resolver.current().unwrap();
        assert_eq!(current.display_name(), "new.stark");
    }

    #[tokio::test]
    async fn clear_evicts_cached_identity() {
        let (resolver, _service) = resolver(FakeNameService::default());
        resolver.resolve("0xABC123456789789".to_string());
        resolver.clear();
        assert_eq!(resolver.current(), None);
    }
}
