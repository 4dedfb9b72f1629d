//! Connect/disconnect lifecycle for the single page-wide wallet session.

use std::cell::RefCell;
use std::rc::Rc;

use crate::connector::{Address, WalletProvider};
use crate::error::WalletError;
use crate::registry::ConnectorRegistry;

/// Current connection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Disconnecting,
    Error,
}

/// The single wallet session for the page.
///
/// `address` is present only while connected, `active_connector_id` only
/// while an operation targets a connector, `last_error` only in the error
/// state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    pub address: Option<Address>,
    pub active_connector_id: Option<String>,
    pub last_error: Option<String>,
}

impl Session {
    pub fn is_connected(&self) -> bool {
        self.status == SessionStatus::Connected
    }

    fn is_busy(&self) -> bool {
        matches!(
            self.status,
            SessionStatus::Connecting | SessionStatus::Disconnecting
        )
    }
}

struct Inner {
    session: Session,
    /// Attempt sequence; settlement of an operation whose token no longer
    /// matches is discarded instead of applied out of order.
    attempt: u64,
    active_provider: Option<Rc<dyn WalletProvider>>,
}

/// Owns the session state machine. All session mutation funnels through
/// here; consumers read snapshots or subscribe to transitions.
pub struct SessionController {
    registry: Rc<ConnectorRegistry>,
    inner: RefCell<Inner>,
    observer: RefCell<Option<Rc<dyn Fn(&Session)>>>,
}

impl SessionController {
    pub fn new(registry: Rc<ConnectorRegistry>) -> Self {
        Self {
            registry,
            inner: RefCell::new(Inner {
                session: Session::default(),
                attempt: 0,
                active_provider: None,
            }),
            observer: RefCell::new(None),
        }
    }

    /// Register a callback invoked after every state transition.
    pub fn set_observer(&self, observer: impl Fn(&Session) + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
    }

    pub fn snapshot(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    /// Connect through the named connector.
    ///
    /// Rejected synchronously with [`WalletError::Busy`] while another
    /// connect or disconnect is in flight. When already connected, the
    /// current provider session is torn down before the new connect is
    /// attempted so two provider sessions never overlap.
    pub async fn connect(&self, connector_id: &str) -> Result<Session, WalletError> {
        if self.inner.borrow().session.is_busy() {
            return Err(WalletError::Busy);
        }
        let connector = self
            .registry
            .get(connector_id)
            .ok_or_else(|| WalletError::UnknownConnector(connector_id.to_string()))?;

        let mut token = 0;
        let mut previous = None;
        self.apply(|inner| {
            inner.attempt += 1;
            token = inner.attempt;
            previous = inner.active_provider.take();
            inner.session = Session {
                status: SessionStatus::Connecting,
                address: None,
                active_connector_id: Some(connector.id.clone()),
                last_error: None,
            };
        });

        // Reconnect path: best-effort teardown of the previous provider.
        if let Some(previous) = previous {
            if let Err(err) = previous.disconnect().await {
                tracing::warn!("disconnect of previous provider failed: {err}");
            }
        }

        match connector.provider().connect().await {
            Ok(address) => {
                if !self.is_current(token) {
                    tracing::debug!("discarding stale connect result for `{connector_id}`");
                    return Ok(self.snapshot());
                }
                Ok(self.apply(|inner| {
                    inner.active_provider = Some(connector.provider());
                    inner.session.status = SessionStatus::Connected;
                    inner.session.address = Some(address.clone());
                }))
            }
            Err(err) => {
                if !self.is_current(token) {
                    tracing::debug!("discarding stale connect rejection for `{connector_id}`");
                    return Ok(self.snapshot());
                }
                let message = err.to_string();
                self.apply(|inner| {
                    inner.session = Session {
                        status: SessionStatus::Error,
                        address: None,
                        active_connector_id: None,
                        last_error: Some(message.clone()),
                    };
                });
                Err(WalletError::ConnectRejected(message))
            }
        }
    }

    /// Disconnect the current session.
    ///
    /// Best-effort: the local session always ends up `Disconnected`, even
    /// when the provider call fails. Disconnecting while already
    /// disconnected just normalizes the session fields.
    pub async fn disconnect(&self) -> Result<Session, WalletError> {
        {
            let inner = self.inner.borrow();
            if inner.session.is_busy() {
                return Err(WalletError::Busy);
            }
            if !inner.session.is_connected() {
                drop(inner);
                return Ok(self.clear());
            }
        }

        let mut token = 0;
        let mut provider = None;
        self.apply(|inner| {
            inner.attempt += 1;
            token = inner.attempt;
            provider = inner.active_provider.take();
            inner.session.status = SessionStatus::Disconnecting;
            inner.session.address = None;
        });

        if let Some(provider) = provider {
            if let Err(err) = provider.disconnect().await {
                // Local logout must succeed even when the provider is
                // unreachable.
                tracing::warn!("provider disconnect failed: {err}");
            }
        }

        if self.is_current(token) {
            Ok(self.clear())
        } else {
            Ok(self.snapshot())
        }
    }

    /// Force the session back to `Disconnected`, e.g. on an external
    /// revocation event. Any in-flight operation settles into the void.
    pub fn reset(&self) -> Session {
        self.apply(|inner| {
            inner.attempt += 1;
            inner.active_provider = None;
            inner.session = Session::default();
        })
    }

    fn clear(&self) -> Session {
        self.apply(|inner| {
            inner.active_provider = None;
            inner.session = Session::default();
        })
    }

    fn is_current(&self, token: u64) -> bool {
        self.inner.borrow().attempt == token
    }

    fn apply(&self, mutate: impl FnOnce(&mut Inner)) -> Session {
        let snapshot = {
            let mut inner = self.inner.borrow_mut();
            mutate(&mut inner);
            inner.session.clone()
        };
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(&snapshot);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::join;
    use tokio::task::yield_now;

    use super::*;
    use crate::connector::{Connector, ConnectorKind};

    #[derive(Default)]
    struct CallLog(RefCell<Vec<String>>);

    impl CallLog {
        fn push(&self, entry: impl Into<String>) {
            self.0.borrow_mut().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    struct FakeProvider {
        name: &'static str,
        address: &'static str,
        fail_connect: bool,
        fail_disconnect: bool,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        log: Rc<CallLog>,
    }

    impl FakeProvider {
        fn new(name: &'static str, address: &'static str, log: Rc<CallLog>) -> Self {
            Self {
                name,
                address,
                fail_connect: false,
                fail_disconnect: false,
                gate: RefCell::new(None),
                log,
            }
        }

        fn gated(self) -> (Self, oneshot::Sender<()>) {
            let (tx, rx) = oneshot::channel();
            *self.gate.borrow_mut() = Some(rx);
            (self, tx)
        }
    }

    #[async_trait(?Send)]
    impl WalletProvider for FakeProvider {
        async fn connect(&self) -> Result<Address, WalletError> {
            self.log.push(format!("{}.connect", self.name));
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.fail_connect {
                return Err(WalletError::Provider("user declined".to_string()));
            }
            Ok(self.address.to_string())
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            self.log.push(format!("{}.disconnect", self.name));
            if self.fail_disconnect {
                return Err(WalletError::Provider("provider unreachable".to_string()));
            }
            Ok(())
        }
    }

    fn setup(providers: Vec<FakeProvider>) -> SessionController {
        let registry = ConnectorRegistry::with_connectors(providers.into_iter().map(|p| {
            Connector::new(p.name, ConnectorKind::Injected, Rc::new(p) as Rc<dyn WalletProvider>)
        }));
        SessionController::new(Rc::new(registry))
    }

    #[tokio::test]
    async fn connect_passes_through_connecting_to_connected() {
        let log = Rc::new(CallLog::default());
        let (provider, settle) = FakeProvider::new("argentX", "0xABC123", log.clone()).gated();
        let controller = setup(vec![provider]);

        let (result, _) = join!(controller.connect("argentX"), async {
            yield_now().await;
            let pending = controller.snapshot();
            assert_eq!(pending.status, SessionStatus::Connecting);
            assert_eq!(pending.active_connector_id.as_deref(), Some("argentX"));
            assert_eq!(pending.address, None);
            settle.send(()).unwrap();
        });

        let session = result.unwrap();
        assert_eq!(session.status, SessionStatus::Connected);
        assert_eq!(session.address.as_deref(), Some("0xABC123"));
        assert_eq!(session.active_connector_id.as_deref(), Some("argentX"));
        assert_eq!(session.last_error, None);
    }

    #[tokio::test]
    async fn second_connect_while_pending_is_rejected_immediately() {
        let log = Rc::new(CallLog::default());
        let (provider, settle) = FakeProvider::new("argentX", "0xABC", log.clone()).gated();
        let braavos = FakeProvider::new("braavos", "0xDEF", log.clone());
        let controller = setup(vec![provider, braavos]);

        let (result, _) = join!(controller.connect("argentX"), async {
            yield_now().await;
            let second = controller.connect("braavos").await;
            assert_eq!(second.unwrap_err(), WalletError::Busy);
            // The rejected call must not disturb the in-flight attempt.
            let pending = controller.snapshot();
            assert_eq!(pending.active_connector_id.as_deref(), Some("argentX"));
            settle.send(()).unwrap();
        });

        assert!(result.unwrap().is_connected());
        assert_eq!(log.entries(), vec!["argentX.connect"]);
    }

    #[tokio::test]
    async fn rejected_connect_records_error_and_next_attempt_recovers() {
        let log = Rc::new(CallLog::default());
        let mut braavos = FakeProvider::new("braavos", "0xDEF", log.clone());
        braavos.fail_connect = true;
        let argent = FakeProvider::new("argentX", "0xABC123", log.clone());
        let controller = setup(vec![braavos, argent]);

        let err = controller.connect("braavos").await.unwrap_err();
        assert!(matches!(err, WalletError::ConnectRejected(_)));

        let session = controller.snapshot();
        assert_eq!(session.status, SessionStatus::Error);
        assert!(session.last_error.is_some());
        assert_eq!(session.address, None);
        assert_eq!(session.active_connector_id, None);

        let session = controller.connect("argentX").await.unwrap();
        assert!(session.is_connected());
        assert_eq!(session.last_error, None);
    }

    #[tokio::test]
    async fn disconnect_clears_session_even_when_provider_fails() {
        let log = Rc::new(CallLog::default());
        let mut provider = FakeProvider::new("argentX", "0xABC", log.clone());
        provider.fail_disconnect = true;
        let controller = setup(vec![provider]);

        controller.connect("argentX").await.unwrap();
        let session = controller.disconnect().await.unwrap();

        assert_eq!(session.status, SessionStatus::Disconnected);
        assert_eq!(session.address, None);
        assert_eq!(session.active_connector_id, None);

        // Idempotent: disconnecting again is a no-op, not an error.
        let session = controller.disconnect().await.unwrap();
        assert_eq!(session.status, SessionStatus::Disconnected);
    }

    #[tokio::test]
    async fn reconnect_tears_down_previous_provider_first() {
        let log = Rc::new(CallLog::default());
        let argent = FakeProvider::new("argentX", "0xABC", log.clone());
        let braavos = FakeProvider::new("braavos", "0xDEF", log.clone());
        let controller = setup(vec![argent, braavos]);

        controller.connect("argentX").await.unwrap();
        let session = controller.connect("braavos").await.unwrap();

        assert_eq!(session.address.as_deref(), Some("0xDEF"));
        assert_eq!(
            log.entries(),
            vec!["argentX.connect", "argentX.disconnect", "braavos.connect"]
        );
    }

    #[tokio::test]
    async fn reset_discards_inflight_connect_settlement() {
        let log = Rc::new(CallLog::default());
        let (provider, settle) = FakeProvider::new("argentX", "0xABC", log.clone()).gated();
        let controller = setup(vec![provider]);

        let (result, _) = join!(controller.connect("argentX"), async {
            yield_now().await;
            controller.reset();
            settle.send(()).unwrap();
        });

        // The settlement arrived after the reset and must not be applied.
        let session = result.unwrap();
        assert_eq!(session.status, SessionStatus::Disconnected);
        assert_eq!(controller.snapshot().address, None);
    }

    #[tokio::test]
    async fn unknown_connector_is_rejected_without_transition() {
        let controller = setup(vec![]);
        let err = controller.connect("ghost").await.unwrap_err();
        assert_eq!(err, WalletError::UnknownConnector("ghost".to_string()));
        assert_eq!(controller.snapshot(), Session::default());
    }

    #[tokio::test]
    async fn observer_sees_every_transition() {
        let log = Rc::new(CallLog::default());
        let provider = FakeProvider::new("argentX", "0xABC", log.clone());
        let controller = setup(vec![provider]);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.set_observer(move |session| sink.borrow_mut().push(session.status));

        controller.connect("argentX").await.unwrap();
        controller.disconnect().await.unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                SessionStatus::Connecting,
                SessionStatus::Connected,
                SessionStatus::Disconnecting,
                SessionStatus::Disconnected,
            ]
        );
    }
}
