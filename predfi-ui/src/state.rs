//! Shared state handles for the dapp shell.
//!
//! The orchestration core owns the session and connector set; the signals
//! provided from `App` only carry render copies of its snapshots.

use std::rc::Rc;

use predfi_wallet::{ConnectorRegistry, IdentityResolver, SessionController};

/// Page-wide connector registry.
pub type SharedRegistry = Rc<ConnectorRegistry>;

/// The single session state machine.
pub type SharedController = Rc<SessionController>;

/// Identity cache for the connected address.
pub type SharedResolver = Rc<IdentityResolver>;
