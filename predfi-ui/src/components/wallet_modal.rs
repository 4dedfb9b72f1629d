use dioxus::prelude::*;

use predfi_wallet::{Connector, Session, SessionStatus, WalletError};

use crate::components::icons::{connector_icon, CrossIcon};
use crate::state::SharedController;

/// Overlay listing the registry's connectors. Purely presentational over the
/// session controller: it holds no session state of its own.
#[component]
pub fn WalletModal(mut open: Signal<bool>) -> Element {
    let session = use_context::<Signal<Session>>();
    let connectors = use_context::<Signal<Vec<Connector>>>();

    let error = session.read().last_error.clone();
    let connecting = session.read().status == SessionStatus::Connecting;

    rsx! {
        div { class: "modal-root",
            // Clicking outside dismisses without touching the session.
            div { class: "modal-backdrop", onclick: move |_| open.set(false) }
            div { class: "modal-panel",
                button { class: "modal-close", onclick: move |_| open.set(false),
                    CrossIcon {}
                }
                h1 { class: "modal-title", "Select Wallet" }
                div { class: "connector-grid",
                    for connector in connectors.read().iter().cloned() {
                        ConnectorButton { connector, open }
                    }
                }
                if connecting {
                    p { class: "modal-hint", "Waiting for wallet..." }
                }
                if let Some(message) = error {
                    p { class: "modal-error", "{message}" }
                }
            }
        }
    }
}

#[component]
fn ConnectorButton(connector: Connector, mut open: Signal<bool>) -> Element {
    let session = use_context::<Signal<Session>>();
    let controller = use_context::<SharedController>();

    let busy = matches!(
        session.read().status,
        SessionStatus::Connecting | SessionStatus::Disconnecting
    );

    let id = connector.id.clone();
    let on_select = move |_| {
        let controller = controller.clone();
        let id = id.clone();
        spawn(async move {
            match controller.connect(&id).await {
                Ok(_) => open.set(false),
                // The triggering control is disabled while an operation is
                // pending; this path is a race fallback.
                Err(WalletError::Busy) => {}
                // Rejections land in the session's error state; the modal
                // stays open so the user can retry with another connector.
                Err(err) => tracing::debug!("connect attempt failed: {err}"),
            }
        });
    };

    rsx! {
        button { class: "connector-card", disabled: busy, onclick: on_select,
            div { class: "connector-icon", {connector_icon(&connector)} }
            span { class: "connector-name", "{connector.id}" }
        }
    }
}
