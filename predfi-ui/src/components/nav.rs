use dioxus::prelude::*;

use predfi_wallet::{address_slice, Identity, Session};

use crate::components::icons::ChevronDownIcon;
use crate::components::wallet_modal::WalletModal;
use crate::state::SharedController;

const NAV_ITEMS: [&str; 3] = ["Features", "How it works", "About"];

#[component]
pub fn Nav() -> Element {
    let session = use_context::<Signal<Session>>();
    let identity = use_context::<Signal<Option<Identity>>>();
    let controller = use_context::<SharedController>();

    let mut open = use_signal(|| false);

    let connected = session.read().is_connected();
    let label = if let Some(identity) = identity.read().as_ref() {
        identity.display_name()
    } else if let Some(address) = session.read().address.as_ref() {
        address_slice(address)
    } else {
        "Connect Wallet".to_string()
    };

    let on_disconnect = move |_| {
        let controller = controller.clone();
        open.set(false);
        spawn(async move {
            if let Err(err) = controller.disconnect().await {
                tracing::warn!("disconnect failed: {err}");
            }
        });
    };

    rsx! {
        if *open.read() && !connected {
            WalletModal { open }
        }
        header { class: "nav",
            a { class: "nav-brand", href: "/", "PredFi" }
            ul { class: "nav-menu",
                for item in NAV_ITEMS {
                    li { class: "nav-item", "{item}" }
                }
            }
            div { class: "nav-actions",
                button {
                    class: "btn btn-wallet",
                    onclick: move |_| {
                        let current = *open.read();
                        open.set(!current);
                    },
                    "{label}"
                    span {
                        class: if *open.read() { "chevron chevron-open" } else { "chevron" },
                        ChevronDownIcon {}
                    }
                }
            }
            if *open.read() && connected {
                button { class: "btn btn-disconnect", onclick: on_disconnect,
                    "Disconnect Wallet"
                }
            }
        }
    }
}
