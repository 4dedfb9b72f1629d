//! Inline SVG icons for the wallet surfaces.

use dioxus::prelude::*;

use predfi_wallet::{Connector, ConnectorKind};

/// Closed mapping from connector kind (and id, for injected wallets) to its
/// icon, resolved once at render time.
pub fn connector_icon(connector: &Connector) -> Element {
    match connector.kind {
        ConnectorKind::Injected if connector.id.to_lowercase().contains("braavos") => {
            rsx! { BraavosIcon {} }
        }
        ConnectorKind::Injected => rsx! { ArgentIcon {} },
        ConnectorKind::WebWallet => rsx! { WebWalletIcon {} },
        ConnectorKind::Mobile => rsx! { MobileIcon {} },
        ConnectorKind::HostManaged => rsx! { ControllerIcon {} },
    }
}

#[component]
pub fn ArgentIcon() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "currentColor",
            path { d: "M14.6 3H9.4a.4.4 0 0 0-.4.39c-.1 4.8-2.6 9.36-6.84 12.6a.4.4 0 0 0-.08.55l3.06 4.2a.4.4 0 0 0 .57.08A21.05 21.05 0 0 0 12 15.16a21.05 21.05 0 0 0 6.29 5.66.4.4 0 0 0 .57-.08l3.06-4.2a.4.4 0 0 0-.08-.56C17.6 12.75 15.1 8.2 15 3.4a.4.4 0 0 0-.4-.39Z" }
        }
    }
}

#[component]
pub fn BraavosIcon() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "currentColor",
            path { d: "M6 4.5 9 8h6l3-3.5.9 4.6-1.4 1.4v6.3A3.2 3.2 0 0 1 14.3 20H9.7a3.2 3.2 0 0 1-3.2-3.2v-6.3L5.1 9.1 6 4.5Z" }
            circle { cx: "9.5", cy: "14", r: "1.2", fill: "#0b0b0b" }
            circle { cx: "14.5", cy: "14", r: "1.2", fill: "#0b0b0b" }
        }
    }
}

#[component]
pub fn WebWalletIcon() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            circle { cx: "12", cy: "12", r: "9" }
            path { d: "M3 12h18M12 3a15 15 0 0 1 0 18M12 3a15 15 0 0 0 0 18" }
        }
    }
}

#[component]
pub fn MobileIcon() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            rect { x: "7", y: "2.5", width: "10", height: "19", rx: "2" }
            path { d: "M10.5 18.5h3" }
        }
    }
}

#[component]
pub fn ControllerIcon() -> Element {
    rsx! {
        svg { class: "icon", view_box: "0 0 24 24", fill: "currentColor",
            path { d: "M4 7.5A2.5 2.5 0 0 1 6.5 5h11A2.5 2.5 0 0 1 20 7.5v9a2.5 2.5 0 0 1-2.5 2.5h-11A2.5 2.5 0 0 1 4 16.5v-9Zm4.2 3.3H6.6v1.4H5.2v1.6h1.4v1.4h1.6v-1.4h1.4v-1.6H8.2v-1.4Zm8.3-.3a1.1 1.1 0 1 0 0 2.2 1.1 1.1 0 0 0 0-2.2Zm-2.5 2.5a1.1 1.1 0 1 0 0 2.2 1.1 1.1 0 0 0 0-2.2Z" }
        }
    }
}

#[component]
pub fn CrossIcon() -> Element {
    rsx! {
        svg { class: "icon icon-sm", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", d: "M6 18 18 6M6 6l12 12" }
        }
    }
}

#[component]
pub fn ChevronDownIcon() -> Element {
    rsx! {
        svg { class: "icon icon-sm", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2",
            path { stroke_linecap: "round", stroke_linejoin: "round", d: "m6 9 6 6 6-6" }
        }
    }
}
