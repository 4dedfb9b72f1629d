#![allow(non_snake_case)]

mod components;
mod interop;
mod providers;
mod state;

use std::rc::Rc;

use dioxus::prelude::*;

use predfi_wallet::{
    ConnectorRegistry, Identity, IdentityResolver, ProviderConfig, Session, SessionController,
};
use state::{SharedController, SharedRegistry, SharedResolver};

const STYLE: &str = include_str!("../assets/style.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ProviderConfig::from_env);
    let registry: SharedRegistry = use_hook(|| {
        Rc::new(ConnectorRegistry::with_connectors(
            providers::initial_connectors(),
        ))
    });

    let session = use_signal(Session::default);
    let mut identity = use_signal(|| None::<Identity>);
    let mut connectors = use_signal(|| registry.list());

    // The controller stays the only writer of the session; the signal just
    // carries render copies of its snapshots.
    let controller: SharedController = use_hook(|| {
        let controller = Rc::new(SessionController::new(registry.clone()));
        controller.set_observer(move |snapshot| {
            let mut session = session;
            session.set(snapshot.clone());
        });
        controller
    });
    let resolver: SharedResolver =
        use_hook(|| Rc::new(IdentityResolver::new(Rc::new(providers::StarknetIdService::default()))));

    use_context_provider(|| registry.clone());
    use_context_provider(|| controller.clone());
    use_context_provider(|| resolver.clone());
    use_context_provider(|| session);
    use_context_provider(|| identity);
    use_context_provider(|| connectors);

    // Entering `connected` kicks off name resolution for the new address;
    // leaving it evicts the cached identity. This lives at the app root so
    // an in-flight lookup survives the wallet modal unmounting.
    {
        let resolver = resolver.clone();
        use_effect(move || {
            let address = session.read().address.clone();
            let resolver = resolver.clone();
            match address {
                Some(address) => {
                    identity.set(Some(resolver.resolve(address.clone())));
                    spawn(async move {
                        let settled = resolver.run_lookup(address).await;
                        let mut identity = identity;
                        identity.set(Some(settled));
                    });
                }
                None => {
                    resolver.clear();
                    identity.set(None);
                }
            }
        });
    }

    // The controller connector needs browser globals, so it is built once
    // after mount instead of during the first render pass.
    {
        let registry = registry.clone();
        use_effect(move || {
            let registry = registry.clone();
            let config = config.clone();
            spawn(async move {
                registry.install_deferred(providers::build_controller_connector(&config));
                connectors.set(registry.list());
            });
        });
    }

    rsx! {
        document::Style { {STYLE} }
        components::nav::Nav {}
        main { class: "landing",
            Hero {}
            components::site_metrics::SiteMetrics {}
            components::prediction_types::PredictionTypes {}
            components::pool_types::PoolTypes {}
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Predict. Stake. Win." }
            p { class: "hero-subtitle",
                "Decentralized prediction markets on Starknet."
            }
        }
    }
}
