//! Concrete connectors over the wallet SDKs the page exposes, plus the
//! Starknet ID name service.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use predfi_wallet::{
    Address, Connector, ConnectorKind, NameService, ProviderConfig, WalletError, WalletProvider,
};

use crate::interop;

pub const CONTROLLER_ID: &str = "controller";

const STARKNET_ID_API: &str = "https://api.starknet.id";

/// A wallet reached through an object registered on `window`.
///
/// The object is looked up per call, so constructing this is side-effect
/// free and safe during a non-browser render pass.
pub struct JsWallet {
    injection_key: String,
}

impl JsWallet {
    pub fn new(injection_key: impl Into<String>) -> Self {
        Self {
            injection_key: injection_key.into(),
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for JsWallet {
    async fn connect(&self) -> Result<Address, WalletError> {
        let wallet = interop::window_wallet(&self.injection_key)?;
        // Injected Starknet wallets expose `enable`; SDK connectors `connect`.
        let method = if interop::has_method(&wallet, "enable") {
            "enable"
        } else {
            "connect"
        };
        let result = interop::call_method(&wallet, method, &[]).await?;
        interop::extract_address(&result)
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        let wallet = interop::window_wallet(&self.injection_key)?;
        if interop::has_method(&wallet, "disconnect") {
            interop::call_method(&wallet, "disconnect", &[]).await?;
        }
        Ok(())
    }
}

/// The Cartridge controller object, constructed once in a browser context.
pub struct ControllerWallet {
    controller: JsValue,
}

#[async_trait(?Send)]
impl WalletProvider for ControllerWallet {
    async fn connect(&self) -> Result<Address, WalletError> {
        let result = interop::call_method(&self.controller, "connect", &[]).await?;
        interop::extract_address(&result)
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        if interop::has_method(&self.controller, "disconnect") {
            interop::call_method(&self.controller, "disconnect", &[]).await?;
        }
        Ok(())
    }
}

/// Connectors available without touching browser-only globals; these make up
/// the registry's first snapshot.
pub fn initial_connectors() -> Vec<Connector> {
    vec![
        Connector::new(
            "argentX",
            ConnectorKind::Injected,
            Rc::new(JsWallet::new("starknet_argentX")),
        ),
        Connector::new(
            "braavos",
            ConnectorKind::Injected,
            Rc::new(JsWallet::new("starknet_braavos")),
        ),
        Connector::new(
            "argentWebWallet",
            ConnectorKind::WebWallet,
            Rc::new(JsWallet::new("starknetkit_webwallet")),
        ),
        Connector::new(
            "argentMobile",
            ConnectorKind::Mobile,
            Rc::new(JsWallet::new("starknetkit_argentMobile")),
        ),
    ]
}

/// Build the Cartridge controller connector. Must run after mount: the
/// constructor reads browser globals and would fail during a server pass.
pub fn build_controller_connector(config: &ProviderConfig) -> Result<Connector, WalletError> {
    let window = web_sys::window()
        .ok_or_else(|| WalletError::Provider("no window object".to_string()))?;
    let constructor = Reflect::get(&window, &JsValue::from_str("CartridgeController"))
        .map_err(|err| WalletError::Provider(format!("controller lookup failed: {err:?}")))?;
    if !constructor.is_function() {
        return Err(WalletError::Provider(
            "controller SDK not loaded".to_string(),
        ));
    }

    let options = Object::new();
    set(&options, "rpcUrl", &JsValue::from_str(&config.rpc_url))?;
    set(
        &options,
        "defaultChainId",
        &JsValue::from_str(&config.testnet_chain_id),
    )?;

    let controller = Reflect::construct(
        constructor.unchecked_ref::<js_sys::Function>(),
        &js_sys::Array::of1(&options),
    )
    .map_err(|err| WalletError::Provider(format!("controller construction failed: {err:?}")))?;

    Ok(Connector::new(
        CONTROLLER_ID,
        ConnectorKind::HostManaged,
        Rc::new(ControllerWallet {
            controller: controller.into(),
        }),
    ))
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), WalletError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| WalletError::Provider(format!("option `{key}` rejected: {err:?}")))
}

// ---------------------------------------------------------------------------
// Name service
// ---------------------------------------------------------------------------

/// Starknet ID domain lookup backing the identity resolver.
pub struct StarknetIdService {
    api_base: String,
}

impl Default for StarknetIdService {
    fn default() -> Self {
        Self {
            api_base: STARKNET_ID_API.to_string(),
        }
    }
}

#[derive(serde::Deserialize)]
struct DomainResponse {
    domain: String,
}

#[async_trait(?Send)]
impl NameService for StarknetIdService {
    async fn lookup_name(&self, address: &str) -> Result<Option<String>, WalletError> {
        let url = format!("{}/addr_to_domain?addr={address}", self.api_base);
        let response = reqwest::get(&url)
            .await
            .map_err(|err| WalletError::Lookup(err.to_string()))?;
        if !response.status().is_success() {
            // The API answers 404 for addresses without a domain.
            return Ok(None);
        }
        let body: DomainResponse = response
            .json()
            .await
            .map_err(|err| WalletError::Lookup(err.to_string()))?;
        Ok(Some(body.domain).filter(|domain| !domain.is_empty()))
    }
}
