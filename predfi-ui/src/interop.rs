//! Browser interop for wallet SDK objects exposed on `window`.
//!
//! Wallet SDKs stay opaque: everything goes through reflected method calls
//! so the rest of the app only ever sees addresses and errors.

use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use predfi_wallet::WalletError;

/// Look up a wallet object registered on `window`.
pub fn window_wallet(injection_key: &str) -> Result<JsValue, WalletError> {
    let window = web_sys::window()
        .ok_or_else(|| WalletError::Provider("no window object".to_string()))?;
    let wallet = Reflect::get(&window, &JsValue::from_str(injection_key))
        .map_err(|err| WalletError::Provider(format!("wallet lookup failed: {err:?}")))?;
    if wallet.is_undefined() || wallet.is_null() {
        return Err(WalletError::Provider(format!(
            "wallet `{injection_key}` not available"
        )));
    }
    Ok(wallet)
}

pub fn has_method(target: &JsValue, method: &str) -> bool {
    Reflect::get(target, &JsValue::from_str(method))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

/// Call `method` on a wallet object, awaiting the result when it is a
/// promise.
pub async fn call_method(
    target: &JsValue,
    method: &str,
    args: &[JsValue],
) -> Result<JsValue, WalletError> {
    let method_fn = Reflect::get(target, &JsValue::from_str(method))
        .map_err(|err| WalletError::Provider(format!("method {method} not found: {err:?}")))?;
    if !method_fn.is_function() {
        return Err(WalletError::Provider(format!(
            "method {method} is not a function"
        )));
    }
    let function: Function = method_fn.unchecked_into();

    let js_args = Array::new();
    for arg in args {
        js_args.push(arg);
    }
    let result = function
        .apply(target, &js_args)
        .map_err(|err| WalletError::Provider(js_error_message(&err)))?;

    if let Some(promise) = result.dyn_ref::<Promise>() {
        JsFuture::from(promise.clone())
            .await
            .map_err(|err| WalletError::Provider(js_error_message(&err)))
    } else {
        Ok(result)
    }
}

/// Pull an account address out of whatever shape the SDK returned: a bare
/// string, an account array, or an object with an `address` field.
pub fn extract_address(value: &JsValue) -> Result<String, WalletError> {
    if let Some(address) = value.as_string() {
        return Ok(address);
    }
    if Array::is_array(value) {
        return Array::from(value)
            .get(0)
            .as_string()
            .ok_or_else(|| WalletError::Provider("empty account list".to_string()));
    }
    if let Ok(address) = Reflect::get(value, &JsValue::from_str("address")) {
        if let Some(address) = address.as_string() {
            return Ok(address);
        }
    }
    Err(WalletError::Provider(
        "no address in connect response".to_string(),
    ))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
