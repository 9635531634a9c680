//! Bindings to the Tauri commands via `window.__TAURI__.core.invoke`.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use crate::types::{FormFields, FormView};

/// Invoke a Tauri command from WASM and deserialize its result.
async fn invoke_tauri<T>(cmd: &str, args: JsValue) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let window = window().ok_or_else(|| "No window object".to_string())?;

    let tauri_obj = js_sys::Reflect::get(&window, &JsValue::from_str("__TAURI__"))
        .map_err(|e| format!("Failed to get __TAURI__: {:?}", e))?;

    let core = js_sys::Reflect::get(&tauri_obj, &JsValue::from_str("core"))
        .map_err(|e| format!("Failed to get core: {:?}", e))?;

    let invoke_fn = js_sys::Reflect::get(&core, &JsValue::from_str("invoke"))
        .map_err(|e| format!("Failed to get invoke: {:?}", e))?;

    let invoke_function = js_sys::Function::from(invoke_fn);
    let promise = invoke_function
        .call2(&core, &JsValue::from_str(cmd), &args)
        .map_err(|e| format!("Failed to call invoke: {:?}", e))?;

    let result = JsFuture::from(js_sys::Promise::from(promise))
        .await
        .map_err(|e| format!("{} failed: {:?}", cmd, e))?;

    serde_wasm_bindgen::from_value(result)
        .map_err(|e| format!("Failed to deserialize result: {:?}", e))
}

async fn invoke_with_fields(cmd: &str, fields: &FormFields) -> Result<FormView, String> {
    let args = serde_wasm_bindgen::to_value(&serde_json::json!({ "fields": fields }))
        .map_err(|e| format!("Failed to serialize args: {:?}", e))?;

    invoke_tauri(cmd, args).await
}

pub async fn add_product(fields: &FormFields) -> Result<FormView, String> {
    invoke_with_fields("add_product", fields).await
}

pub async fn remove_product(fields: &FormFields) -> Result<FormView, String> {
    invoke_with_fields("remove_product", fields).await
}

pub async fn update_quantity(fields: &FormFields) -> Result<FormView, String> {
    invoke_with_fields("update_quantity", fields).await
}

pub async fn list_products(fields: &FormFields) -> Result<FormView, String> {
    invoke_with_fields("list_products", fields).await
}

pub async fn form_state() -> Result<FormView, String> {
    invoke_tauri("form_state", js_sys::Object::new().into()).await
}
