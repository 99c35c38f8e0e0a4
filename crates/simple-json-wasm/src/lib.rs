//! WASM bindings for simple-json.
//!
//! Exposes `compact` and `get` as `#[wasm_bindgen]` functions that can be
//! called from JavaScript/TypeScript. Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p simple-json-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/simple_json_wasm.wasm
//! ```
//!
//! Errors surface to JavaScript as thrown strings that include the byte
//! offset of a parse failure.

use wasm_bindgen::prelude::*;

/// Parse a JSON document and return it re-serialized without whitespace.
#[wasm_bindgen]
pub fn compact(json: &str) -> std::result::Result<String, JsValue> {
    compact_text(json).map_err(|e| JsValue::from_str(&e))
}

/// Parse a JSON document and return the compact text of the value at a
/// dotted path (`"items.0.name"`).
#[wasm_bindgen]
pub fn get(json: &str, path: &str) -> std::result::Result<String, JsValue> {
    get_text(json, path).map_err(|e| JsValue::from_str(&e))
}

fn compact_text(json: &str) -> Result<String, String> {
    let value = simple_json::parse(json).map_err(|e| e.to_string())?;
    Ok(simple_json::serialize(&value))
}

fn get_text(json: &str, path: &str) -> Result<String, String> {
    let value = simple_json::parse(json).map_err(|e| e.to_string())?;
    let found = value.pointer(path).map_err(|e| e.to_string())?;
    Ok(simple_json::serialize(found))
}
