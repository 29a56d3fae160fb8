//! WASM bindings for the slice crate.
//!
//! Sequences cross the boundary as JSON arrays; elements may be any JSON
//! value and are compared with JSON equality.

use crate::error::{Result, SliceError};
use crate::slice;
use serde_json::Value;
use wasm_bindgen::prelude::*;

impl From<SliceError> for JsValue {
    fn from(err: SliceError) -> Self {
        JsValue::from_str(&format!("[{}] {}", err.code() as u32, err))
    }
}

fn parse(json: &str) -> Result<Vec<Value>> {
    Ok(serde_json::from_str(json)?)
}

fn serialize(values: &[Value]) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}

/// Check whether a JSON array starts with another.
///
/// # Arguments
/// * `sequence_json` - JSON array to test
/// * `slice_json` - JSON array expected at the head
#[wasm_bindgen]
pub fn starts_with(sequence_json: &str, slice_json: &str) -> std::result::Result<bool, JsValue> {
    Ok(slice::starts_with(&parse(sequence_json)?, &parse(slice_json)?))
}

/// Check whether a JSON array ends with another.
#[wasm_bindgen]
pub fn ends_with(sequence_json: &str, slice_json: &str) -> std::result::Result<bool, JsValue> {
    Ok(slice::ends_with(&parse(sequence_json)?, &parse(slice_json)?))
}

/// Drop the first `n` elements of a JSON array.
///
/// # Returns
/// JSON array string; an error for a negative `n`
#[wasm_bindgen]
pub fn drop_first(sequence_json: &str, n: i32) -> std::result::Result<String, JsValue> {
    let result = slice::drop_first(&parse(sequence_json)?, i64::from(n))?;
    Ok(serialize(&result)?)
}

/// Drop the last `n` elements of a JSON array.
#[wasm_bindgen]
pub fn drop_last(sequence_json: &str, n: i32) -> std::result::Result<String, JsValue> {
    let result = slice::drop_last(&parse(sequence_json)?, i64::from(n))?;
    Ok(serialize(&result)?)
}

/// Remove a leading JSON array from another, once, if present.
#[wasm_bindgen]
pub fn drop_prefix(sequence_json: &str, prefix_json: &str) -> std::result::Result<String, JsValue> {
    Ok(serialize(&slice::drop_prefix(&parse(sequence_json)?, &parse(prefix_json)?))?)
}

/// Remove a trailing JSON array from another, once, if present.
#[wasm_bindgen]
pub fn drop_suffix(sequence_json: &str, suffix_json: &str) -> std::result::Result<String, JsValue> {
    Ok(serialize(&slice::drop_suffix(&parse(sequence_json)?, &parse(suffix_json)?))?)
}
