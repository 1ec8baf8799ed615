//! Load Errors

use thiserror::Error;

/// Everything that can go wrong while reading the todos collection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("no window available")]
    NoWindow,

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl LoadError {
    /// Flatten a JS exception into a readable message
    pub fn js_message(value: &wasm_bindgen::JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}
