//! Structured error types for scrollframe.
//!
//! Load and draw faults are handled where they happen (logged, never thrown to
//! JavaScript); these types exist so that handling is explicit.

/// All errors that can occur while loading, rendering and relaying chat.
#[derive(Debug, thiserror::Error)]
pub enum ScrollframeError {
    /// A single frame's image resource failed to load.
    #[error("Failed to load image: {locator}")]
    LoadFailure { index: usize, locator: String },

    /// Drawing surface error (context acquisition, transform, blit).
    #[error("Render error: {0}")]
    Render(String),

    /// Invalid page configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Chat relay failure (connectivity, HTTP status, empty or blocked reply).
    #[error("Chat relay: {0}")]
    Chat(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for string errors from host APIs.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrollframeError>;

impl From<String> for ScrollframeError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ScrollframeError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ScrollframeError> for wasm_bindgen::JsValue {
    fn from(e: ScrollframeError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
