//! Portfolio chat relay.
//!
//! Visitor questions are forwarded to a hosted generative-language model
//! constrained by a persona prompt. Everything except the HTTP client and the
//! DOM widget is plain Rust and runs natively.

#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod persona;
pub mod relay;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod widget;
pub mod wire;

#[cfg(target_arch = "wasm32")]
pub use client::GeminiClient;
pub use persona::Persona;
pub use relay::{prepare_input, reply_or_apology, Author, ChatMessage, APOLOGY};
pub use session::ChatSession;
pub use wire::{Content, GenerateContentRequest, GenerateContentResponse, Part, Role};
