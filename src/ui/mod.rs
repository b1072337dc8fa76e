//! Page interactions around the animation.
//!
//! The state and geometry rules live in plain modules so they can be tested
//! natively; `dom` (wasm32 only) binds them to document events.

pub mod anchor;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod hover;
pub mod nav;
pub mod reveal;

pub use anchor::{fragment_target, scroll_target};
pub use hover::{HoverStyle, CARD_SELECTORS};
pub use nav::{NavChange, NavState};
pub use reveal::RevealStyle;

/// Class added to `<body>` once the window `load` event fires.
pub const BODY_LOADED_CLASS: &str = "loaded";
