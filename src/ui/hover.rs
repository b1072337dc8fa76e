//! Card hover lift.

/// Cards that lift on hover.
pub const CARD_SELECTORS: &str = ".skill-card, .project-card, .cert-card, .education-card";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub enter_transform: &'static str,
    pub leave_transform: &'static str,
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self {
            enter_transform: "translateY(-10px) scale(1.02)",
            leave_transform: "translateY(0) scale(1)",
        }
    }
}
