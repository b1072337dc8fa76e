//! Reveal-on-intersect styling for page sections.

use crate::config::RevealConfig;

/// Inline style values for hidden and revealed sections.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub hidden_opacity: &'static str,
    pub hidden_transform: String,
    pub shown_opacity: &'static str,
    pub shown_transform: &'static str,
    pub transition: String,
}

impl RevealStyle {
    pub fn from_config(config: &RevealConfig) -> Self {
        let d = config.duration_secs;
        Self {
            hidden_opacity: "0",
            hidden_transform: format!("translateY({}px)", config.offset_px),
            shown_opacity: "1",
            shown_transform: "translateY(0)",
            transition: format!("opacity {d}s ease-out, transform {d}s ease-out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_page_css() {
        let style = RevealStyle::from_config(&RevealConfig::default());
        assert_eq!(style.hidden_transform, "translateY(30px)");
        assert_eq!(
            style.transition,
            "opacity 0.6s ease-out, transform 0.6s ease-out"
        );
        assert_eq!(style.shown_transform, "translateY(0)");
    }
}
