//! Page configuration.
//!
//! Every field has a default matching the stock portfolio page, so an empty
//! JSON object (or `undefined` from JavaScript) is a valid configuration.
//! The chat relay is only enabled when an API key is supplied.

use serde::{Deserialize, Serialize};

use crate::chat::Persona;
use crate::error::{Result, ScrollframeError};
use crate::locator::LocatorScheme;

/// Default number of frames in the scroll sequence.
pub const DEFAULT_FRAME_COUNT: usize = 200;

/// Top-level configuration for a mounted portfolio page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// Maximum log level (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: Option<String>,
    pub sequence: SequenceConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub chat: ChatConfig,
}

/// Image sequence and the section whose scroll drives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SequenceConfig {
    /// Total number of frames (N)
    pub frame_count: usize,
    /// How frame numbers map to image paths
    pub locator: LocatorScheme,
    /// Frames allowed to fail while still starting the animation.
    /// `0` keeps the strict all-frames-loaded behavior.
    pub max_missing_frames: usize,
    /// Element id of the drawing canvas
    pub canvas_id: String,
    /// Selector of the section whose scroll range drives the animation
    pub section_selector: String,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            locator: LocatorScheme::default(),
            max_missing_frames: 0,
            canvas_id: "scroll-canvas".to_string(),
            section_selector: ".hero-section".to_string(),
        }
    }
}

/// Navigation bar and menu selectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub hamburger_selector: String,
    pub menu_selector: String,
    pub link_selector: String,
    pub navbar_selector: String,
    /// Scroll offset (px) past which the navbar gets the `scrolled` class
    pub scrolled_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            hamburger_selector: ".hamburger".to_string(),
            menu_selector: ".nav-menu".to_string(),
            link_selector: ".nav-link".to_string(),
            navbar_selector: ".navbar".to_string(),
            scrolled_threshold: 100.0,
        }
    }
}

/// Reveal-on-intersect settings for page sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub section_selector: String,
    /// Fraction of the element that must be visible
    pub threshold: f64,
    pub root_margin: String,
    /// Initial downward offset (px) of hidden sections
    pub offset_px: f64,
    pub duration_secs: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            section_selector: ".section".to_string(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 30.0,
            duration_secs: 0.6,
        }
    }
}

/// Chat relay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatConfig {
    /// API key for the hosted model; the relay is disabled when absent
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL of the generative-language REST API
    pub endpoint: String,
    pub persona: Persona,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            persona: Persona::default(),
        }
    }
}

impl ChatConfig {
    /// Whether a non-empty API key is configured.
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl PortfolioConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        let seq = &self.sequence;
        if seq.frame_count == 0 {
            return Err(ScrollframeError::Config(
                "frameCount must be at least 1".to_string(),
            ));
        }
        if seq.max_missing_frames >= seq.frame_count {
            return Err(ScrollframeError::Config(format!(
                "maxMissingFrames ({}) must be below frameCount ({})",
                seq.max_missing_frames, seq.frame_count
            )));
        }
        if seq.section_selector.trim().is_empty() {
            return Err(ScrollframeError::Config(
                "sectionSelector must not be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ScrollframeError::Config(format!(
                "reveal threshold {} is outside [0, 1]",
                self.reveal.threshold
            )));
        }
        if let Some(level) = &self.log_level {
            if crate::logging::parse_level(level).is_none() {
                return Err(ScrollframeError::Config(format!(
                    "unknown logLevel {level:?}"
                )));
            }
        }
        if !self.nav.scrolled_threshold.is_finite() {
            return Err(ScrollframeError::Config(
                "scrolledThreshold must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_takes_defaults() {
        let config = PortfolioConfig::from_json("{}").unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.sequence.frame_count, 200);
        assert_eq!(config.nav.scrolled_threshold, 100.0);
        assert!(!config.chat.is_enabled());
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let config = PortfolioConfig::from_json(
            r#"{"sequence": {"frameCount": 3, "locator": {"extension": "png"}}}"#,
        )
        .unwrap();
        assert_eq!(config.sequence.frame_count, 3);
        assert_eq!(config.sequence.locator.extension, "png");
        assert_eq!(config.sequence.locator.pad_width, 3);
        assert_eq!(config.sequence.section_selector, ".hero-section");
    }

    #[test]
    fn zero_frames_is_rejected() {
        let err = PortfolioConfig::from_json(r#"{"sequence": {"frameCount": 0}}"#).unwrap_err();
        assert!(matches!(err, ScrollframeError::Config(_)));
    }

    #[test]
    fn missing_budget_must_leave_a_frame() {
        let err = PortfolioConfig::from_json(
            r#"{"sequence": {"frameCount": 4, "maxMissingFrames": 4}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("maxMissingFrames"));
    }

    #[test]
    fn blank_api_key_keeps_chat_disabled() {
        let config = PortfolioConfig::from_json(r#"{"chat": {"apiKey": "  "}}"#).unwrap();
        assert!(!config.chat.is_enabled());
    }
}
