//! Frame locator scheme: 1-based frame number to resource path.

use serde::{Deserialize, Serialize};

/// Zero-padded numeric naming convention for the image sequence.
///
/// The default produces `images/ezgif-frame-001.jpg` for frame 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocatorScheme {
    /// Path prefix up to the frame number
    pub prefix: String,
    /// Minimum digit count of the frame number
    pub pad_width: usize,
    /// File extension without the dot
    pub extension: String,
}

impl Default for LocatorScheme {
    fn default() -> Self {
        Self {
            prefix: "images/ezgif-frame-".to_string(),
            pad_width: 3,
            extension: "jpg".to_string(),
        }
    }
}

impl LocatorScheme {
    /// Resource path for a 1-based frame number.
    pub fn locate(&self, number: usize) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            number,
            self.extension,
            width = self.pad_width
        )
    }

    /// Locators for frames `1..=count`, in order.
    pub fn sequence(&self, count: usize) -> Vec<String> {
        (1..=count).map(|n| self.locate(n)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_pads_to_three_digits() {
        let scheme = LocatorScheme::default();
        assert_eq!(scheme.locate(1), "images/ezgif-frame-001.jpg");
        assert_eq!(scheme.locate(42), "images/ezgif-frame-042.jpg");
        assert_eq!(scheme.locate(200), "images/ezgif-frame-200.jpg");
    }

    #[test]
    fn numbers_wider_than_padding_are_kept_whole() {
        let scheme = LocatorScheme::default();
        assert_eq!(scheme.locate(1234), "images/ezgif-frame-1234.jpg");
    }

    #[test]
    fn sequence_is_one_based() {
        let scheme = LocatorScheme {
            prefix: "f/".to_string(),
            pad_width: 2,
            extension: "webp".to_string(),
        };
        let seq = scheme.sequence(3);
        assert_eq!(seq, vec!["f/01.webp", "f/02.webp", "f/03.webp"]);
    }
}
