//! In-page anchor links scrolled smoothly below the fixed navbar.

/// Selector for the element an in-page link points at.
///
/// Only `#id` fragments qualify; a bare `#` or an external URL yields `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document offset to scroll to so the target sits just below the navbar.
pub fn scroll_target(target_top: f64, navbar_height: f64) -> f64 {
    target_top - navbar_height
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn only_fragments_are_targets() {
        assert_eq!(fragment_target("#projects"), Some("#projects"));
        assert_eq!(fragment_target(" #about "), Some("#about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com/#x"), None);
    }

    #[test]
    fn offsets_by_navbar_height() {
        assert_eq!(scroll_target(1200.0, 70.0), 1130.0);
        assert_eq!(scroll_target(20.0, 70.0), -50.0);
    }
}
