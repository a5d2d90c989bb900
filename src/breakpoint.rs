/// Widths strictly below this many logical pixels count as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// `true` iff `width` lies strictly below `breakpoint`.
pub fn is_below(width: f64, breakpoint: f64) -> bool {
    width < breakpoint
}

/// Classifies a possibly unavailable width. Hosts without a viewport
/// (headless, non-browser) resolve to `false`.
pub fn classify(width: Option<f64>, breakpoint: f64) -> bool {
    match width {
        Some(width) => is_below(width, breakpoint),
        None => {
            leptos::logging::log!(
                "[WARN] [Viewport] Width unavailable, treating viewport as non-mobile."
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_below_breakpoint_are_mobile() {
        for width in [0.0, 1.0, 320.0, 500.0, 767.0, 767.9] {
            assert!(is_below(width, MOBILE_BREAKPOINT), "{width} should be mobile");
        }
    }

    #[test]
    fn breakpoint_and_above_are_not_mobile() {
        for width in [768.0, 768.1, 900.0, 1024.0, 3840.0] {
            assert!(!is_below(width, MOBILE_BREAKPOINT), "{width} should not be mobile");
        }
    }

    #[test]
    fn missing_width_falls_back_to_non_mobile() {
        assert!(!classify(None, MOBILE_BREAKPOINT));
        assert!(classify(Some(500.0), MOBILE_BREAKPOINT));
    }

    #[test]
    fn custom_breakpoint() {
        assert!(classify(Some(1000.0), 1024.0));
        assert!(!classify(Some(1024.0), 1024.0));
    }
}
