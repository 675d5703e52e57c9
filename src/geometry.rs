//! Fixed page metrics and viewport fit-scale computation.
//!
//! The preview document is an A4 page rendered at print resolution (96 dpi).
//! Its pixel size never changes; when the hosting viewport is narrower than
//! the page, the whole preview is scaled down uniformly. It is never scaled
//! up past 1.0 — print resolution is the ceiling.

/// A4 page width in pixels at 96 dpi (210 mm).
pub const PAGE_WIDTH_PX: f64 = 794.0;

/// A4 page height in pixels at 96 dpi (297 mm).
pub const PAGE_HEIGHT_PX: f64 = 1123.0;

/// Horizontal margin reserved around the preview inside its container.
pub const PREVIEW_MARGIN_PX: f64 = 80.0;

/// Compute the uniform scale factor that fits the page into a container.
///
/// `min(1, (container_width - margin) / page_width)` — the page shrinks to
/// fit narrow containers but never grows beyond its print size.
pub fn fit_scale(container_width: f64) -> f64 {
    let available = container_width - PREVIEW_MARGIN_PX;
    (available / PAGE_WIDTH_PX).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_container_caps_at_one() {
        // Exactly page width + margin: scale is 1.
        assert_eq!(fit_scale(PAGE_WIDTH_PX + PREVIEW_MARGIN_PX), 1.0);
        // Anything wider stays at 1 — never upscale.
        assert_eq!(fit_scale(2000.0), 1.0);
        assert_eq!(fit_scale(10_000.0), 1.0);
    }

    #[test]
    fn narrow_container_scales_down() {
        let scale = fit_scale(477.0);
        assert_eq!(scale, (477.0 - 80.0) / 794.0);
        assert!(scale < 1.0);
    }

    #[test]
    fn scale_formula_below_threshold() {
        let scale = fit_scale(437.0);
        assert!((scale - 357.0 / 794.0).abs() < 1e-12);
    }

    #[test]
    fn page_is_a4_portrait() {
        assert!(PAGE_HEIGHT_PX > PAGE_WIDTH_PX);
    }
}
