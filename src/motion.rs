//! Arithmetic behind the cosmetic pointer and scroll effects.

/// Offset of the pointer from the viewport center, each axis normalized to
/// `[-0.5, 0.5]` and scaled by `depth`.
pub fn pointer_parallax(x: f64, y: f64, width: f64, height: f64, depth: f64) -> (f64, f64) {
    if !valid_extent(width) || !valid_extent(height) {
        return (0.0, 0.0);
    }
    let nx = (x / width).clamp(0.0, 1.0) - 0.5;
    let ny = (y / height).clamp(0.0, 1.0) - 0.5;
    (nx * depth, ny * depth)
}

pub fn scroll_parallax(scroll_y: f64, rate: f64) -> f64 {
    scroll_y.max(0.0) * rate
}

/// Fraction of the scrollable distance already covered, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// The window's scroll geometry at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn progress(&self) -> f64 {
        scroll_progress(self.scroll_y, self.document_height, self.viewport_height)
    }
}

fn valid_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_zero_at_center() {
        assert_eq!(pointer_parallax(500.0, 400.0, 1000.0, 800.0, 20.0), (0.0, 0.0));
    }

    #[test]
    fn test_parallax_corners() {
        assert_eq!(pointer_parallax(0.0, 0.0, 1000.0, 800.0, 20.0), (-10.0, -10.0));
        assert_eq!(pointer_parallax(1000.0, 800.0, 1000.0, 800.0, 20.0), (10.0, 10.0));
        // outside the viewport clamps to the edge
        assert_eq!(pointer_parallax(5000.0, -10.0, 1000.0, 800.0, 20.0), (10.0, -10.0));
    }

    #[test]
    fn test_parallax_degenerate_viewport() {
        assert_eq!(pointer_parallax(10.0, 10.0, 0.0, 800.0, 20.0), (0.0, 0.0));
        assert_eq!(pointer_parallax(10.0, 10.0, f64::INFINITY, 800.0, 20.0), (0.0, 0.0));
    }

    #[test]
    fn test_scroll_parallax() {
        assert_eq!(scroll_parallax(100.0, 0.5), 50.0);
        assert_eq!(scroll_parallax(-40.0, 0.5), 0.0);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        // overscroll bounce
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_short_document() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_metrics_read_mid_page() {
        // a reload restored halfway down the page
        let restored = ScrollMetrics {
            scroll_y: 1000.0,
            document_height: 3000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(restored.progress(), 0.5);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);
    }
}
