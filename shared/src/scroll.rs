/// Page scroll position projected onto the progress bar and scroll-to-top button.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub progress: f64,
    pub show_scroll_top: bool,
}

impl ScrollSnapshot {
    pub fn measure(scroll_top: f64, body_height: f64, viewport_height: f64, threshold: f64) -> Self {
        Self {
            progress: progress_percent(scroll_top, body_height, viewport_height),
            show_scroll_top: scroll_top > threshold,
        }
    }

    pub fn width_style(&self) -> String {
        format!("{:.2}%", self.progress)
    }
}

/// Percentage of the scrollable height already scrolled, in `[0, 100]`.
///
/// Pages shorter than the viewport report 0.
pub fn progress_percent(scroll_top: f64, body_height: f64, viewport_height: f64) -> f64 {
    let scrollable = body_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}
