use log::debug;
use yew::prelude::*;
use yew_hooks::{use_window_scroll, use_window_size};

use super::variants::map_range;
use crate::dom;

/// Fraction of the page scrolled, 0.0 at the top and 1.0 at the bottom.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub offset_percent: f64,
    pub opacity: f64,
}

impl HeroParallax {
    pub fn at(progress: f64) -> Self {
        HeroParallax {
            offset_percent: map_range(progress, (0.0, 1.0), (0.0, 50.0)),
            opacity: map_range(progress, (0.0, 0.5), (1.0, 0.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({}%); opacity: {};",
            self.offset_percent, self.opacity
        )
    }
}

/// Re-evaluated on every scroll sample, no buffering.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let scroll_height = match dom::document() {
        Ok(document) => document
            .document_element()
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0),
        Err(err) => {
            debug!("scroll progress pinned at top: {}", err);
            0.0
        }
    };
    scroll_progress(scroll_y, scroll_height, viewport_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_and_safe_on_short_pages() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(50.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn hero_fades_out_by_halfway() {
        assert_eq!(HeroParallax::at(0.0), HeroParallax { offset_percent: 0.0, opacity: 1.0 });
        assert_eq!(HeroParallax::at(0.5), HeroParallax { offset_percent: 25.0, opacity: 0.0 });
        assert_eq!(HeroParallax::at(1.0).offset_percent, 50.0);
        assert_eq!(HeroParallax::at(0.25).opacity, 0.5);
    }

    #[test]
    fn style_text() {
        assert_eq!(HeroParallax::at(0.0).style(), "transform: translateY(0%); opacity: 1;");
    }
}
