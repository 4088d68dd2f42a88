//! Deferred loading of apartment card thumbnails.

use std::collections::HashSet;

/// Returns true when a vertical span overlaps the visible viewport.
///
/// Spans that merely touch the viewport edge do not count.
pub fn is_intersecting(
    item_top: f32,
    item_height: f32,
    viewport_top: f32,
    viewport_height: f32,
) -> bool {
    let item_bottom = item_top + item_height;
    let viewport_bottom = viewport_top + viewport_height;
    item_height > 0.0 && item_top < viewport_bottom && item_bottom > viewport_top
}

/// Remembers which cards have already been loaded.
#[derive(Debug, Default)]
pub struct LazyLoader {
    requested: HashSet<usize>,
}

impl LazyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that card `index` entered the viewport.
    ///
    /// Returns true only the first time, when the caller should start loading.
    pub fn entered_view(&mut self, index: usize) -> bool {
        self.requested.insert(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_spans_intersect() {
        assert!(is_intersecting(100.0, 50.0, 0.0, 600.0));
        assert!(is_intersecting(-40.0, 50.0, 0.0, 600.0));
        assert!(is_intersecting(590.0, 50.0, 0.0, 600.0));
    }

    #[test]
    fn spans_outside_viewport_do_not_intersect() {
        assert!(!is_intersecting(700.0, 50.0, 0.0, 600.0));
        assert!(!is_intersecting(-60.0, 50.0, 0.0, 600.0));
        assert!(!is_intersecting(600.0, 50.0, 0.0, 600.0));
        assert!(!is_intersecting(100.0, 0.0, 0.0, 600.0));
    }

    #[test]
    fn each_card_loads_once() {
        let mut loader = LazyLoader::new();
        assert!(loader.entered_view(2));
        assert!(!loader.entered_view(2));
        assert!(loader.entered_view(0));
        assert!(!loader.entered_view(0));
    }
}
