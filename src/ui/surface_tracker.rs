//! 各ビューアが最後に要求した画像の管理。

use crate::state::gallery::{ImageRef, Surface};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Remembers the image most recently requested for each viewer.
///
/// Decoding runs on rayon workers and can finish out of order; a result is
/// only shown if its image is still the one requested for that surface.
#[derive(Clone, Default)]
pub struct SurfaceTracker {
    requested: Arc<RwLock<HashMap<Surface, ImageRef>>>,
}

impl SurfaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new request for `surface`. `None` clears it.
    pub fn request(&self, surface: Surface, image: Option<&str>) {
        let mut requested = self
            .requested
            .write()
            .expect("SurfaceTracker RwLock poisoned");
        match image {
            Some(image) => {
                requested.insert(surface, image.to_string());
            }
            None => {
                requested.remove(&surface);
            }
        }
    }

    /// Surfaces whose latest request is still `image`.
    pub fn surfaces_showing(&self, image: &str) -> Vec<Surface> {
        let requested = self
            .requested
            .read()
            .expect("SurfaceTracker RwLock poisoned");
        Surface::ALL
            .into_iter()
            .filter(|surface| requested.get(surface).is_some_and(|current| current == image))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_request_wins() {
        let tracker = SurfaceTracker::new();
        tracker.request(Surface::Main, Some("a.jpg"));
        tracker.request(Surface::Main, Some("b.jpg"));

        assert!(tracker.surfaces_showing("a.jpg").is_empty());
        assert_eq!(tracker.surfaces_showing("b.jpg"), vec![Surface::Main]);
    }

    #[test]
    fn one_decode_serves_both_viewers() {
        let tracker = SurfaceTracker::new();
        for surface in Surface::ALL {
            tracker.request(surface, Some("salon.jpg"));
        }
        assert_eq!(
            tracker.surfaces_showing("salon.jpg"),
            vec![Surface::Main, Surface::Modal]
        );

        // The main viewer moved on before the decode finished
        tracker.request(Surface::Main, Some("cocina.jpg"));
        assert_eq!(tracker.surfaces_showing("salon.jpg"), vec![Surface::Modal]);
    }

    #[test]
    fn clearing_drops_pending_results() {
        let tracker = SurfaceTracker::new();
        let worker_view = tracker.clone();
        tracker.request(Surface::Modal, Some("a.jpg"));
        tracker.request(Surface::Modal, None);
        assert!(worker_view.surfaces_showing("a.jpg").is_empty());
    }
}
