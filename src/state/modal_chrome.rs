//! Generic overlay dismissal shared by the gallery and description overlays.

use crate::state::gallery::{GalleryController, GalleryPresenter};
use log::debug;

/// Overlays that can cover the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Gallery,
    Description,
}

impl TryFrom<i32> for Overlay {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Overlay::Gallery),
            1 => Ok(Overlay::Description),
            other => Err(other),
        }
    }
}

/// Tracks the description overlay and routes dismissal to every overlay.
///
/// The gallery overlay's visibility belongs to [`GalleryController`]; the
/// chrome only asks it to close.
#[derive(Debug, Default)]
pub struct ModalChrome {
    description_open: bool,
}

impl ModalChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_description(&mut self) {
        self.description_open = true;
    }

    pub fn close_description(&mut self) {
        self.description_open = false;
    }

    pub fn is_description_open(&self) -> bool {
        self.description_open
    }

    /// Page scrolling is suspended while any overlay covers the page.
    pub fn scroll_locked<P: GalleryPresenter>(&self, gallery: &GalleryController<P>) -> bool {
        self.description_open || gallery.is_modal_open()
    }

    /// Escape closes every visible overlay. Returns the overlays that were closed.
    pub fn escape<P: GalleryPresenter>(
        &mut self,
        gallery: &mut GalleryController<P>,
    ) -> Vec<Overlay> {
        let mut closed = Vec::new();
        if gallery.is_modal_open() {
            gallery.close_modal();
            closed.push(Overlay::Gallery);
        }
        if self.description_open {
            self.description_open = false;
            closed.push(Overlay::Description);
        }
        debug!("Escape closed {:?}", closed);
        closed
    }

    /// A click on an overlay's backdrop closes that overlay only.
    pub fn backdrop_clicked<P: GalleryPresenter>(
        &mut self,
        overlay: Overlay,
        gallery: &mut GalleryController<P>,
    ) {
        match overlay {
            Overlay::Gallery => {
                if gallery.is_modal_open() {
                    gallery.close_modal();
                }
            }
            Overlay::Description => self.description_open = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingPresenter;

    fn open_gallery() -> GalleryController<RecordingPresenter> {
        let mut gallery = GalleryController::new(RecordingPresenter::default());
        gallery.initialize(vec!["a".to_string(), "b".to_string()]);
        gallery.open_modal(Some(1));
        gallery
    }

    #[test]
    fn escape_closes_all_overlays() {
        let mut gallery = open_gallery();
        let mut chrome = ModalChrome::new();
        chrome.open_description();

        let closed = chrome.escape(&mut gallery);

        assert_eq!(closed, vec![Overlay::Gallery, Overlay::Description]);
        assert!(!gallery.is_modal_open());
        assert!(!gallery.presenter().modal_visible);
        assert!(!chrome.scroll_locked(&gallery));
        assert_eq!(gallery.current_index(), Some(1));
    }

    #[test]
    fn escape_with_nothing_open_is_noop() {
        let mut gallery = GalleryController::new(RecordingPresenter::default());
        let mut chrome = ModalChrome::new();
        assert!(chrome.escape(&mut gallery).is_empty());
    }

    #[test]
    fn backdrop_click_closes_only_that_overlay() {
        let mut gallery = open_gallery();
        let mut chrome = ModalChrome::new();
        chrome.open_description();

        chrome.backdrop_clicked(Overlay::Description, &mut gallery);
        assert!(!chrome.is_description_open());
        assert!(gallery.is_modal_open());

        chrome.backdrop_clicked(Overlay::Gallery, &mut gallery);
        assert!(!gallery.is_modal_open());
    }

    #[test]
    fn page_stays_locked_until_last_overlay_closes() {
        let mut gallery = GalleryController::new(RecordingPresenter::default());
        gallery.initialize(vec!["a".to_string()]);
        let mut chrome = ModalChrome::new();
        assert!(!chrome.scroll_locked(&gallery));

        gallery.open_modal(None);
        assert!(chrome.scroll_locked(&gallery));
        chrome.open_description();

        gallery.close_modal();
        assert!(chrome.scroll_locked(&gallery));

        chrome.close_description();
        assert!(!chrome.scroll_locked(&gallery));

        chrome.open_description();
        chrome.backdrop_clicked(Overlay::Description, &mut gallery);
        assert!(!chrome.scroll_locked(&gallery));
    }

    #[test]
    fn overlay_from_index() {
        assert_eq!(Overlay::try_from(0), Ok(Overlay::Gallery));
        assert_eq!(Overlay::try_from(1), Ok(Overlay::Description));
        assert_eq!(Overlay::try_from(7), Err(7));
    }
}
