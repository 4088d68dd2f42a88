//! Slint binding of the gallery presentation port.

use crate::config::FADE_DELAY;
use crate::state::gallery::{FadeTicket, GalleryController, GalleryPresenter, Surface};
use crate::ui::SurfaceTracker;
use crate::ui::image_display::{clear_surface, load_and_display_image};
use crate::{AppWindow, ViewState};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Gallery shared between the Slint callbacks of one window.
pub type SharedGallery = Rc<RefCell<GalleryController<SlintGalleryPresenter>>>;

/// Renders gallery state into `ViewState`.
pub struct SlintGalleryPresenter {
    ui: slint::Weak<AppWindow>,
    gallery: Weak<RefCell<GalleryController<SlintGalleryPresenter>>>,
    tracker: SurfaceTracker,
}

/// Creates a gallery whose presenter can call back into it for fade timers.
pub fn new_shared_gallery(ui: &AppWindow) -> SharedGallery {
    let ui = ui.as_weak();
    Rc::new_cyclic(|gallery| {
        RefCell::new(GalleryController::new(SlintGalleryPresenter {
            ui,
            gallery: gallery.clone(),
            tracker: SurfaceTracker::new(),
        }))
    })
}

impl GalleryPresenter for SlintGalleryPresenter {
    // Both viewers share one decode
    fn set_images(&mut self, image: Option<&str>) {
        for surface in Surface::ALL {
            self.tracker.request(surface, image);
        }
        match image {
            Some(image) => {
                load_and_display_image(self.ui.clone(), image.to_string(), self.tracker.clone())
            }
            None => {
                if let Some(ui) = self.ui.upgrade() {
                    for surface in Surface::ALL {
                        clear_surface(&ui, surface);
                    }
                }
            }
        }
    }

    fn render_dots(&mut self, count: usize, active: usize) {
        if let Some(ui) = self.ui.upgrade() {
            let dots: Vec<bool> = (0..count).map(|index| index == active).collect();
            ui.global::<ViewState>()
                .set_dots(slint::ModelRc::new(slint::VecModel::from(dots)));
        }
    }

    fn set_modal_visible(&mut self, visible: bool) {
        if let Some(ui) = self.ui.upgrade() {
            ui.global::<ViewState>().set_gallery_modal_open(visible);
        }
    }

    fn set_opacity(&mut self, surface: Surface, opacity: f32) {
        if let Some(ui) = self.ui.upgrade() {
            let view_state = ui.global::<ViewState>();
            match surface {
                Surface::Main => view_state.set_main_opacity(opacity),
                Surface::Modal => view_state.set_modal_opacity(opacity),
            }
        }
    }

    fn schedule_fade_in(&mut self, ticket: FadeTicket) {
        let gallery = self.gallery.clone();
        slint::Timer::single_shot(FADE_DELAY, move || {
            if let Some(gallery) = gallery.upgrade() {
                gallery.borrow_mut().finish_fade(ticket);
            }
        });
    }
}
