//! Test helpers shared by the state and service tests.

use crate::state::gallery::{FadeTicket, GalleryPresenter, Surface};

/// Presenter that records the last value written to every surface.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub main: Option<String>,
    pub modal: Option<String>,
    pub dots: Vec<bool>,
    /// Number of `set_images` calls, one per image load on the UI side.
    pub image_requests: usize,
    pub modal_visible: bool,
    pub main_opacity: f32,
    pub modal_opacity: f32,
    pub scheduled: Vec<FadeTicket>,
}

impl GalleryPresenter for RecordingPresenter {
    fn set_images(&mut self, image: Option<&str>) {
        self.main = image.map(str::to_string);
        self.modal = image.map(str::to_string);
        self.image_requests += 1;
    }

    fn render_dots(&mut self, count: usize, active: usize) {
        self.dots = (0..count).map(|index| index == active).collect();
    }

    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn set_opacity(&mut self, surface: Surface, opacity: f32) {
        match surface {
            Surface::Main => self.main_opacity = opacity,
            Surface::Modal => self.modal_opacity = opacity,
        }
    }

    fn schedule_fade_in(&mut self, ticket: FadeTicket) {
        self.scheduled.push(ticket);
    }
}
