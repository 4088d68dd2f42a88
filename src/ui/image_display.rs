//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding operations,
//! then `slint::invoke_from_event_loop` to update UI from the background thread.

use crate::image_loader::{self, LoadedImage};
use crate::state::gallery::{ImageRef, Surface};
use crate::ui::SurfaceTracker;
use crate::{AppWindow, ViewState};
use log::{debug, error};
use slint::{ComponentHandle, Model};
use std::path::Path;

fn decode(image: &str) -> Result<LoadedImage, String> {
    image_loader::load_image_blocking(Path::new(image))
        .map_err(|e| format!("Failed to load image {}: {}", image, e))
}

/// Writes an image (or the broken-image placeholder) into a viewer.
fn show_on_surface(ui: &AppWindow, surface: Surface, image: slint::Image, is_error: bool) {
    let view_state = ui.global::<ViewState>();
    match surface {
        Surface::Main => {
            view_state.set_main_image(image);
            view_state.set_has_main_image(true);
            view_state.set_main_image_error(is_error);
        }
        Surface::Modal => {
            view_state.set_modal_image(image);
            view_state.set_has_modal_image(true);
            view_state.set_modal_image_error(is_error);
        }
    }
}

/// Removes whatever a viewer is showing.
pub fn clear_surface(ui: &AppWindow, surface: Surface) {
    let view_state = ui.global::<ViewState>();
    match surface {
        Surface::Main => {
            view_state.set_main_image(slint::Image::default());
            view_state.set_has_main_image(false);
            view_state.set_main_image_error(false);
        }
        Surface::Modal => {
            view_state.set_modal_image(slint::Image::default());
            view_state.set_has_modal_image(false);
            view_state.set_modal_image_error(false);
        }
    }
}

/// Decodes `image` once in a background thread and shows it on every
/// viewer that still wants it.
///
/// Viewers asked for another image meanwhile are skipped.
/// Decode failures show the placeholder instead.
pub fn load_and_display_image(ui: slint::Weak<AppWindow>, image: ImageRef, tracker: SurfaceTracker) {
    rayon::spawn(move || {
        let result = decode(&image);

        let _ = slint::invoke_from_event_loop(move || {
            let surfaces = tracker.surfaces_showing(&image);
            if surfaces.is_empty() {
                debug!("Discarding superseded image {}", image);
                return;
            }
            let Some(ui) = ui.upgrade() else {
                return;
            };
            let (shown, is_error) = match result {
                Ok(loaded) => (image_loader::create_slint_image(loaded), false),
                Err(message) => {
                    error!("{}", message);
                    (image_loader::placeholder_image(), true)
                }
            };
            for surface in surfaces {
                show_on_surface(&ui, surface, shown.clone(), is_error);
            }
        });
    });
}

/// Decodes an apartment card thumbnail in a background thread.
///
/// A missing thumbnail is shown as broken straight away.
pub fn load_card_thumbnail(ui: slint::Weak<AppWindow>, index: usize, image: Option<ImageRef>) {
    let Some(image) = image else {
        if let Some(ui) = ui.upgrade() {
            set_card_thumbnail(&ui, index, image_loader::placeholder_image(), true);
        }
        return;
    };

    rayon::spawn(move || {
        let result = decode(&image);

        let _ = slint::invoke_from_event_loop(move || {
            if let Some(ui) = ui.upgrade() {
                match result {
                    Ok(loaded) => set_card_thumbnail(
                        &ui,
                        index,
                        image_loader::create_slint_image(loaded),
                        false,
                    ),
                    Err(message) => {
                        error!("{}", message);
                        set_card_thumbnail(&ui, index, image_loader::placeholder_image(), true);
                    }
                }
            }
        });
    });
}

fn set_card_thumbnail(ui: &AppWindow, index: usize, image: slint::Image, is_error: bool) {
    let apartments = ui.global::<ViewState>().get_apartments();
    if let Some(mut card) = apartments.row_data(index) {
        card.thumbnail = image;
        card.thumbnail_loaded = true;
        card.thumbnail_error = is_error;
        apartments.set_row_data(index, card);
    }
}
