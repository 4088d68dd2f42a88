//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (menu, anchors, gallery navigation, overlays,
//! keyboard, touch, lazy thumbnails, contact form). Every callback runs on the
//! UI thread; image decoding is handed to `image_display`.

use crate::config::{CONTACT_CONFIRMATION, CONTACT_SUBMIT_DELAY, CONTACT_SUBMIT_LABEL};
use crate::services::{
    ButtonLoadingState, KeyAction, Section, anchor_target, route_key, validate_contact,
};
use crate::state::AppState;
use crate::state::gallery::Direction;
use crate::state::lazy_load::is_intersecting;
use crate::state::modal_chrome::Overlay;
use crate::ui::{image_display, set_apartment_info, set_contact_errors, set_submit_button};
use crate::{AppWindow, Logic, ViewState};
use log::{debug, info};
use slint::ComponentHandle;

/// Loads apartment `index` into the gallery, replacing the previous one.
pub fn select_apartment(ui: &AppWindow, state: &AppState, index: usize) {
    let Some(apartment) = state.site.apartments.get(index) else {
        debug!("Ignoring selection of unknown apartment {}", index);
        return;
    };

    info!("Showing gallery for {}", apartment.name);
    set_apartment_info(ui, index, apartment);
    state
        .gallery
        .borrow_mut()
        .initialize(apartment.images.clone());
}

/// Mirrors the description overlay and the page scroll lock into the view.
fn sync_overlays(ui: &AppWindow, state: &AppState) {
    let chrome = state.chrome.borrow();
    let gallery = state.gallery.borrow();
    let view_state = ui.global::<ViewState>();
    view_state.set_description_modal_open(chrome.is_description_open());
    view_state.set_page_scroll_locked(chrome.scroll_locked(&gallery));
}

fn scroll_to(ui: &AppWindow, section: Section) {
    debug!("Scrolling to {:?}", section);
    ui.invoke_scroll_to_section(section.index());
}

fn setup_menu_handlers(ui: &AppWindow, state: &AppState) {
    ui.global::<Logic>().on_toggle_menu({
        let ui_handle = ui.as_weak();
        let menu = state.menu.clone();
        move || {
            let open = menu.borrow_mut().toggle();
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<ViewState>().set_menu_open(open);
            }
        }
    });

    ui.global::<Logic>().on_menu_outside_click({
        let ui_handle = ui.as_weak();
        let menu = state.menu.clone();
        move || {
            menu.borrow_mut().click_outside();
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<ViewState>().set_menu_open(false);
            }
        }
    });

    // Navigation links close the menu and scroll to their section
    ui.global::<Logic>().on_anchor_activated({
        let ui_handle = ui.as_weak();
        let menu = state.menu.clone();
        move |href| {
            menu.borrow_mut().link_activated();
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            ui.global::<ViewState>().set_menu_open(false);
            if let Some(section) = anchor_target(&href) {
                scroll_to(&ui, section);
            }
        }
    });
}

fn setup_gallery_handlers(ui: &AppWindow, state: &AppState) {
    ui.global::<Logic>().on_select_apartment({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |index| {
            let (Some(ui), Ok(index)) = (ui_handle.upgrade(), usize::try_from(index)) else {
                return;
            };
            select_apartment(&ui, &state, index);
            scroll_to(&ui, Section::Gallery);
        }
    });

    // Prev/next buttons of either viewer; the gallery picks the active surface
    ui.global::<Logic>().on_gallery_step({
        let gallery = state.gallery.clone();
        move |step| match Direction::try_from(step) {
            Ok(direction) => gallery.borrow_mut().advance(direction),
            Err(step) => debug!("Ignoring gallery step {}", step),
        }
    });

    ui.global::<Logic>().on_dot_selected({
        let gallery = state.gallery.clone();
        move |index| {
            if let Ok(index) = usize::try_from(index) {
                gallery.borrow_mut().jump_to(index);
            }
        }
    });

    // A negative index opens the overlay on the current image
    ui.global::<Logic>().on_open_gallery_modal({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |index| {
            state
                .gallery
                .borrow_mut()
                .open_modal(usize::try_from(index).ok());
            if let Some(ui) = ui_handle.upgrade() {
                sync_overlays(&ui, &state);
            }
        }
    });

    ui.global::<Logic>().on_close_gallery_modal({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            state.gallery.borrow_mut().close_modal();
            if let Some(ui) = ui_handle.upgrade() {
                sync_overlays(&ui, &state);
            }
        }
    });
}

fn setup_overlay_handlers(ui: &AppWindow, state: &AppState) {
    ui.global::<Logic>().on_open_description({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            state.chrome.borrow_mut().open_description();
            if let Some(ui) = ui_handle.upgrade() {
                sync_overlays(&ui, &state);
            }
        }
    });

    ui.global::<Logic>().on_close_description({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            state.chrome.borrow_mut().close_description();
            if let Some(ui) = ui_handle.upgrade() {
                sync_overlays(&ui, &state);
            }
        }
    });

    ui.global::<Logic>().on_backdrop_clicked({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |overlay| {
            let Ok(overlay) = Overlay::try_from(overlay) else {
                debug!("Ignoring click on unknown overlay {}", overlay);
                return;
            };
            state
                .chrome
                .borrow_mut()
                .backdrop_clicked(overlay, &mut state.gallery.borrow_mut());
            if let Some(ui) = ui_handle.upgrade() {
                sync_overlays(&ui, &state);
            }
        }
    });
}

fn setup_input_handlers(ui: &AppWindow, state: &AppState) {
    // Returns true when the key was consumed
    ui.global::<Logic>().on_key_pressed({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |key, gallery_focused| {
            let modal_open = state.gallery.borrow().is_modal_open();
            match route_key(&key, modal_open, gallery_focused) {
                Some(KeyAction::CloseOverlays) => {
                    state
                        .chrome
                        .borrow_mut()
                        .escape(&mut state.gallery.borrow_mut());
                    if let Some(ui) = ui_handle.upgrade() {
                        sync_overlays(&ui, &state);
                    }
                    true
                }
                Some(KeyAction::Advance(direction)) => {
                    state.gallery.borrow_mut().advance(direction);
                    true
                }
                None => false,
            }
        }
    });

    ui.global::<Logic>().on_swipe_start({
        let swipe = state.swipe.clone();
        move |x, y| swipe.borrow_mut().touch_start(x, y)
    });

    // Returns true when the gesture was a swipe, so the UI can skip its tap action
    ui.global::<Logic>().on_swipe_end({
        let swipe = state.swipe.clone();
        let gallery = state.gallery.clone();
        move |x, y| {
            let Some(direction) = swipe.borrow_mut().touch_end(x, y) else {
                return false;
            };
            gallery.borrow_mut().advance(direction);
            true
        }
    });

    ui.global::<Logic>()
        .on_is_intersecting(|item_top, item_height, viewport_top, viewport_height| {
            is_intersecting(item_top, item_height, viewport_top, viewport_height)
        });

    ui.global::<Logic>().on_card_entered_view({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move |index| {
            let Ok(index) = usize::try_from(index) else {
                return;
            };
            if !state.lazy_loader.borrow_mut().entered_view(index) {
                return;
            }
            let thumbnail = state
                .site
                .apartments
                .get(index)
                .and_then(|apartment| apartment.thumbnail())
                .map(str::to_string);
            debug!("Loading thumbnail for card {}", index);
            image_display::load_card_thumbnail(ui_handle.clone(), index, thumbnail);
        }
    });
}

fn setup_contact_handlers(ui: &AppWindow) {
    ui.global::<Logic>().on_submit_contact({
        let ui_handle = ui.as_weak();
        move |email, phone, message| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            let errors = validate_contact(&email, &phone);
            set_contact_errors(&ui, &errors);
            if !errors.is_empty() {
                debug!("Contact form rejected: {:?}", errors);
                return;
            }

            let (loading, button) = ButtonLoadingState::begin(CONTACT_SUBMIT_LABEL);
            set_submit_button(&ui, &button);
            info!(
                "Contact enquiry from {} ({} characters)",
                email.trim(),
                message.chars().count()
            );

            let ui_handle = ui_handle.clone();
            slint::Timer::single_shot(CONTACT_SUBMIT_DELAY, move || {
                if let Some(ui) = ui_handle.upgrade() {
                    set_submit_button(&ui, &loading.restore());
                    ui.global::<ViewState>()
                        .set_contact_confirmation(CONTACT_CONFIRMATION.into());
                }
            });
        }
    });
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and shared page state, then registers
/// callbacks for navigation, gallery, overlays and other user actions.
pub fn setup_handlers(ui: &AppWindow, state: &AppState) {
    setup_menu_handlers(ui, state);
    setup_gallery_handlers(ui, state);
    setup_overlay_handlers(ui, state);
    setup_input_handlers(ui, state);
    setup_contact_handlers(ui);
}
