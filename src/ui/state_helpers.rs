//! Helper functions to set multiple ViewState properties in a grouped manner.
//!
//! Instead of calling individual setters like set_apartment_name, set_apartment_alt, etc.,
//! these functions group related properties together for better code organization and maintainability.

use crate::services::validation_service::ButtonView;
use crate::services::{ContactErrors, Section};
use crate::site::{Apartment, Site};
use crate::{ApartmentCard, AppWindow, NavLink, ViewState};
use log::error;
use slint::{ComponentHandle, ModelRc, VecModel};

/// Sets all site-wide content at once.
///
/// Groups: site-title, site-tagline, about-title, about-body, nav-links, apartments
pub fn set_site_content(ui: &AppWindow, site: &Site) {
    let view_state = ui.global::<ViewState>();
    view_state.set_site_title(site.title.as_str().into());
    view_state.set_site_tagline(site.tagline.as_str().into());
    view_state.set_about_title(site.about_title.as_str().into());
    view_state.set_about_body(site.about_body.as_str().into());

    let links: Vec<NavLink> = Section::ALL
        .iter()
        .map(|section| NavLink {
            label: section.label().into(),
            anchor: format!("#{}", section.anchor()).into(),
        })
        .collect();
    view_state.set_nav_links(ModelRc::new(VecModel::from(links)));

    let cards: Vec<ApartmentCard> = site
        .apartments
        .iter()
        .map(|apartment| ApartmentCard {
            id: apartment.id.as_str().into(),
            name: apartment.name.as_str().into(),
            summary: apartment.summary.as_str().into(),
            alt: apartment.alt.as_str().into(),
            cta_label: apartment.cta_label.as_str().into(),
            thumbnail: slint::Image::default(),
            thumbnail_loaded: false,
            thumbnail_error: false,
        })
        .collect();
    view_state.set_apartments(ModelRc::new(VecModel::from(cards)));
}

/// Sets all properties describing the selected apartment.
///
/// Groups: selected-apartment, apartment-name, apartment-description, apartment-alt
pub fn set_apartment_info(ui: &AppWindow, index: usize, apartment: &Apartment) {
    let view_state = ui.global::<ViewState>();
    view_state.set_selected_apartment(index as i32);
    view_state.set_apartment_name(apartment.name.as_str().into());
    view_state.set_apartment_description(apartment.description.as_str().into());
    view_state.set_apartment_alt(apartment.alt.as_str().into());
}

/// Sets the field errors of the contact form; empty strings hide them.
///
/// Groups: email-error, phone-error, contact-confirmation
pub fn set_contact_errors(ui: &AppWindow, errors: &ContactErrors) {
    let view_state = ui.global::<ViewState>();
    view_state.set_email_error(errors.email.unwrap_or_default().into());
    view_state.set_phone_error(errors.phone.unwrap_or_default().into());
    view_state.set_contact_confirmation("".into());
}

/// Sets the contact submit button label and enabled state.
pub fn set_submit_button(ui: &AppWindow, button: &ButtonView) {
    let view_state = ui.global::<ViewState>();
    view_state.set_submit_label(button.label.as_str().into());
    view_state.set_submit_enabled(button.enabled);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<ViewState>()
        .set_error_message(error_message.into());
}
