//! In-page anchor resolution for smooth scrolling.

use log::debug;

/// Page sections that navigation links can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Apartments,
    Gallery,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Apartments,
        Section::Gallery,
        Section::About,
        Section::Contact,
    ];

    /// Element id used in `#anchor` links.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "inicio",
            Section::Apartments => "apartamentos",
            Section::Gallery => "galeria",
            Section::About => "sobre-nosotros",
            Section::Contact => "contacto",
        }
    }

    /// Navigation menu label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Inicio",
            Section::Apartments => "Apartamentos",
            Section::Gallery => "Galería",
            Section::About => "Sobre nosotros",
            Section::Contact => "Contacto",
        }
    }

    /// Position of the section in the page, top to bottom.
    pub fn index(self) -> i32 {
        Section::ALL
            .iter()
            .position(|section| *section == self)
            .map(|position| position as i32)
            .unwrap_or(0)
    }
}

/// Resolves an in-page link such as `#contacto`.
///
/// Links that are not fragment links, or name no known section, resolve to `None`.
pub fn anchor_target(href: &str) -> Option<Section> {
    let id = href.strip_prefix('#')?;
    let section = Section::ALL
        .into_iter()
        .find(|section| section.anchor() == id);
    if section.is_none() {
        debug!("No section for anchor {:?}", href);
    }
    section
}
