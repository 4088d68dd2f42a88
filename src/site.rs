//! Site content loaded from the TOML site file.

use crate::error::{AppError, Result};
use crate::file_utils;
use crate::services::accessibility_service::{button_label, heading_anchor, image_alt};
use crate::state::gallery::ImageRef;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SiteFile {
    title: String,
    #[serde(default)]
    tagline: String,
    #[serde(default)]
    about: AboutFile,
    #[serde(default)]
    apartments: Vec<ApartmentFile>,
}

#[derive(Debug, Default, Deserialize)]
struct AboutFile {
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Deserialize)]
struct ApartmentFile {
    id: Option<String>,
    name: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    description: String,
    alt: Option<String>,
    cta: Option<String>,
    #[serde(default)]
    images: Vec<String>,
    image_dir: Option<String>,
}

/// One apartment listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Apartment {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    pub alt: String,
    pub cta_label: String,
    pub images: Vec<ImageRef>,
}

impl Apartment {
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Everything the page shows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Site {
    pub title: String,
    pub tagline: String,
    pub about_title: String,
    pub about_body: String,
    pub apartments: Vec<Apartment>,
}

/// Reads and validates a site file.
///
/// Relative image paths and `image_dir` entries resolve against the
/// directory containing the site file.
pub fn load_site(path: &Path) -> Result<Site> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let site = parse_site(&content, base_dir)?;
    info!(
        "Loaded site {:?} with {} apartment(s) from {}",
        site.title,
        site.apartments.len(),
        path.display()
    );
    Ok(site)
}

fn parse_site(content: &str, base_dir: &Path) -> Result<Site> {
    let file: SiteFile = toml::from_str(content)?;

    if file.title.trim().is_empty() {
        return Err(AppError::SiteConfig("site title is empty".to_string()));
    }

    let apartments = file
        .apartments
        .into_iter()
        .enumerate()
        .map(|(position, apartment)| build_apartment(position, apartment, base_dir))
        .collect::<Result<Vec<_>>>()?;

    Ok(Site {
        title: file.title,
        tagline: file.tagline,
        about_title: file.about.title,
        about_body: file.about.body,
        apartments,
    })
}

fn build_apartment(position: usize, file: ApartmentFile, base_dir: &Path) -> Result<Apartment> {
    if file.name.trim().is_empty() {
        return Err(AppError::SiteConfig(format!(
            "apartment #{} has no name",
            position + 1
        )));
    }

    let mut images: Vec<ImageRef> = file
        .images
        .iter()
        .map(|image| file_utils::resolve_image_ref(base_dir, image))
        .collect::<Result<_>>()?;

    if let Some(dir) = &file.image_dir {
        let scanned = file_utils::scan_directory(&base_dir.join(dir))?;
        debug!("Found {} image(s) in {}", scanned.len(), dir);
        images.extend(
            scanned
                .into_iter()
                .map(|path| path.to_string_lossy().into_owned()),
        );
    }

    let id = file
        .id
        .filter(|id| !id.is_empty())
        .or_else(|| heading_anchor(&file.name))
        .unwrap_or_else(|| format!("apartamento-{}", position + 1));

    Ok(Apartment {
        id,
        alt: image_alt(file.alt.as_deref()),
        cta_label: button_label(file.cta.as_deref()),
        name: file.name,
        summary: file.summary,
        description: file.description,
        images,
    })
}
