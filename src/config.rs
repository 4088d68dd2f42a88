//! Application configuration constants.

use std::time::Duration;

/// Supported image file extensions for scanning gallery directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Site file used when none is given on the command line.
pub const DEFAULT_SITE_FILE: &str = "site.toml";

/// Minimum horizontal travel, in logical pixels, for a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Delay before a faded-out gallery image fades back in.
pub const FADE_DELAY: Duration = Duration::from_millis(150);

/// How long the contact button shows its loading state.
pub const CONTACT_SUBMIT_DELAY: Duration = Duration::from_millis(800);

pub const LOADING_LABEL: &str = "Cargando...";
pub const CONTACT_SUBMIT_LABEL: &str = "Enviar";
pub const CONTACT_CONFIRMATION: &str = "¡Gracias! Te responderemos lo antes posible.";
pub const EMAIL_ERROR: &str = "Introduce un correo electrónico válido";
pub const PHONE_ERROR: &str = "Introduce un número de teléfono válido";

pub const DEFAULT_BUTTON_LABEL: &str = "Botón interactivo";
pub const DEFAULT_IMAGE_ALT: &str = "Imagen del apartamento";
pub const MAX_ANCHOR_LEN: usize = 50;

/// Shown in place of any image that fails to load.
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="200" viewBox="0 0 300 200"><rect width="300" height="200" fill="#f0f0f0"/><text x="150" y="100" font-family="Arial" font-size="14" fill="#999" text-anchor="middle">Imagen no disponible</text></svg>"##;
