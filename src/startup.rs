use crate::config::DEFAULT_SITE_FILE;
use crate::services::PerformanceTracker;
use crate::state::AppState;
use crate::ui::handlers::select_apartment;
use std::path::PathBuf;
use std::time::Duration;

/// Picks the site file from the first non-flag argument.
pub fn site_file_from_args() -> PathBuf {
    site_file_from(std::env::args_os().skip(1).map(PathBuf::from))
}

fn site_file_from(mut args: impl Iterator<Item = PathBuf>) -> PathBuf {
    args.find(|arg| !arg.to_string_lossy().starts_with('-'))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_FILE))
}

/// Fills the page from the site content and opens the first apartment's gallery.
pub fn configure_startup(
    app: &crate::AppWindow,
    app_state: &AppState,
    performance: PerformanceTracker,
) {
    crate::ui::set_site_content(app, &app_state.site);
    select_apartment(app, app_state, 0);

    // Fires on the first event-loop turn, i.e. once the page is up
    slint::Timer::single_shot(Duration::ZERO, move || {
        performance.log_page_load();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = PathBuf> {
        list.iter().map(PathBuf::from).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn first_positional_argument_is_site_file() {
        assert_eq!(
            site_file_from(args(&["--verbose", "listings/site.toml", "other.toml"])),
            PathBuf::from("listings/site.toml")
        );
    }

    #[test]
    fn defaults_without_positional_argument() {
        assert_eq!(site_file_from(args(&[])), PathBuf::from(DEFAULT_SITE_FILE));
        assert_eq!(site_file_from(args(&["-v"])), PathBuf::from(DEFAULT_SITE_FILE));
    }
}
