// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_loader;
mod services;
mod site;
mod startup;
mod state;
#[cfg(test)]
mod test_utils;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let performance = services::PerformanceTracker::start();

    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let app = AppWindow::new()?;

    let site_path = startup::site_file_from_args();
    let site = match site::load_site(&site_path) {
        Ok(site) => site,
        Err(e) => {
            ui::set_error_with_prefix(
                &app,
                &format!("Failed to load {}", site_path.display()),
                e.to_string(),
            );
            site::Site::default()
        }
    };

    let app_state = state::AppState::new(&app, site);

    // Setup all UI event handlers
    ui::setup_handlers(&app, &app_state);
    startup::configure_startup(&app, &app_state, performance);

    app.run()?;

    Ok(())
}
