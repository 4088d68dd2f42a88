//! State management for the listing page.

use crate::services::SwipeDetector;
use crate::site::Site;
use crate::ui::SharedGallery;
use std::cell::RefCell;
use std::rc::Rc;

pub mod gallery;
pub mod lazy_load;
pub mod menu;
pub mod modal_chrome;

pub use lazy_load::LazyLoader;
pub use menu::NavMenu;
pub use modal_chrome::ModalChrome;

/// Page-wide state container.
///
/// Everything here lives on the UI thread; handlers clone the container
/// into their callbacks.
#[derive(Clone)]
pub struct AppState {
    pub site: Rc<Site>,
    pub gallery: SharedGallery,
    pub menu: Rc<RefCell<NavMenu>>,
    pub chrome: Rc<RefCell<ModalChrome>>,
    /// Cards whose thumbnails were already requested.
    pub lazy_loader: Rc<RefCell<LazyLoader>>,
    pub swipe: Rc<RefCell<SwipeDetector>>,
}

impl AppState {
    pub fn new(ui: &crate::AppWindow, site: Site) -> Self {
        Self {
            site: Rc::new(site),
            gallery: crate::ui::new_shared_gallery(ui),
            menu: Rc::new(RefCell::new(NavMenu::new())),
            chrome: Rc::new(RefCell::new(ModalChrome::new())),
            lazy_loader: Rc::new(RefCell::new(LazyLoader::new())),
            swipe: Rc::new(RefCell::new(SwipeDetector::new())),
        }
    }
}
