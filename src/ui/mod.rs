//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - Slint callbacks and `slint::Timer`: ページ状態の更新（ギャラリー、メニュー、モーダル）はすべてUIスレッドで実行
//! - `rayon::spawn`: CPU集約的処理（画像デコード）
//! - `slint::invoke_from_event_loop`: rayonからUIスレッドへの結果返却時に使用

pub mod handlers;
pub mod image_display;
pub mod presenter;
mod state_helpers;
mod surface_tracker;

pub use handlers::setup_handlers;
pub use presenter::{SharedGallery, new_shared_gallery};
pub use state_helpers::*;
pub use surface_tracker::SurfaceTracker;
