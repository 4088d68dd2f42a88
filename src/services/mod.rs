//! Service layer for page behaviour.
//!
//! Separates input interpretation and content rules from UI handlers for better testability.

pub mod accessibility_service;
pub mod keyboard_service;
pub mod performance_service;
pub mod scroll_service;
pub mod swipe_service;
pub mod validation_service;

pub use keyboard_service::{KeyAction, route_key};
pub use performance_service::PerformanceTracker;
pub use scroll_service::{Section, anchor_target};
pub use swipe_service::SwipeDetector;
pub use validation_service::{ButtonLoadingState, ContactErrors, validate_contact};
