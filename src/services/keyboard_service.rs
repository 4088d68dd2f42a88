//! Keyboard routing for overlays and the gallery.

use crate::state::gallery::Direction;

/// What a key press should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CloseOverlays,
    Advance(Direction),
}

/// Maps a key name to an action.
///
/// Arrow keys only navigate while the gallery overlay is open or the inline
/// gallery has keyboard focus.
pub fn route_key(key: &str, modal_open: bool, gallery_focused: bool) -> Option<KeyAction> {
    let direction = match key {
        "Escape" => return Some(KeyAction::CloseOverlays),
        "ArrowLeft" => Direction::Previous,
        "ArrowRight" => Direction::Next,
        _ => return None,
    };

    (modal_open || gallery_focused).then_some(KeyAction::Advance(direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_always_closes() {
        assert_eq!(route_key("Escape", false, false), Some(KeyAction::CloseOverlays));
        assert_eq!(route_key("Escape", true, true), Some(KeyAction::CloseOverlays));
    }

    #[test]
    fn arrows_need_open_modal_or_focus() {
        assert_eq!(route_key("ArrowLeft", false, false), None);
        assert_eq!(
            route_key("ArrowLeft", true, false),
            Some(KeyAction::Advance(Direction::Previous))
        );
        assert_eq!(
            route_key("ArrowRight", false, true),
            Some(KeyAction::Advance(Direction::Next))
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(route_key("a", true, true), None);
        assert_eq!(route_key("", true, true), None);
    }
}
