//! Gallery state for the apartment currently on display.
//!
//! `GalleryController` owns the ordered image list and the selected index.
//! It never talks to the toolkit directly: every change is pushed through a
//! [`GalleryPresenter`], and the main viewer, the modal viewer and the dot row
//! are always re-rendered together so they never disagree about the index.

use log::debug;

/// Local path of a gallery image, resolved against the site file.
pub type ImageRef = String;

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl TryFrom<i32> for Direction {
    type Error = i32;

    /// Accepts the `+1` / `-1` steps the UI layer sends.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Next),
            -1 => Ok(Direction::Previous),
            other => Err(other),
        }
    }
}

/// One of the two viewers that show the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Main,
    Modal,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Main, Surface::Modal];
}

/// Visibility of the overlay viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Handle for a pending fade-in.
///
/// Only the most recently issued ticket is honoured; older ones are ignored
/// when they fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTicket {
    surface: Surface,
    generation: u64,
}

impl FadeTicket {
    #[cfg(test)]
    pub fn surface(&self) -> Surface {
        self.surface
    }
}

/// Presentation port implemented by the concrete UI binding.
///
/// Dot indicators rendered through `render_dots` must call
/// [`GalleryController::jump_to`] with their own position when activated.
pub trait GalleryPresenter {
    /// Shows `image` in both the inline and the overlay viewer, or clears them.
    fn set_images(&mut self, image: Option<&str>);
    /// Replaces the dot row with `count` dots, `active` marked as selected.
    fn render_dots(&mut self, count: usize, active: usize);
    /// Shows or hides the overlay viewer. Page scrolling follows
    /// [`crate::state::ModalChrome::scroll_locked`].
    fn set_modal_visible(&mut self, visible: bool);
    fn set_opacity(&mut self, surface: Surface, opacity: f32);
    /// Arranges for [`GalleryController::finish_fade`] to be called with
    /// `ticket` after the fade delay.
    fn schedule_fade_in(&mut self, ticket: FadeTicket);
}

/// Owns the image list and selection for one gallery.
pub struct GalleryController<P: GalleryPresenter> {
    images: Vec<ImageRef>,
    current_index: usize,
    modal: ModalState,
    fade_generation: u64,
    presenter: P,
}

impl<P: GalleryPresenter> GalleryController<P> {
    /// Creates an empty gallery with the overlay closed.
    pub fn new(presenter: P) -> Self {
        Self {
            images: Vec::new(),
            current_index: 0,
            modal: ModalState::Closed,
            fade_generation: 0,
            presenter,
        }
    }

    /// Replaces the image list with a new apartment's images and selects the first one.
    ///
    /// Does not open the overlay. An empty list is valid and clears both viewers.
    pub fn initialize(&mut self, images: Vec<ImageRef>) {
        debug!("Initializing gallery with {} image(s)", images.len());
        self.images = images;
        self.current_index = 0;
        self.render_images();
        self.render_dots();
    }

    /// Moves the selection one step, wrapping at both ends.
    ///
    /// No-op on an empty gallery.
    pub fn advance(&mut self, direction: Direction) {
        let count = self.images.len();
        if count == 0 {
            debug!("Ignoring {:?} on empty gallery", direction);
            return;
        }

        self.current_index = match direction {
            Direction::Next => (self.current_index + 1) % count,
            Direction::Previous => (self.current_index + count - 1) % count,
        };
        self.render_transition();
    }

    /// Selects `index` directly. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.images.len() {
            debug!(
                "Ignoring jump to {} (gallery has {} image(s))",
                index,
                self.images.len()
            );
            return;
        }

        self.current_index = index;
        self.render_transition();
    }

    /// Regenerates the dot row from the current state.
    pub fn render_dots(&mut self) {
        self.presenter
            .render_dots(self.images.len(), self.current_index);
    }

    /// Shows the overlay viewer, first selecting `index` when it is valid.
    pub fn open_modal(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            if index < self.images.len() {
                self.current_index = index;
            } else {
                debug!("Opening gallery overlay without invalid index {}", index);
            }
        }

        self.modal = ModalState::Open;
        self.presenter.set_modal_visible(true);
        self.presenter.set_opacity(Surface::Modal, 1.0);
        self.render_images();
        self.render_dots();
    }

    /// Hides the overlay viewer. The selection is left untouched.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.presenter.set_modal_visible(false);
    }

    /// Completes a fade started by a navigation step.
    ///
    /// Tickets superseded by a later navigation are dropped, so a late timer
    /// can never touch a surface that a newer transition owns.
    pub fn finish_fade(&mut self, ticket: FadeTicket) {
        if ticket.generation != self.fade_generation {
            debug!("Dropping stale fade ticket {:?}", ticket);
            return;
        }
        self.presenter.set_opacity(ticket.surface, 1.0);
    }

    /// The surface navigation currently acts on.
    pub fn active_surface(&self) -> Surface {
        match self.modal {
            ModalState::Open => Surface::Modal,
            ModalState::Closed => Surface::Main,
        }
    }

    #[cfg(test)]
    pub fn modal_state(&self) -> ModalState {
        self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    /// Returns the selected index, or `None` for an empty gallery.
    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        (!self.images.is_empty()).then_some(self.current_index)
    }

    #[cfg(test)]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[cfg(test)]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn render_images(&mut self) {
        let current = self.images.get(self.current_index).map(String::as_str);
        self.presenter.set_images(current);
    }

    fn render_transition(&mut self) {
        let surface = self.active_surface();
        let other = match surface {
            Surface::Main => Surface::Modal,
            Surface::Modal => Surface::Main,
        };

        self.fade_generation += 1;
        let ticket = FadeTicket {
            surface,
            generation: self.fade_generation,
        };

        // A superseded fade on the other surface would otherwise never complete.
        self.presenter.set_opacity(other, 1.0);
        self.presenter.set_opacity(surface, 0.0);
        self.render_images();
        self.render_dots();
        self.presenter.schedule_fade_in(ticket);
    }
}
