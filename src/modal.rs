//! Image modal for project and certificate thumbnails.
//!
//! The modal needs four elements: the container (which doubles as the
//! backdrop), the enlarged image, the caption, and a close button. If any of
//! them is missing the modal is not assembled at all and thumbnails keep their
//! default behaviour.
//!
//! Opening copies the thumbnail's `src` into the enlarged image and its `alt`
//! text into the caption, then shows the container. The modal closes from the
//! close button or from a click that lands on the backdrop itself; a click on
//! the enlarged image bubbles up to the container but does not close it.

use crate::config::ModalConfig;
use crate::dom::Element;

/// Inline display of a closed modal.
pub const HIDDEN_DISPLAY: &str = "none";

/// What a thumbnail contributes to the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
}

impl Thumbnail {
    /// Read a thumbnail from an `<img>`. Missing attributes read as empty.
    pub fn from_element<E: Element>(element: &E) -> Self {
        Self {
            src: element.src().unwrap_or_default(),
            alt: element.alt().unwrap_or_default(),
        }
    }
}

#[derive(Debug)]
pub struct ImageModal<E> {
    container: E,
    image: E,
    caption: E,
    close_button: E,
    display: String,
    open: bool,
    shown: Option<Thumbnail>,
}

impl<E: Element> ImageModal<E> {
    /// Assemble the modal from its parts, or `None` if any part is missing.
    pub fn assemble(
        container: Option<E>,
        image: Option<E>,
        caption: Option<E>,
        close_button: Option<E>,
        config: &ModalConfig,
    ) -> Option<Self> {
        Some(Self {
            container: container?,
            image: image?,
            caption: caption?,
            close_button: close_button?,
            display: config.display.clone(),
            open: false,
            shown: None,
        })
    }

    /// Show `thumbnail` enlarged with its caption.
    pub fn open(&mut self, thumbnail: &Thumbnail) {
        self.container.set_display(&self.display);
        self.image.set_src(&thumbnail.src);
        self.caption.set_text(&thumbnail.alt);
        self.open = true;
        self.shown = Some(thumbnail.clone());
    }

    pub fn close(&mut self) {
        self.container.set_display(HIDDEN_DISPLAY);
        self.open = false;
        self.shown = None;
    }

    /// Handle a click that reached the container. Only a click whose target
    /// is the container itself closes the modal. Returns whether it closed.
    pub fn on_backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        if target_is_backdrop {
            self.close();
        }
        target_is_backdrop
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The thumbnail currently on display.
    pub fn shown(&self) -> Option<&Thumbnail> {
        self.shown.as_ref()
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    pub fn close_button(&self) -> &E {
        &self.close_button
    }
}
