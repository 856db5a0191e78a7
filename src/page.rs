//! Page controller: the four behaviours wired together once.
//!
//! [`PageController::wire`] walks the document a single time and builds each
//! behaviour from what it finds. A behaviour whose markup is missing is simply
//! absent; nothing fails. After wiring, the host (the `web` module in the
//! browser, tests natively) forwards events to the `click_*` and
//! [`intersect`](PageController::intersect) entry points.
//!
//! The behaviours share no state, so the order events arrive in between them
//! does not matter.

use crate::config::ScriptConfig;
use crate::dom::{self, Document, Element, Viewport};
use crate::modal::{ImageModal, Thumbnail};
use crate::nav::{NavOutcome, TabNav};
use crate::reveal::RevealSection;
use crate::sidebar::Sidebar;

#[derive(Debug)]
pub struct PageController<E> {
    config: ScriptConfig,
    sections: Vec<RevealSection<E>>,
    sidebar: Option<Sidebar<E>>,
    nav: TabNav<E>,
    thumbnails: Vec<E>,
    modal: Option<ImageModal<E>>,
}

impl<E: Element> PageController<E> {
    pub fn wire<D>(document: &D, config: ScriptConfig) -> Self
    where
        D: Document<Element = E>,
    {
        let sections: Vec<_> = document
            .query_all(&config.reveal.section_selector)
            .iter()
            .map(|section| {
                let texts = document.query_within(section, &config.reveal.text_selector);
                RevealSection::new(texts, &config.reveal)
            })
            .collect();
        tracing::debug!(
            sections = sections.len(),
            elements = sections.iter().map(RevealSection::len).sum::<usize>(),
            "reveal wired"
        );

        let sidebar = match (
            document.query(dom::SIDEBAR),
            document.query(dom::SIDEBAR_BUTTON),
        ) {
            (Some(panel), Some(button)) => {
                tracing::debug!("sidebar wired");
                Some(Sidebar::new(panel, button, &config.classes.active))
            }
            (None, Some(_)) => {
                tracing::warn!("sidebar button present without a sidebar, toggle disabled");
                None
            }
            _ => None,
        };

        let nav = TabNav::new(
            document.query_all(dom::NAV_LINKS),
            document.query_all(dom::PAGES),
            &config.classes.active,
        );
        for target in nav.unmatched_targets() {
            tracing::warn!(link = %target, "nav link matches no page");
        }
        tracing::debug!(
            links = nav.links().len(),
            pages = nav.pages().len(),
            "navigation wired"
        );

        let thumbnails = document.query_all(dom::THUMBNAILS);
        let modal = ImageModal::assemble(
            document.by_id(dom::MODAL_ID),
            document.by_id(dom::MODAL_IMAGE_ID),
            document.by_id(dom::CAPTION_ID),
            document.query(dom::CLOSE_BUTTON),
            &config.modal,
        );
        match &modal {
            Some(_) => tracing::debug!(thumbnails = thumbnails.len(), "image modal wired"),
            None if !thumbnails.is_empty() => {
                tracing::warn!("image modal markup incomplete, thumbnails left as plain links")
            }
            None => {}
        }

        Self {
            config,
            sections,
            sidebar,
            nav,
            thumbnails,
            modal,
        }
    }

    /// Sidebar button clicked. Returns the new open state, or `None` when the
    /// page has no sidebar.
    pub fn click_sidebar_button(&mut self) -> Option<bool> {
        self.sidebar.as_mut().map(Sidebar::toggle)
    }

    pub fn click_nav_link(
        &mut self,
        link: usize,
        viewport: &mut impl Viewport,
    ) -> Option<NavOutcome> {
        self.nav.select(link, viewport)
    }

    /// Thumbnail clicked. Returns whether the modal opened; when it did, the
    /// caller must suppress the click's default navigation.
    pub fn click_thumbnail(&mut self, index: usize) -> bool {
        let (Some(modal), Some(thumbnail)) = (self.modal.as_mut(), self.thumbnails.get(index))
        else {
            return false;
        };
        modal.open(&Thumbnail::from_element(thumbnail));
        true
    }

    pub fn click_close(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.close();
        }
    }

    /// A click reached the modal container. Returns whether it closed the modal.
    pub fn click_modal(&mut self, target_is_backdrop: bool) -> bool {
        self.modal
            .as_mut()
            .is_some_and(|modal| modal.on_backdrop_click(target_is_backdrop))
    }

    /// Intersection reports for the section at `section`.
    pub fn intersect<I>(&mut self, section: usize, entries: I)
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        if let Some(section) = self.sections.get_mut(section) {
            section.on_intersection(entries);
        }
    }

    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    pub fn sections(&self) -> &[RevealSection<E>] {
        &self.sections
    }

    pub fn sidebar(&self) -> Option<&Sidebar<E>> {
        self.sidebar.as_ref()
    }

    pub fn nav(&self) -> &TabNav<E> {
        &self.nav
    }

    pub fn thumbnails(&self) -> &[E] {
        &self.thumbnails
    }

    pub fn modal(&self) -> Option<&ImageModal<E>> {
        self.modal.as_ref()
    }
}
