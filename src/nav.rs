//! Tab navigation.
//!
//! The page is a set of `article[data-page]` sections and a set of
//! `[data-nav-link]` links. Selecting a link is an unconditional reset
//! followed by activation:
//!
//! 1. remove the active class from every link and every page
//! 2. add it to the selected link
//! 3. add it to the page whose `data-page` equals the link's `data-nav-link`,
//!    compared case-insensitively (`"About"` selects `"about"`)
//! 4. scroll back to the top
//!
//! A link whose target names no page still becomes active while no page does.
//! That state is left as is; [`TabNav::unmatched_targets`] lets the caller
//! report such links when the page is wired.
//!
//! Attributes are read at selection time, so the outcome always reflects the
//! current markup.

use crate::dom::{self, Element, Viewport};

/// What a selection activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    pub link: usize,
    /// Index of the page now active, if the link's target matched one.
    pub page: Option<usize>,
}

#[derive(Debug)]
pub struct TabNav<E> {
    links: Vec<E>,
    pages: Vec<E>,
    active_class: String,
    active_link: Option<usize>,
    active_page: Option<usize>,
}

impl<E: Element> TabNav<E> {
    pub fn new(links: Vec<E>, pages: Vec<E>, active_class: &str) -> Self {
        let active_link = links.iter().position(|l| l.has_class(active_class));
        let active_page = pages.iter().position(|p| p.has_class(active_class));
        Self {
            links,
            pages,
            active_class: active_class.to_string(),
            active_link,
            active_page,
        }
    }

    /// Select the link at `link`. Returns `None` for an index with no link.
    pub fn select(&mut self, link: usize, viewport: &mut impl Viewport) -> Option<NavOutcome> {
        let selected = self.links.get(link)?;
        let wanted = normalize(selected.data(dom::NAV_LINK_KEY).as_deref());

        for el in self.links.iter().chain(&self.pages) {
            el.remove_class(&self.active_class);
        }
        selected.add_class(&self.active_class);

        let page = self.page_for(&wanted);
        match page {
            Some(index) => self.pages[index].add_class(&self.active_class),
            None => tracing::debug!(page = %wanted, "nav link matches no page"),
        }
        viewport.scroll_to_top();

        self.active_link = Some(link);
        self.active_page = page;
        Some(NavOutcome { link, page })
    }

    /// Index of the first page whose identifier equals `wanted`.
    fn page_for(&self, wanted: &str) -> Option<usize> {
        self.pages
            .iter()
            .position(|p| normalize(p.data(dom::PAGE_KEY).as_deref()) == wanted)
    }

    /// Targets of links that would activate no page, in link order.
    pub fn unmatched_targets(&self) -> Vec<String> {
        self.links
            .iter()
            .filter_map(|l| l.data(dom::NAV_LINK_KEY))
            .filter(|target| self.page_for(&normalize(Some(target.as_str()))).is_none())
            .collect()
    }

    pub fn active_link(&self) -> Option<usize> {
        self.active_link
    }

    pub fn active_page(&self) -> Option<usize> {
        self.active_page
    }

    pub fn links(&self) -> &[E] {
        &self.links
    }

    pub fn pages(&self) -> &[E] {
        &self.pages
    }
}

fn normalize(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}
