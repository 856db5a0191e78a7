//! Shared test utilities for the folio-ui test suite.
//!
//! Provides in-memory implementations of the [`dom`](crate::dom) traits and a
//! portfolio fixture page, so every behaviour can be exercised without a
//! browser.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let page = portfolio_page();
//! let mut controller = PageController::wire(&page.document, ScriptConfig::default());
//!
//! let mut viewport = RecordingViewport::default();
//! controller.click_nav_link(1, &mut viewport);
//! assert_eq!(active_page_ids(&page), vec!["resume"]);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::dom::{self, Document, Element, Viewport};

// =========================================================================
// In-memory element
// =========================================================================

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    data: BTreeMap<String, String>,
    display: Option<String>,
    src: Option<String>,
    alt: Option<String>,
    text: String,
}

/// A shared handle to an in-memory node. Clones alias the same node, and
/// equality is node identity, as with real DOM handles.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_data(self, key: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .data
            .insert(key.to_string(), value.to_string());
        self
    }

    /// An `<img>` with the given source and alternative text.
    pub fn image(src: &str, alt: &str) -> Self {
        let el = Self::new();
        {
            let mut state = el.state.borrow_mut();
            state.src = Some(src.to_string());
            state.alt = Some(alt.to_string());
        }
        el
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    pub fn display(&self) -> Option<String> {
        self.state.borrow().display.clone()
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }
}

impl Element for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) {
        self.state.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().classes.remove(class);
    }

    fn data(&self, key: &str) -> Option<String> {
        self.state.borrow().data.get(key).cloned()
    }

    fn set_display(&self, value: &str) {
        self.state.borrow_mut().display = Some(value.to_string());
    }

    fn src(&self) -> Option<String> {
        self.state.borrow().src.clone()
    }

    fn set_src(&self, src: &str) {
        self.state.borrow_mut().src = Some(src.to_string());
    }

    fn alt(&self) -> Option<String> {
        self.state.borrow().alt.clone()
    }

    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }
}

// =========================================================================
// In-memory document
// =========================================================================

/// A document whose query results are registered up front, keyed by the
/// exact selector string the code under test asks for.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    selectors: HashMap<String, Vec<MemoryElement>>,
    ids: HashMap<String, MemoryElement>,
    scoped: Vec<(MemoryElement, String, Vec<MemoryElement>)>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, selector: &str, elements: Vec<MemoryElement>) {
        self.selectors
            .entry(selector.to_string())
            .or_default()
            .extend(elements);
    }

    pub fn insert_id(&mut self, id: &str, element: MemoryElement) {
        self.ids.insert(id.to_string(), element);
    }

    pub fn insert_within(
        &mut self,
        scope: &MemoryElement,
        selector: &str,
        elements: Vec<MemoryElement>,
    ) {
        self.scoped
            .push((scope.clone(), selector.to_string(), elements));
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query(&self, selector: &str) -> Option<MemoryElement> {
        self.selectors
            .get(selector)
            .and_then(|found| found.first().cloned())
    }

    fn query_all(&self, selector: &str) -> Vec<MemoryElement> {
        self.selectors.get(selector).cloned().unwrap_or_default()
    }

    fn query_within(&self, scope: &MemoryElement, selector: &str) -> Vec<MemoryElement> {
        self.scoped
            .iter()
            .filter(|(s, sel, _)| s == scope && sel == selector)
            .flat_map(|(_, _, found)| found.iter().cloned())
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<MemoryElement> {
        self.ids.get(id).cloned()
    }
}

/// Counts scroll resets.
#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub scrolls_to_top: usize,
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&mut self) {
        self.scrolls_to_top += 1;
    }
}

// =========================================================================
// Fixture page
// =========================================================================

pub const TEXT_SELECTOR: &str = "h1, h2, h3, p, li";

/// Handles to every node of [`portfolio_page`].
pub struct PortfolioPage {
    pub document: MemoryDocument,
    pub sidebar: MemoryElement,
    pub sidebar_button: MemoryElement,
    pub nav_links: Vec<MemoryElement>,
    pub pages: Vec<MemoryElement>,
    /// Text elements per page, in document order.
    pub texts: Vec<Vec<MemoryElement>>,
    pub thumbnails: Vec<MemoryElement>,
    pub modal: MemoryElement,
    pub modal_image: MemoryElement,
    pub caption: MemoryElement,
    pub close_button: MemoryElement,
}

/// A three-page portfolio with every markup hook present.
///
/// ```text
/// nav:   About | Resume | Projects      (data-nav-link)
/// pages: about (active), resume, projects  (article[data-page])
/// text:  3, 4, 2 elements per page
/// thumbnails on the projects page: x.png "Cert A", y.png "Cert B"
/// ```
pub fn portfolio_page() -> PortfolioPage {
    let mut document = MemoryDocument::new();

    let sidebar = MemoryElement::new();
    let sidebar_button = MemoryElement::new();
    document.insert(dom::SIDEBAR, vec![sidebar.clone()]);
    document.insert(dom::SIDEBAR_BUTTON, vec![sidebar_button.clone()]);

    let nav_links: Vec<_> = ["About", "Resume", "Projects"]
        .iter()
        .map(|target| MemoryElement::new().with_data(dom::NAV_LINK_KEY, target))
        .collect();
    nav_links[0].add_class("active");
    document.insert(dom::NAV_LINKS, nav_links.clone());

    let pages: Vec<_> = ["about", "resume", "projects"]
        .iter()
        .map(|id| MemoryElement::new().with_data(dom::PAGE_KEY, id))
        .collect();
    pages[0].add_class("active");
    document.insert(dom::PAGES, pages.clone());
    document.insert("article", pages.clone());

    let texts: Vec<Vec<_>> = [3, 4, 2]
        .iter()
        .map(|&n| (0..n).map(|_| MemoryElement::new()).collect())
        .collect();
    for (page, text) in pages.iter().zip(&texts) {
        document.insert_within(page, TEXT_SELECTOR, text.clone());
    }

    let thumbnails = vec![
        MemoryElement::image("x.png", "Cert A"),
        MemoryElement::image("y.png", "Cert B"),
    ];
    document.insert(dom::THUMBNAILS, thumbnails.clone());

    let modal = MemoryElement::new();
    let modal_image = MemoryElement::new();
    let caption = MemoryElement::new();
    let close_button = MemoryElement::new();
    document.insert_id(dom::MODAL_ID, modal.clone());
    document.insert_id(dom::MODAL_IMAGE_ID, modal_image.clone());
    document.insert_id(dom::CAPTION_ID, caption.clone());
    document.insert(dom::CLOSE_BUTTON, vec![close_button.clone()]);

    PortfolioPage {
        document,
        sidebar,
        sidebar_button,
        nav_links,
        pages,
        texts,
        thumbnails,
        modal,
        modal_image,
        caption,
        close_button,
    }
}

/// Build `count` bare elements.
pub fn elements(count: usize) -> Vec<MemoryElement> {
    (0..count).map(|_| MemoryElement::new()).collect()
}

/// Positions of the elements carrying `class`.
pub fn with_class(elements: &[MemoryElement], class: &str) -> Vec<usize> {
    elements
        .iter()
        .enumerate()
        .filter(|(_, el)| el.has_class(class))
        .map(|(i, _)| i)
        .collect()
}

/// `data-page` identifiers of the pages currently carrying "active".
pub fn active_page_ids(page: &PortfolioPage) -> Vec<String> {
    page.pages
        .iter()
        .filter(|p| p.has_class("active"))
        .filter_map(|p| p.data(dom::PAGE_KEY))
        .collect()
}
