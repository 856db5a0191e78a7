//! DOM capability traits.
//!
//! The behaviours in this crate never touch `web-sys` directly. They are written
//! against three small traits that cover exactly what a portfolio page needs:
//!
//! - [`Element`]: class list membership, `data-*` attributes, inline `display`,
//!   and the image/caption content the modal reads and writes.
//! - [`Document`]: the handful of lookups used once at wiring time.
//! - [`Viewport`]: the scroll reset performed on tab navigation.
//!
//! The browser implementation lives in `web` (wasm32 only). Unit tests use the
//! in-memory fakes from `test_helpers`.
//!
//! ## Markup Contract
//!
//! The host document is expected to carry these hooks. Every one is optional;
//! a missing hook disables the feature that needs it.
//!
//! ```text
//! [data-sidebar]              sidebar container
//! [data-sidebar-btn]          sidebar toggle button
//! [data-nav-link="About"]     nav link, value names the target page
//! article[data-page="about"]  page, value is its identifier
//! .project-item img           modal thumbnails
//! #image-modal                modal container (backdrop)
//! #modal-img                  enlarged image inside the modal
//! #caption                    caption text inside the modal
//! .close-modal                close button
//! ```

pub const SIDEBAR: &str = "[data-sidebar]";
pub const SIDEBAR_BUTTON: &str = "[data-sidebar-btn]";
pub const NAV_LINKS: &str = "[data-nav-link]";
pub const PAGES: &str = "article[data-page]";
pub const THUMBNAILS: &str = ".project-item img";
pub const CLOSE_BUTTON: &str = ".close-modal";

pub const MODAL_ID: &str = "image-modal";
pub const MODAL_IMAGE_ID: &str = "modal-img";
pub const CAPTION_ID: &str = "caption";

/// Inline `<script type="application/toml">` block the wasm entry point reads
/// its configuration from, when present.
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

/// `data-*` key (without the `data-` prefix) holding a nav link's target.
pub const NAV_LINK_KEY: &str = "nav-link";
/// `data-*` key (without the `data-` prefix) holding a page's identifier.
pub const PAGE_KEY: &str = "page";

/// A handle to one element of the host document.
///
/// Handles are cheap to clone and share the underlying node, so every method
/// takes `&self` the way DOM bindings do.
pub trait Element: Clone {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Value of the `data-{key}` attribute.
    fn data(&self, key: &str) -> Option<String>;

    /// Set the inline `display` style.
    fn set_display(&self, value: &str);

    /// Image source, for `<img>` elements.
    fn src(&self) -> Option<String>;
    fn set_src(&self, src: &str);

    /// Alternative text, for `<img>` elements.
    fn alt(&self) -> Option<String>;

    fn set_text(&self, text: &str);
}

/// Lookups performed once when the page is wired.
pub trait Document {
    type Element: Element;

    /// First element matching `selector`.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// All descendants of `scope` matching `selector`, in document order.
    fn query_within(&self, scope: &Self::Element, selector: &str) -> Vec<Self::Element>;

    fn by_id(&self, id: &str) -> Option<Self::Element>;
}

/// The scrollable window hosting the page.
pub trait Viewport {
    fn scroll_to_top(&mut self);
}
