//! # folio-ui
//!
//! The client-side behaviour of a single-page portfolio, compiled to
//! WebAssembly. Four independent behaviours are wired once when the page
//! loads:
//!
//! 1. **Reveal on scroll**: text inside each `article` slides in from
//!    alternating sides when at least 20% of it is on screen, and hides again
//!    when it leaves.
//! 2. **Sidebar toggle**: a button opens and closes the contacts sidebar.
//! 3. **Tab navigation**: nav links switch which `article[data-page]` is shown
//!    and scroll back to the top.
//! 4. **Image modal**: project and certificate thumbnails open enlarged with
//!    their alt text as caption.
//!
//! # Architecture: Behaviours Over a DOM Trait
//!
//! ```text
//! web (wasm32)                 page                       behaviours
//! ────────────                 ────                       ──────────
//! web_sys::Element ─impl─► dom::Element ◄── PageController ──► reveal / sidebar
//! click, IntersectionObserver ──────────►   click_* / intersect   nav / modal
//! ```
//!
//! Each behaviour is a small state machine generic over [`dom::Element`]. It
//! keeps its state in plain fields (`open`, `active_page`, `visible`) and
//! mirrors every change onto the element's class list or inline style. The
//! only code that knows about the browser is `web`, which implements the
//! traits for `web-sys` types and forwards events to the [`page`] controller.
//! Everything else builds and is tested natively against in-memory fakes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | Capability traits and the markup contract selectors |
//! | [`reveal`] | Entrance classes by index parity, visibility from intersection ratios |
//! | [`sidebar`] | Open/closed toggle |
//! | [`nav`] | Tab selection with case-insensitive page matching |
//! | [`modal`] | Thumbnail modal: open, close button, backdrop click |
//! | [`page`] | One-time wiring of all four behaviours from a document |
//! | [`config`] | `folio.toml` loading, validation, and CSS for the configured classes |
//! | [`demo`] | Demo portfolio page honouring the markup contract |
//! | `web` | `wasm32` only: `web-sys` bindings and the wasm entry point |
//!
//! # Design Decisions
//!
//! ## Degrade, Never Fail
//!
//! Every hook in the markup contract is optional. A page without a sidebar
//! button gets no sidebar toggle; a page missing one of the four modal parts
//! gets no modal and its thumbnails stay ordinary links. Runtime handlers have
//! no error paths at all.
//!
//! ## Unmatched Nav Targets Stay Visible
//!
//! A nav link whose `data-nav-link` names no page still becomes the active
//! link, and no page is shown. The controller does not pick a fallback page;
//! it logs the dangling link once when the page is wired.
//!
//! ## No Global State
//!
//! The browser build owns one [`page::PageController`] behind an
//! `Rc<RefCell<_>>` shared by its event closures. There are no statics.

pub mod config;
pub mod demo;
pub mod dom;
pub mod modal;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod sidebar;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;
