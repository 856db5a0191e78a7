//! Browser bindings (wasm32 only).
//!
//! Implements the [`dom`](crate::dom) traits over `web-sys` and installs the
//! event listeners and intersection observers that feed a [`PageController`].
//!
//! Architecture:
//! ```text
//! click / IntersectionObserver ──Closure──► Rc<RefCell<PageController>>
//!                                                  │
//!                                                  ▼
//!                                       class list / inline style
//! ```
//!
//! Every closure is leaked with `forget()`: listeners live as long as the page.
//! Handlers run one at a time on the main thread and none calls back into
//! another, so the `RefCell` is never borrowed twice.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

use crate::config::ScriptConfig;
use crate::dom::{self, Document, Element, Viewport};
use crate::page::PageController;

type SharedController = Rc<RefCell<PageController<web_sys::Element>>>;

fn warn_on_error(op: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::warn!(op, error = ?err, "DOM call failed");
    }
}

impl Element for web_sys::Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        warn_on_error("classList.add", self.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        warn_on_error("classList.remove", self.class_list().remove_1(class));
    }

    fn data(&self, key: &str) -> Option<String> {
        self.get_attribute(&format!("data-{key}"))
    }

    fn set_display(&self, value: &str) {
        if let Some(el) = self.dyn_ref::<HtmlElement>() {
            warn_on_error(
                "style.setProperty",
                el.style().set_property("display", value),
            );
        }
    }

    fn src(&self) -> Option<String> {
        self.dyn_ref::<HtmlImageElement>().map(HtmlImageElement::src)
    }

    fn set_src(&self, src: &str) {
        match self.dyn_ref::<HtmlImageElement>() {
            Some(img) => img.set_src(src),
            None => warn_on_error("setAttribute", self.set_attribute("src", src)),
        }
    }

    fn alt(&self) -> Option<String> {
        self.dyn_ref::<HtmlImageElement>().map(HtmlImageElement::alt)
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

fn elements_of(list: Result<NodeList, JsValue>) -> Vec<web_sys::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// The live document.
pub struct WebDocument(pub web_sys::Document);

impl Document for WebDocument {
    type Element = web_sys::Element;

    fn query(&self, selector: &str) -> Option<web_sys::Element> {
        self.0.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<web_sys::Element> {
        elements_of(self.0.query_selector_all(selector))
    }

    fn query_within(&self, scope: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
        elements_of(scope.query_selector_all(selector))
    }

    fn by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.0.get_element_by_id(id)
    }
}

/// The browser window.
pub struct WindowViewport(pub Window);

impl Viewport for WindowViewport {
    fn scroll_to_top(&mut self) {
        self.0.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Entry point
// =============================================================================

/// Module start: install the panic hook and logging, then wire the page once
/// the DOM is parsed.
///
/// Configuration comes from `<script type="application/toml" id="folio-config">`
/// when the page has one, and from the defaults otherwise. An invalid block is
/// reported as an error and nothing is wired.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    if document.ready_state() == "loading" {
        let listener = document.clone();
        let deferred = Closure::once_into_js(move || {
            if let Err(err) = boot(&window, &document) {
                tracing::error!(error = ?err, "folio-ui failed to start");
            }
        });
        listener.add_event_listener_with_callback("DOMContentLoaded", deferred.unchecked_ref())?;
        Ok(())
    } else {
        boot(&window, &document)
    }
}

fn page_config(document: &web_sys::Document) -> Result<ScriptConfig, JsValue> {
    let Some(source) = document
        .get_element_by_id(dom::CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return Ok(ScriptConfig::default());
    };
    ScriptConfig::from_toml_str(&source).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn boot(window: &Window, document: &web_sys::Document) -> Result<(), JsValue> {
    let config = page_config(document)?;
    let controller: SharedController = Rc::new(RefCell::new(PageController::wire(
        &WebDocument(document.clone()),
        config,
    )));

    install_reveal(&controller)?;
    install_sidebar(&controller)?;
    install_nav(window, &controller)?;
    install_modal(&controller)?;
    tracing::info!("folio-ui ready");
    Ok(())
}

fn on_click<F>(target: &web_sys::Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

// =============================================================================
// Listener installation
// =============================================================================

fn install_reveal(controller: &SharedController) -> Result<(), JsValue> {
    let observed: Vec<(Vec<web_sys::Element>, f64)> = controller
        .borrow()
        .sections()
        .iter()
        .map(|s| (s.elements().to_vec(), s.threshold()))
        .collect();

    for (section, (targets, threshold)) in observed.into_iter().enumerate() {
        if targets.is_empty() {
            continue;
        }
        let ctrl = Rc::clone(controller);
        let lookup = targets.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _: IntersectionObserver| {
                let reports: Vec<(usize, f64)> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = entry.target();
                        lookup
                            .iter()
                            .position(|el| *el == target)
                            .map(|index| (index, entry.intersection_ratio()))
                    })
                    .collect();
                ctrl.borrow_mut().intersect(section, reports);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in &targets {
            observer.observe(target);
        }
        callback.forget();
    }
    Ok(())
}

fn install_sidebar(controller: &SharedController) -> Result<(), JsValue> {
    let Some(button) = controller.borrow().sidebar().map(|s| s.button().clone()) else {
        return Ok(());
    };
    let ctrl = Rc::clone(controller);
    on_click(&button, move |_| {
        ctrl.borrow_mut().click_sidebar_button();
    })
}

fn install_nav(window: &Window, controller: &SharedController) -> Result<(), JsValue> {
    let links = controller.borrow().nav().links().to_vec();
    for (index, link) in links.iter().enumerate() {
        let ctrl = Rc::clone(controller);
        let mut viewport = WindowViewport(window.clone());
        on_click(link, move |_| {
            ctrl.borrow_mut().click_nav_link(index, &mut viewport);
        })?;
    }
    Ok(())
}

fn install_modal(controller: &SharedController) -> Result<(), JsValue> {
    let (container, close_button, thumbnails) = {
        let ctrl = controller.borrow();
        let Some(modal) = ctrl.modal() else {
            return Ok(());
        };
        (
            modal.container().clone(),
            modal.close_button().clone(),
            ctrl.thumbnails().to_vec(),
        )
    };

    for (index, thumbnail) in thumbnails.iter().enumerate() {
        let ctrl = Rc::clone(controller);
        on_click(thumbnail, move |event| {
            if ctrl.borrow_mut().click_thumbnail(index) {
                event.prevent_default();
            }
        })?;
    }

    let ctrl = Rc::clone(controller);
    on_click(&close_button, move |_| {
        ctrl.borrow_mut().click_close();
    })?;

    let ctrl = Rc::clone(controller);
    let backdrop = container.clone();
    on_click(&container, move |event| {
        let target_is_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|t| t == backdrop);
        if ctrl.borrow_mut().click_modal(target_is_backdrop) {
            tracing::debug!("modal closed from backdrop");
        }
    })
}
