//! Sidebar toggle.
//!
//! One button flips the sidebar between open and closed. The open state is
//! the active class on the sidebar container; [`Sidebar::is_open`] mirrors it.

use crate::dom::Element;

#[derive(Debug)]
pub struct Sidebar<E> {
    panel: E,
    button: E,
    open: bool,
    active_class: String,
}

impl<E: Element> Sidebar<E> {
    /// Wrap a sidebar container and its toggle button. The starting state is
    /// whatever the markup says.
    pub fn new(panel: E, button: E, active_class: &str) -> Self {
        let open = panel.has_class(active_class);
        Self {
            panel,
            button,
            open,
            active_class: active_class.to_string(),
        }
    }

    /// Flip the sidebar and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        if self.open {
            self.panel.add_class(&self.active_class);
        } else {
            self.panel.remove_class(&self.active_class);
        }
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn button(&self) -> &E {
        &self.button
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use proptest::prelude::*;

    #[test]
    fn toggle_opens_then_closes() {
        let panel = MemoryElement::new();
        let mut sidebar = Sidebar::new(panel.clone(), MemoryElement::new(), "active");

        assert!(sidebar.toggle());
        assert!(panel.has_class("active"));

        assert!(!sidebar.toggle());
        assert!(!panel.has_class("active"));
    }

    #[test]
    fn initial_state_comes_from_markup() {
        let panel = MemoryElement::new().with_class("active");
        let mut sidebar = Sidebar::new(panel.clone(), MemoryElement::new(), "active");
        assert!(sidebar.is_open());

        assert!(!sidebar.toggle());
        assert!(panel.classes().is_empty());
    }

    #[test]
    fn other_classes_are_untouched() {
        let panel = MemoryElement::new().with_class("sidebar");
        let mut sidebar = Sidebar::new(panel.clone(), MemoryElement::new(), "active");
        sidebar.toggle();
        sidebar.toggle();
        assert_eq!(panel.classes(), vec!["sidebar"]);
    }

    proptest! {
        #[test]
        fn even_number_of_clicks_restores_state(start_open: bool, pairs in 0usize..20) {
            let panel = MemoryElement::new();
            if start_open {
                panel.add_class("active");
            }
            let mut sidebar = Sidebar::new(panel.clone(), MemoryElement::new(), "active");
            for _ in 0..pairs * 2 {
                sidebar.toggle();
            }
            prop_assert_eq!(sidebar.is_open(), start_open);
            prop_assert_eq!(panel.has_class("active"), start_open);
        }
    }
}
