//! Reveal-on-scroll.
//!
//! Each content section gets its own [`RevealSection`]. At wiring time the
//! section's text elements receive an entrance class by position: even indexes
//! slide in from the left, odd ones from the right. That assignment is made
//! once and never recomputed.
//!
//! After that the section only reacts to intersection reports. An element is
//! revealed while the latest report for it says at least `threshold` of its
//! area is on screen, and hidden again as soon as a report says otherwise, so
//! scrolling back and forth replays the animation:
//!
//! ```text
//! ratio    0.0 ── 0.1 ── 0.2 ── 0.5 ── 0.1 ── 0.0
//! visible   no     no    yes    yes     no     no
//! ```
//!
//! An element with no measurable area never reports a ratio at or above the
//! threshold, so it never becomes visible.

use crate::config::RevealConfig;
use crate::dom::Element;

/// Which side an element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Direction for the element at `index` within its section.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// The configured entrance class for this direction.
    pub fn class(self, config: &RevealConfig) -> &str {
        match self {
            Direction::Left => config.slide_left_class.as_str(),
            Direction::Right => config.slide_right_class.as_str(),
        }
    }

    fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Whether an intersection `ratio` reveals an element.
pub fn reveals(ratio: f64, threshold: f64) -> bool {
    ratio >= threshold
}

/// The text elements of one section and their reveal state.
#[derive(Debug)]
pub struct RevealSection<E> {
    elements: Vec<E>,
    visible: Vec<bool>,
    threshold: f64,
    visible_class: String,
}

impl<E: Element> RevealSection<E> {
    /// Take ownership of a section's text elements, in document order, and
    /// assign their entrance classes.
    pub fn new(elements: Vec<E>, config: &RevealConfig) -> Self {
        for (index, element) in elements.iter().enumerate() {
            let direction = Direction::for_index(index);
            element.remove_class(direction.opposite().class(config));
            element.add_class(direction.class(config));
        }
        let visible = elements
            .iter()
            .map(|el| el.has_class(&config.visible_class))
            .collect();
        Self {
            elements,
            visible,
            threshold: config.threshold,
            visible_class: config.visible_class.clone(),
        }
    }

    /// Apply one batch of intersection reports as `(index, ratio)` pairs.
    ///
    /// Reports for indexes outside the section are ignored. When a batch
    /// mentions the same element twice, the later report wins.
    pub fn on_intersection<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        for (index, ratio) in entries {
            let Some(element) = self.elements.get(index) else {
                tracing::debug!(index, "intersection report for unknown element");
                continue;
            };
            let shown = reveals(ratio, self.threshold);
            if shown {
                element.add_class(&self.visible_class);
            } else {
                element.remove_class(&self.visible_class);
            }
            self.visible[index] = shown;
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn direction(&self, index: usize) -> Option<Direction> {
        (index < self.elements.len()).then(|| Direction::for_index(index))
    }

    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
