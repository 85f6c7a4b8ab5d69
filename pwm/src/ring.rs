use std::collections::VecDeque;

use serde::Deserialize;
use serde::Serialize;

/// An ordered collection with one focused element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Ring<T> {
    elements: VecDeque<T>,
    focused: usize,
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self {
            elements: VecDeque::default(),
            focused: 0,
        }
    }
}

impl<T> Ring<T> {
    /// Sets the focused index to `idx`.
    pub fn focus(&mut self, idx: usize) {
        self.focused = idx;
    }

    /// Returns the current focused index.
    pub const fn focused_idx(&self) -> usize {
        self.focused
    }

    /// Returns a reference to the currently focused element, or `None` if out of bounds.
    pub fn focused(&self) -> Option<&T> {
        self.elements.get(self.focused)
    }

    /// Returns a mutable reference to the currently focused element, or `None` if out of bounds.
    pub fn focused_mut(&mut self) -> Option<&mut T> {
        self.elements.get_mut(self.focused)
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }
}

impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}
