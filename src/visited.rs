use ndarray::Array2;

use crate::location::{Location, BOARD_SIZE};

/// Locations already examined by one search, remembered in the order they were first marked.
pub(crate) struct VisitedSet {
    mask: Array2<bool>,
    order: Vec<Location>,
}

impl VisitedSet {
    pub(crate) fn new() -> Self {
        Self {
            mask: Array2::from_elem((BOARD_SIZE, BOARD_SIZE), false),
            order: Vec::new(),
        }
    }

    pub(crate) fn contains(&self, location: Location) -> bool {
        self.mask.get(location.as_index()).copied().unwrap_or(false)
    }

    /// Marking an already marked location does nothing.
    pub(crate) fn insert(&mut self, location: Location) {
        if let Some(seen) = self.mask.get_mut(location.as_index()) {
            if !*seen {
                *seen = true;
                self.order.push(location);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Location> {
        self.order.iter()
    }
}
