use std::fmt::{Display, Formatter};
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};

use crate::location::{Location, BOARD_SIZE};
use crate::tile::{Tile, TileKind};

/// A fixed 11x11 board of optional tiles.
///
/// Every occupied cell holds a [`Tile`] whose [`location`](Tile::location) equals the cell it sits in.
/// Grids are usually built with a [`GridBuilder`](crate::builder::GridBuilder) and then handed to a [`BoardSession`](crate::BoardSession).
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Option<Tile>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// A board with no tiles.
    pub fn empty() -> Self {
        Self {
            cells: Array2::from_elem((BOARD_SIZE, BOARD_SIZE), None),
        }
    }

    /// The tile at `location`, if the cell is occupied.
    pub fn get(&self, location: Location) -> Option<&Tile> {
        debug_assert!(location.is_on_board(), "{location:?} is off the board");
        self.cells.get(location.as_index()).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, location: Location) -> Option<&mut Tile> {
        debug_assert!(location.is_on_board(), "{location:?} is off the board");
        self.cells.get_mut(location.as_index()).and_then(Option::as_mut)
    }

    /// Put a fresh, untriggered tile of `kind` at `location`, returning whatever tile was there before.
    pub fn place(&mut self, kind: TileKind, location: Location) -> Option<Tile> {
        debug_assert!(location.is_on_board(), "{location:?} is off the board");
        if !location.is_on_board() {
            return None;
        }

        let previous = self.remove(location);
        self.cells.index_mut(location.as_index()).assign_elem(Some(Tile::new(kind, location)));
        previous
    }

    /// Clear the cell at `location`, returning its tile.
    pub fn remove(&mut self, location: Location) -> Option<Tile> {
        debug_assert!(location.is_on_board(), "{location:?} is off the board");
        self.cells.get_mut(location.as_index()).and_then(Option::take)
    }

    /// Occupied cells in row-major order, bottom row first.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().flatten()
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.tiles().count()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));

        // top row first so that "up" reads upwards
        for row in (0..BOARD_SIZE).rev() {
            for col in 0..BOARD_SIZE {
                out.push(match self.get(Location(col, row)) {
                    Some(tile) if tile.is_triggered() => tile.kind().display_char().to_ascii_lowercase(),
                    Some(tile) => tile.kind().display_char(),
                    None => '.',
                });
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
