use strum::{Display, VariantArray};

use crate::location::Location;

/// Categories of tile. Colours match only themselves; [`Bomb`](TileKind::Bomb) chains into neighbouring bombs in all eight directions.
#[derive(Copy, Clone, Debug, Display, VariantArray, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum TileKind {
    /// A red tile.
    Red,
    /// A green tile.
    Green,
    /// A blue tile.
    Blue,
    /// A yellow tile.
    Yellow,
    /// A purple tile.
    Purple,
    /// Explodes, chaining into neighbouring bombs.
    Bomb,
}

impl TileKind {
    /// Character used when printing a board.
    pub fn display_char(&self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Purple => 'P',
            Self::Bomb => 'O',
        }
    }
}

/// One occupied grid cell.
///
/// Tiles are only created by a [`Grid`](crate::Grid), which stamps the location they were placed at.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Tile {
    pub(crate) kind: TileKind,
    pub(crate) location: Location,
    pub(crate) triggered: bool,
}

impl Tile {
    pub(crate) fn new(kind: TileKind, location: Location) -> Self {
        Self { kind, location, triggered: false }
    }

    /// What kind of tile this is.
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    /// The cell this tile occupies.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Shorthand for `kind() == TileKind::Bomb`.
    pub fn is_bomb(&self) -> bool {
        self.kind == TileKind::Bomb
    }

    /// Whether this tile has already been told to trigger.
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    // returns false if the latch was already set
    pub(crate) fn latch_trigger(&mut self) -> bool {
        !std::mem::replace(&mut self.triggered, true)
    }
}
