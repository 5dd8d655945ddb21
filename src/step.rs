use strum::VariantArray;

use crate::location::{Coord, Location, MAX_COORD};

/// The eight directions a probe may take from a cell.
///
/// [`VARIANTS`](VariantArray::VARIANTS) lists them clockwise starting from [`Up`](Step::Up), which is the order bomb chains are explored in.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// Towards higher rows.
    Up,
    /// Up and right at once.
    UpRight,
    /// Towards higher columns.
    Right,
    /// Down and right at once.
    DownRight,
    /// Towards lower rows.
    Down,
    /// Down and left at once.
    DownLeft,
    /// Towards lower columns.
    Left,
    /// Up and left at once.
    UpLeft,
}

impl Step {
    /// The four straight directions, in the order same-kind matches are explored in.
    pub const ORTHOGONAL: &'static [Self] = &[Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit offset `(column, row)` of this direction. Up grows the row index.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::Up => (0, 1),
            Self::UpRight => (1, 1),
            Self::Right => (1, 0),
            Self::DownRight => (1, -1),
            Self::Down => (0, -1),
            Self::DownLeft => (-1, -1),
            Self::Left => (-1, 0),
            Self::UpLeft => (-1, 1),
        }
    }

    /// Whether this direction moves along both axes.
    pub fn is_diagonal(&self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }

    /// Attempt the step from `location`, returning [`None`] if the move would leave the board.
    ///
    /// An increasing move is allowed only while the source coordinate is below [`MAX_COORD`] and a decreasing move only while it is above 0.
    pub fn attempt_from(&self, location: Location) -> Option<Location> {
        let (dx, dy) = self.offset();
        Some(Location(shift(location.0, dx)?, shift(location.1, dy)?))
    }
}

fn shift(coord: Coord, delta: isize) -> Option<Coord> {
    match delta {
        0 => Some(coord),
        1 if coord < MAX_COORD => Some(coord + 1),
        -1 if coord > 0 => Some(coord - 1),
        _ => None,
    }
}
