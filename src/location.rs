/// A single column or row index.
pub type Coord = usize;

/// Number of cells along each side of a board.
pub const BOARD_SIZE: Coord = 11;
/// Highest valid column or row index.
pub const MAX_COORD: Coord = BOARD_SIZE - 1;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(column, row)` on a board. `Location(0, 0)` is the bottom left corner; rows grow upwards.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Whether both coordinates fall inside the board.
    pub fn is_on_board(&self) -> bool {
        self.0 <= MAX_COORD && self.1 <= MAX_COORD
    }

    // ndarray storage is (row, column)
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }
}
