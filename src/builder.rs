use crate::grid::Grid;
use crate::location::Location;
use crate::tile::TileKind;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuilderInvalidReason {
    /// A tile was placed outside the board.
    #[error("location {0:?} is outside the board")]
    FeatureOutOfBounds(Location),
    /// A second tile was placed in a cell that is already occupied.
    #[error("cell {0:?} is already occupied")]
    CellOccupied(Location),
}

/// A builder for [`Grid`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder is invalid, every further call does nothing until [`build`](GridBuilder::build) reports why.
#[derive(Clone, Default)]
pub struct GridBuilder {
    grid: Grid,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl GridBuilder {
    /// A builder for an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a tile of `kind` at `location`.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is off the board,
    /// or a [`CellOccupied`](BuilderInvalidReason::CellOccupied) one if the cell already holds a tile.
    pub fn add_tile(&mut self, kind: TileKind, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.is_on_board() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(location));
            return self;
        }

        if self.grid.get(location).is_some() {
            self.invalid_reasons.push(BuilderInvalidReason::CellOccupied(location));
            return self;
        }

        self.grid.place(kind, location);
        self
    }

    /// Shorthand for multiple calls to [`Self::add_tile`] with the same `kind`, with the same conditions.
    pub fn add_tiles(&mut self, kind: TileKind, locations: &[Location]) -> &mut Self {
        for location in locations {
            self.add_tile(kind, *location);
        }

        self
    }

    /// Empty the cell at `location`, dropping any tile added there earlier in the chain.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is off the board.
    pub fn clear_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.is_on_board() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(location));
            return self;
        }

        self.grid.remove(location);
        self
    }

    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Grid, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(self.grid.clone())
    }
}
