use crate::grid::Grid;
use crate::location::Location;
use crate::step::Step;
use crate::tile::Tile;

/// The tile one `step` away from `location`, or [`None`] if the step leaves the board or lands on an empty cell.
pub fn neighbor(grid: &Grid, location: Location, step: Step) -> Option<&Tile> {
    debug_assert!(location.is_on_board(), "probing from {location:?}, which is off the board");
    step.attempt_from(location).and_then(|target| grid.get(target))
}

/// Every occupied neighbour of `location` reachable by one of `steps`, in the order the steps are given.
pub fn neighbors<'a>(grid: &'a Grid, location: Location, steps: &'a [Step]) -> impl Iterator<Item = &'a Tile> + 'a {
    steps.iter().filter_map(move |step| neighbor(grid, location, *step))
}
