use itertools::Itertools;

use crate::grid::Grid;
use crate::location::Location;
use crate::probe::neighbor;
use crate::step::Step;
use crate::tile::TileKind;
use crate::visited::VisitedSet;

/// Smallest number of orthogonally connected same-kind tiles that forms a match.
pub const MIN_MATCH: usize = 3;

/// Collect the orthogonally connected group of `kind` tiles around `start`.
///
/// The search descends from every matching neighbour, marking the current location before it descends.
/// Each recursion frame that finishes with at least [`MIN_MATCH`] locations marked appends all of them followed by its own location,
/// so a long group shows up several times over; use [`match_group`] for each member exactly once.
/// A group smaller than [`MIN_MATCH`] yields nothing.
pub fn find_match(grid: &Grid, kind: TileKind, start: Location) -> Vec<Location> {
    let mut visited = VisitedSet::new();
    let mut results = Vec::new();
    collect_match(grid, kind, start, &mut visited, &mut results);
    results
}

/// Like [`find_match`], but every location appears once, in the order it was first found.
pub fn match_group(grid: &Grid, kind: TileKind, start: Location) -> Vec<Location> {
    find_match(grid, kind, start).into_iter().unique().collect_vec()
}

fn collect_match(grid: &Grid, kind: TileKind, at: Location, visited: &mut VisitedSet, results: &mut Vec<Location>) {
    if visited.contains(at) {
        return;
    }

    for step in Step::ORTHOGONAL {
        let Some(tile) = neighbor(grid, at, *step) else {
            continue;
        };

        if tile.kind() == kind {
            let next = tile.location();
            visited.insert(at);
            collect_match(grid, kind, next, visited, results);
        }
    }

    if visited.len() >= MIN_MATCH {
        results.extend(visited.iter().copied());
        results.push(at);
    }
}
