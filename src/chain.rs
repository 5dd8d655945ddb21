use itertools::Itertools;
use strum::VariantArray;

use crate::grid::Grid;
use crate::location::Location;
use crate::probe::{neighbor, neighbors};
use crate::step::Step;
use crate::visited::VisitedSet;

/// Bombs reachable from the bomb at `start` through any of the eight directions, in discovery order.
///
/// `start` itself is not included. Directions are probed in [`Step::VARIANTS`] order and the search descends into each
/// newly found bomb immediately, so the result is a depth-first ordering.
/// A bomb whose own probe finds nothing new is never marked, and can be discovered again from a later neighbour;
/// such repeats are kept, and still take up a step in [`CascadeTiming::plan`](crate::CascadeTiming::plan).
pub fn find_bomb_chain(grid: &Grid, start: Location) -> Vec<Location> {
    let mut visited = VisitedSet::new();
    let mut bombs = Vec::new();
    collect_bombs(grid, start, &mut visited, &mut bombs);
    bombs
}

fn collect_bombs(grid: &Grid, at: Location, visited: &mut VisitedSet, bombs: &mut Vec<Location>) {
    if visited.contains(at) {
        return;
    }

    for step in Step::VARIANTS {
        let Some(tile) = neighbor(grid, at, *step) else {
            continue;
        };

        let next = tile.location();
        if tile.is_bomb() && !visited.contains(next) {
            bombs.push(next);
            visited.insert(at);
            collect_bombs(grid, next, visited, bombs);
        }
    }
}

/// Non-bomb tiles in the eight cells around `bomb`; the tiles that bomb's blast destroys.
///
/// Not deduplicated across bombs: a tile next to two bombs appears in both blasts.
pub fn find_blast_tiles(grid: &Grid, bomb: Location) -> Vec<Location> {
    neighbors(grid, bomb, Step::VARIANTS)
        .filter(|tile| !tile.is_bomb())
        .map(|tile| tile.location())
        .collect_vec()
}
