use std::iter::once;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chain::{find_blast_tiles, find_bomb_chain};
use crate::grid::Grid;
use crate::location::Location;

/// Cubic ease-in from `start` to `end`, evaluated at `t` in `[0, 1]`.
pub fn cubic_ease(start: f32, end: f32, t: f32) -> f32 {
    (end - start) * t * t * t + start
}

/// Delays, in logical seconds, that shape a bomb cascade.
///
/// Deserialises with every field optional; missing fields take their [`Default`] value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeTiming {
    /// Time between a bomb going off and its blast destroying the tiles around it.
    pub blast_delay: f32,
    /// Gap between consecutive bombs before easing is subtracted.
    pub step_delay: f32,
    /// Eased amount subtracted from the first gap.
    pub ease_start: f32,
    /// Eased amount subtracted as the chain approaches its end.
    pub ease_end: f32,
    /// Time after the last bomb before the board is considered settled.
    pub settle_delay: f32,
}

impl Default for CascadeTiming {
    fn default() -> Self {
        Self {
            blast_delay: 0.3,
            step_delay: 0.6,
            ease_start: 0.2,
            ease_end: 0.5,
            settle_delay: 0.5,
        }
    }
}

/// One bomb's place in a cascade.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledBomb {
    /// Where the bomb sits.
    pub location: Location,
    /// When the bomb itself goes off.
    pub delay: f32,
    /// Non-bomb neighbours destroyed by this bomb, all at [`blast_delay`](ScheduledBomb::blast_delay).
    pub blast: Vec<Location>,
    /// When the blast tiles go, `delay` plus [`CascadeTiming::blast_delay`].
    pub blast_delay: f32,
}

/// The full timeline of a bomb cascade, measured from the moment it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct CascadePlan {
    /// Origin first, then the chained bombs in discovery order.
    pub bombs: Vec<ScheduledBomb>,
    settle_delay: f32,
}

impl CascadePlan {
    /// When the cascade is over and the board may regenerate.
    pub fn settle_delay(&self) -> f32 {
        self.settle_delay
    }
}

impl CascadeTiming {
    /// Gap added after the bomb at `index` of a chain of `count` bombs. Shrinks as the chain goes on.
    pub fn step_after(&self, index: usize, count: usize) -> f32 {
        self.step_delay - cubic_ease(self.ease_start, self.ease_end, index as f32 / count as f32)
    }

    /// Lay out the cascade started by the bomb at `origin`.
    ///
    /// A bomb discovered more than once keeps every place it was found at, each one a step of the cascade;
    /// only its first place actually sets it off, since a tile triggers once.
    pub fn plan(&self, grid: &Grid, origin: Location) -> CascadePlan {
        let chain = once(origin)
            .chain(find_bomb_chain(grid, origin))
            .collect_vec();
        let count = chain.len();

        let mut bombs = Vec::with_capacity(count);
        let mut bomb_delay = 0.0;
        for (index, location) in chain.into_iter().enumerate() {
            bombs.push(ScheduledBomb {
                location,
                delay: bomb_delay,
                blast: find_blast_tiles(grid, location),
                blast_delay: bomb_delay + self.blast_delay,
            });

            bomb_delay += self.step_after(index, count);
        }

        let settle_delay = bomb_delay + self.settle_delay;
        debug!(?origin, bombs = count, settle_delay, "planned bomb cascade");

        CascadePlan { bombs, settle_delay }
    }
}
