use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::cascade::{CascadePlan, CascadeTiming};
use crate::grid::Grid;
use crate::location::Location;
use crate::matching::match_group;
use crate::tile::Tile;

/// The surrounding game: plays effects, refills the board and runs timers.
pub trait Host {
    /// Play `tile`'s removal after `delay` logical seconds. Called at most once per tile.
    ///
    /// The host is responsible for eventually clearing the tile with [`Grid::remove`].
    fn trigger(&mut self, tile: &Tile, delay: f32);
    /// Refill the board.
    fn schedule_regenerate_board(&mut self);
    /// Hand `event` back to [`BoardSession::fire`] no earlier than `delay` logical seconds from now.
    fn after(&mut self, delay: f32, event: Deferred);
}

/// Events a session defers through [`Host::after`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Deferred {
    /// The current cascade has played out.
    Settle,
}

/// Whether a bomb cascade is in flight.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CascadeState {
    /// No cascade; bombs may start one.
    #[default]
    Idle,
    /// A cascade is playing out until its [`Deferred::Settle`] fires.
    ComboActive,
}

/// What an activation did.
#[derive(Clone, Debug, PartialEq)]
pub enum Activation {
    /// A group of at least three tiles matched; holds the members that were newly triggered by this activation.
    Matched(Vec<Location>),
    /// The tile had too few same-kind neighbours, or every member of its group had already been triggered; nothing new was triggered.
    NoMatch,
    /// A bomb started a cascade.
    Cascade(CascadePlan),
    /// A bomb went off on its own because another cascade was already running.
    Exploded,
    /// Nothing happened: the cell was empty, the bomb had already gone off, or bomb input arrived mid-cascade.
    Ignored,
}

/// Owns a [`Grid`] and resolves activations against it, allowing one bomb cascade at a time.
///
/// A multi-threaded host should keep the session behind a single `Mutex`, which then guards the grid and the cascade flag together.
pub struct BoardSession {
    grid: Grid,
    timing: CascadeTiming,
    state: CascadeState,
}

impl BoardSession {
    /// A session over `grid` with the default [`CascadeTiming`].
    pub fn new(grid: Grid) -> Self {
        Self::with_timing(grid, CascadeTiming::default())
    }

    /// A session over `grid` with custom cascade delays.
    pub fn with_timing(grid: Grid, timing: CascadeTiming) -> Self {
        Self {
            grid,
            timing,
            state: CascadeState::Idle,
        }
    }

    /// The board as the session currently sees it.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for the host, e.g. to clear removed tiles or refill cells.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// End the session, handing the board back.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Delays used for bomb cascades.
    pub fn timing(&self) -> &CascadeTiming {
        &self.timing
    }

    /// Whether a cascade is in flight.
    pub fn state(&self) -> CascadeState {
        self.state
    }

    /// Shorthand for `state() == CascadeState::ComboActive`.
    pub fn is_combo_active(&self) -> bool {
        self.state == CascadeState::ComboActive
    }

    /// Pointer-release on the tile at `location`.
    ///
    /// Bombs go to [`Self::activate_bomb`] unless a cascade is running, in which case the input is dropped.
    /// Any other tile goes to [`Self::activate_match`].
    pub fn activate(&mut self, location: Location, host: &mut impl Host) -> Activation {
        let Some(tile) = self.grid.get(location) else {
            warn!(?location, "activated an empty cell");
            return Activation::Ignored;
        };

        if !tile.is_bomb() {
            return self.activate_match(location, host);
        }

        if self.is_combo_active() {
            debug!(?location, "bomb input ignored during cascade");
            return Activation::Ignored;
        }

        self.activate_bomb(location, host)
    }

    /// Trigger the group of same-kind tiles around `location` at once, then ask for a refill.
    ///
    /// The refill is requested even when the group is too small to match.
    /// Members that were already triggered (and not yet removed by the host) are left out of [`Activation::Matched`].
    pub fn activate_match(&mut self, location: Location, host: &mut impl Host) -> Activation {
        let Some(tile) = self.grid.get(location) else {
            warn!(?location, "activated an empty cell");
            return Activation::Ignored;
        };

        let group = match_group(&self.grid, tile.kind(), location);
        debug!(?location, kind = %tile.kind(), size = group.len(), "resolved match");

        let triggered = group.into_iter()
            .filter(|member| self.trigger(*member, 0.0, host))
            .collect_vec();
        host.schedule_regenerate_board();

        if triggered.is_empty() {
            Activation::NoMatch
        } else {
            Activation::Matched(triggered)
        }
    }

    /// Set off the bomb at `location` and, unless a cascade is already running, everything it chains into.
    pub fn activate_bomb(&mut self, location: Location, host: &mut impl Host) -> Activation {
        match self.grid.get(location) {
            Some(tile) if tile.is_bomb() => {}
            other => {
                debug_assert!(other.is_none(), "{location:?} does not hold a bomb");
                warn!(?location, "bomb activation on a cell without a bomb");
                return Activation::Ignored;
            }
        }

        if !self.trigger(location, 0.0, host) {
            return Activation::Ignored;
        }

        if self.is_combo_active() {
            debug!(?location, "cascade already running; bomb explodes alone");
            return Activation::Exploded;
        }

        Activation::Cascade(self.schedule_bomb_cascade(location, host))
    }

    /// Deliver an event previously handed to [`Host::after`].
    pub fn fire(&mut self, event: Deferred, host: &mut impl Host) {
        match event {
            Deferred::Settle => {
                if !self.is_combo_active() {
                    warn!("settle fired with no cascade running");
                    return;
                }

                debug!("cascade settled");
                self.state = CascadeState::Idle;
                host.schedule_regenerate_board();
            }
        }
    }

    fn schedule_bomb_cascade(&mut self, origin: Location, host: &mut impl Host) -> CascadePlan {
        self.state = CascadeState::ComboActive;

        let plan = self.timing.plan(&self.grid, origin);
        for bomb in &plan.bombs {
            self.trigger(bomb.location, bomb.delay, host);
            for tile in &bomb.blast {
                self.trigger(*tile, bomb.blast_delay, host);
            }
        }

        host.after(plan.settle_delay(), Deferred::Settle);
        plan
    }

    // returns whether the host was told; a tile only ever triggers once
    fn trigger(&mut self, location: Location, delay: f32, host: &mut impl Host) -> bool {
        let Some(tile) = self.grid.get_mut(location) else {
            return false;
        };

        if !tile.latch_trigger() {
            trace!(?location, "already triggered");
            return false;
        }

        trace!(?location, delay, "trigger");
        host.trigger(tile, delay);
        true
    }
}
