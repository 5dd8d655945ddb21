#![warn(missing_docs)]

//! # `collapse`
//!
//! The decision core of a tile-collapse puzzle board.
//! Given an 11x11 [`Grid`] of typed tiles, it works out which tiles go when one is activated and when each of them goes.
//! Everything visual (tweening, input capture, refilling, timers) belongs to the host, which plugs in through the [`Host`] trait.
//!
//! Build a grid with [`GridBuilder`](builder::GridBuilder), wrap it in a [`BoardSession`], and feed it activations:
//! - Activating a coloured tile triggers its orthogonally connected group of the same colour, if it has at least three members.
//! - Activating a bomb sets off every bomb connected to it in any of the eight directions, each one destroying the non-bomb tiles around it.
//!
//! # Cascades
//! Bombs in a chain do not go off together. Each one is scheduled a little after the previous, with gaps
//! `step_delay - cubic_ease(ease_start, ease_end, i / n)` that shrink along the chain so the reaction reads as speeding up.
//! Blasts follow their bomb by `blast_delay`, and once the last bomb has gone off plus `settle_delay`, the session asks the host to hand back a
//! [`Deferred::Settle`] event, which ends the cascade and requests a refill. See [`CascadeTiming`] for the constants.
//!
//! Only one cascade runs at a time: a bomb set off while another cascade is running explodes on its own without chaining.

pub use builder::{BuilderInvalidReason, GridBuilder};
pub use cascade::{cubic_ease, CascadePlan, CascadeTiming, ScheduledBomb};
pub use chain::{find_blast_tiles, find_bomb_chain};
pub use grid::Grid;
pub use location::{Coord, Location, BOARD_SIZE, MAX_COORD};
pub use matching::{find_match, match_group, MIN_MATCH};
pub use probe::{neighbor, neighbors};
pub use session::{Activation, BoardSession, CascadeState, Deferred, Host};
pub use step::Step;
pub use tile::{Tile, TileKind};

/// Building [`Grid`]s tile by tile.
pub mod builder;
pub(crate) mod cascade;
pub(crate) mod chain;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod matching;
pub(crate) mod probe;
pub(crate) mod session;
pub(crate) mod step;
pub(crate) mod tile;
pub(crate) mod visited;
