//! Board model: tiles, the grid, player moves, and the gravity/refill
//! mutators.
//!
//! The grid is the single container every other component reads; nothing
//! outside this module mutates tiles except through the operations exported
//! here.
mod grid;
mod moves;
mod refill;
mod tile;

pub use grid::{Grid, Position};
#[cfg(test)]
pub(crate) use grid::grid_fixture;
pub use moves::{SwapError, are_adjacent, find_potential_move, swap};
pub use refill::{GenerateError, apply_gravity, generate_initial_grid, refill};
pub use tile::{Symbol, Tile, TileModifier};
