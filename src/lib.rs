//! Deterministic solver for two-dimensional linear programs
//!
//! `minimize cx*x + cy*y  subject to  Gx[i]*x + Gy[i]*y >= h[i]`
//!
//! using Megiddo/Dyer's expected-linear-time 2D prune-and-search.

pub mod categorize;
pub mod condition;
pub mod edge;
pub mod endgame;
pub mod locate;
pub mod prune;
pub mod select;
pub mod types;
pub mod workspace;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use types::{near_equal, NEAR_EQUAL_ABS, NEAR_EQUAL_REL};
pub use workspace::{mem_size, solve_simple, SolveResult, Workspace};

#[cfg(test)]
mod proptests;
