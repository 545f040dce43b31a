#![doc = include_str!("../README.md")]

//! Shortest-augmenting-path solvers for the linear sum assignment problem
//! (LSAP) and its all-pairs constrained variant (CLAP).
//!
//! The algorithmic core is a single internal routine implementing one
//! step of Jonker-Volgenant-style shortest augmenting path search with
//! dual potentials. Everything else in this crate is built on top of
//! it:
//!
//! * [`lsap::solve`] / [`lsap::solve_with_duals`] - the one-shot solver.
//! * [`incremental::solve_with_removed_row`] /
//!   [`incremental::solve_with_removed_col`] - re-solve after a single row
//!   or column is logically dropped, reusing the prior dual solution
//!   instead of solving from scratch.
//! * [`clap::clap_costs`] / [`clap::clap_cost`] - the all-pairs constrained
//!   cost matrix, built from the unconstrained solution plus one
//!   incremental re-solve per forced pair rather than `m * n`
//!   independent LSAP solves.

mod augment;
pub mod clap;
pub mod errors;
pub mod incremental;
pub mod lsap;
mod matrix;
mod ranking;
mod state;
mod traits;

pub use errors::{ClapError, LsapError};
pub use matrix::{CostMatrix, one_hot};
pub use state::Solution;

/// The cost type used throughout this crate's public surface.
///
/// The augmenting-path search at this crate's core is generic over any
/// type implementing its internal numeric trait bound, but every public
/// function commits to `f64` costs, matching the IEEE-754 double
/// precision expected of this library's numeric conventions.
pub type Cost = f64;
