//! Numeric trait bounds used by the algorithmic core.
//!
//! The augmenting-path search, the incremental re-solvers and the CLAP
//! driver are all written against [`Number`] rather than hard-coded to
//! `f64`, so the core logic can be exercised in tests against simpler
//! types. The public API in [`crate::lsap`], [`crate::incremental`] and
//! [`crate::clap`] commits to [`crate::Cost`] (`f64`).

use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{AddAssign, Neg, SubAssign},
};

use num_traits::{Float, Zero};

/// A real number usable as an assignment cost.
///
/// This is a blanket bound over [`Float`] plus the handful of extra
/// operations the solver needs (in-place accumulation, negation for the
/// `maximize` flag, and a total order since costs are compared and
/// sorted but IEEE-754 floats only have a partial order).
pub trait Number:
    Float + Zero + Copy + PartialOrd + Debug + AddAssign + SubAssign + Neg<Output = Self> + TotalOrd
{
}

impl<T> Number for T where
    T: Float
        + Zero
        + Copy
        + PartialOrd
        + Debug
        + AddAssign
        + SubAssign
        + Neg<Output = Self>
        + TotalOrd
{
}

/// A total order over a type whose natural [`PartialOrd`] is partial.
///
/// Costs in this crate are never `NaN` (rejected at construction, see
/// [`crate::CostMatrix::validate`]), so every pairwise comparison that
/// reaches [`TotalOrd::total_cmp`] is well-defined; this trait just
/// gives the solver a way to ask for it without unwrapping
/// `partial_cmp` at every comparison site.
pub trait TotalOrd {
    /// Compares `self` and `other`, assuming neither is `NaN`.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl TotalOrd for f32 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl TotalOrd for f64 {
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}
