//! Error type for the CLAP driver.

use super::LsapError;

/// Errors that can occur while computing constrained assignment costs.
///
/// Note that a whole-matrix infeasibility (e.g. a row that is entirely
/// `+inf`) is *not* an error here: [`clap_costs`](crate::clap::clap_costs)
/// returns a matrix filled with `+inf` in that case, matching the "cost of
/// a forbidden assignment is infinite" reading used throughout this crate.
/// Only malformed input is reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClapError {
    /// The input matrix contained a `NaN`, a `-inf`, or was not a valid
    /// 2-D shape.
    #[error("matrix contains invalid numeric entries (NaN, -inf) or shape")]
    InvalidValue,
}

impl From<LsapError> for ClapError {
    fn from(error: LsapError) -> Self {
        match error {
            LsapError::InvalidShape | LsapError::InvalidValue => ClapError::InvalidValue,
            // `clap_costs` only ever hits `Infeasible` via whole-matrix
            // infeasibility, which it handles itself (an all-+inf result)
            // rather than propagating. Any other `Infeasible` reaching this
            // conversion would be a bug in how `clap_costs` drives the
            // incremental solvers, not a caller-facing input error.
            LsapError::Infeasible => {
                unreachable!("clap_costs handles infeasibility without propagating it")
            }
        }
    }
}
