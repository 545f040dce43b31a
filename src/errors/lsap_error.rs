//! Error type for the LSAP solver and the incremental re-solve routines.

/// Errors that can occur while solving the linear sum assignment problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LsapError {
    /// The input was not a 2-D matrix (a row had a different length than
    /// the others, or the matrix had zero columns with a nonzero number of
    /// rows).
    #[error("expected a 2-D matrix, got an inconsistent or degenerate shape")]
    InvalidShape,
    /// The matrix contained a `NaN`, a `-inf`, or (when constructed from a
    /// non-float source) a value that does not promote to a finite `f64`.
    #[error("matrix contains invalid numeric entries (NaN or -inf)")]
    InvalidValue,
    /// No complete assignment exists: some row has no finite-cost path to
    /// an unassigned column.
    #[error("no finite complete assignment exists for this cost matrix")]
    Infeasible,
}
