//! Fuzz target for the one-shot LSAP solver: build an arbitrary dense
//! matrix and check that, whenever it solves, the result satisfies the
//! permutation law and dual optimality.

use arbitrary::Arbitrary;
use honggfuzz::fuzz;
use lapsolve::{CostMatrix, lsap};

/// A bounded, arbitrary-derived dense matrix, small enough that a solve
/// (and the invariant checks on its output) stays fast per fuzz iteration.
#[derive(Debug, Arbitrary)]
struct FuzzMatrix {
    rows: Vec<Vec<u16>>,
}

/// Builds a [`CostMatrix`] from raw fuzz input, or `None` if the shape is
/// degenerate or exceeds a size cap chosen to keep each iteration cheap.
fn to_cost_matrix(input: &FuzzMatrix) -> Option<CostMatrix> {
    const MAX_ROWS: usize = 8;
    const MAX_COLS: usize = 8;

    if input.rows.is_empty() || input.rows.len() > MAX_ROWS {
        return None;
    }
    let num_cols = input.rows[0].len();
    if num_cols == 0 || num_cols > MAX_COLS {
        return None;
    }
    if input.rows.iter().any(|row| row.len() != num_cols) {
        return None;
    }

    let rows: Vec<Vec<f64>> = input
        .rows
        .iter()
        .map(|row| row.iter().map(|&value| f64::from(value)).collect())
        .collect();
    CostMatrix::from_rows(rows).ok()
}

fn main() {
    loop {
        fuzz!(|input: FuzzMatrix| {
            let Some(cost) = to_cost_matrix(&input) else {
                return;
            };

            let Ok(solution) = lsap::solve_with_duals(&cost, false) else {
                return;
            };

            for row in 0..cost.num_rows() {
                for col in 0..cost.num_cols() {
                    assert!(
                        solution.u[row] + solution.v[col] <= cost.get(row, col) + 1e-6,
                        "dual feasibility violated at ({row}, {col}) for {cost:?}"
                    );
                }
            }

            let mut seen_columns = std::collections::HashSet::new();
            for col in solution.col4row.iter().flatten() {
                assert!(seen_columns.insert(*col), "a column was assigned twice: {cost:?}");
            }

            assert!(
                (solution.primal_cost(&cost) - solution.dual_cost()).abs() < 1e-6,
                "primal/dual cost mismatch for {cost:?}"
            );
        });
    }
}
