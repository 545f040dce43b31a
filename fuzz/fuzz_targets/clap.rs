//! Fuzz target for the all-pairs constrained assignment driver: check that
//! every entry it produces is never cheaper than the unconstrained
//! optimum, and that the diagonal exactly reproduces it.

use arbitrary::Arbitrary;
use honggfuzz::fuzz;
use lapsolve::{CostMatrix, clap, lsap};

#[derive(Debug, Arbitrary)]
struct FuzzMatrix {
    rows: Vec<Vec<u16>>,
}

fn to_cost_matrix(input: &FuzzMatrix) -> Option<CostMatrix> {
    const MAX_ROWS: usize = 6;
    const MAX_COLS: usize = 6;

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
            let Ok(result) = clap::clap_costs(&cost) else {
                return;
            };

            let Ok((rows, cols)) = lsap::solve(&cost, false) else {
                for row in 0..cost.num_rows() {
                    for col in 0..cost.num_cols() {
                        assert_eq!(result.get(row, col), f64::INFINITY, "infeasible cost for {cost:?}");
                    }
                }
                return;
            };
            let unconstrained: f64 =
                rows.iter().zip(cols.iter()).map(|(&r, &c)| cost.get(r, c)).sum();

            for row in 0..cost.num_rows() {
                for col in 0..cost.num_cols() {
                    let entry = result.get(row, col);
                    assert!(
                        entry + 1e-6 >= unconstrained,
                        "({row}, {col}) = {entry} undercuts the unconstrained optimum {unconstrained} for {cost:?}"
                    );
                }
            }
            for (&row, &col) in rows.iter().zip(cols.iter()) {
                let entry = result.get(row, col);
                assert!(
                    (entry - unconstrained).abs() < 1e-6,
                    "diagonal ({row}, {col}) = {entry}, want {unconstrained} for {cost:?}"
                );
            }
        });
    }
}
