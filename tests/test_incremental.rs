//! Black-box checks that the incremental re-solvers agree with solving the
//! reduced problem from scratch.

mod common;

use common::random_cost_matrix;
use lapsolve::{incremental, lsap};

#[test]
fn removing_a_row_matches_a_fresh_solve_on_the_reduced_matrix() {
    for seed in 0..6u64 {
        let cost = random_cost_matrix(seed, 5, 7);
        let mut solution = lsap::solve_with_duals(&cost, false).unwrap();

        for removed_row in 0..cost.num_rows() {
            let updated =
                incremental::solve_with_removed_row(&mut solution.clone(), &cost, removed_row, false);

            let reduced_rows: Vec<Vec<f64>> = (0..cost.num_rows())
                .filter(|&r| r != removed_row)
                .map(|r| (0..cost.num_cols()).map(|c| cost.get(r, c)).collect())
                .collect();
            let reduced = lapsolve::CostMatrix::from_rows(reduced_rows).unwrap();
            let (rows, cols) = lsap::solve(&reduced, false).unwrap();
            let fresh_total: f64 = rows.iter().zip(cols.iter()).map(|(&r, &c)| reduced.get(r, c)).sum();

            let incremental_total: f64 = updated
                .col4row
                .iter()
                .enumerate()
                .filter_map(|(row, col)| col.map(|col| reduced.get(row, col)))
                .sum();

            assert!(
                (incremental_total - fresh_total).abs() < 1e-6,
                "seed {seed}, removed row {removed_row}: incremental={incremental_total} fresh={fresh_total}"
            );
        }
    }
}

#[test]
fn removing_a_column_matches_a_fresh_solve_on_the_reduced_matrix() {
    for seed in 0..6u64 {
        let cost = random_cost_matrix(seed, 5, 7);
        let solution = lsap::solve_with_duals(&cost, false).unwrap();

        for removed_col in 0..cost.num_cols() {
            let mut working = solution.clone();
            let updated =
                incremental::solve_with_removed_col(&mut working, &cost, removed_col, false).unwrap();

            let reduced_rows: Vec<Vec<f64>> = (0..cost.num_rows())
                .map(|r| {
                    (0..cost.num_cols())
                        .filter(|&c| c != removed_col)
                        .map(|c| cost.get(r, c))
                        .collect()
                })
                .collect();
            let reduced = lapsolve::CostMatrix::from_rows(reduced_rows).unwrap();
            let (rows, cols) = lsap::solve(&reduced, false).unwrap();
            let fresh_total: f64 = rows.iter().zip(cols.iter()).map(|(&r, &c)| reduced.get(r, c)).sum();

            let incremental_total: f64 = updated
                .col4row
                .iter()
                .enumerate()
                .filter_map(|(row, col)| col.map(|col| reduced.get(row, col)))
                .sum();

            assert!(
                (incremental_total - fresh_total).abs() < 1e-6,
                "seed {seed}, removed col {removed_col}: incremental={incremental_total} fresh={fresh_total}"
            );
        }
    }
}

#[test]
fn modify_in_place_false_leaves_the_original_solution_untouched() {
    let cost = random_cost_matrix(42, 4, 6);
    let solution = lsap::solve_with_duals(&cost, false).unwrap();
    let original = solution.clone();
    let mut working = solution;
    let _ = incremental::solve_with_removed_row(&mut working, &cost, 0, false);
    assert_eq!(working, original);
}

#[test]
fn dual_cost_stays_correct_after_a_bookkeeping_only_row_removal() {
    // Removing row 1 here hits the bookkeeping-only fast path (no other
    // row prefers the column it frees), which carries `v` over unchanged
    // even though the freed column becomes unassigned; `dual_cost` must
    // still agree with `primal_cost` on the reduced problem.
    let cost = lapsolve::CostMatrix::from_rows(vec![
        vec![1.0, 10.0, 10.0],
        vec![10.0, 1.0, 10.0],
        vec![10.0, 10.0, 1.0],
    ])
    .unwrap();
    let mut solution = lsap::solve_with_duals(&cost, false).unwrap();
    let updated = incremental::solve_with_removed_row(&mut solution, &cost, 1, false);

    let reduced = lapsolve::CostMatrix::from_rows(vec![vec![1.0, 10.0, 10.0], vec![
        10.0, 10.0, 1.0,
    ]])
    .unwrap();
    assert!(
        (updated.primal_cost(&reduced) - updated.dual_cost()).abs() < 1e-9,
        "primal={} dual={}",
        updated.primal_cost(&reduced),
        updated.dual_cost()
    );
}
