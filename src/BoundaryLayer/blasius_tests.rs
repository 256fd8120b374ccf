#[cfg(test)]
mod tests {
    use crate::BoundaryLayer::BlasiusShooting::*;
    use crate::BoundaryLayer::blasius_config::BlasiusConfig;
    use crate::BoundaryLayer::grid::Grid;
    use crate::Utils::logger::init_test_logger;
    use crate::Utils::save_to_file::load_table;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::fs;

    fn bounded_solver(n: usize, max_iterations: usize) -> BlasiusSolver {
        let mut solver = BlasiusSolver::new(Grid::new(n).unwrap());
        solver.max_iterations = Some(max_iterations);
        solver
    }

    #[test]
    fn classical_wall_shear() {
        init_test_logger();
        let mut solver = bounded_solver(200_000, 10_000);
        let solution = solver.solve().unwrap();
        println!(
            "h0 = {}, iterations = {}, g_far = {}",
            solution.h0, solution.iterations, solution.g_far
        );
        assert_abs_diff_eq!(solution.h0, 0.3320, epsilon = 1e-3);
        assert!(solution.error <= 1e-6);
        assert_abs_diff_eq!(solution.g[solution.len() - 1], 1.0, epsilon = 1e-6);
        assert_eq!(solver.phase(), SolverPhase::Converged);
        // h stays positive, so g rises monotonically towards 1
        assert!(solution.g.as_slice().windows(2).all(|w| w[1] >= w[0]));
        assert!(solution.h.iter().all(|&v| v > 0.0));
    }

    #[test]
    fn converged_state_satisfies_far_condition() {
        let solution = bounded_solver(2_000, 10_000).solve().unwrap();
        assert!((1.0 - solution.g[solution.len() - 1]).abs() <= 1e-6);
        assert_eq!(solution.g_far, solution.g[solution.len() - 1]);
        assert_eq!(solution.h[0], solution.h0);
        assert_eq!(solution.history.len(), solution.iterations);
        assert_eq!(solution.history.last().unwrap().h0, solution.h0);
    }

    #[test]
    fn wall_values_are_reset_every_pass() {
        let solution = bounded_solver(1_000, 10_000).solve().unwrap();
        assert!(solution.iterations > 1);
        for step in &solution.history {
            assert_eq!(step.f0, 0.0);
            assert_eq!(step.g0, 0.0);
        }
        assert_eq!(solution.f[0], 0.0);
        assert_eq!(solution.g[0], 0.0);
    }

    #[test]
    fn step_size_only_halves() {
        let solution = bounded_solver(20_000, 10_000).solve().unwrap();
        let history = &solution.history;
        assert_eq!(history[0].dh, 0.1);
        assert_eq!(history[0].h0, 0.1);
        for pair in history.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            assert!(next.dh > 0.0);
            assert!(next.dh == prev.dh || next.dh == prev.dh / 2.0);
            if prev.g_far < 1.0 {
                // undershoot keeps the step
                assert_eq!(next.dh, prev.dh);
                assert_relative_eq!(next.h0, prev.h0 + prev.dh, epsilon = 1e-15);
            } else {
                // overshoot takes the step back and advances by half of it
                assert_eq!(next.dh, prev.dh / 2.0);
                assert_relative_eq!(next.h0, prev.h0 - prev.dh / 2.0, epsilon = 1e-15);
            }
        }
        assert!(solution.final_dh <= 0.1);
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        // two nodes: g_far = h0 * 1e-3, so the target needs h0 = 1000
        let mut solver = bounded_solver(2, 1_000);
        match solver.solve() {
            Err(BlasiusError::NonConvergence {
                last_error,
                iterations,
            }) => {
                assert_eq!(iterations, 1_000);
                assert_abs_diff_eq!(last_error, 0.9, epsilon = 1e-9);
            }
            other => panic!("expected NonConvergence, got {:?}", other.map(|s| s.h0)),
        }
        assert_eq!(solver.phase(), SolverPhase::Shooting);
        assert_eq!(solver.iterations(), 1_000);
    }

    #[test]
    fn history_keeps_only_latest_passes() {
        let mut solver = bounded_solver(2, 100);
        solver.history_limit = 5;
        assert!(matches!(
            solver.solve(),
            Err(BlasiusError::NonConvergence { iterations: 100, .. })
        ));
        let history = solver.history();
        assert_eq!(history.len(), 5);
        let kept: Vec<usize> = history.iter().map(|s| s.iteration).collect();
        assert_eq!(kept, vec![96, 97, 98, 99, 100]);

        let mut unbounded = bounded_solver(2, 100);
        unbounded.history_limit = 0;
        let _ = unbounded.solve();
        assert_eq!(unbounded.history().len(), 100);
    }

    #[test]
    fn overflow_is_reported() {
        let mut solver = bounded_solver(1_000, 100);
        solver.initial_h0 = 1e300;
        match solver.solve() {
            Err(BlasiusError::NumericalOverflow {
                sequence,
                index,
                iteration,
            }) => {
                assert_eq!(sequence, 'h');
                assert_eq!(index, 3);
                assert_eq!(iteration, 1);
            }
            other => panic!("expected NumericalOverflow, got {:?}", other.map(|s| s.h0)),
        }
    }

    #[test]
    fn five_point_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blasius_cp.csv");
        let solution = bounded_solver(5, 10_000).solve().unwrap();
        solution.save_to_table(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "x\tf\tg\th");
        assert_eq!(lines.len(), 6);
        assert!(lines[1..].iter().all(|l| l.split('\t').count() == 4));

        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.x, solution.x.as_slice());
        assert_eq!(table.f, solution.f.as_slice());
        assert_eq!(table.g, solution.g.as_slice());
        assert_eq!(table.h, solution.h.as_slice());
    }

    #[test]
    fn outputs_written_table_and_plot() {
        let dir = tempfile::tempdir().unwrap();
        let table_path = dir.path().join("blasius_cp.csv");
        let plot_path = dir.path().join("blasius_cp.png");
        let config = BlasiusConfig {
            n_points: 1_000,
            max_iterations: Some(10_000),
            table_file: table_path.to_string_lossy().into_owned(),
            plot_file: plot_path.to_string_lossy().into_owned(),
            ..BlasiusConfig::default()
        };
        let solution = BlasiusSolver::from_config(&config).unwrap().solve().unwrap();
        solution.save_outputs(&config).unwrap();

        let content = fs::read_to_string(&table_path).unwrap();
        assert_eq!(content.lines().count(), 1_001);
        assert_eq!(content.lines().next(), Some("x\tf\tg\th"));

        let png = fs::metadata(&plot_path).unwrap();
        assert!(png.is_file());
        assert!(png.len() > 0);
        // PNG signature
        assert_eq!(&fs::read(&plot_path).unwrap()[..4], b"\x89PNG");
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let dir = tempfile::tempdir().unwrap();
        let (first_path, second_path) = (dir.path().join("a.csv"), dir.path().join("b.csv"));

        let mut solver = bounded_solver(3_000, 10_000);
        let first = solver.solve().unwrap();
        let second = solver.solve().unwrap();
        assert_eq!(first.h0, second.h0);
        assert_eq!(first.iterations, second.iterations);
        assert_eq!(first.history, second.history);

        first.save_to_table(&first_path).unwrap();
        bounded_solver(3_000, 10_000)
            .solve()
            .unwrap()
            .save_to_table(&second_path)
            .unwrap();
        assert_eq!(fs::read(&first_path).unwrap(), fs::read(&second_path).unwrap());
    }

    #[test]
    fn solver_from_config() {
        let config = BlasiusConfig {
            n_points: 20_000,
            max_iterations: Some(10_000),
            ..BlasiusConfig::default()
        };
        let mut solver = BlasiusSolver::from_config(&config).unwrap();
        assert_eq!(solver.grid.len(), 20_000);
        let solution = solver.solve().unwrap();
        assert_abs_diff_eq!(solution.h0, 0.332, epsilon = 2e-3);
    }

    #[test]
    fn invalid_config_rejected_before_solving() {
        let config = BlasiusConfig {
            n_points: 1,
            ..BlasiusConfig::default()
        };
        assert!(matches!(
            BlasiusSolver::from_config(&config),
            Err(BlasiusError::InvalidInput(_))
        ));
    }

    #[test]
    fn custom_target_changes_search_threshold() {
        let mut solver = bounded_solver(2_000, 10_000);
        solver.target = 0.5;
        let solution = solver.solve().unwrap();
        assert_abs_diff_eq!(solution.g_far, 0.5, epsilon = 1e-6);
        assert!(solution.h0 < 0.332);
    }
}
