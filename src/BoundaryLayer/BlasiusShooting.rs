//! # Shooting solver for the Blasius equation
//!
//! The third-order problem `f''' + f f'' / 2 = 0`, `f(0) = f'(0) = 0`, `f'(∞) = 1` is written as the
//! first-order system
//!
//! ```text
//! f' = g
//! g' = h
//! h' = -f h / 2
//! ```
//!
//! and marched from the wall with the explicit first-order scheme
//!
//! ```text
//! f[i+1] = f[i] + g[i] dx[i]
//! g[i+1] = g[i] + h[i] dx[i]
//! h[i+1] = h[i] - 0.5 f[i] h[i] dx[i]
//! ```
//!
//! The wall shear `h[0] = h0` is unknown. It is found by a one-sided diminishing-step search:
//! while the far-field velocity `g[n-1]` undershoots the target, `h0` is advanced by `dh`;
//! after an overshoot the last step is taken back, `dh` is halved and `h0` is advanced by the
//! new `dh`. The search stops when `|target - g[n-1]| <= tolerance`.
//!
//! ## Example
//! ```rust, ignore
//! use Blasius::BoundaryLayer::BlasiusShooting::BlasiusSolver;
//! use Blasius::BoundaryLayer::grid::Grid;
//!
//! let grid = Grid::new(200_000)?;
//! let mut solver = BlasiusSolver::new(grid);
//! solver.max_iterations = Some(10_000);
//! let solution = solver.solve()?;
//! println!("wall shear h0 = {}", solution.h0);
//! ```

use super::blasius_config::BlasiusConfig;
use super::grid::{Grid, GridBuilder};
use log::{debug, error, info};
use nalgebra::DVector;
use thiserror::Error;

pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_H0: f64 = 0.1;
pub const DEFAULT_DH: f64 = 0.1;
/// far-field value of g = u/U
pub const DEFAULT_TARGET: f64 = 1.0;
/// passes kept in the history; older ones are dropped first
pub const DEFAULT_HISTORY_LIMIT: usize = 10_000;

/// error types for grid construction, the shooting loop and result I/O
#[derive(Debug, Error)]
pub enum BlasiusError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Shooting did not converge after {iterations} iterations (last error {last_error:e})")]
    NonConvergence { last_error: f64, iterations: usize },
    #[error("Non-finite value in sequence {sequence} at node {index} on iteration {iteration}")]
    NumericalOverflow {
        sequence: char,
        index: usize,
        iteration: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Table error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Plot error: {0}")]
    Plot(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverPhase {
    Shooting,
    Converged,
}

/// One pass of the shooting loop, recorded after the integration and before the update of h0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShootingStep {
    pub iteration: usize,
    /// guess used for this pass
    pub h0: f64,
    /// step size in effect for this pass
    pub dh: f64,
    pub g_far: f64,
    pub error: f64,
    /// wall values after the boundary reset
    pub f0: f64,
    pub g0: f64,
}

/// Converged state of the solver.
#[derive(Debug, Clone)]
pub struct BlasiusSolution {
    pub x: DVector<f64>,
    pub f: DVector<f64>,
    pub g: DVector<f64>,
    pub h: DVector<f64>,
    /// wall shear parameter f''(0)
    pub h0: f64,
    pub final_dh: f64,
    pub g_far: f64,
    pub error: f64,
    pub iterations: usize,
    pub history: Vec<ShootingStep>,
}

impl BlasiusSolution {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

pub struct BlasiusSolver {
    pub grid: Grid,
    pub tolerance: f64,
    pub initial_h0: f64,
    pub initial_dh: f64,
    /// far-field target for g, also the threshold deciding the search direction
    pub target: f64,
    /// `None` loops until convergence, which never happens when the target is unreachable.
    /// Memory stays bounded in that case: only the last `history_limit` passes are kept.
    pub max_iterations: Option<usize>,
    /// `0` keeps every pass
    pub history_limit: usize,
    f: DVector<f64>,
    g: DVector<f64>,
    h: DVector<f64>,
    h0: f64,
    dh: f64,
    phase: SolverPhase,
    iterations: usize,
    history: Vec<ShootingStep>,
}

impl BlasiusSolver {
    pub fn new(grid: Grid) -> Self {
        let n = grid.len();
        Self {
            grid,
            tolerance: DEFAULT_TOLERANCE,
            initial_h0: DEFAULT_H0,
            initial_dh: DEFAULT_DH,
            target: DEFAULT_TARGET,
            max_iterations: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            f: DVector::zeros(n),
            g: DVector::zeros(n),
            h: DVector::zeros(n),
            h0: DEFAULT_H0,
            dh: DEFAULT_DH,
            phase: SolverPhase::Shooting,
            iterations: 0,
            history: Vec::new(),
        }
    }

    pub fn from_config(config: &BlasiusConfig) -> Result<Self, BlasiusError> {
        config.validate()?;
        let grid = GridBuilder::new(config.n_points)
            .with_bounds(config.x_min, config.x_max)
            .build()?;
        let mut solver = Self::new(grid);
        solver.tolerance = config.tolerance;
        solver.initial_h0 = config.initial_h0;
        solver.initial_dh = config.initial_dh;
        solver.target = config.target;
        solver.max_iterations = config.max_iterations;
        Ok(solver)
    }

    fn check_parameters(&self) -> Result<(), BlasiusError> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(BlasiusError::InvalidInput(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if !(self.initial_dh > 0.0 && self.initial_dh.is_finite()) {
            return Err(BlasiusError::InvalidInput(format!(
                "initial dh must be positive, got {}",
                self.initial_dh
            )));
        }
        if !self.initial_h0.is_finite() || !self.target.is_finite() {
            return Err(BlasiusError::InvalidInput(format!(
                "initial h0 and target must be finite (h0={}, target={})",
                self.initial_h0, self.target
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(BlasiusError::InvalidInput(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn phase(&self) -> SolverPhase {
        self.phase
    }

    /// current guess for h[0]
    pub fn h0(&self) -> f64 {
        self.h0
    }

    pub fn dh(&self) -> f64 {
        self.dh
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn history(&self) -> &[ShootingStep] {
        &self.history
    }

    pub fn f(&self) -> &DVector<f64> {
        &self.f
    }

    pub fn g(&self) -> &DVector<f64> {
        &self.g
    }

    pub fn h(&self) -> &DVector<f64> {
        &self.h
    }

    /// Puts the solver back into the initial SHOOTING state.
    pub fn reset(&mut self) {
        let n = self.grid.len();
        self.f = DVector::zeros(n);
        self.g = DVector::zeros(n);
        self.h = DVector::zeros(n);
        self.h0 = self.initial_h0;
        self.dh = self.initial_dh;
        self.h[0] = self.h0;
        self.phase = SolverPhase::Shooting;
        self.iterations = 0;
        self.history.clear();
    }

    /// Runs the shooting loop from the initial guess until convergence, the iteration cap,
    /// or a non-finite value in the state sequences.
    pub fn solve(&mut self) -> Result<BlasiusSolution, BlasiusError> {
        self.check_parameters()?;
        self.reset();
        let n = self.grid.len();
        info!(
            "Blasius shooting: n = {}, x_far = {}, h0 = {}, dh = {}, tolerance = {:e}, max_iterations = {:?}",
            n,
            self.grid.x_last(),
            self.h0,
            self.dh,
            self.tolerance,
            self.max_iterations
        );

        let mut last_error = f64::INFINITY;
        loop {
            if let Some(max_iterations) = self.max_iterations {
                if self.iterations >= max_iterations {
                    error!(
                        "shooting stopped after {} iterations, |{} - g_far| = {:e}, h0 = {}",
                        self.iterations, self.target, last_error, self.h0
                    );
                    return Err(BlasiusError::NonConvergence {
                        last_error,
                        iterations: self.iterations,
                    });
                }
            }

            self.apply_boundary_conditions();
            self.march();
            self.iterations += 1;
            self.check_finite()?;

            let g_far = self.g[n - 1];
            let error = (self.target - g_far).abs();
            last_error = error;
            if self.history_limit > 0 && self.history.len() >= self.history_limit {
                let excess = self.history.len() + 1 - self.history_limit;
                self.history.drain(..excess);
            }
            self.history.push(ShootingStep {
                iteration: self.iterations,
                h0: self.h0,
                dh: self.dh,
                g_far,
                error,
                f0: self.f[0],
                g0: self.g[0],
            });
            debug!(
                "iteration {}: h0 = {}, dh = {:e}, g_far = {}, error = {:e}",
                self.iterations, self.h0, self.dh, g_far, error
            );

            if error <= self.tolerance {
                self.phase = SolverPhase::Converged;
                info!(
                    "converged after {} iterations: h0 = {}, g_far = {}, error = {:e}",
                    self.iterations, self.h0, g_far, error
                );
                return Ok(self.solution(g_far, error));
            }
            self.update_shooting_parameter(g_far);
        }
    }

    fn apply_boundary_conditions(&mut self) {
        self.f[0] = 0.0;
        self.g[0] = 0.0;
        self.h[0] = self.h0;
    }

    /// Sequential forward pass; node i+1 depends only on node i.
    fn march(&mut self) {
        let dx = self.grid.dx().as_slice();
        let f = self.f.as_mut_slice();
        let g = self.g.as_mut_slice();
        let h = self.h.as_mut_slice();
        for (i, &d) in dx.iter().enumerate() {
            let (fi, gi, hi) = (f[i], g[i], h[i]);
            f[i + 1] = fi + gi * d;
            g[i + 1] = gi + hi * d;
            h[i + 1] = hi - 0.5 * fi * hi * d;
        }
    }

    /// Reports the non-finite node closest to the wall; ties go to f, then g, then h.
    fn check_finite(&self) -> Result<(), BlasiusError> {
        let first_bad = [('f', &self.f), ('g', &self.g), ('h', &self.h)]
            .into_iter()
            .filter_map(|(sequence, values)| {
                values
                    .iter()
                    .position(|v| !v.is_finite())
                    .map(|index| (index, sequence, values[index]))
            })
            .min_by_key(|&(index, _, _)| index);

        match first_bad {
            None => Ok(()),
            Some((index, sequence, value)) => {
                error!(
                    "non-finite {}[{}] = {} on iteration {} (h0 = {})",
                    sequence, index, value, self.iterations, self.h0
                );
                Err(BlasiusError::NumericalOverflow {
                    sequence,
                    index,
                    iteration: self.iterations,
                })
            }
        }
    }

    /// Undershoot keeps stepping; overshoot (or exact hit) steps back, halves dh and steps again.
    fn update_shooting_parameter(&mut self, g_far: f64) {
        if g_far < self.target {
            self.h0 += self.dh;
        } else {
            self.h0 -= self.dh;
            self.dh /= 2.0;
            self.h0 += self.dh;
        }
        self.h[0] = self.h0;
    }

    fn solution(&self, g_far: f64, error: f64) -> BlasiusSolution {
        BlasiusSolution {
            x: self.grid.x().clone(),
            f: self.f.clone(),
            g: self.g.clone(),
            h: self.h.clone(),
            h0: self.h0,
            final_dh: self.dh,
            g_far,
            error,
            iterations: self.iterations,
            history: self.history.clone(),
        }
    }
}
