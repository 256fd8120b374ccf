//! # Similarity-coordinate grid
//!
//! The grid is anchored at the wall (`x[0] = 0`) and the remaining `n - 1` nodes are
//! logarithmically spaced between `x_min` and `x_max`, so the near-wall region where the
//! shear varies fastest is resolved with very small steps while the far field is covered
//! with few points.
//!
//! ```text
//! x = [0, 10^a, 10^(a + s), ..., 10^b],   s = (b - a) / (n - 2),  a = log10(x_min), b = log10(x_max)
//! dx[i] = x[i+1] - x[i],  i = 0..n-2
//! ```

use super::BlasiusShooting::BlasiusError;
use log::debug;
use nalgebra::DVector;

/// default lower bound of the logarithmic part of the grid
pub const X_MIN: f64 = 1e-3;
/// default upper bound of the grid (the "infinity" of the boundary layer)
pub const X_MAX: f64 = 1e1;

/// Immutable grid: node coordinates and interval widths.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x: DVector<f64>,
    dx: DVector<f64>,
}

impl Grid {
    /// Grid with the default bounds `[1e-3, 1e1]`.
    pub fn new(n: usize) -> Result<Self, BlasiusError> {
        GridBuilder::new(n).build()
    }

    pub fn x(&self) -> &DVector<f64> {
        &self.x
    }

    pub fn dx(&self) -> &DVector<f64> {
        &self.dx
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// far boundary coordinate
    pub fn x_last(&self) -> f64 {
        self.x[self.x.len() - 1]
    }
}

/// Builder for [`Grid`]. Bounds default to [`X_MIN`] and [`X_MAX`].
#[derive(Debug, Clone)]
pub struct GridBuilder {
    pub n: usize,
    pub x_min: f64,
    pub x_max: f64,
}

impl GridBuilder {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            x_min: X_MIN,
            x_max: X_MAX,
        }
    }

    pub fn with_bounds(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }

    pub fn build(&self) -> Result<Grid, BlasiusError> {
        if self.n < 2 {
            return Err(BlasiusError::InvalidInput(format!(
                "grid needs at least 2 points, got {}",
                self.n
            )));
        }
        if !(self.x_min > 0.0 && self.x_min.is_finite() && self.x_max.is_finite()) {
            return Err(BlasiusError::InvalidInput(format!(
                "grid bounds must be positive and finite (x_min={}, x_max={})",
                self.x_min, self.x_max
            )));
        }
        if self.n > 2 && self.x_max <= self.x_min {
            return Err(BlasiusError::InvalidInput(format!(
                "x_max must be greater than x_min (x_min={}, x_max={})",
                self.x_min, self.x_max
            )));
        }

        let x = DVector::from_vec(wall_anchored_logspace(self.n, self.x_min, self.x_max));
        let dx = DVector::from_fn(self.n - 1, |i, _| x[i + 1] - x[i]);

        if let Some(i) = dx.iter().position(|&d| d <= 0.0) {
            return Err(BlasiusError::InvalidInput(format!(
                "grid is not strictly increasing at node {} (x={}, next={})",
                i,
                x[i],
                x[i + 1]
            )));
        }
        debug!(
            "grid built: n = {}, x in [{}, {}], min dx = {:e}, max dx = {:e}",
            self.n,
            self.x_min,
            self.x_max,
            dx.min(),
            dx.max()
        );
        Ok(Grid { x, dx })
    }
}

/// `0` followed by `n - 1` points log-spaced on `[x_min, x_max]`.
/// The last exponent is pinned to `log10(x_max)` so the far node is exact.
fn wall_anchored_logspace(n: usize, x_min: f64, x_max: f64) -> Vec<f64> {
    let m = n - 1;
    let (a, b) = (x_min.log10(), x_max.log10());
    let mut x = Vec::with_capacity(n);
    x.push(0.0);
    if m == 1 {
        x.push(10f64.powf(a));
        return x;
    }
    let step = (b - a) / (m - 1) as f64;
    for i in 0..m - 1 {
        x.push(10f64.powf(a + i as f64 * step));
    }
    x.push(10f64.powf(b));
    x
}
