//! # Blasius Boundary Layer Module
//!
//! Similarity solution of the laminar flat-plate boundary layer obtained by the shooting
//! method with explicit forward marching on a logarithmic grid.
//!
//! ## Mathematical Model
//!
//! ### Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `x` | Similarity coordinate η = y·sqrt(U/(ν·X)) | - |
//! | `f` | Scaled stream function | - |
//! | `g` | Scaled streamwise velocity u/U (= f') | - |
//! | `h` | Scaled shear (= f'') | - |
//! | `h0` | Wall shear f''(0), the shooting parameter | - |
//!
//! ### Governing Equation
//!
//! ```text
//! f''' + f f'' / 2 = 0
//! f(0) = 0,  f'(0) = 0,  f'(∞) = 1
//! ```
//!
//! reduced to `f' = g`, `g' = h`, `h' = -f h / 2`.
//!
//! ## Numerical Solution
//!
//! - [`grid`]: node 0 at the wall, the rest log-spaced on `[1e-3, 10]`.
//! - [`BlasiusShooting`]: forward-Euler march from the wall with a guessed `h0`, adjusted by a
//!   one-sided diminishing-step search until `|1 - g(x_far)| <= 1e-6`.
//!   The classical value is `h0 ≈ 0.332`.
//! - [`blasius_postprocessing`]: summary tables, profile plot and tab-separated export.

pub mod BlasiusShooting;
pub mod blasius_config;
pub mod blasius_postprocessing;
mod blasius_tests;
pub mod grid;
