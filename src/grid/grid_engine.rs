// src/grid/grid_engine.rs
//! Cartesian grid sweeps of the Black-Scholes pricer
//!
//! # Sweep Semantics
//!
//! A [`GridSpec`] holds candidate values for each of the five pricing inputs
//! plus one option kind shared by the whole sweep. [`simulate_grid`] visits
//! every combination, prices it, and appends one row to a
//! [`ResultTable`](crate::grid::table::ResultTable).
//!
//! Row order is fully deterministic and mirrors nested loops with spot as the
//! outermost axis:
//! ```text
//! for s { for k { for t { for sigma { for r { price } } } } }
//! ```
//! so the rate column varies fastest and the spot column slowest. An empty
//! axis makes the Cartesian product empty: the sweep returns zero rows.
//!
//! # Memory
//!
//! The whole table is materialized before returning, and its row count is the
//! product of the five axis lengths. That product grows combinatorially; there
//! is no chunking or streaming, so very large grids exhaust memory. Check
//! [`GridSpec::num_points`] before sweeping if the grid is caller-supplied.

use crate::analytics::bs_analytic::{bs_price, OptionKind};
use crate::error::{validation, GridError, GridResult};
use crate::grid::table::ResultTable;

/// Input axes for one grid sweep
///
/// Each `*_values` vector lists the candidate values for one Black-Scholes
/// input; `kind` applies to every combination. The spec is read-only during a
/// sweep and can be reused for further identical sweeps.
#[derive(Debug, Clone)]
pub struct GridSpec {
    /// Spot price candidates (S)
    pub s_values: Vec<f64>,
    /// Strike price candidates (K)
    pub k_values: Vec<f64>,
    /// Time-to-expiry candidates in years (T)
    pub t_values: Vec<f64>,
    /// Annualized volatility candidates (σ)
    pub sigma_values: Vec<f64>,
    /// Risk-free rate candidates (r)
    pub r_values: Vec<f64>,
    /// Option kind shared by the whole sweep
    pub kind: OptionKind,
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec {
            s_values: vec![100.0],
            k_values: vec![100.0],
            t_values: vec![1.0],
            sigma_values: vec![0.2],
            r_values: vec![0.05],
            kind: OptionKind::Call,
        }
    }
}

impl GridSpec {
    /// Number of grid points the sweep will visit (product of axis lengths)
    pub fn num_points(&self) -> usize {
        self.s_values.len()
            * self.k_values.len()
            * self.t_values.len()
            * self.sigma_values.len()
            * self.r_values.len()
    }

    /// Lazy enumeration of the Cartesian product in sweep order
    ///
    /// Each call returns a fresh iterator that replays the identical
    /// sequence, so the enumeration is restartable without re-allocating.
    pub fn points(&self) -> GridIter<'_> {
        GridIter::new(self)
    }

    /// Opt-in strict check of every axis element
    ///
    /// Rejects values that would degenerate the closed form (non-positive
    /// spot/strike/expiry/vol, non-finite rate). Empty axes pass: they are a
    /// size-zero sweep, not a configuration mistake. [`simulate_grid`] never
    /// calls this.
    pub fn validate(&self) -> GridResult<()> {
        validate_axis("s_values", &self.s_values, validation::validate_positive)?;
        validate_axis("k_values", &self.k_values, validation::validate_positive)?;
        validate_axis("t_values", &self.t_values, validation::validate_positive)?;
        validate_axis(
            "sigma_values",
            &self.sigma_values,
            validation::validate_positive,
        )?;
        validate_axis("r_values", &self.r_values, validation::validate_finite)?;
        Ok(())
    }
}

fn validate_axis(
    field: &str,
    values: &[f64],
    check: fn(&str, f64) -> GridResult<()>,
) -> GridResult<()> {
    for (i, &value) in values.iter().enumerate() {
        if let Err(err) = check(field, value) {
            let reason = match err {
                GridError::InvalidParameters { constraint, .. } => {
                    format!("value {} {}", value, constraint)
                }
                GridError::InvalidConfiguration { reason, .. } => reason,
            };
            return Err(GridError::InvalidConfiguration {
                field: format!("{}[{}]", field, i),
                reason,
            });
        }
    }
    Ok(())
}

/// One tuple of the Cartesian sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub s: f64,
    pub k: f64,
    pub t: f64,
    pub sigma: f64,
    pub r: f64,
}

/// Odometer-style iterator over a [`GridSpec`]'s Cartesian product
///
/// Yields [`GridPoint`]s in sweep order (spot slowest, rate fastest) without
/// materializing the product. Finite and fused: once exhausted it keeps
/// returning `None`.
pub struct GridIter<'a> {
    spec: &'a GridSpec,
    idx: [usize; 5],
    exhausted: bool,
}

impl<'a> GridIter<'a> {
    fn new(spec: &'a GridSpec) -> Self {
        let exhausted = spec.s_values.is_empty()
            || spec.k_values.is_empty()
            || spec.t_values.is_empty()
            || spec.sigma_values.is_empty()
            || spec.r_values.is_empty();
        GridIter {
            spec,
            idx: [0; 5],
            exhausted,
        }
    }
}

impl Iterator for GridIter<'_> {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.exhausted {
            return None;
        }

        let [si, ki, ti, vi, ri] = self.idx;
        let point = GridPoint {
            s: self.spec.s_values[si],
            k: self.spec.k_values[ki],
            t: self.spec.t_values[ti],
            sigma: self.spec.sigma_values[vi],
            r: self.spec.r_values[ri],
        };

        // Odometer increment: carry from the rate axis toward the spot axis.
        let lens = [
            self.spec.s_values.len(),
            self.spec.k_values.len(),
            self.spec.t_values.len(),
            self.spec.sigma_values.len(),
            self.spec.r_values.len(),
        ];
        let mut axis = 4;
        loop {
            self.idx[axis] += 1;
            if self.idx[axis] < lens[axis] {
                break;
            }
            self.idx[axis] = 0;
            if axis == 0 {
                self.exhausted = true;
                break;
            }
            axis -= 1;
        }

        Some(point)
    }
}

/// Sweep the full Cartesian grid and collect one row per combination
///
/// # Algorithm
///
/// Enumerates `spec.points()` in sweep order, prices each tuple with the
/// shared kind via [`bs_price`], and appends the price together with the five
/// inputs and the kind flag to the table.
///
/// # Determinism
///
/// Pure function of the spec: identical specs always produce identical
/// tables, row for row. Degenerate axis values surface as non-finite prices
/// in the corresponding rows; nothing is skipped or raised.
pub fn simulate_grid(spec: &GridSpec) -> ResultTable {
    let mut table = ResultTable::with_capacity(spec.num_points());
    let flag = spec.kind.as_flag();

    for point in spec.points() {
        let price = bs_price(point.s, point.k, point.t, point.sigma, point.r, spec.kind);
        table.push_row(price, point.s, point.k, point.t, point.sigma, point.r, flag);
    }

    table
}
