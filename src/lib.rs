//! # bs-grid: Black-Scholes Pricing over Parameter Grids
//!
//! A Rust library for generating synthetic option-pricing datasets: it evaluates
//! the Black-Scholes closed-form formula for European calls and puts, and sweeps
//! a Cartesian grid of inputs (spot, strike, expiry, volatility, rate) into a
//! column-oriented table with one row per scenario.
//!
//! ## Key Features
//!
//! - **Closed-Form Pricing**: European call/put prices via the classical formula
//! - **Grid Sweeps**: Full Cartesian enumeration of five input axes
//! - **Deterministic Output**: Fixed row order (spot slowest, rate fastest)
//! - **Dense Export**: `ndarray` matrix view of the result table for analysis
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_grid::analytics::bs_analytic::OptionKind;
//! use bs_grid::grid::grid_engine::{simulate_grid, GridSpec};
//!
//! // Sweep three spots and two vols around the ATM scenario
//! let spec = GridSpec {
//!     s_values: vec![90.0, 100.0, 110.0],
//!     sigma_values: vec![0.1, 0.2],
//!     kind: OptionKind::Call,
//!     ..Default::default()
//! };
//!
//! let table = simulate_grid(&spec);
//! assert_eq!(table.len(), 6);
//! println!("First price: {:.4}", table.prices()[0]);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Prices are the standard risk-neutral closed forms:
//! ```text
//! C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
//! ```
//! with `d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)` and `d₂ = d₁ - σ√T`.
//!
//! Degenerate inputs (`T = 0`, `σ = 0`, `S ≤ 0`, `K ≤ 0`) are not guarded: the
//! resulting infinities or NaNs propagate into the output table. Callers that
//! want strict inputs can run the explicit `validate()` checks before sweeping.

// Module declarations
pub mod analytics;
pub mod error;
pub mod grid;
pub mod math_utils;

// Re-export commonly used types for convenience
pub use error::{GridError, GridResult};
