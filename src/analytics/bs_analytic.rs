// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x).
//!
//! # Degenerate Inputs
//!
//! The formulas here are evaluated exactly as written: `T = 0` or `σ = 0`
//! zeroes the `d₁` denominator, and `S ≤ 0` or `K ≤ 0` sends the logarithm
//! out of domain. The resulting infinities or NaNs propagate through to the
//! returned price; nothing raises and nothing is clamped.

use crate::error::{validation::*, GridResult};
use crate::math_utils::norm_cdf;

/// Option right: a call (right to buy at strike) or a put (right to sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Integer flag used in tabular output: 1 for calls, 0 for puts.
    pub fn as_flag(self) -> u8 {
        match self {
            OptionKind::Call => 1,
            OptionKind::Put => 0,
        }
    }
}

/// Immutable parameter record for a single pricing call
///
/// Groups the five Black-Scholes inputs with the option kind. Construct one
/// per scenario; the record is `Copy` and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct OptionParams {
    /// Spot price of the underlying
    pub s: f64,
    /// Strike price
    pub k: f64,
    /// Time to expiry in years
    pub t: f64,
    /// Annualized volatility
    pub sigma: f64,
    /// Continuously compounded risk-free rate
    pub r: f64,
    /// Call or put
    pub kind: OptionKind,
}

impl OptionParams {
    /// Price this option with the closed-form formula
    ///
    /// Pure function of the stored inputs; degenerate values propagate as
    /// non-finite prices (see the module docs).
    pub fn price(&self) -> f64 {
        bs_price(self.s, self.k, self.t, self.sigma, self.r, self.kind)
    }

    /// Opt-in strict check of the stored inputs
    ///
    /// Rejects every input that would degenerate the closed form: spot,
    /// strike, expiry, and volatility must be positive, the rate finite.
    /// [`price`](Self::price) never calls this.
    pub fn validate(&self) -> GridResult<()> {
        validate_positive("s", self.s)?;
        validate_positive("k", self.k)?;
        validate_positive("t", self.t)?;
        validate_positive("sigma", self.sigma)?;
        validate_finite("r", self.r)?;
        Ok(())
    }
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// Where:
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
///
/// # Returns
/// Present value of the call option. Degenerate inputs yield non-finite
/// values rather than errors.
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// Satisfies put-call parity with [`bs_call_price`].
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
}

/// Price a European option, dispatching on kind
///
/// Parameters follow sweep order (spot, strike, expiry, vol, rate), the same
/// order the grid axes use.
pub fn bs_price(s: f64, k: f64, t: f64, sigma: f64, r: f64, kind: OptionKind) -> f64 {
    match kind {
        OptionKind::Call => bs_call_price(s, k, r, sigma, t),
        OptionKind::Put => bs_put_price(s, k, r, sigma, t),
    }
}
