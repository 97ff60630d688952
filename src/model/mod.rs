//! Labor market model — equilibrium, employment and unemployment under a
//! binding wage floor with an inward-shifting demand curve.
//!
//! Supply:  w_S(L)    = a_S + b_S·L
//! Demand:  w_D(L, t) = a_D(t) - b_D·L,  a_D(t) = a_D0 - k·t
//!
//! Every query is closed-form arithmetic over the validated parameters.
//! Queries taking a time index accept `impl Into<Option<f64>>`: pass a value
//! to evaluate at that time, or `None` to use the parameters' default `t`.
//! Explicit times are not range-checked and extrapolate linearly outside
//! `[0, 1]`; only the default `t` is validated, at construction.

pub mod summary;

use tracing::debug;

use crate::types::{EmploymentTrend, LaborMarketParams, MarketSnapshot};

/// Read-only evaluator around a validated parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaborMarketModel {
    params: LaborMarketParams,
}

impl LaborMarketModel {
    pub fn new(params: LaborMarketParams) -> Self {
        debug!(
            l_star = params.equilibrium_labor(),
            w_star = params.equilibrium_wage(),
            w_bar = params.w_bar(),
            k = params.k(),
            t = params.t(),
            "Labor market model constructed"
        );
        Self { params }
    }

    /// Access the parameters.
    pub fn params(&self) -> &LaborMarketParams {
        &self.params
    }

    fn resolve_t(&self, t: impl Into<Option<f64>>) -> f64 {
        t.into().unwrap_or(self.params.t())
    }

    // -- Curves --

    /// Wage at which `l` units of labor are supplied.
    pub fn labor_supply(&self, l: f64) -> f64 {
        self.params.a_s() + self.params.b_s() * l
    }

    /// Wage at which `l` units of labor are demanded at time `t`.
    pub fn labor_demand(&self, l: f64, t: impl Into<Option<f64>>) -> f64 {
        self.demand_intercept(t) - self.params.b_d() * l
    }

    // -- Equilibrium --

    /// Competitive equilibrium `(L*, w*)` before the floor. Independent of t.
    pub fn equilibrium(&self) -> (f64, f64) {
        (self.equilibrium_labor(), self.equilibrium_wage())
    }

    /// L* = (a_D0 - a_S) / (b_S + b_D)
    pub fn equilibrium_labor(&self) -> f64 {
        self.params.equilibrium_labor()
    }

    /// w* = a_S + b_S·L*
    pub fn equilibrium_wage(&self) -> f64 {
        self.params.equilibrium_wage()
    }

    // -- Time-dependent quantities --

    /// a_D(t) = a_D0 - k·t
    pub fn demand_intercept(&self, t: impl Into<Option<f64>>) -> f64 {
        let t = self.resolve_t(t);
        self.params.a_d0() - self.params.k() * t
    }

    /// L(t) = max(0, (a_D(t) - w̄) / b_D)
    pub fn employment_at_wage_floor(&self, t: impl Into<Option<f64>>) -> f64 {
        let l = (self.demand_intercept(t) - self.params.w_bar()) / self.params.b_d();
        l.max(0.0)
    }

    /// L_S = (w̄ - a_S) / b_S. Constant in t.
    pub fn labor_supplied_at_floor(&self) -> f64 {
        (self.params.w_bar() - self.params.a_s()) / self.params.b_s()
    }

    /// U(t) = max(0, L_S - L(t))
    pub fn unemployment(&self, t: impl Into<Option<f64>>) -> f64 {
        (self.labor_supplied_at_floor() - self.employment_at_wage_floor(t)).max(0.0)
    }

    /// dL/dt = -k / b_D, the slope of unclamped employment in t.
    pub fn employment_derivative(&self) -> f64 {
        -self.params.k() / self.params.b_d()
    }

    pub fn employment_trend(&self) -> EmploymentTrend {
        EmploymentTrend::from_derivative(self.employment_derivative())
    }

    // -- Sampling --

    /// All time-dependent values at one time index.
    pub fn snapshot(&self, t: impl Into<Option<f64>>) -> MarketSnapshot {
        let t = self.resolve_t(t);
        MarketSnapshot {
            t,
            demand_intercept: self.demand_intercept(t),
            employment: self.employment_at_wage_floor(t),
            labor_supplied: self.labor_supplied_at_floor(),
            unemployment: self.unemployment(t),
        }
    }

    /// `num_points` snapshots evenly spaced over `[0, 1]`, endpoints included.
    pub fn trajectory(&self, num_points: usize) -> Vec<MarketSnapshot> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.snapshot(0.0)],
            n => {
                let step = 1.0 / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        // Pin the last sample so rounding never overshoots t = 1.
                        let t = if i == n - 1 { 1.0 } else { i as f64 * step };
                        self.snapshot(t)
                    })
                    .collect()
            }
        }
    }
}

impl From<LaborMarketParams> for LaborMarketModel {
    fn from(params: LaborMarketParams) -> Self {
        Self::new(params)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
