//! Shared types for the labor market model.
//!
//! Holds the validated parameter set, the per-time snapshot reported by the
//! model, and the domain error enum. Parameters can only be obtained through
//! validation, so every `LaborMarketParams` in circulation describes a market
//! with positive slopes, a non-negative demand shift, a default time index in
//! `[0, 1]` and a wage floor strictly above the competitive wage.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Raw parameters
// ---------------------------------------------------------------------------

/// Unvalidated parameter record, as read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawParams {
    /// Labor-supply intercept.
    pub a_s: f64,
    /// Labor-supply slope (must be > 0).
    pub b_s: f64,
    /// Labor-demand intercept at t = 0.
    pub a_d0: f64,
    /// Labor-demand slope (must be > 0).
    pub b_d: f64,
    /// Inward demand shift per unit of time (>= 0).
    pub k: f64,
    /// Wage floor.
    pub w_bar: f64,
    /// Default time index: 0 = short run, 1 = long run.
    #[serde(default)]
    pub t: f64,
}

impl RawParams {
    /// Validate into an immutable parameter set.
    pub fn validate(self) -> Result<LaborMarketParams, ModelError> {
        let fields = [
            ("a_s", self.a_s),
            ("b_s", self.b_s),
            ("a_d0", self.a_d0),
            ("b_d", self.b_d),
            ("k", self.k),
            ("w_bar", self.w_bar),
            ("t", self.t),
        ];
        if let Some(&(name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ModelError::invalid(name, value, "must be a finite number"));
        }

        if self.b_s <= 0.0 {
            return Err(ModelError::invalid("b_s", self.b_s, "must be > 0"));
        }
        if self.b_d <= 0.0 {
            return Err(ModelError::invalid("b_d", self.b_d, "must be > 0"));
        }
        if self.k < 0.0 {
            return Err(ModelError::invalid("k", self.k, "must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.t) {
            return Err(ModelError::InvalidTime { t: self.t });
        }

        let l_star = (self.a_d0 - self.a_s) / (self.b_s + self.b_d);
        // w* lies between a_s and a_d0, so it is finite whenever L* is.
        if !l_star.is_finite() {
            return Err(ModelError::invalid("l_star", l_star, "equilibrium labor overflows"));
        }
        let w_star = self.a_s + self.b_s * l_star;
        if self.w_bar <= w_star {
            return Err(ModelError::NonBindingWageFloor {
                w_bar: self.w_bar,
                w_star,
            });
        }

        Ok(LaborMarketParams {
            raw: self,
            l_star,
            w_star,
        })
    }
}

// ---------------------------------------------------------------------------
// Validated parameters
// ---------------------------------------------------------------------------

/// Validated, immutable labor market parameters.
///
/// The competitive equilibrium is solved once during validation (the
/// binding check needs it) and kept alongside the raw values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParams", into = "RawParams")]
pub struct LaborMarketParams {
    raw: RawParams,
    l_star: f64,
    w_star: f64,
}

impl LaborMarketParams {
    pub fn new(
        a_s: f64,
        b_s: f64,
        a_d0: f64,
        b_d: f64,
        k: f64,
        w_bar: f64,
        t: f64,
    ) -> Result<Self, ModelError> {
        RawParams {
            a_s,
            b_s,
            a_d0,
            b_d,
            k,
            w_bar,
            t,
        }
        .validate()
    }

    pub fn a_s(&self) -> f64 {
        self.raw.a_s
    }

    pub fn b_s(&self) -> f64 {
        self.raw.b_s
    }

    pub fn a_d0(&self) -> f64 {
        self.raw.a_d0
    }

    pub fn b_d(&self) -> f64 {
        self.raw.b_d
    }

    pub fn k(&self) -> f64 {
        self.raw.k
    }

    pub fn w_bar(&self) -> f64 {
        self.raw.w_bar
    }

    /// Default time index used when a query omits `t`.
    pub fn t(&self) -> f64 {
        self.raw.t
    }

    /// Competitive equilibrium labor L* (no floor).
    pub fn equilibrium_labor(&self) -> f64 {
        self.l_star
    }

    /// Competitive equilibrium wage w* (no floor).
    pub fn equilibrium_wage(&self) -> f64 {
        self.w_star
    }

    /// The unvalidated form, e.g. for re-serializing.
    pub fn raw(&self) -> RawParams {
        self.raw
    }
}

impl TryFrom<RawParams> for LaborMarketParams {
    type Error = ModelError;

    fn try_from(raw: RawParams) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

impl From<LaborMarketParams> for RawParams {
    fn from(params: LaborMarketParams) -> Self {
        params.raw
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Model values at a single time index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub t: f64,
    /// a_D(t)
    pub demand_intercept: f64,
    /// L(t), clamped at zero
    pub employment: f64,
    /// L_S, constant in t
    pub labor_supplied: f64,
    /// U(t), clamped at zero
    pub unemployment: f64,
}

impl fmt::Display for MarketSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:.2}: Employment={:.4}, Unemployment={:.4}",
            self.t, self.employment, self.unemployment
        )
    }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Direction of employment over time, from the sign of dL/dt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentTrend {
    Declining,
    Constant,
    Increasing,
}

impl EmploymentTrend {
    pub fn from_derivative(d: f64) -> Self {
        if d < 0.0 {
            EmploymentTrend::Declining
        } else if d > 0.0 {
            EmploymentTrend::Increasing
        } else {
            EmploymentTrend::Constant
        }
    }
}

impl fmt::Display for EmploymentTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentTrend::Declining => write!(f, "Employment declining"),
            EmploymentTrend::Constant => write!(f, "Employment constant"),
            EmploymentTrend::Increasing => write!(f, "Employment increasing"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Construction-time failures. A model either satisfies every invariant or
/// does not exist.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Wage floor w_bar={w_bar} must be > equilibrium wage w*={w_star:.4} to be binding")]
    NonBindingWageFloor { w_bar: f64, w_star: f64 },

    #[error("Invalid time index t={t}: must be in [0, 1]")]
    InvalidTime { t: f64 },
}

impl ModelError {
    fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        ModelError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawParams {
        RawParams {
            a_s: 5.0,
            b_s: 0.5,
            a_d0: 20.0,
            b_d: 1.0,
            k: 3.0,
            w_bar: 12.0,
            t: 0.0,
        }
    }

    // -- Validation --

    #[test]
    fn test_valid_params_solve_equilibrium() {
        let p = raw().validate().unwrap();
        assert!((p.equilibrium_labor() - 10.0).abs() < 1e-12);
        assert!((p.equilibrium_wage() - 10.0).abs() < 1e-12);
        assert!(p.w_bar() > p.equilibrium_wage());
    }

    #[test]
    fn test_zero_supply_slope_rejected() {
        let err = RawParams { b_s: 0.0, ..raw() }.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { name: "b_s", .. }));
    }

    #[test]
    fn test_zero_demand_slope_rejected() {
        let err = RawParams { b_d: 0.0, ..raw() }.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { name: "b_d", .. }));
    }

    #[test]
    fn test_negative_slope_rejected() {
        let err = RawParams { b_s: -0.5, ..raw() }.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { name: "b_s", .. }));
    }

    #[test]
    fn test_negative_shift_rejected() {
        let err = RawParams { k: -0.1, ..raw() }.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { name: "k", .. }));
    }

    #[test]
    fn test_zero_shift_allowed() {
        assert!(RawParams { k: 0.0, ..raw() }.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = RawParams { a_s: f64::NAN, ..raw() }.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { name: "a_s", .. }));

        let err = RawParams { w_bar: f64::INFINITY, ..raw() }.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { name: "w_bar", .. }));
    }

    #[test]
    fn test_equilibrium_overflow_rejected() {
        // Finite inputs whose difference exceeds f64::MAX
        let err = RawParams { a_s: -1e308, a_d0: 1e308, ..raw() }.validate().unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { name: "l_star", .. }));
    }

    #[test]
    fn test_floor_at_equilibrium_not_binding() {
        let err = RawParams { w_bar: 10.0, ..raw() }.validate().unwrap_err();
        match err {
            ModelError::NonBindingWageFloor { w_bar, w_star } => {
                assert_eq!(w_bar, 10.0);
                assert!((w_star - 10.0).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_floor_below_equilibrium_not_binding() {
        let err = RawParams { w_bar: 8.0, ..raw() }.validate().unwrap_err();
        assert!(matches!(err, ModelError::NonBindingWageFloor { .. }));
    }

    #[test]
    fn test_default_time_outside_unit_interval() {
        let err = RawParams { t: 1.5, ..raw() }.validate().unwrap_err();
        assert_eq!(err, ModelError::InvalidTime { t: 1.5 });

        let err = RawParams { t: -0.1, ..raw() }.validate().unwrap_err();
        assert_eq!(err, ModelError::InvalidTime { t: -0.1 });
    }

    #[test]
    fn test_time_bounds_inclusive() {
        assert!(RawParams { t: 0.0, ..raw() }.validate().is_ok());
        assert!(RawParams { t: 1.0, ..raw() }.validate().is_ok());
    }

    #[test]
    fn test_new_matches_validate() {
        let p = LaborMarketParams::new(5.0, 0.5, 20.0, 1.0, 3.0, 12.0, 0.25).unwrap();
        assert_eq!(p.raw(), RawParams { t: 0.25, ..raw() });
        assert_eq!(p.k(), 3.0);
        assert_eq!(p.t(), 0.25);
    }

    #[test]
    fn test_try_from_raw() {
        let p = LaborMarketParams::try_from(raw()).unwrap();
        assert_eq!(RawParams::from(p), raw());
    }

    // -- Serde --

    #[test]
    fn test_deserialize_runs_validation() {
        let ok: LaborMarketParams =
            toml::from_str("a_s = 5.0\nb_s = 0.5\na_d0 = 20.0\nb_d = 1.0\nk = 3.0\nw_bar = 12.0")
                .unwrap();
        assert_eq!(ok.t(), 0.0);

        let err = toml::from_str::<LaborMarketParams>(
            "a_s = 5.0\nb_s = 0.5\na_d0 = 20.0\nb_d = 1.0\nk = 3.0\nw_bar = 9.0",
        )
        .unwrap_err();
        assert!(err.to_string().contains("binding"));
    }

    #[test]
    fn test_serialize_as_raw_params() {
        let params = LaborMarketParams::new(5.0, 0.5, 20.0, 1.0, 3.0, 12.0, 0.5).unwrap();
        let text = toml::to_string(&params).unwrap();

        let keys: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_once(" = ").map(|(k, _)| k.trim()))
            .collect();
        assert_eq!(keys, vec!["a_s", "b_s", "a_d0", "b_d", "k", "w_bar", "t"]);
        assert!(!text.contains("l_star"));
        assert!(!text.contains("w_star"));

        let parsed: LaborMarketParams = toml::from_str(&text).unwrap();
        assert_eq!(parsed, params);
    }

    // -- Display --

    #[test]
    fn test_snapshot_display() {
        let s = MarketSnapshot {
            t: 0.25,
            demand_intercept: 19.25,
            employment: 7.25,
            labor_supplied: 14.0,
            unemployment: 6.75,
        };
        assert_eq!(s.to_string(), "t=0.25: Employment=7.2500, Unemployment=6.7500");
    }

    #[test]
    fn test_trend_from_derivative() {
        assert_eq!(EmploymentTrend::from_derivative(-3.0), EmploymentTrend::Declining);
        assert_eq!(EmploymentTrend::from_derivative(0.0), EmploymentTrend::Constant);
        assert_eq!(EmploymentTrend::from_derivative(-0.0), EmploymentTrend::Constant);
        assert_eq!(EmploymentTrend::from_derivative(1.0), EmploymentTrend::Increasing);
        assert_eq!(EmploymentTrend::Declining.to_string(), "Employment declining");
    }

    #[test]
    fn test_error_messages() {
        let err = ModelError::NonBindingWageFloor { w_bar: 9.0, w_star: 10.0 };
        assert_eq!(
            err.to_string(),
            "Wage floor w_bar=9 must be > equilibrium wage w*=10.0000 to be binding"
        );
        let err = ModelError::InvalidTime { t: 2.0 };
        assert_eq!(err.to_string(), "Invalid time index t=2: must be in [0, 1]");
    }
}
