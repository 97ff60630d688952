//! Human-readable model report.

use std::fmt;

use super::LaborMarketModel;
use crate::types::{EmploymentTrend, LaborMarketParams, MarketSnapshot};

const RULE_WIDTH: usize = 50;

/// Everything the report prints, evaluated at one time index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSummary {
    pub params: LaborMarketParams,
    pub snapshot: MarketSnapshot,
    pub employment_derivative: f64,
    pub trend: EmploymentTrend,
}

impl ModelSummary {
    fn unemployment_note(&self) -> &'static str {
        if self.snapshot.unemployment == 0.0 {
            "No unemployment"
        } else if self.trend == EmploymentTrend::Declining {
            "Unemployment increasing"
        } else {
            "Unemployment present"
        }
    }
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        let s = &self.snapshot;
        let d_l = self.employment_derivative;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "Labor Market Model Summary")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Parameters:")?;
        writeln!(f, "  Supply intercept (a_S): {:.4}", p.a_s())?;
        writeln!(f, "  Supply slope (b_S): {:.4}", p.b_s())?;
        writeln!(f, "  Demand intercept at t=0 (a_D0): {:.4}", p.a_d0())?;
        writeln!(f, "  Demand slope (b_D): {:.4}", p.b_d())?;
        writeln!(f, "  Demand shift magnitude (k): {:.4}", p.k())?;
        writeln!(f, "  Wage floor (w_bar): {:.4}", p.w_bar())?;
        writeln!(f, "  Time index (t): {:.4}", s.t)?;
        writeln!(f)?;
        writeln!(f, "Initial Equilibrium (Pre-Wage Floor):")?;
        writeln!(f, "  Equilibrium labor (L*): {:.4}", p.equilibrium_labor())?;
        writeln!(f, "  Equilibrium wage (w*): {:.4}", p.equilibrium_wage())?;
        writeln!(f)?;
        writeln!(f, "At Time t = {:.4}:", s.t)?;
        writeln!(f, "  Demand intercept (a_D(t)): {:.4}", s.demand_intercept)?;
        writeln!(f, "  Employment (L(t)): {:.4}", s.employment)?;
        writeln!(f, "  Labor supplied (L_S): {:.4}", s.labor_supplied)?;
        writeln!(f, "  Unemployment (U(t)): {:.4}", s.unemployment)?;
        writeln!(f, "  Employment derivative (dL/dt): {d_l:.4}")?;
        writeln!(f)?;
        writeln!(f, "Comparative Statics:")?;
        writeln!(f, "  Employment change rate: {d_l:.4} (negative for k>0)")?;
        writeln!(f, "  {}", self.trend)?;
        writeln!(f, "  {}", self.unemployment_note())?;
        writeln!(f, "{rule}")
    }
}

impl LaborMarketModel {
    /// Report values at time `t` (or the default when `None`).
    pub fn summary_view(&self, t: impl Into<Option<f64>>) -> ModelSummary {
        ModelSummary {
            params: *self.params(),
            snapshot: self.snapshot(t),
            employment_derivative: self.employment_derivative(),
            trend: self.employment_trend(),
        }
    }

    /// Report at the parameters' default time index.
    pub fn summary(&self) -> String {
        self.summary_at(None)
    }

    /// Report at time `t` (or the default when `None`).
    pub fn summary_at(&self, t: impl Into<Option<f64>>) -> String {
        self.summary_view(t).to_string()
    }
}
