//! Chart rendering.
//!
//! Draws the market diagram (supply, demand at t, wage floor, equilibrium and
//! the unemployment gap at the floor) and the employment/unemployment
//! dynamics over `t ∈ [0, 1]`. Charts are written as SVG.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use serde::Deserialize;
use tracing::info;

use crate::model::LaborMarketModel;

/// File extension used for every chart.
pub const CHART_EXTENSION: &str = "svg";

/// File name of the dynamics chart.
pub const DYNAMICS_FILE_NAME: &str = "labor_market_dynamics.svg";

/// Samples per curve on the market diagram.
const CURVE_SAMPLES: usize = 1000;

const FONT: &str = "sans-serif";

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Output size of a chart in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
}

impl ChartStyle {
    pub fn market() -> Self {
        Self {
            width: 1000,
            height: 800,
        }
    }

    pub fn dynamics() -> Self {
        Self {
            width: 1400,
            height: 600,
        }
    }
}

/// `labor_market_t0.svg`, `labor_market_t05.svg`, `labor_market_t1.svg`, ...
pub fn snapshot_file_name(t: f64) -> String {
    let tag = t.to_string().replace('.', "");
    format!("labor_market_t{tag}.{CHART_EXTENSION}")
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Market diagram
// ---------------------------------------------------------------------------

/// Render the market at time `t` (default `t` when `None`).
///
/// `l_max` bounds the labor axis; when `None` it is
/// `max(1.5·L*, 1.2·L_S, 1.0)`.
pub fn plot_market(
    model: &LaborMarketModel,
    t: impl Into<Option<f64>>,
    l_max: Option<f64>,
    path: &Path,
    style: ChartStyle,
) -> Result<()> {
    let t = t.into().unwrap_or(model.params().t());
    ensure_parent(path)?;
    draw_market(model, t, l_max, path, style)
        .with_context(|| format!("Failed to render market chart: {}", path.display()))?;
    info!(path = %path.display(), t, "Market chart written");
    Ok(())
}

fn draw_market(
    model: &LaborMarketModel,
    t: f64,
    l_max: Option<f64>,
    path: &Path,
    style: ChartStyle,
) -> Result<()> {
    let w_bar = model.params().w_bar();
    let (l_star, w_star) = model.equilibrium();
    let l_t = model.employment_at_wage_floor(t);
    let l_s = model.labor_supplied_at_floor();
    let u_t = model.unemployment(t);

    let l_max = l_max.unwrap_or_else(|| (l_star * 1.5).max(l_s * 1.2).max(1.0));
    let w_max = (w_bar * 1.1).max(w_star * 1.2);

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Labor Market with Binding Wage Floor (t={t:.2})"),
            (FONT, 28).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..l_max, 0.0..w_max)?;

    chart
        .configure_mesh()
        .x_desc("Labor (L)")
        .y_desc("Wage (w)")
        .draw()?;

    // Keep only the part of each curve inside the visible wage range.
    let sample = |f: &dyn Fn(f64) -> f64| -> Vec<(f64, f64)> {
        (0..=CURVE_SAMPLES)
            .map(|i| l_max * i as f64 / CURVE_SAMPLES as f64)
            .map(|l| (l, f(l)))
            .filter(|&(_, w)| (0.0..=w_max).contains(&w))
            .collect()
    };

    chart
        .draw_series(LineSeries::new(
            sample(&|l: f64| model.labor_supply(l)),
            BLUE.stroke_width(2),
        ))?
        .label("Labor Supply")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            sample(&|l: f64| model.labor_demand(l, t)),
            RED.stroke_width(2),
        ))?
        .label(format!("Labor Demand (t={t:.2})"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            vec![(0.0, w_bar), (l_max, w_bar)],
            GREEN.stroke_width(2),
        ))?
        .label(format!("Wage Floor (w_bar={w_bar:.2})"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    if u_t > 0.0 && l_t > 0.0 {
        chart
            .draw_series(LineSeries::new(
                vec![(l_t, w_bar), (l_s, w_bar)],
                RED.mix(0.3).stroke_width(10),
            ))?
            .label(format!("Unemployment (U={u_t:.2})"))
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], RED.mix(0.3).stroke_width(10))
            });
    }

    chart
        .draw_series(std::iter::once(Circle::new((l_star, w_star), 6, BLACK.filled())))?
        .label(format!("Initial Equilibrium (L*={l_star:.2}, w*={w_star:.2})"))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, BLACK.filled()));

    if l_t > 0.0 {
        chart
            .draw_series(std::iter::once(Circle::new((l_t, w_bar), 6, RED.filled())))?
            .label(format!("Employment (L(t)={l_t:.2})"))
            .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));
    }

    chart
        .draw_series(std::iter::once(Circle::new((l_s, w_bar), 6, BLUE.filled())))?
        .label(format!("Labor Supplied (L_S={l_s:.2})"))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, BLUE.filled()));

    // Point annotations, nudged off the markers in data space.
    let (dx, dy) = (0.015 * l_max, 0.025 * w_max);
    let mut notes = vec![
        ("(L*, w*)", (l_star + dx, w_star - dy)),
        ("(L_S, w_bar)", (l_s + dx, w_bar + dy)),
    ];
    if l_t > 0.0 {
        notes.push(("(L(t), w_bar)", (l_t + dx, w_bar - dy)));
    }
    chart.draw_series(
        notes
            .into_iter()
            .map(|(label, at)| Text::new(label, at, (FONT, 14).into_font())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Dynamics
// ---------------------------------------------------------------------------

/// Render employment and unemployment over `num_points` times in `[0, 1]`.
pub fn plot_dynamics(
    model: &LaborMarketModel,
    num_points: usize,
    path: &Path,
    style: ChartStyle,
) -> Result<()> {
    ensure_parent(path)?;
    draw_dynamics(model, num_points, path, style)
        .with_context(|| format!("Failed to render dynamics chart: {}", path.display()))?;
    info!(path = %path.display(), num_points, "Dynamics chart written");
    Ok(())
}

fn draw_dynamics(
    model: &LaborMarketModel,
    num_points: usize,
    path: &Path,
    style: ChartStyle,
) -> Result<()> {
    let trajectory = model.trajectory(num_points);
    let employment: Vec<(f64, f64)> = trajectory.iter().map(|s| (s.t, s.employment)).collect();
    let unemployment: Vec<(f64, f64)> =
        trajectory.iter().map(|s| (s.t, s.unemployment)).collect();

    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    let series = [
        ("Employment Over Time", "Employment L(t)", employment, BLUE),
        ("Unemployment Over Time", "Unemployment U(t)", unemployment, RED),
    ];

    for (area, (title, y_desc, points, color)) in panels.iter().zip(series) {
        let y_top = points.iter().map(|&(_, y)| y).fold(0.0_f64, f64::max).max(1.0) * 1.1;

        let mut chart = ChartBuilder::on(area)
            .caption(title, (FONT, 24).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0.0..1.0, (-0.05 * y_top)..y_top)?;

        chart
            .configure_mesh()
            .x_desc("Time (t)")
            .y_desc(y_desc)
            .draw()?;

        chart.draw_series(LineSeries::new(
            vec![(0.0, 0.0), (1.0, 0.0)],
            BLACK.mix(0.5).stroke_width(1),
        ))?;
        chart.draw_series(LineSeries::new(points, color.stroke_width(2)))?;
    }

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
