//! Labor market with a binding wage floor and dynamic demand adjustment.
//!
//! Library crate exposing the model, its configuration and chart rendering
//! for use by integration tests and the binary entry point.

pub mod config;
pub mod model;
pub mod plot;
pub mod types;

pub use model::summary::ModelSummary;
pub use model::LaborMarketModel;
pub use types::{EmploymentTrend, LaborMarketParams, MarketSnapshot, ModelError, RawParams};
