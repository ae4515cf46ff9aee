//! Client side of the expense risk dashboard: data model, formatting, the
//! scoring service client and the three controllers that drive the page.

pub mod api;
pub mod config;
pub mod controllers;
mod error;
pub mod format;
pub mod rows;
pub mod surface;
pub mod types;

pub use api::{HttpApi, ScoringApi};
pub use config::{DashboardConfig, SubmitMode};
pub use controllers::{
    DataTableController, FormValues, IdGenerator, MetricSlot, MetricsPoller,
    OptimisticSubmitController, RefreshOutcome,
};
pub use error::DashboardError;
pub use rows::DisplayRow;
pub use surface::{DashboardSurface, MemorySurface};
pub use types::{ExpenseRecord, MetricsSnapshot, Risk, ScoreRequest, ScoreResponse};
