//! Data core for a multi-panel workforce & production dashboard.
//!
//! Loads CSV-sourced metrics, applies the sidebar filter selection, and
//! produces the filtered tables and monthly trend series the panel layer
//! renders. The UI, charting and localization layers are external
//! collaborators: they hand this crate a [`filter::FilterSelection`] and
//! receive tabular data back.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod panels;
pub mod schema;
pub mod session;
pub mod summary;

pub use aggregate::{aggregate_monthly, rolling_mean, with_rolling_mean, ColumnAgg, Reducer};
pub use config::{ColumnRegistry, DatasetKey, DatasetSource, FacilityConfig, KpiThresholds};
pub use error::DashboardError;
pub use filter::{apply_filters, unique_options, FilterField, FilterSelection};
pub use loader::Loader;
pub use panels::PanelId;
pub use session::{DashboardContext, Language, NavigationMode, SessionState};
