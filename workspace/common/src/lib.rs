//! Target-independent core of the order analytics dashboard.
//!
//! Everything here compiles for both the browser bundle and native test
//! runs: the REST payload schemas, the session lifecycle, date ranges,
//! formatting and the state machines behind the dashboard and the upload
//! widget. The WebAssembly frontend only wires these to the DOM and HTTP.

pub mod auth;
pub mod charts;
pub mod dashboard;
pub mod date_range;
pub mod error;
pub mod format;
pub mod geography;
pub mod metrics;
pub mod orders;
pub mod pagination;
pub mod session;
pub mod upload;

pub use auth::{CredentialsError, LoginRequest, LoginResponse, UserProfile};
pub use dashboard::{DashboardEffect, DashboardMsg, DashboardState, DashboardView, KpiCard, KpiKind};
pub use date_range::{DateRange, DateRangeError, Preset};
pub use error::ApiError;
pub use metrics::{DashboardMetrics, GeographicMetric, ProductMetric, SalesMetrics, TimeSeriesPoint};
pub use orders::{ExportQuery, Order, OrdersQuery, OrdersResponse};
pub use session::{Session, SessionStore};
pub use upload::{Candidate, FileMeta, UploadEffect, UploadMsg, UploadResponse, UploadState};
