pub mod dashboard;
pub mod fetch;
pub mod upload;

pub use dashboard::{use_dashboard, DashboardDriver};
pub use fetch::{use_fetch_with_deps, FetchState};
pub use upload::{use_upload, UploadDriver};
