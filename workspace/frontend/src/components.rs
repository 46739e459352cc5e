pub mod auth;
pub mod common;
pub mod dashboard;
pub mod orders;
pub mod upload;
