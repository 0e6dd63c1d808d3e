//! Minimal configuration module for orbit core
//!
//! Only exports data types. All discovery logic is in the CLI layer.

pub mod types;

pub use types::{RouteSpec, RouteTableFile};
