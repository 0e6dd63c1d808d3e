//! Route table discovery for the CLI

pub mod loader;

pub use loader::{CliConfigLoader, LoadedTable};
