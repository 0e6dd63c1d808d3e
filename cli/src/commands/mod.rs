//! CLI command implementations

pub mod interactive;
pub mod resolve;
pub mod routes;
pub mod visit;

pub use interactive::interactive_command;
pub use resolve::resolve_command;
pub use routes::routes_command;
pub use visit::visit_command;
