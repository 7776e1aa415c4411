//! CLI command handlers, one file per command.

mod append_args;
mod get_param;
mod resolve;
mod routes;
mod set_arg;

pub use append_args::run_append_args;
pub use get_param::run_get_param;
pub use resolve::run_resolve;
pub use routes::run_routes;
pub use set_arg::run_set_arg;
