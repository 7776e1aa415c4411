pub mod config;
pub mod logging;

pub mod query;
pub mod registry;
pub mod value;
