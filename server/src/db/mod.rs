//! Database module for SQLite persistence.

mod clients;
mod pool;
mod schema;

pub use clients::*;
pub use pool::*;
pub use schema::SQLITE_INIT;
