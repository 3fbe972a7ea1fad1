//! Request handlers for client records and exports.

mod clients;
mod export;

pub use clients::*;
pub use export::*;
