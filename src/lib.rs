// Course schedule search and combination backend.
//
// The algorithmic core (candidate grouping, combination enumeration,
// conflict detection, blame attribution) lives under `algorithm` and is pure
// and synchronous; `db` and `server` are thin I/O wrappers around it.

pub mod algorithm;
pub mod analytics;
pub mod db;
pub mod models;
pub mod server;

pub use server::run_server;
