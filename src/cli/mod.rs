//! Command-line front end: `passwordless <command>`.
//!
//! Settings come from flags or `PASSWORDLESS_*` environment variables; the API
//! secret is never printed, not even in `--help`.

pub mod actions;
pub mod globals;
pub mod telemetry;

pub mod commands;
pub mod dispatch;

mod start;
pub use self::start::start;
