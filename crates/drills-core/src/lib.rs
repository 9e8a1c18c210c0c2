pub mod config;
pub mod logging;

pub mod backoff;
pub mod classify;
pub mod functions;
pub mod iteration;
pub mod loops;
pub mod prompt;
pub mod scope;
