pub mod runner;

pub use runner::{run, RunError, RunSummary};
