pub mod cli;
pub mod config;
pub mod error;
pub mod experiment;
pub mod generation;
pub mod graph;
pub mod logging;
pub mod mis;
pub mod report;

pub use error::{MisError, Result};
