//! Timing experiments over the maximal independent set constructions

pub mod demo;
pub mod harness;
pub mod sweep;

pub use demo::{run_demo, DemoOutcome, DemoRun};
pub use harness::{average_metrics, measure, run_trials, Metrics, Sample};
pub use sweep::{scaling_sweep, scaling_sweep_with, SweepRow};
