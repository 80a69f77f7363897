pub mod config;
pub mod driver;
pub mod generator;
pub mod report;
pub mod workload;

pub use config::{Algorithm, Policy, SimConfig};
pub use driver::{Sim, SimOutcome, dispatch};
pub use generator::{WorkloadParams, bernoulli_workload};
pub use report::{Summary, write_report};
pub use workload::{format_workload, parse_workload};
