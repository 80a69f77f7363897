//! Deterministic single-CPU scheduling simulator for non-preemptive priority
//! and round robin over a discrete tick clock.

pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use error::{Result, SchedError};
pub use scheduler::Scheduler;
pub use sim::{Algorithm, Sim, SimConfig, SimOutcome, dispatch};
