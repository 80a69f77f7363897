use std::collections::TryReserveError;

use thiserror::Error;

use crate::core::{Pid, Ticks};

pub type Result<T> = std::result::Result<T, SchedError>;

#[derive(Debug, Error)]
pub enum SchedError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Pop from an empty queue. Only reachable through a scheduling-logic defect.
    #[error("attempted to pop from the empty {0} queue")]
    EmptyQueue(&'static str),

    #[error("no process is running at t={now}")]
    NoRunningProcess { now: Ticks },

    #[error("invalid descriptor for pid {pid}: {reason}")]
    InvalidDescriptor { pid: Pid, reason: String },

    #[error("malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("unable to allocate process records")]
    AllocationFailure(#[from] TryReserveError),
}
