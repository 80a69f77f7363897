use std::fmt;

use crate::core::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    /// Moved from the pending pool to the ready queue
    Admitted { pid: Pid, at: Ticks },
    /// Started (or resumed) a run slice
    Dispatched { pid: Pid, at: Ticks },
    /// Quantum expired with work left; back on the ready queue
    Preempted { pid: Pid, at: Ticks, leftover: Ticks },
    Completed { pid: Pid, at: Ticks },
    // Nothing on the CPU while arrivals are still pending
    CpuIdle { at: Ticks },
}

impl fmt::Display for SchedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admitted { pid, at } => write!(f, "t={at} admitted pid={pid}"),
            Self::Dispatched { pid, at } => write!(f, "t={at} dispatched pid={pid}"),
            Self::Preempted { pid, at, leftover } => {
                write!(f, "t={at} preempted pid={pid} leftover={leftover}")
            }
            Self::Completed { pid, at } => write!(f, "t={at} completed pid={pid}"),
            Self::CpuIdle { at } => write!(f, "t={at} cpu idle"),
        }
    }
}
