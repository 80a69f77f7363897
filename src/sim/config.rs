use std::{fmt, num::NonZeroU64};

use clap::ValueEnum;
use log::warn;

use crate::error::{Result, SchedError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Non-preemptive priority
    #[value(name = "NPP")]
    Npp,
    /// Round robin (requires a quantum)
    #[value(name = "RR")]
    Rr,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npp => f.write_str("NPP"),
            Self::Rr => f.write_str("RR"),
        }
    }
}

/// A configuration that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Npp,
    Rr { quantum: NonZeroU64 },
}

/// What the caller asked for, before validation. The quantum is kept signed
/// so a non-positive value can be reported rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub algorithm: Algorithm,
    pub quantum: Option<i64>,
    pub limit: Option<usize>,
}

impl SimConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
            limit: None,
        }
    }

    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<Policy> {
        match (self.algorithm, self.quantum) {
            (Algorithm::Npp, quantum) => {
                if let Some(quantum) = quantum {
                    warn!("Quantum {quantum} has no effect on NPP; ignoring it");
                }
                Ok(Policy::Npp)
            }
            (Algorithm::Rr, None) => Err(SchedError::InvalidConfiguration(
                "round robin requires a positive quantum".into(),
            )),
            (Algorithm::Rr, Some(quantum)) => u64::try_from(quantum)
                .ok()
                .and_then(NonZeroU64::new)
                .map(|quantum| Policy::Rr { quantum })
                .ok_or_else(|| {
                    SchedError::InvalidConfiguration(format!(
                        "quantum must be a positive integer, got {quantum}"
                    ))
                }),
        }
    }

    /// Zero means "import everything".
    pub fn import_limit(&self) -> Option<usize> {
        self.limit.filter(|&limit| limit > 0)
    }
}
