use rand::prelude::*;

use crate::core::{Pid, Priority, ProcessDescriptor, Ticks};

/// Bernoulli arrival process: on each tick a process arrives with
/// probability `p_arrival`, and is short with probability `p_short`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadParams {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_burst: Ticks,
    pub long_burst: Ticks,
    pub max_priority: Priority,
}

impl Default for WorkloadParams {
    fn default() -> Self {
        Self {
            ticks: 100,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            max_priority: 4,
        }
    }
}

/// Same `params` and `seed` always produce the same workload. Pids count up
/// from 1 in arrival order.
pub fn bernoulli_workload(params: &WorkloadParams, seed: u64) -> Vec<ProcessDescriptor> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut descriptors = Vec::new();

    for t in 0..params.ticks {
        if rng.random::<f64>() < params.p_arrival {
            let burst = if rng.random::<f64>() < params.p_short {
                params.short_burst
            } else {
                params.long_burst
            };
            let priority = rng.random_range(0..=params.max_priority.max(0));

            descriptors.push(ProcessDescriptor::new(
                descriptors.len() as Pid + 1,
                t,
                burst.max(1),
                priority,
            ));
        }
    }

    descriptors
}
