use log::{info, warn};
use rustc_hash::FxHashSet;

use super::config::{Policy, SimConfig};
use crate::{
    core::{
        CompletedProcess, ProcessDescriptor, ProcessQueue, ProcessRecord, SchedCtx, SchedEvent,
        Ticks,
    },
    error::{Result, SchedError},
    scheduler::{NppScheduler, RoundRobinScheduler, Scheduler},
};

pub struct Sim<S: Scheduler> {
    pub ctx: SchedCtx,
    pub scheduler: S,
}

/// Everything a run produced, in completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimOutcome {
    pub algorithm: &'static str,
    pub completed: Vec<CompletedProcess>,
    pub events: Vec<SchedEvent>,
    pub makespan: Ticks,
}

impl<S: Scheduler> Sim<S> {
    /// Imports `descriptors` in the order given. The first one is the process
    /// that starts at tick 0 if it has arrived by then.
    pub fn new(
        descriptors: impl IntoIterator<Item = ProcessDescriptor>,
        scheduler: S,
    ) -> Result<Self> {
        let descriptors = descriptors.into_iter();
        let mut initial = ProcessQueue::new("ready");
        initial.try_reserve(descriptors.size_hint().0)?;

        let mut seen = FxHashSet::default();
        for desc in descriptors {
            if desc.burst == 0 {
                return Err(SchedError::InvalidDescriptor {
                    pid: desc.pid,
                    reason: "burst time must be positive".into(),
                });
            }
            if !seen.insert(desc.pid) {
                warn!("pid {} appears more than once in the workload", desc.pid);
            }
            initial.try_reserve(1)?;
            initial.push_back(ProcessRecord::new(desc));
        }

        Ok(Self {
            ctx: SchedCtx::new(initial),
            scheduler,
        })
    }

    pub fn run(mut self) -> Result<SimOutcome> {
        let algorithm = self.scheduler.name();
        info!(
            "Starting {} simulation with {} processes",
            algorithm,
            self.ctx.imported()
        );

        self.scheduler.run(&mut self.ctx)?;

        debug_assert!(
            self.ctx.ready.is_empty() && self.ctx.pending.is_empty(),
            "Scheduler returned with processes still queued"
        );
        debug_assert!(self.ctx.current().is_none(), "Scheduler returned mid-burst");

        let makespan = self.ctx.now;
        let steps = self.ctx.observer().steps();
        let imported = self.ctx.imported();
        let (output, events) = self.ctx.into_parts();
        let completed: Vec<_> = output.iter().filter_map(ProcessRecord::completed).collect();
        debug_assert_eq!(completed.len(), imported, "Lost processes during the run");

        info!(
            "{} simulation finished at t={} ({} processes, {} observed steps)",
            algorithm,
            makespan,
            completed.len(),
            steps
        );

        Ok(SimOutcome {
            algorithm,
            completed,
            events,
            makespan,
        })
    }
}

/// Validates `config`, applies its import limit and runs the selected
/// algorithm over `descriptors`.
pub fn dispatch(
    descriptors: impl IntoIterator<Item = ProcessDescriptor>,
    config: &SimConfig,
) -> Result<SimOutcome> {
    let policy = config.validate()?;
    let descriptors = descriptors
        .into_iter()
        .take(config.import_limit().unwrap_or(usize::MAX));

    match policy {
        Policy::Npp => Sim::new(descriptors, NppScheduler)?.run(),
        Policy::Rr { quantum } => Sim::new(descriptors, RoundRobinScheduler::new(quantum))?.run(),
    }
}
