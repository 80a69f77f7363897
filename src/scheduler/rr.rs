use std::num::NonZeroU64;

use super::Scheduler;
use crate::{core::SchedCtx, error::Result};

/// Round robin with a fixed quantum.
///
/// Admission is skipped on the last tick of a full slice. The preempted
/// process is re-queued first and admission for that tick runs afterwards, so
/// an arrival that coincides with a quantum expiry lands right behind the
/// process that was just preempted.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&mut self, ctx: &mut SchedCtx) -> Result<()> {
        let quantum = self.quantum.get();
        let mut running = self.start(ctx)?;

        while running {
            let mut leftover = match ctx.current() {
                Some(record) => record.leftover(),
                None => break,
            };

            for slice in 0..quantum {
                ctx.advance_time();
                leftover = ctx.consume_tick()?;
                if slice < quantum - 1 {
                    ctx.admit();
                }
                if leftover == 0 {
                    break;
                }
            }

            if leftover == 0 {
                ctx.complete_current()?;
            } else {
                ctx.preempt_current()?;
            }
            ctx.admit();

            running = self.dispatch_next(ctx)?;
        }

        Ok(())
    }
}
