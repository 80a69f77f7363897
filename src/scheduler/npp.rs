use super::Scheduler;
use crate::{
    core::{ProcessQueue, SchedCtx},
    error::Result,
};

/// Non-preemptive priority. The running process keeps the CPU for its whole
/// burst; arrivals are admitted and the ready queue re-sorted every tick so
/// the next pick is the lowest priority value, first-ready among ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct NppScheduler;

impl Scheduler for NppScheduler {
    fn name(&self) -> &'static str {
        "NPP"
    }

    fn order_ready(&self, ready: &mut ProcessQueue) {
        if !ready.is_empty() {
            ready.reorder_by_priority();
        }
    }

    fn run(&mut self, ctx: &mut SchedCtx) -> Result<()> {
        let mut running = self.start(ctx)?;

        while running {
            let burst = match ctx.current() {
                Some(record) => record.burst(),
                None => break,
            };

            for _ in 0..burst {
                ctx.advance_time();
                ctx.admit();
                self.order_ready(&mut ctx.ready);
            }

            ctx.complete_current()?;
            // Catch anything arriving on the completion tick itself
            ctx.admit();
            self.order_ready(&mut ctx.ready);

            running = self.dispatch_next(ctx)?;
        }

        Ok(())
    }
}
