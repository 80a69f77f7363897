pub mod npp;
pub mod rr;

use crate::{
    core::{ProcessQueue, SchedCtx},
    error::Result,
};
pub use npp::NppScheduler;
pub use rr::RoundRobinScheduler;

pub trait Scheduler {
    fn name(&self) -> &'static str;

    /// Arranges the ready queue before the next pick. FIFO unless overridden.
    fn order_ready(&self, _ready: &mut ProcessQueue) {}

    /// Drives `ctx` until every imported process has completed.
    fn run(&mut self, ctx: &mut SchedCtx) -> Result<()>;

    /// Puts the first process on the CPU. Returns `false` if there is nothing
    /// to run at all.
    fn start(&self, ctx: &mut SchedCtx) -> Result<bool> {
        match ctx.take_initial()? {
            Some(first) => {
                ctx.set_running(first);
                Ok(true)
            }
            None => self.dispatch_next(ctx),
        }
    }

    fn dispatch_next(&self, ctx: &mut SchedCtx) -> Result<bool> {
        ctx.dispatch_next(|ready| self.order_ready(ready))
    }
}
