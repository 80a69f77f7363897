use super::driver::SchedCtx;

/// Cross-checks queue membership and record state after every clock step.
/// All checks compile out of release builds.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &SchedCtx) {
        self.step += 1;

        let running = usize::from(ctx.current().is_some());
        debug_assert_eq!(
            ctx.ready.len() + ctx.pending.len() + ctx.output.len() + running,
            ctx.imported(),
            "Process count not conserved at t={}",
            ctx.now
        );

        // Admission never skips a tick, so nothing pending is overdue
        for record in &ctx.pending {
            debug_assert!(
                record.arrival() >= ctx.now,
                "Pending pid {} (arrival {}) missed admission at t={}",
                record.pid(),
                record.arrival(),
                ctx.now
            );
        }

        for record in ctx.ready.iter().chain(ctx.pending.iter()) {
            debug_assert!(
                !record.is_complete(),
                "Completed pid {} still queued",
                record.pid()
            );
            debug_assert!(
                record.leftover() > 0 && record.leftover() <= record.burst(),
                "Queued pid {} has leftover {} outside 1..={}",
                record.pid(),
                record.leftover(),
                record.burst()
            );
        }

        for record in &ctx.output {
            debug_assert!(
                record.is_complete(),
                "Output pid {} has no finish time",
                record.pid()
            );
        }

        if let Some(record) = ctx.current() {
            debug_assert!(
                record.leftover() <= record.burst(),
                "Running pid {} leftover exceeds burst",
                record.pid()
            );
        }
    }
}
