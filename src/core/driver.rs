use log::{debug, trace};

use super::{
    admission,
    event::SchedEvent,
    observer::Observer,
    queue::ProcessQueue,
    state::{ProcessRecord, Ticks},
};
use crate::error::{Result, SchedError};

/// The clock plus the three queues and the running slot. A record lives in
/// exactly one of them at any instant.
#[derive(Debug)]
pub struct SchedCtx {
    pub now: Ticks,
    pub ready: ProcessQueue,
    pub pending: ProcessQueue,
    pub output: ProcessQueue,
    current: Option<ProcessRecord>,
    events: Vec<SchedEvent>,
    imported: usize,
    observer: Observer,
}

impl SchedCtx {
    /// `initial` is the imported process set, in input order.
    pub fn new(initial: ProcessQueue) -> Self {
        let imported = initial.len();

        Self {
            now: 0,
            ready: initial,
            pending: ProcessQueue::new("pending"),
            output: ProcessQueue::new("output"),
            current: None,
            events: Vec::new(),
            imported,
            observer: Observer::new(),
        }
    }

    pub fn imported(&self) -> usize {
        self.imported
    }

    pub fn current(&self) -> Option<&ProcessRecord> {
        self.current.as_ref()
    }

    pub fn events(&self) -> &[SchedEvent] {
        &self.events
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn into_parts(self) -> (ProcessQueue, Vec<SchedEvent>) {
        (self.output, self.events)
    }

    pub fn advance_time(&mut self) {
        self.now = self.now.saturating_add(1);
        self.observe();
    }

    fn observe(&mut self) {
        let mut observer = std::mem::take(&mut self.observer);
        observer.observe(self);
        self.observer = observer;
    }

    fn record(&mut self, event: SchedEvent) {
        self.events.push(event);
    }

    /// Runs arrival admission for the current tick.
    pub fn admit(&mut self) -> usize {
        let admitted = admission::admit(&mut self.ready, &mut self.pending, self.now);
        let start = self.ready.len() - admitted;
        for pid in self.ready.iter().skip(start).map(ProcessRecord::pid).collect::<Vec<_>>() {
            trace!("t={} admitted pid={}", self.now, pid);
            self.record(SchedEvent::Admitted { pid, at: self.now });
        }
        admitted
    }

    /// Takes the head of the initial ready set as the first process to run,
    /// bypassing any ordering policy. Everything is parked in the pending
    /// pool and admitted on its arrival tick; if the head arrives after
    /// tick 0 the CPU idles until it does, even with other processes ready.
    pub fn take_initial(&mut self) -> Result<Option<ProcessRecord>> {
        let Some((head_pid, head_arrival)) = self.ready.front().map(|r| (r.pid(), r.arrival()))
        else {
            return Ok(None);
        };

        let mut pending = ProcessQueue::new("pending");
        pending.extend(std::mem::replace(&mut self.ready, ProcessQueue::new("ready")));
        self.pending = pending;

        let mut admitted = self.admit();
        while self.now < head_arrival {
            self.advance_time();
            debug!("t={} cpu idle until pid {} arrives", self.now, head_pid);
            self.record(SchedEvent::CpuIdle { at: self.now });
            admitted = self.admit();
        }

        // The head was first in the pending pool, so it leads its arrival batch
        let head_at = self.ready.len() - admitted;
        self.ready
            .remove(head_at)
            .map(Some)
            .ok_or(SchedError::EmptyQueue("ready"))
    }

    pub fn set_running(&mut self, record: ProcessRecord) {
        debug_assert!(
            self.current.is_none(),
            "pid {} dispatched while another process is running",
            record.pid()
        );
        debug_assert!(
            record.arrival() <= self.now,
            "pid {} dispatched before its arrival",
            record.pid()
        );

        debug!("t={} dispatched pid={}", self.now, record.pid());
        self.record(SchedEvent::Dispatched {
            pid: record.pid(),
            at: self.now,
        });
        self.current = Some(record);
    }

    /// Advances the clock while nothing is ready but arrivals remain, then
    /// lets `order` arrange the ready queue and dispatches its head.
    /// Returns `false` once both queues are drained.
    pub fn dispatch_next(&mut self, order: impl FnOnce(&mut ProcessQueue)) -> Result<bool> {
        while self.ready.is_empty() && !self.pending.is_empty() {
            self.advance_time();
            debug!("t={} cpu idle", self.now);
            self.record(SchedEvent::CpuIdle { at: self.now });
            self.admit();
        }

        if self.ready.is_empty() {
            return Ok(false);
        }

        order(&mut self.ready);
        let next = self.ready.pop_front()?;
        self.set_running(next);
        Ok(true)
    }

    /// Charges one tick of service to the running process and returns its
    /// leftover burst.
    pub fn consume_tick(&mut self) -> Result<Ticks> {
        let now = self.now;
        let record = self
            .current
            .as_mut()
            .ok_or(SchedError::NoRunningProcess { now })?;
        Ok(record.consume_tick())
    }

    pub fn complete_current(&mut self) -> Result<()> {
        let mut record = self
            .current
            .take()
            .ok_or(SchedError::NoRunningProcess { now: self.now })?;
        record.mark_completed(self.now);

        debug!(
            "t={} completed pid={} waiting={:?}",
            self.now,
            record.pid(),
            record.waiting()
        );
        self.record(SchedEvent::Completed {
            pid: record.pid(),
            at: self.now,
        });
        self.output.push_back(record);
        Ok(())
    }

    /// Puts the running process back at the tail of the ready queue.
    pub fn preempt_current(&mut self) -> Result<()> {
        let record = self
            .current
            .take()
            .ok_or(SchedError::NoRunningProcess { now: self.now })?;

        debug!(
            "t={} preempted pid={} leftover={}",
            self.now,
            record.pid(),
            record.leftover()
        );
        self.record(SchedEvent::Preempted {
            pid: record.pid(),
            at: self.now,
            leftover: record.leftover(),
        });
        self.ready.push_back(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ProcessDescriptor;

    fn ctx_of(descs: &[ProcessDescriptor]) -> SchedCtx {
        let mut initial = ProcessQueue::new("ready");
        initial.extend(descs.iter().copied().map(ProcessRecord::new));
        SchedCtx::new(initial)
    }

    #[test]
    fn initial_pick_ignores_priority_and_admits_tick_zero() {
        let mut ctx = ctx_of(&[
            ProcessDescriptor::new(1, 0, 5, 9),
            ProcessDescriptor::new(2, 0, 3, 1),
            ProcessDescriptor::new(3, 4, 1, 0),
        ]);

        let first = ctx.take_initial().unwrap().unwrap();
        assert_eq!(first.pid(), 1);
        assert_eq!(ctx.ready.iter().map(ProcessRecord::pid).collect::<Vec<_>>(), vec![2]);
        assert_eq!(ctx.pending.iter().map(ProcessRecord::pid).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn late_head_still_runs_first() {
        let mut ctx = ctx_of(&[
            ProcessDescriptor::new(1, 3, 2, 5),
            ProcessDescriptor::new(2, 0, 1, 0),
            ProcessDescriptor::new(3, 3, 1, 0),
        ]);

        let first = ctx.take_initial().unwrap().unwrap();
        assert_eq!(first.pid(), 1);
        assert_eq!(ctx.now, 3);
        assert_eq!(ctx.ready.iter().map(ProcessRecord::pid).collect::<Vec<_>>(), vec![2, 3]);
        assert!(ctx.pending.is_empty());
        let idle = ctx
            .events()
            .iter()
            .filter(|e| matches!(e, SchedEvent::CpuIdle { .. }))
            .count();
        assert_eq!(idle, 3);
    }

    #[test]
    fn dispatch_next_idles_until_an_arrival() {
        let mut ctx = ctx_of(&[
            ProcessDescriptor::new(1, 0, 1, 0),
            ProcessDescriptor::new(2, 4, 2, 0),
        ]);
        let first = ctx.take_initial().unwrap().unwrap();
        ctx.set_running(first);
        ctx.advance_time();
        ctx.complete_current().unwrap();
        ctx.admit();

        assert!(ctx.dispatch_next(|_| {}).unwrap());
        assert_eq!(ctx.now, 4);
        assert_eq!(ctx.current().map(ProcessRecord::pid), Some(2));
        assert!(ctx.events().contains(&SchedEvent::CpuIdle { at: 2 }));
        assert!(ctx.events().contains(&SchedEvent::CpuIdle { at: 4 }));
    }

    #[test]
    fn dispatch_next_reports_drained_queues() {
        let mut ctx = ctx_of(&[]);
        assert!(ctx.take_initial().unwrap().is_none());
        assert!(!ctx.dispatch_next(|_| {}).unwrap());
    }

    #[test]
    fn completing_without_a_running_process_is_an_error() {
        let mut ctx = ctx_of(&[]);
        assert!(matches!(
            ctx.complete_current(),
            Err(SchedError::NoRunningProcess { now: 0 })
        ));
    }
}
