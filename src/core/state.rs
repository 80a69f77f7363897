pub type Pid = u32;
pub type Ticks = u64;
// Lower value runs first
pub type Priority = i32;

/// Immutable process description as it comes out of the workload file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: Priority,
}

impl ProcessDescriptor {
    pub const fn new(pid: Pid, arrival: Ticks, burst: Ticks, priority: Priority) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority,
        }
    }
}

/// A process as the simulation sees it: the descriptor plus the state that
/// changes while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    desc: ProcessDescriptor,
    leftover: Ticks,
    finish: Option<Ticks>,
    waiting: Option<Ticks>,
}

impl ProcessRecord {
    pub fn new(desc: ProcessDescriptor) -> Self {
        Self {
            desc,
            leftover: desc.burst,
            finish: None,
            waiting: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.desc.pid
    }

    pub fn arrival(&self) -> Ticks {
        self.desc.arrival
    }

    pub fn burst(&self) -> Ticks {
        self.desc.burst
    }

    pub fn priority(&self) -> Priority {
        self.desc.priority
    }

    pub fn leftover(&self) -> Ticks {
        self.leftover
    }

    pub fn finish(&self) -> Option<Ticks> {
        self.finish
    }

    pub fn waiting(&self) -> Option<Ticks> {
        self.waiting
    }

    pub fn is_complete(&self) -> bool {
        self.finish.is_some()
    }

    // Round robin accounting; returns what is left afterwards
    pub(crate) fn consume_tick(&mut self) -> Ticks {
        debug_assert!(
            self.leftover > 0,
            "Process {} consumed a tick with nothing left",
            self.desc.pid
        );
        self.leftover = self.leftover.saturating_sub(1);
        self.leftover
    }

    pub(crate) fn mark_completed(&mut self, now: Ticks) {
        debug_assert!(
            self.finish.is_none(),
            "Process {} completed twice",
            self.desc.pid
        );
        debug_assert!(
            now >= self.desc.arrival + self.desc.burst,
            "Process {} finished at t={now} before it could have run its burst",
            self.desc.pid
        );

        self.finish = Some(now);
        self.waiting = Some(now - self.desc.arrival - self.desc.burst);
    }

    pub fn completed(&self) -> Option<CompletedProcess> {
        Some(CompletedProcess {
            pid: self.desc.pid,
            arrival: self.desc.arrival,
            burst: self.desc.burst,
            finish: self.finish?,
            waiting: self.waiting?,
        })
    }
}

/// One line of the report, in completion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedProcess {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub finish: Ticks,
    pub waiting: Ticks,
}

impl CompletedProcess {
    pub fn turnaround(&self) -> Ticks {
        self.finish - self.arrival
    }
}
