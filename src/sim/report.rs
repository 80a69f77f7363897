use std::{fmt, io::Write};

use average::{Estimate, Mean};

use crate::core::CompletedProcess;

/// Writes one `pid arrival finish waiting` line per process, in the order
/// given.
pub fn write_report<W: Write>(mut out: W, completed: &[CompletedProcess]) -> std::io::Result<()> {
    for process in completed {
        writeln!(
            out,
            "{} {} {} {}",
            process.pid, process.arrival, process.finish, process.waiting
        )?;
    }
    out.flush()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub processes: usize,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

impl Summary {
    pub fn from_completed(completed: &[CompletedProcess]) -> Self {
        Self {
            processes: completed.len(),
            avg_waiting: avg(completed.iter().map(|p| p.waiting as f64)),
            avg_turnaround: avg(completed.iter().map(|p| p.turnaround() as f64)),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The average wait time was {:.2}, and the average turnaround time {:.2}.",
            self.avg_waiting, self.avg_turnaround
        )
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    let mean: Mean = iter.collect();
    if mean.is_empty() { 0.0 } else { mean.estimate() }
}
