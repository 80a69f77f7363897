use std::collections::{VecDeque, vec_deque};

use super::state::{ProcessRecord, Ticks};
use crate::error::{Result, SchedError};

/// FIFO of process records that owns what it holds. Order can be rewritten
/// only through [`ProcessQueue::reorder_by_priority`].
#[derive(Debug, Clone)]
pub struct ProcessQueue {
    name: &'static str,
    records: VecDeque<ProcessRecord>,
}

impl ProcessQueue {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: VecDeque::new(),
        }
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.records.try_reserve(additional)?;
        Ok(())
    }

    pub fn push_back(&mut self, record: ProcessRecord) {
        self.records.push_back(record);
    }

    pub fn pop_front(&mut self) -> Result<ProcessRecord> {
        self.records
            .pop_front()
            .ok_or(SchedError::EmptyQueue(self.name))
    }

    pub fn front(&self) -> Option<&ProcessRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, ProcessRecord> {
        self.records.iter()
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<ProcessRecord> {
        self.records.remove(index)
    }

    /// Stable sort by ascending priority value. Equal priorities keep the
    /// order in which they became ready.
    pub fn reorder_by_priority(&mut self) {
        self.records
            .make_contiguous()
            .sort_by_key(ProcessRecord::priority);
    }

    /// Removes every record that arrives exactly at `now`, keeping the
    /// relative order of both the removed and the remaining records.
    pub(crate) fn take_arrivals(&mut self, now: Ticks) -> VecDeque<ProcessRecord> {
        let (arrived, waiting): (VecDeque<_>, VecDeque<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| record.arrival() == now);
        self.records = waiting;
        arrived
    }
}

impl Extend<ProcessRecord> for ProcessQueue {
    fn extend<T: IntoIterator<Item = ProcessRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl IntoIterator for ProcessQueue {
    type Item = ProcessRecord;
    type IntoIter = vec_deque::IntoIter<ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProcessQueue {
    type Item = &'a ProcessRecord;
    type IntoIter = vec_deque::Iter<'a, ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
