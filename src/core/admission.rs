use super::{queue::ProcessQueue, state::Ticks};

/// Moves every pending record whose arrival equals `now` to the tail of the
/// ready queue. Pending records are each inspected once, and both queues keep
/// their relative order. Returns how many records were admitted.
pub fn admit(ready: &mut ProcessQueue, pending: &mut ProcessQueue, now: Ticks) -> usize {
    let arrived = pending.take_arrivals(now);
    let count = arrived.len();
    ready.extend(arrived);
    count
}
