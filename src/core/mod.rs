pub mod admission;
pub mod driver;
pub mod event;
pub mod observer;
pub mod queue;
pub mod state;

pub use admission::admit;
pub use driver::SchedCtx;
pub use event::SchedEvent;
pub use observer::Observer;
pub use queue::ProcessQueue;
pub use state::{CompletedProcess, Pid, Priority, ProcessDescriptor, ProcessRecord, Ticks};
