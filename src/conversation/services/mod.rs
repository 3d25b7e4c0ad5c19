//! Application services for opening threads and running message turns.

mod runs;
mod threads;

pub use runs::{PollPolicy, RunCoordinator, RunServiceError, RunServiceResult};
pub use threads::{ThreadManager, ThreadServiceError, ThreadServiceResult};
