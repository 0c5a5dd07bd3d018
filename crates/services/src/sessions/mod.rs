mod batch;
mod progress;
mod service;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use batch::Batch;
pub use progress::UsageCounts;
pub use service::InterviewSession;
