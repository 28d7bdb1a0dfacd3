pub mod entry;
pub mod overtime;
pub mod project;

pub use entry::{EntryStatus, TimeEntry};
pub use overtime::{OvertimeRequest, OvertimeStatus};
pub use project::{Project, WeekSchedule};
