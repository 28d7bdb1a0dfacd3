//! Core library for a workforce time-tracking client.
//!
//! The two pillars are [`signature`], a pointer-driven drawing surface that
//! exports signatures as PNG data URIs, and [`hours`], the `HH:MM` workday
//! arithmetic behind schedule comparisons and overtime splits. Around them
//! sit the wire [`models`], a thin backend [`api`] client, and a JSON
//! [`settings`] store.

pub mod api;
pub mod hours;
pub mod models;
pub mod settings;
pub mod signature;
pub mod utils;

pub use api::{ApiClient, ApiConfig, Operation};
pub use hours::{
    compare_ranges, format_delta, minutes_between, split_normal_and_overtime, summarize, HourSplit,
    TimeRange, WorkedSummary,
};
pub use models::{EntryStatus, OvertimeRequest, OvertimeStatus, Project, TimeEntry, WeekSchedule};
pub use settings::SettingsStore;
pub use signature::{
    CaptureStatus, Point, PointerEvent, PointerKind, PointerPhase, SignatureCapture, SurfaceFrame,
};

/// Initialize logging (reads RUST_LOG env var). Hosts embedding the library
/// may have installed their own logger already, so a second call is a no-op.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
