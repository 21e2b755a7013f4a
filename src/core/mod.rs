//! Core module - detection loop, watch list, and process enumeration

mod detector;
mod process;
mod watchlist;

pub use detector::{DetectionResult, Detector, DetectorState, TickOutcome, POLL_INTERVAL};
pub use process::{EnumerationError, ProcessLister, SystemProcessLister};
pub use watchlist::{WatchList, DEFAULT_WATCH_LIST};
