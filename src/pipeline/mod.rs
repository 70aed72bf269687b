//! The "processing" sequence shown while a digest is synthesized, and the
//! auto-refresh timer that re-runs it.
//!
//! Neither has any bearing on the digest contents. The sequence exists so the
//! desk can show progress; it is observable through a `watch` channel and
//! cancelable through a `watch<bool>`, and runs instantly with a zero delay.

mod refresh;
mod steps;

pub use self::refresh::{AutoRefresh, RefreshTick};
pub use self::steps::{run_steps, ProcessingOutcome, ProcessingStep, PROCESSING_STEPS};
