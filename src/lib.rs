//! Deterministic single-CPU scheduling policy simulator.
//!
//! Six textbook policies (FCFS, SJF, both priority flavors, Round
//! Robin, SRTF) run over a static task set of abstract integer ticks.
//! Each run produces a per-task timing breakdown, a merged Gantt
//! trace, and aggregate metrics. Runs are pure functions of their
//! input: no shared state, so comparing policies across threads needs
//! no coordination.

pub mod core;
pub mod error;
pub mod policy;
pub mod sim;

pub use error::{SimError, ValidationError};
pub use policy::{Policy, PolicyKind};
pub use sim::{Metrics, ScheduleResult, TaskReport, TaskSpec, simulate};
