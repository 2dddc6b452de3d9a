pub mod metrics;
pub mod run;
pub mod task;

pub use metrics::Metrics;
pub use run::{ScheduleResult, simulate};
pub use task::{TaskReport, TaskSpec};
