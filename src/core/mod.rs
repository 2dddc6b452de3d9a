pub mod driver;
pub mod gantt;
pub mod observer;
pub mod state;

pub use driver::{Engine, SimOutcome};
pub use gantt::{GanttBuilder, Span};
pub use state::{RankBy, ReadyQueue, SimCtx, Task, TaskId, TaskKey, TaskState, Ticks};
