use crate::core::state::{Task, TaskId, Ticks};
use crate::error::SimError;

/// Caller-supplied task description. The engine copies these into its
/// own arena; the caller's slice is never mutated, so one input set
/// can be simulated under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    pub id: TaskId,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Lower value = higher priority. Only the priority policies read
    /// it; harmless elsewhere.
    pub priority: i64,
}

impl TaskSpec {
    pub fn new(id: TaskId, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// Completed per-task timing breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskReport {
    pub id: TaskId,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub priority: i64,
    /// Tick of first dispatch.
    pub start: Ticks,
    /// Tick the last demanded unit finished.
    pub finish: Ticks,
    /// `finish - arrival`.
    pub turnaround: Ticks,
    /// `turnaround - burst`.
    pub waiting: Ticks,
    /// `start - arrival`.
    pub response: Ticks,
}

impl TaskReport {
    /// Derives the timing columns from a finished working record. Any
    /// missing or inconsistent field is an engine defect, surfaced as
    /// an invariant error rather than a wrong number.
    pub(crate) fn from_task(task: &Task) -> Result<Self, SimError> {
        let start = task
            .start
            .ok_or_else(|| SimError::invariant(format!("task {} has no start tick", task.id)))?;
        let finish = task
            .finish
            .ok_or_else(|| SimError::invariant(format!("task {} has no finish tick", task.id)))?;
        let turnaround = finish.checked_sub(task.arrival).ok_or_else(|| {
            SimError::invariant(format!("task {} finished before arriving", task.id))
        })?;
        let waiting = turnaround.checked_sub(task.burst).ok_or_else(|| {
            SimError::invariant(format!("task {} has negative waiting time", task.id))
        })?;
        let response = start.checked_sub(task.arrival).ok_or_else(|| {
            SimError::invariant(format!("task {} started before arriving", task.id))
        })?;

        Ok(Self {
            id: task.id,
            arrival: task.arrival,
            burst: task.burst,
            priority: task.priority,
            start,
            finish,
            turnaround,
            waiting,
            response,
        })
    }
}
