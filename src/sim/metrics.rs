use average::Estimate;

use super::task::TaskReport;
use crate::core::state::Ticks;
use crate::error::SimError;

/// Aggregate figures over one completed schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// Tasks completed per tick over the makespan.
    pub throughput: f64,
    /// Tick at which the last task finished.
    pub makespan: Ticks,
}

impl Metrics {
    /// Defined only over a fully completed schedule; validation
    /// guarantees at least one task with a positive burst, so the
    /// makespan is never zero.
    pub(crate) fn compute(reports: &[TaskReport]) -> Result<Self, SimError> {
        let makespan = reports
            .iter()
            .map(|r| r.finish)
            .max()
            .ok_or_else(|| SimError::invariant("metrics over an empty schedule"))?;
        if makespan == 0 {
            return Err(SimError::invariant("zero makespan over completed tasks"));
        }

        let mean = |field: fn(&TaskReport) -> Ticks| {
            reports
                .iter()
                .map(|r| field(r) as f64)
                .collect::<average::Mean>()
                .estimate()
        };

        Ok(Self {
            avg_waiting: mean(|r| r.waiting),
            avg_turnaround: mean(|r| r.turnaround),
            avg_response: mean(|r| r.response),
            throughput: reports.len() as f64 / makespan as f64,
            makespan,
        })
    }
}
