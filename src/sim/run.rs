use rustc_hash::FxHashSet;
use tracing::debug;

use super::metrics::Metrics;
use super::task::{TaskReport, TaskSpec};
use crate::core::driver::{Engine, SimOutcome};
use crate::core::gantt::Span;
use crate::core::state::Ticks;
use crate::error::{SimError, ValidationError};
use crate::policy::{
    Fcfs, Policy, PolicyKind, PriorityNonPreemptive, PriorityPreemptive, RoundRobin, Sjf, Srtf,
};

/// Everything one simulation run produces. Immutable after return;
/// `PartialEq` so identical runs can be compared wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    /// Completed breakdowns, ordered by task id.
    pub tasks: Vec<TaskReport>,
    /// Chronological merged execution spans.
    pub gantt: Vec<Span>,
    pub metrics: Metrics,
}

/// Runs `policy` over `tasks` and returns the per-task breakdown,
/// Gantt spans, and aggregate metrics. `quantum` is consulted only by
/// Round Robin and ignored otherwise. The input slice is never
/// mutated; each call simulates a private copy.
pub fn simulate(
    tasks: &[TaskSpec],
    policy: PolicyKind,
    quantum: Option<Ticks>,
) -> Result<ScheduleResult, SimError> {
    validate(tasks, policy, quantum)?;
    debug!(policy = policy.name(), tasks = tasks.len(), "simulating");

    let outcome = match policy {
        PolicyKind::Fcfs => run(tasks, Fcfs),
        PolicyKind::Sjf => run(tasks, Sjf),
        PolicyKind::PriorityNonPreemptive => run(tasks, PriorityNonPreemptive),
        PolicyKind::PriorityPreemptive => run(tasks, PriorityPreemptive),
        PolicyKind::RoundRobin => {
            let quantum = quantum.ok_or(ValidationError::MissingQuantum)?;
            run(tasks, RoundRobin::new(quantum))
        }
        PolicyKind::Srtf => run(tasks, Srtf),
    }?;

    let mut reports = outcome
        .tasks
        .iter()
        .map(TaskReport::from_task)
        .collect::<Result<Vec<_>, _>>()?;
    reports.sort_by_key(|r| r.id);
    let metrics = Metrics::compute(&reports)?;

    Ok(ScheduleResult {
        tasks: reports,
        gantt: outcome.gantt,
        metrics,
    })
}

fn run<P: Policy>(tasks: &[TaskSpec], policy: P) -> Result<SimOutcome, SimError> {
    let mut engine = Engine::new(policy);
    for spec in tasks {
        engine.add_task(spec.id, spec.arrival, spec.burst, spec.priority);
    }
    engine.run()
}

fn validate(
    tasks: &[TaskSpec],
    policy: PolicyKind,
    quantum: Option<Ticks>,
) -> Result<(), ValidationError> {
    if tasks.is_empty() {
        return Err(ValidationError::EmptyTaskSet);
    }
    let mut seen = FxHashSet::default();
    for task in tasks {
        if !seen.insert(task.id) {
            return Err(ValidationError::DuplicateId(task.id));
        }
        if task.burst == 0 {
            return Err(ValidationError::NonPositiveBurst(task.id));
        }
    }
    if policy == PolicyKind::RoundRobin {
        match quantum {
            None => return Err(ValidationError::MissingQuantum),
            Some(0) => return Err(ValidationError::NonPositiveQuantum),
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_task_set_is_rejected() {
        let err = simulate(&[], PolicyKind::Fcfs, None).unwrap_err();
        assert!(matches!(
            err,
            SimError::Validation(ValidationError::EmptyTaskSet)
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let tasks = [TaskSpec::new(1, 0, 2), TaskSpec::new(1, 1, 3)];
        let err = simulate(&tasks, PolicyKind::Sjf, None).unwrap_err();
        assert!(matches!(
            err,
            SimError::Validation(ValidationError::DuplicateId(1))
        ));
    }

    #[test]
    fn zero_burst_is_rejected() {
        let tasks = [TaskSpec::new(1, 0, 0)];
        let err = simulate(&tasks, PolicyKind::Fcfs, None).unwrap_err();
        assert!(matches!(
            err,
            SimError::Validation(ValidationError::NonPositiveBurst(1))
        ));
    }

    #[test]
    fn round_robin_requires_a_quantum() {
        let tasks = [TaskSpec::new(1, 0, 2)];
        let err = simulate(&tasks, PolicyKind::RoundRobin, None).unwrap_err();
        assert!(matches!(
            err,
            SimError::Validation(ValidationError::MissingQuantum)
        ));

        let err = simulate(&tasks, PolicyKind::RoundRobin, Some(0)).unwrap_err();
        assert!(matches!(
            err,
            SimError::Validation(ValidationError::NonPositiveQuantum)
        ));
    }

    #[test]
    fn quantum_is_ignored_outside_round_robin() {
        let tasks = [TaskSpec::new(1, 0, 2)];
        let with = simulate(&tasks, PolicyKind::Fcfs, Some(1)).unwrap();
        let without = simulate(&tasks, PolicyKind::Fcfs, None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn reports_are_ordered_by_id() {
        let tasks = [
            TaskSpec::new(30, 0, 1),
            TaskSpec::new(10, 1, 1),
            TaskSpec::new(20, 2, 1),
        ];
        let result = simulate(&tasks, PolicyKind::Fcfs, None).unwrap();
        let ids: Vec<_> = result.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
