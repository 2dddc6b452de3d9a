use super::Policy;
use crate::core::state::{ReadyQueue, Task, Ticks};

/// Round Robin: FIFO rotation with a fixed time quantum. A task runs
/// for `min(quantum, remaining)` and, if unfinished, rejoins the tail
/// behind any tasks that arrived during its slice.
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    /// `quantum` must be positive; `simulate` validates it before
    /// constructing the policy.
    pub fn new(quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "round robin quantum must be positive");
        Self { quantum }
    }
}

impl Policy for RoundRobin {
    fn ready_queue(&self) -> ReadyQueue {
        ReadyQueue::fifo()
    }

    fn grant(&self, task: &Task) -> Ticks {
        self.quantum.min(task.remaining)
    }
}

#[cfg(test)]
mod tests {
    use crate::PolicyKind;
    use crate::sim::{TaskSpec, simulate};

    #[test]
    fn mid_slice_arrival_precedes_requeued_task() {
        let tasks = [
            TaskSpec::new(1, 0, 5),
            TaskSpec::new(2, 1, 3),
            TaskSpec::new(3, 2, 1),
        ];
        let result = simulate(&tasks, PolicyKind::RoundRobin, Some(2)).unwrap();

        let trace: Vec<_> = result
            .gantt
            .iter()
            .map(|s| (s.task, s.start, s.end))
            .collect();
        assert_eq!(
            trace,
            vec![(1, 0, 2), (2, 2, 4), (3, 4, 5), (1, 5, 7), (2, 7, 8), (1, 8, 9)]
        );

        // Task 3 finishes before task 1's second slice resumes.
        let t3_finish = result.tasks.iter().find(|t| t.id == 3).unwrap().finish;
        let t1_second_slice = result
            .gantt
            .iter()
            .filter(|s| s.task == 1)
            .nth(1)
            .unwrap()
            .start;
        assert!(t3_finish <= t1_second_slice);
    }

    #[test]
    fn lone_task_slices_collapse_into_one_span() {
        let tasks = [TaskSpec::new(1, 0, 5)];
        let result = simulate(&tasks, PolicyKind::RoundRobin, Some(2)).unwrap();
        let trace: Vec<_> = result
            .gantt
            .iter()
            .map(|s| (s.task, s.start, s.end))
            .collect();
        assert_eq!(trace, vec![(1, 0, 5)]);
    }

    #[test]
    fn final_slice_is_truncated_to_remaining() {
        let tasks = [TaskSpec::new(1, 0, 3), TaskSpec::new(2, 0, 3)];
        let result = simulate(&tasks, PolicyKind::RoundRobin, Some(2)).unwrap();
        let trace: Vec<_> = result
            .gantt
            .iter()
            .map(|s| (s.task, s.start, s.end))
            .collect();
        assert_eq!(trace, vec![(1, 0, 2), (2, 2, 4), (1, 4, 5), (2, 5, 6)]);
    }

    #[test]
    fn quantum_larger_than_any_burst_degenerates_to_fcfs() {
        let tasks = [TaskSpec::new(1, 0, 4), TaskSpec::new(2, 1, 2)];
        let rr = simulate(&tasks, PolicyKind::RoundRobin, Some(100)).unwrap();
        let fcfs = simulate(&tasks, PolicyKind::Fcfs, None).unwrap();
        assert_eq!(rr.gantt, fcfs.gantt);
    }
}
