use super::Policy;
use crate::core::state::{ReadyQueue, Task, Ticks};

/// First-Come, First-Served: arrival order, run to completion.
/// Simultaneous arrivals run in input order.
pub struct Fcfs;

impl Policy for Fcfs {
    fn ready_queue(&self) -> ReadyQueue {
        ReadyQueue::fifo()
    }

    fn grant(&self, task: &Task) -> Ticks {
        task.remaining
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Span;
    use crate::sim::{TaskSpec, simulate};
    use crate::PolicyKind;

    #[test]
    fn runs_in_arrival_order() {
        let tasks = [TaskSpec::new(1, 0, 5), TaskSpec::new(2, 1, 3)];
        let result = simulate(&tasks, PolicyKind::Fcfs, None).unwrap();

        assert_eq!(
            result.gantt,
            vec![
                Span {
                    task: 1,
                    start: 0,
                    end: 5
                },
                Span {
                    task: 2,
                    start: 5,
                    end: 8
                },
            ]
        );
        assert_eq!(result.tasks[0].waiting, 0);
        assert_eq!(result.tasks[1].waiting, 4);
    }

    #[test]
    fn idle_gap_produces_no_span() {
        let tasks = [TaskSpec::new(1, 0, 2), TaskSpec::new(2, 10, 2)];
        let result = simulate(&tasks, PolicyKind::Fcfs, None).unwrap();

        assert_eq!(result.gantt.len(), 2);
        assert_eq!(result.gantt[1].start, 10);
        assert_eq!(result.tasks[1].waiting, 0);
        assert_eq!(result.tasks[1].response, 0);
    }

    #[test]
    fn simultaneous_arrivals_keep_input_order() {
        let tasks = [
            TaskSpec::new(9, 0, 2),
            TaskSpec::new(4, 0, 2),
            TaskSpec::new(7, 0, 2),
        ];
        let result = simulate(&tasks, PolicyKind::Fcfs, None).unwrap();
        let order: Vec<_> = result.gantt.iter().map(|s| s.task).collect();
        assert_eq!(order, vec![9, 4, 7]);
    }

    #[test]
    fn ignores_priority_field() {
        let tasks = [
            TaskSpec::new(1, 0, 3).with_priority(5),
            TaskSpec::new(2, 0, 3).with_priority(0),
        ];
        let result = simulate(&tasks, PolicyKind::Fcfs, None).unwrap();
        assert_eq!(result.gantt[0].task, 1);
    }
}
