use super::Policy;
use crate::core::state::{RankBy, ReadyQueue, Task, Ticks};

/// Priority scheduling, non-preemptive flavor: the lowest priority
/// value among ready tasks runs to completion. Ties fall back to
/// earliest arrival, then input order.
pub struct PriorityNonPreemptive;

impl Policy for PriorityNonPreemptive {
    fn ready_queue(&self) -> ReadyQueue {
        ReadyQueue::ranked(RankBy::Priority)
    }

    fn grant(&self, task: &Task) -> Ticks {
        task.remaining
    }
}

/// Preemptive flavor: the most-eligible task is re-evaluated every
/// tick, so a higher-priority arrival takes the CPU at the next tick
/// boundary. A running task never loses the CPU to an equal-priority
/// arrival: its earlier arrival (or input position) outranks the
/// newcomer.
pub struct PriorityPreemptive;

impl Policy for PriorityPreemptive {
    fn ready_queue(&self) -> ReadyQueue {
        ReadyQueue::ranked(RankBy::Priority)
    }

    fn grant(&self, _task: &Task) -> Ticks {
        1
    }
}
