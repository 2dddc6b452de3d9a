use super::Policy;
use crate::core::state::{RankBy, ReadyQueue, Task, Ticks};

/// Shortest Job First: among ready tasks, the smallest total burst
/// runs to completion. Ties fall back to earliest arrival, then input
/// order. Non-preemptive: a long job that already holds the CPU is
/// never interrupted by a shorter arrival.
pub struct Sjf;

impl Policy for Sjf {
    fn ready_queue(&self) -> ReadyQueue {
        ReadyQueue::ranked(RankBy::Burst)
    }

    fn grant(&self, task: &Task) -> Ticks {
        task.remaining
    }
}
