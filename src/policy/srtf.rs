use super::Policy;
use crate::core::state::{RankBy, ReadyQueue, Task, Ticks};

/// Shortest Remaining Time First, the preemptive counterpart of SJF.
/// Every tick the task with the least remaining work runs; a new
/// arrival with a shorter burst preempts at the next tick boundary.
/// The running task's rank shrinks as it executes, so it can only be
/// displaced by a strictly shorter newcomer, never by an equal one.
pub struct Srtf;

impl Policy for Srtf {
    fn ready_queue(&self) -> ReadyQueue {
        ReadyQueue::ranked(RankBy::Remaining)
    }

    fn grant(&self, _task: &Task) -> Ticks {
        1
    }
}
