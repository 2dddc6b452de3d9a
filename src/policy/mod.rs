//! The six scheduling policies. A policy is two decisions: which
//! discipline backs the ready set, and how long a dispatched task may
//! hold the CPU before the engine re-selects. Admission, bookkeeping,
//! and span recording all live in the engine loop.

pub mod fcfs;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

pub use fcfs::Fcfs;
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use crate::core::state::{ReadyQueue, Task, Ticks};

pub trait Policy {
    /// Discipline the engine builds the ready set with.
    fn ready_queue(&self) -> ReadyQueue;

    /// Ticks the dispatched task holds the CPU before the next
    /// selection. Run-to-completion policies grant `task.remaining`;
    /// tick-granular preemptive policies grant 1 so every tick
    /// re-evaluates the most-eligible task.
    fn grant(&self, task: &Task) -> Ticks;
}

/// Caller-facing algorithm selector for [`crate::simulate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fcfs,
    Sjf,
    PriorityNonPreemptive,
    PriorityPreemptive,
    RoundRobin,
    Srtf,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::PriorityNonPreemptive,
        PolicyKind::PriorityPreemptive,
        PolicyKind::RoundRobin,
        PolicyKind::Srtf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "First-Come, First-Served",
            PolicyKind::Sjf => "Shortest Job First",
            PolicyKind::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            PolicyKind::PriorityPreemptive => "Priority (Preemptive)",
            PolicyKind::RoundRobin => "Round Robin",
            PolicyKind::Srtf => "Shortest Remaining Time First",
        }
    }
}
