use keyed_priority_queue::KeyedPriorityQueue;
use slotmap::{SlotMap, new_key_type};
use std::collections::VecDeque;

use crate::error::SimError;

/// Caller-assigned task identifier. Unique, no ordering semantics.
pub type TaskId = u64;
/// Abstract simulated time. One tick is one unit of CPU demand.
pub type Ticks = u64;

new_key_type! {
    /// Arena slot for a task's working record. All cross-references
    /// inside the engine go through keys, never through `TaskId`, so
    /// copying a task set per run can never alias another run's state.
    pub struct TaskKey;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Not yet arrived.
    Pending,
    /// Arrived, waiting in the ready set.
    Ready,
    /// Holding the CPU.
    Running,
    /// All demanded ticks executed.
    Completed,
}

/// Per-run working record of a task. Mutated only by its owning
/// `SimCtx`; the caller's input is copied in, never touched.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    /// Position in the caller's input, the final tie-break everywhere.
    pub seq: usize,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Lower value = higher priority. Ignored outside priority policies.
    pub priority: i64,
    pub remaining: Ticks,
    pub state: TaskState,
    pub start: Option<Ticks>,
    pub finish: Option<Ticks>,
}

/// Selection criterion for ranked ready queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    Burst,
    Priority,
    Remaining,
}

impl RankBy {
    fn value(self, task: &Task) -> i64 {
        match self {
            RankBy::Burst => task.burst as i64,
            RankBy::Priority => task.priority,
            RankBy::Remaining => task.remaining as i64,
        }
    }
}

/// Selection key: criterion value, then earliest arrival, then input
/// order. `seq` is unique, so the order is total and every pop is
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    value: i64,
    arrival: Ticks,
    seq: usize,
}

// KeyedPriorityQueue is a max-heap, so Rank's Ord is flipped: the
// smallest (value, arrival, seq) triple compares greatest.
impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .value
            .cmp(&self.value)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The ready set. FIFO for arrival-ordered policies, ranked for
/// policies that select by a task attribute.
#[derive(Debug)]
pub enum ReadyQueue {
    Fifo {
        tasks: VecDeque<TaskKey>,
    },
    Ranked {
        by: RankBy,
        tasks: KeyedPriorityQueue<TaskKey, Rank>,
    },
}

impl ReadyQueue {
    pub fn fifo() -> Self {
        Self::Fifo {
            tasks: VecDeque::new(),
        }
    }

    pub fn ranked(by: RankBy) -> Self {
        Self::Ranked {
            by,
            tasks: KeyedPriorityQueue::new(),
        }
    }

    /// Enqueues at the tail (FIFO) or at the task's current rank.
    /// Re-pushing a task recomputes its rank, which is how
    /// tick-granular policies observe a shrinking `remaining`.
    pub fn push(&mut self, key: TaskKey, task: &Task) {
        match self {
            Self::Fifo { tasks } => tasks.push_back(key),
            Self::Ranked { by, tasks } => {
                let rank = Rank {
                    value: by.value(task),
                    arrival: task.arrival,
                    seq: task.seq,
                };
                tasks.push(key, rank);
            }
        }
    }

    /// Removes the head (FIFO) or the minimum-rank task.
    pub fn pop(&mut self) -> Option<TaskKey> {
        match self {
            Self::Fifo { tasks } => tasks.pop_front(),
            Self::Ranked { tasks, .. } => tasks.pop().map(|(key, _)| key),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fifo { tasks } => tasks.is_empty(),
            Self::Ranked { tasks, .. } => tasks.is_empty(),
        }
    }

    pub fn contains(&self, key: TaskKey) -> bool {
        match self {
            Self::Fifo { tasks } => tasks.contains(&key),
            Self::Ranked { tasks, .. } => tasks.get_priority(&key).is_some(),
        }
    }
}

/// All state of one simulation run: the task arena, the not-yet-arrived
/// pool, the ready set, and the clock. Local to one `simulate` call.
#[derive(Debug)]
pub struct SimCtx {
    now: Ticks,
    tasks: SlotMap<TaskKey, Task>,
    /// Keys in caller input order.
    order: Vec<TaskKey>,
    /// Unadmitted tasks, sorted by (arrival, seq). Built by `seal`.
    pool: VecDeque<TaskKey>,
    ready: ReadyQueue,
}

impl SimCtx {
    pub fn new(ready: ReadyQueue) -> Self {
        Self {
            now: 0,
            tasks: SlotMap::with_key(),
            order: Vec::new(),
            pool: VecDeque::new(),
            ready,
        }
    }

    pub fn create_task(
        &mut self,
        id: TaskId,
        arrival: Ticks,
        burst: Ticks,
        priority: i64,
    ) -> TaskKey {
        let seq = self.order.len();
        let key = self.tasks.insert(Task {
            id,
            seq,
            arrival,
            burst,
            priority,
            remaining: burst,
            state: TaskState::Pending,
            start: None,
            finish: None,
        });
        self.order.push(key);
        key
    }

    /// Builds the admission pool. Stable sort, so simultaneous arrivals
    /// enter the ready set in input order.
    pub fn seal(&mut self) {
        let mut keys = self.order.clone();
        keys.sort_by_key(|&k| (self.tasks[k].arrival, self.tasks[k].seq));
        self.pool = keys.into();
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Moves every pending task with `arrival <= now` into the ready
    /// set, preserving (arrival, input) order among ties.
    pub fn admit_ready(&mut self) {
        while let Some(&key) = self.pool.front() {
            if self.tasks[key].arrival > self.now {
                break;
            }
            self.pool.pop_front();
            let task = &mut self.tasks[key];
            debug_assert_eq!(
                task.state,
                TaskState::Pending,
                "task {} admitted twice",
                task.id
            );
            task.state = TaskState::Ready;
            self.ready.push(key, &self.tasks[key]);
        }
    }

    /// Jumps the clock to the next arrival. Models CPU idle time; the
    /// gap produces no execution span. Only meaningful when the ready
    /// set is empty and tasks remain pending.
    pub fn advance_to_next_arrival(&mut self) {
        debug_assert!(self.ready.is_empty(), "clock jump with runnable tasks");
        if let Some(&key) = self.pool.front() {
            debug_assert!(self.tasks[key].arrival > self.now);
            self.now = self.tasks[key].arrival;
        }
    }

    pub fn pool_is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn ready_is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    pub fn ready_contains(&self, key: TaskKey) -> bool {
        self.ready.contains(key)
    }

    /// Detaches the next task per the queue discipline.
    pub fn pop_ready(&mut self) -> Option<TaskKey> {
        self.ready.pop()
    }

    /// Gives `key` the CPU. First dispatch fixes `start` (and thereby
    /// response); later dispatches leave it untouched.
    pub fn dispatch(&mut self, key: TaskKey) {
        let now = self.now;
        let task = &mut self.tasks[key];
        debug_assert!(task.remaining > 0, "dispatching finished task {}", task.id);
        task.state = TaskState::Running;
        if task.start.is_none() {
            task.start = Some(now);
        }
    }

    /// Consumes `ticks` of the running task's demand and advances the
    /// clock by the same amount.
    pub fn run_for(&mut self, key: TaskKey, ticks: Ticks) -> Result<(), SimError> {
        let task = &mut self.tasks[key];
        task.remaining = task
            .remaining
            .checked_sub(ticks)
            .ok_or_else(|| SimError::invariant(format!("task {} remaining underflow", task.id)))?;
        self.now = self.now.saturating_add(ticks);
        Ok(())
    }

    /// Returns an unfinished task to the ready set. For FIFO
    /// disciplines this is the tail; for ranked disciplines the task
    /// re-enters at its recomputed rank.
    pub fn requeue(&mut self, key: TaskKey) {
        let task = &mut self.tasks[key];
        debug_assert!(task.remaining > 0, "requeueing finished task {}", task.id);
        task.state = TaskState::Ready;
        self.ready.push(key, &self.tasks[key]);
    }

    pub fn complete(&mut self, key: TaskKey) {
        let now = self.now;
        let task = &mut self.tasks[key];
        debug_assert_eq!(
            task.remaining, 0,
            "completing task {} with work left",
            task.id
        );
        debug_assert!(task.finish.is_none(), "task {} completed twice", task.id);
        task.state = TaskState::Completed;
        task.finish = Some(now);
    }

    pub fn task(&self, key: TaskKey) -> &Task {
        &self.tasks[key]
    }

    pub fn tasks(&self) -> impl Iterator<Item = (TaskKey, &Task)> {
        self.tasks.iter()
    }

    /// Drains the arena in caller input order.
    pub fn into_tasks(mut self) -> Vec<Task> {
        self.order
            .iter()
            .filter_map(|&key| self.tasks.remove(key))
            .collect()
    }
}
