use tracing::{debug, trace};

use super::{
    gantt::{GanttBuilder, Span},
    observer::Observer,
    state::{SimCtx, Task, TaskId, Ticks},
};
use crate::error::SimError;
use crate::policy::Policy;

/// Raw output of one engine run: finished working records in input
/// order plus the merged execution trace.
#[derive(Debug)]
pub struct SimOutcome {
    pub tasks: Vec<Task>,
    pub gantt: Vec<Span>,
}

/// The common simulation loop all six policies share: admit arrivals,
/// pick the next task per the policy's queue discipline, execute it
/// for the policy's grant, then complete or requeue. The loop
/// terminates because every iteration either consumes remaining work
/// or admits at least one pooled task.
pub struct Engine<P: Policy> {
    ctx: SimCtx,
    policy: P,
    gantt: GanttBuilder,
    observer: Observer,
}

impl<P: Policy> Engine<P> {
    pub fn new(policy: P) -> Self {
        Self {
            ctx: SimCtx::new(policy.ready_queue()),
            policy,
            gantt: GanttBuilder::new(),
            observer: Observer::new(),
        }
    }

    pub fn add_task(&mut self, id: TaskId, arrival: Ticks, burst: Ticks, priority: i64) {
        self.ctx.create_task(id, arrival, burst, priority);
    }

    pub fn run(mut self) -> Result<SimOutcome, SimError> {
        self.ctx.seal();
        loop {
            self.ctx.admit_ready();
            if self.ctx.ready_is_empty() {
                if self.ctx.pool_is_empty() {
                    break;
                }
                self.ctx.advance_to_next_arrival();
                trace!(now = self.ctx.now(), "cpu idle, clock jumped to next arrival");
                continue;
            }
            self.step()?;
            self.observer.observe(&self.ctx);
        }
        self.finish()
    }

    fn step(&mut self) -> Result<(), SimError> {
        let key = self
            .ctx
            .pop_ready()
            .ok_or_else(|| SimError::invariant("ready set empty after admission"))?;
        let grant = self.policy.grant(self.ctx.task(key));
        let begin = self.ctx.now();

        self.ctx.dispatch(key);
        self.ctx.run_for(key, grant)?;
        self.gantt
            .record(self.ctx.task(key).id, begin, self.ctx.now());
        trace!(
            task = self.ctx.task(key).id,
            from = begin,
            to = self.ctx.now(),
            "executed"
        );

        // Arrivals during the executed interval enter the ready set
        // before the yielding task does, so a task that arrived
        // mid-slice is never delayed behind the task that just ran.
        self.ctx.admit_ready();
        if self.ctx.task(key).remaining == 0 {
            self.ctx.complete(key);
        } else {
            self.ctx.requeue(key);
        }
        Ok(())
    }

    /// Work-conservation audit, then result assembly.
    fn finish(self) -> Result<SimOutcome, SimError> {
        let total_burst: Ticks = self.ctx.tasks().map(|(_, t)| t.burst).sum();
        if self.gantt.executed() != total_burst {
            return Err(SimError::invariant(format!(
                "trace covers {} ticks but total burst is {}",
                self.gantt.executed(),
                total_burst
            )));
        }
        if let Some((_, unfinished)) = self.ctx.tasks().find(|(_, t)| t.finish.is_none()) {
            return Err(SimError::invariant(format!(
                "task {} never completed",
                unfinished.id
            )));
        }
        debug!(
            makespan = self.ctx.now(),
            tasks = self.ctx.tasks().count(),
            "run complete"
        );
        Ok(SimOutcome {
            tasks: self.ctx.into_tasks(),
            gantt: self.gantt.into_spans(),
        })
    }
}
