use super::state::{SimCtx, TaskState, Ticks};

/// Consistency checker run after every engine step. All checks are
/// `debug_assert!`s: they cost nothing in release builds, and any
/// failure is a programming defect, not a data error.
#[derive(Debug, Default)]
pub struct Observer {
    last_now: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        debug_assert!(
            ctx.now() >= self.last_now,
            "clock moved backwards: {} -> {}",
            self.last_now,
            ctx.now()
        );
        self.last_now = ctx.now();

        for (key, task) in ctx.tasks() {
            debug_assert!(
                task.remaining <= task.burst,
                "task {} remaining {} exceeds burst {}",
                task.id,
                task.remaining,
                task.burst
            );
            match task.state {
                TaskState::Pending => {
                    debug_assert!(
                        task.start.is_none(),
                        "pending task {} already started",
                        task.id
                    );
                }
                TaskState::Ready => {
                    debug_assert!(
                        task.remaining > 0,
                        "ready task {} has no work left",
                        task.id
                    );
                    debug_assert!(
                        ctx.ready_contains(key),
                        "ready task {} missing from ready set",
                        task.id
                    );
                }
                TaskState::Running => {
                    // The engine completes or requeues before observing.
                    debug_assert!(false, "task {} still running between steps", task.id);
                }
                TaskState::Completed => {
                    debug_assert!(
                        task.finish.is_some() && task.remaining == 0,
                        "task {} completed inconsistently",
                        task.id
                    );
                    debug_assert!(
                        !ctx.ready_contains(key),
                        "completed task {} still in ready set",
                        task.id
                    );
                }
            }
        }
    }
}
