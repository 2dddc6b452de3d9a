use crate::core::state::{TaskId, Ticks};

/// One contiguous stretch of CPU time given to a single task.
/// `end > start` always; an idle gap shows up as the next span
/// starting after the previous one's end, never as a span itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub task: TaskId,
    pub start: Ticks,
    pub end: Ticks,
}

/// Coalesces the engine's executed intervals into minimal spans.
/// Tick-granular policies feed this one tick at a time; adjacent
/// intervals of the same task merge, a task switch or an idle gap
/// opens a new span.
#[derive(Debug, Default)]
pub struct GanttBuilder {
    spans: Vec<Span>,
}

impl GanttBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, task: TaskId, start: Ticks, end: Ticks) {
        debug_assert!(end > start, "empty span for task {task}");
        if let Some(last) = self.spans.last_mut() {
            debug_assert!(start >= last.end, "span for task {task} overlaps predecessor");
            if last.task == task && last.end == start {
                last.end = end;
                return;
            }
        }
        self.spans.push(Span { task, start, end });
    }

    /// Total ticks covered by all spans. Must equal the sum of bursts
    /// once a run finishes; the engine audits this.
    pub fn executed(&self) -> Ticks {
        self.spans.iter().map(|s| s.end - s.start).sum()
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_same_task_ticks_merge() {
        let mut gantt = GanttBuilder::new();
        gantt.record(1, 0, 1);
        gantt.record(1, 1, 2);
        gantt.record(1, 2, 3);
        assert_eq!(
            gantt.into_spans(),
            vec![Span {
                task: 1,
                start: 0,
                end: 3
            }]
        );
    }

    #[test]
    fn task_switch_opens_a_new_span() {
        let mut gantt = GanttBuilder::new();
        gantt.record(1, 0, 2);
        gantt.record(2, 2, 3);
        gantt.record(1, 3, 5);
        let spans = gantt.into_spans();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[2].start, 3);
    }

    #[test]
    fn idle_gap_is_never_bridged() {
        let mut gantt = GanttBuilder::new();
        gantt.record(1, 0, 2);
        // Same task again after an idle gap: separate spans.
        gantt.record(1, 5, 6);
        let spans = gantt.into_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].start, 5);
    }

    #[test]
    fn executed_sums_span_durations() {
        let mut gantt = GanttBuilder::new();
        gantt.record(1, 0, 2);
        gantt.record(2, 4, 7);
        assert_eq!(gantt.executed(), 5);
    }
}
