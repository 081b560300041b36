//! Virtual-clock task queue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A task waiting for its deadline.
#[derive(Clone, Debug)]
struct Scheduled<T> {
    due: u64,
    /// Scheduling order, breaks ties between equal deadlines.
    seq: u64,
    task: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    // Reversed so the max-heap pops the earliest deadline first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.due.cmp(&self.due).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Single-threaded queue of one-shot tasks keyed by virtual time.
///
/// ## Behavior
///
/// - `schedule(delay, task)`: Task becomes due at `now + delay`
/// - `advance(elapsed)`: Moves the clock, returns due tasks by deadline
///   then scheduling order
/// - Tasks are never cancelled; dropping the timeline drops them
#[derive(Clone, Debug)]
pub struct Timeline<T> {
    now: u64,
    next_seq: u64,
    queue: BinaryHeap<Scheduled<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Run `task` once, `delay` time units from now.
    pub fn schedule(&mut self, delay: u64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled {
            due: self.now.saturating_add(delay),
            seq,
            task,
        });
    }

    /// Move the clock forward and collect every task that came due.
    pub fn advance(&mut self, elapsed: u64) -> Vec<T> {
        self.now = self.now.saturating_add(elapsed);

        let mut due = Vec::new();
        while self.queue.peek().is_some_and(|next| next.due <= self.now) {
            if let Some(entry) = self.queue.pop() {
                due.push(entry.task);
            }
        }
        due
    }

    /// Deadline of the earliest pending task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.peek().map(|next| next.due)
    }

    /// Time until the earliest pending task is due.
    #[must_use]
    pub fn time_until_next(&self) -> Option<u64> {
        self.next_deadline().map(|due| due.saturating_sub(self.now))
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// No tasks pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timeline_is_idle() {
        let timeline: Timeline<u32> = Timeline::new();
        assert!(timeline.is_idle());
        assert_eq!(timeline.now(), 0);
        assert_eq!(timeline.next_deadline(), None);
    }

    #[test]
    fn test_task_fires_at_deadline() {
        let mut timeline = Timeline::new();
        timeline.schedule(900, 1);

        assert!(timeline.advance(899).is_empty());
        assert_eq!(timeline.pending_count(), 1);
        assert_eq!(timeline.time_until_next(), Some(1));

        assert_eq!(timeline.advance(1), vec![1]);
        assert!(timeline.is_idle());
        assert_eq!(timeline.now(), 900);
    }

    #[test]
    fn test_tasks_fire_in_deadline_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(50, "late");
        timeline.schedule(10, "early");
        timeline.schedule(30, "middle");

        assert_eq!(timeline.next_deadline(), Some(10));
        assert_eq!(timeline.advance(100), vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_equal_deadlines_keep_schedule_order() {
        let mut timeline = Timeline::new();
        for i in 0..5 {
            timeline.schedule(20, i);
        }

        assert_eq!(timeline.advance(20), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_delay_is_relative_to_now() {
        let mut timeline = Timeline::new();
        timeline.advance(1000);
        timeline.schedule(5, 'a');

        assert_eq!(timeline.next_deadline(), Some(1005));
        assert!(timeline.advance(4).is_empty());
        assert_eq!(timeline.advance(1), vec!['a']);
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut timeline = Timeline::new();
        timeline.schedule(0, ());

        assert_eq!(timeline.advance(0).len(), 1);
    }
}
