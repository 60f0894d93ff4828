//! Virtual-time task scheduler
//!
//! Replaces host timers (`setInterval`/`setTimeout`) with a queue the
//! simulation owns. The host only reports elapsed time; every due task is
//! handed back in chronological order, so work scheduled while draining
//! (a one-shot armed by a collision) still fires at the right moment.

/// Cancellation handle for a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u32);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    handle: TaskHandle,
    due_ms: f64,
    /// Some(period) for repeating tasks
    period_ms: Option<f64>,
    task: T,
}

/// Smallest accepted repeat period
const MIN_PERIOD_MS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: f64,
    next_id: u32,
    tasks: Vec<Scheduled<T>>,
}

impl<T: Copy> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_id: 1,
            tasks: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn next_handle(&mut self) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        handle
    }

    /// Run `task` once, `delay_ms` from now
    pub fn schedule_once(&mut self, delay_ms: f64, task: T) -> TaskHandle {
        let handle = self.next_handle();
        self.tasks.push(Scheduled {
            handle,
            due_ms: self.now_ms + delay_ms.max(0.0),
            period_ms: None,
            task,
        });
        handle
    }

    /// Run `task` every `period_ms`, first time one period from now
    pub fn schedule_interval(&mut self, period_ms: f64, task: T) -> TaskHandle {
        let period_ms = period_ms.max(MIN_PERIOD_MS);
        let handle = self.next_handle();
        self.tasks.push(Scheduled {
            handle,
            due_ms: self.now_ms + period_ms,
            period_ms: Some(period_ms),
            task,
        });
        handle
    }

    /// Cancel a task; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to
    /// its due time. Repeating tasks are re-armed one period later.
    pub fn pop_due(&mut self, until_ms: f64) -> Option<T> {
        // Earliest due first; ties go to the task scheduled first
        let index = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .partial_cmp(&b.due_ms)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.handle.0.cmp(&b.handle.0))
            })
            .map(|(i, _)| i)?;

        let entry = &mut self.tasks[index];
        self.now_ms = self.now_ms.max(entry.due_ms);
        let task = entry.task;
        let period_ms = entry.period_ms;
        match period_ms {
            Some(period) => self.tasks[index].due_ms += period,
            None => {
                self.tasks.swap_remove(index);
            }
        }
        Some(task)
    }

    /// Move the clock forward once everything due has been drained
    pub fn advance_to(&mut self, until_ms: f64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Job {
        Tick,
        Ring,
    }

    fn drain(s: &mut Scheduler<Job>, dt: f64) -> Vec<Job> {
        let until = s.now_ms() + dt;
        let mut fired = Vec::new();
        while let Some(job) = s.pop_due(until) {
            fired.push(job);
        }
        s.advance_to(until);
        fired
    }

    #[test]
    fn test_interval_fires_once_per_period() {
        let mut s = Scheduler::new();
        s.schedule_interval(50.0, Job::Tick);

        assert!(drain(&mut s, 49.0).is_empty());
        assert_eq!(drain(&mut s, 1.0), vec![Job::Tick]);
        assert_eq!(drain(&mut s, 200.0).len(), 4);
        assert_eq!(s.now_ms(), 250.0);
    }

    #[test]
    fn test_once_fires_and_is_removed() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(500.0, Job::Ring);
        assert!(s.is_pending(h));

        assert!(drain(&mut s, 499.0).is_empty());
        assert_eq!(drain(&mut s, 1.0), vec![Job::Ring]);
        assert!(!s.is_pending(h));
        assert!(drain(&mut s, 1000.0).is_empty());
    }

    #[test]
    fn test_chronological_order_across_tasks() {
        let mut s = Scheduler::new();
        s.schedule_interval(50.0, Job::Tick);
        s.schedule_once(120.0, Job::Ring);

        assert_eq!(
            drain(&mut s, 160.0),
            vec![Job::Tick, Job::Tick, Job::Ring, Job::Tick]
        );
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut s = Scheduler::new();
        s.schedule_once(100.0, Job::Ring);
        s.schedule_interval(100.0, Job::Tick);
        assert_eq!(drain(&mut s, 100.0), vec![Job::Ring, Job::Tick]);
    }

    #[test]
    fn test_clock_follows_fired_task() {
        let mut s = Scheduler::new();
        s.schedule_interval(50.0, Job::Tick);
        assert_eq!(s.pop_due(1000.0), Some(Job::Tick));
        assert_eq!(s.now_ms(), 50.0);

        // Scheduled mid-drain: relative to the task that just fired
        s.schedule_once(20.0, Job::Ring);
        assert_eq!(s.pop_due(1000.0), Some(Job::Ring));
        assert_eq!(s.now_ms(), 70.0);
    }

    #[test]
    fn test_cancel() {
        let mut s = Scheduler::new();
        let tick = s.schedule_interval(50.0, Job::Tick);
        let ring = s.schedule_once(10.0, Job::Ring);

        assert!(s.cancel(ring));
        assert!(!s.cancel(ring));
        assert_eq!(drain(&mut s, 100.0), vec![Job::Tick, Job::Tick]);

        assert!(s.cancel(tick));
        assert!(drain(&mut s, 100.0).is_empty());
    }

    #[test]
    fn test_cancel_all_empties_queue() {
        let mut s = Scheduler::new();
        s.schedule_interval(50.0, Job::Tick);
        s.schedule_once(500.0, Job::Ring);
        assert_eq!(s.len(), 2);

        s.cancel_all();
        assert!(s.is_empty());
        assert!(drain(&mut s, 10_000.0).is_empty());
    }

    #[test]
    fn test_zero_period_is_raised() {
        let mut s = Scheduler::new();
        s.schedule_interval(0.0, Job::Tick);
        assert_eq!(drain(&mut s, 10.0).len(), 10);
    }
}
