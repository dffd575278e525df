//! Timer boundary for the spin controller
//!
//! Both kinds of timer hand back a handle, and dropping the handle cancels the
//! timer. In the app the timers are Dioxus tasks sleeping on
//! `gloo_timers::future::TimeoutFuture`; tests drive a virtual clock instead.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Deferred callback primitives
pub trait Scheduler {
    /// Cancels its timer when dropped
    type Handle;

    /// Run `callback` every `delay_ms` until the handle is dropped
    fn repeat<F>(&self, delay_ms: u32, callback: F) -> Self::Handle
    where
        F: FnMut() + 'static;

    /// Run `callback` once after `delay_ms` unless the handle is dropped first
    fn once<F>(&self, delay_ms: u32, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Schedules callbacks as Dioxus tasks; must be used inside the Dioxus runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskScheduler;

/// Spawned timer task, cancelled on drop
pub struct TaskHandle(Task);

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

impl Scheduler for TaskScheduler {
    type Handle = TaskHandle;

    fn repeat<F>(&self, delay_ms: u32, mut callback: F) -> TaskHandle
    where
        F: FnMut() + 'static,
    {
        TaskHandle(spawn(async move {
            loop {
                TimeoutFuture::new(delay_ms).await;
                callback();
            }
        }))
    }

    fn once<F>(&self, delay_ms: u32, callback: F) -> TaskHandle
    where
        F: FnOnce() + 'static,
    {
        TaskHandle(spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            callback();
        }))
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_manual_once_fires_at_due_time() {
        let clock = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let log = fired.clone();
        let _h = clock.once(250, move || log.borrow_mut().push("late"));
        let log = fired.clone();
        let _g = clock.once(100, move || log.borrow_mut().push("early"));

        clock.advance(99);
        assert!(fired.borrow().is_empty());
        clock.advance(200);
        assert_eq!(*fired.borrow(), vec!["early", "late"]);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_manual_repeat_until_dropped() {
        let clock = ManualScheduler::default();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let handle = clock.repeat(100, move || *c.borrow_mut() += 1);

        clock.advance(350);
        assert_eq!(*count.borrow(), 3);

        drop(handle);
        clock.advance(1000);
        assert_eq!(*count.borrow(), 3);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_manual_dropped_once_never_fires() {
        let clock = ManualScheduler::default();
        let fired = Rc::new(RefCell::new(false));
        let f = fired.clone();
        drop(clock.once(10, move || *f.borrow_mut() = true));
        clock.advance(100);
        assert!(!*fired.borrow());
        assert_eq!(clock.now(), 100);
    }
}
