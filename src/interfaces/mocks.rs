// Mock native collector for dependency-injection testing.
//
// Records every invocation so tests can verify how the controller drives
// the boundary, including after a `disable()`.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::interfaces::collector::NativeCollector;

/// Mock collector that records invocations and can be told to fail.
#[derive(Debug, Default)]
pub struct MockCollector {
    collect_calls: AtomicUsize,
    recorded_forces: Mutex<Vec<bool>>,
    fail_next: AtomicBool,
}

impl MockCollector {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent `collect_now` report failure.
    pub fn set_failing(&self, failing: bool) {
        self.fail_next.store(failing, Ordering::Release);
    }

    pub fn collect_call_count(&self) -> usize {
        self.collect_calls.load(Ordering::Acquire)
    }

    /// The `force` arguments seen so far, in call order.
    pub fn recorded_forces(&self) -> Vec<bool> {
        self.recorded_forces.lock().clone()
    }
}

impl NativeCollector for MockCollector {
    fn collect_now(&self, force: bool) -> Result<(), &'static str> {
        self.collect_calls.fetch_add(1, Ordering::Release);
        self.recorded_forces.lock().push(force);

        if self.fail_next.load(Ordering::Acquire) {
            Err("mock collector failure")
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_and_arguments() {
        let mock = MockCollector::new();
        assert_eq!(mock.collect_call_count(), 0);

        mock.collect_now(true).unwrap();
        mock.collect_now(false).unwrap();

        assert_eq!(mock.collect_call_count(), 2);
        assert_eq!(mock.recorded_forces(), vec![true, false]);
    }

    #[test]
    fn failure_switch_still_records_the_call() {
        let mock = MockCollector::new();
        mock.set_failing(true);

        assert!(mock.collect_now(false).is_err());
        assert_eq!(mock.collect_call_count(), 1);
    }
}
