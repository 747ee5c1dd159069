//! The collection controller: process-facing state and operations.
//!
//! This is a control surface, not a collector. The actual reclamation
//! algorithm lives behind the [`NativeCollector`] boundary; the controller
//! only keeps two advisory flags and forwards run requests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{GcError, GcResult};
use crate::interfaces::collector::NativeCollector;

/// Stateful facade over the native collector.
///
/// Holds the `enabled` and `stress_level` flags and forwards collection
/// requests to the injected [`NativeCollector`]. Both flags are plain
/// atomics with last-write-wins semantics; neither gates whether a run
/// request actually reaches the collector.
///
/// # Examples
///
/// ```
/// use gcctl::controller::CollectionController;
/// use gcctl::interfaces::MockCollector;
///
/// let mock = MockCollector::new();
/// let controller = CollectionController::new(mock.clone());
///
/// controller.start().unwrap();
/// assert_eq!(mock.collect_call_count(), 1);
/// assert_eq!(mock.recorded_forces(), vec![false]);
/// ```
pub struct CollectionController {
    collector: Arc<dyn NativeCollector>,
    enabled: AtomicBool,
    stress_level: AtomicBool,
}

impl CollectionController {
    /// Create a controller backed by the given collector boundary.
    ///
    /// `enabled` starts `true`, `stress_level` starts `false`.
    pub fn new(collector: Arc<dyn NativeCollector>) -> Self {
        Self {
            collector,
            enabled: AtomicBool::new(true),
            stress_level: AtomicBool::new(false),
        }
    }

    /// Request an incremental collection pass. Equivalent to `run(false)`.
    pub fn start(&self) -> GcResult<()> {
        self.run(false)
    }

    /// Request a collection pass from the native collector.
    ///
    /// `force` is a hint that a full/major pass is wanted rather than an
    /// incremental one; it is passed through unchanged, not interpreted
    /// here. The call is synchronous and may block while the collector
    /// works. Runs are attempted regardless of the `enabled` flag.
    ///
    /// Returns [`GcError::PrimitiveFailure`] if the native primitive
    /// reports that the pass could not be started or completed. Neither
    /// flag is touched on that path.
    pub fn run(&self, force: bool) -> GcResult<()> {
        self.collector
            .collect_now(force)
            .map_err(GcError::PrimitiveFailure)
    }

    /// Read the stress-testing flag.
    ///
    /// Advisory only: the flag has no effect on actual collection
    /// behavior. Reports the last value stored by [`set_stress`], or
    /// `false` if never set.
    ///
    /// [`set_stress`]: CollectionController::set_stress
    pub fn stress(&self) -> bool {
        self.stress_level.load(Ordering::Acquire)
    }

    /// Store the stress-testing flag. Advisory only; never touches the
    /// native collector.
    pub fn set_stress(&self, flag: bool) {
        self.stress_level.store(flag, Ordering::Release);
    }

    /// Set `enabled = true` and return the previous value.
    ///
    /// Collection is always effectively enabled from the native
    /// collector's point of view; this only tracks the nominal flag.
    pub fn enable(&self) -> bool {
        self.enabled.swap(true, Ordering::AcqRel)
    }

    /// Set `enabled = false` and return the previous value.
    ///
    /// This is a request the system does not honor: the flag is recorded
    /// but subsequent [`start`]/[`run`] calls still invoke the native
    /// collector. Accepted syntactically, unenforced semantically, and
    /// intentional.
    ///
    /// [`start`]: CollectionController::start
    /// [`run`]: CollectionController::run
    pub fn disable(&self) -> bool {
        self.enabled.swap(false, Ordering::AcqRel)
    }

    /// Whether the nominal `enabled` flag is currently set.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Convenience alias for [`start`]. Exists only as an alternate call
    /// surface; no extra state or semantics.
    ///
    /// [`start`]: CollectionController::start
    pub fn garbage_collect(&self) -> GcResult<()> {
        self.start()
    }
}

impl std::fmt::Debug for CollectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionController")
            .field("enabled", &self.is_enabled())
            .field("stress_level", &self.stress())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::mocks::MockCollector;

    #[test]
    fn fresh_controller_defaults() {
        let controller = CollectionController::new(MockCollector::new());
        assert!(controller.is_enabled());
        assert!(!controller.stress());
    }

    #[test]
    fn run_passes_force_through_unchanged() {
        let mock = MockCollector::new();
        let controller = CollectionController::new(mock.clone());

        controller.run(true).unwrap();
        controller.run(false).unwrap();

        assert_eq!(mock.recorded_forces(), vec![true, false]);
    }

    #[test]
    fn garbage_collect_delegates_to_start() {
        let mock = MockCollector::new();
        let controller = CollectionController::new(mock.clone());

        controller.garbage_collect().unwrap();

        assert_eq!(mock.recorded_forces(), vec![false]);
    }
}
