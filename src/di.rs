//! Dependency injection context for the collection controller.
//!
//! The flags used to live as implicit module-level globals; they are held
//! here in an explicit container instead, so tests can instantiate
//! independent controllers without cross-test leakage.

use std::sync::Arc;

use crate::controller::CollectionController;
use crate::interfaces::collector::{NativeCollector, PRODUCTION_COLLECTOR};

/// Container owning one controller and the collector boundary behind it.
#[derive(Clone)]
pub struct ControlContainer {
    controller: Arc<CollectionController>,
}

impl ControlContainer {
    /// Create a container backed by the shared production collector.
    pub fn new() -> Self {
        Self::with_collector(PRODUCTION_COLLECTOR.clone())
    }

    /// Create a container backed by a caller-supplied collector boundary.
    pub fn with_collector(collector: Arc<dyn NativeCollector>) -> Self {
        Self {
            controller: Arc::new(CollectionController::new(collector)),
        }
    }

    /// Create a container for testing with isolated state.
    pub fn new_for_testing() -> Self {
        // Each test gets a completely isolated controller
        Self::new()
    }

    /// Get the controller.
    pub fn controller(&self) -> &Arc<CollectionController> {
        &self.controller
    }
}

impl Default for ControlContainer {
    fn default() -> Self {
        Self::new()
    }
}

// Thread-local container for the current context
thread_local! {
    static CURRENT_CONTAINER: std::cell::RefCell<Option<Arc<ControlContainer>>> = const {
        std::cell::RefCell::new(None)
    };
}

/// Set the container for the current thread context.
pub fn set_current_container(container: ControlContainer) {
    CURRENT_CONTAINER.with(|c| {
        *c.borrow_mut() = Some(Arc::new(container));
    });
}

/// Get the current container, or create a default one.
pub fn current_container() -> Arc<ControlContainer> {
    CURRENT_CONTAINER.with(|c| {
        let existing = c.borrow().as_ref().map(Arc::clone);
        if let Some(arc) = existing {
            arc
        } else {
            let new = Arc::new(ControlContainer::new());
            *c.borrow_mut() = Some(Arc::clone(&new));
            new
        }
    })
}

/// Clear the current container (useful for test cleanup).
pub fn clear_current_container() {
    CURRENT_CONTAINER.with(|c| {
        *c.borrow_mut() = None;
    });
}

/// RAII guard that installs a container for a scope and clears it on drop.
pub struct ControlScope {
    _phantom: std::marker::PhantomData<()>,
}

impl ControlScope {
    pub fn new(container: ControlContainer) -> Self {
        set_current_container(container);
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl Drop for ControlScope {
    fn drop(&mut self) {
        clear_current_container();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::mocks::MockCollector;

    #[test]
    fn container_isolation() {
        let container1 = ControlContainer::new_for_testing();
        let container2 = ControlContainer::new_for_testing();

        // Each container should have its own controller instance
        assert!(!Arc::ptr_eq(
            container1.controller(),
            container2.controller()
        ));

        container1.controller().set_stress(true);
        assert!(!container2.controller().stress());
    }

    #[test]
    fn current_container_is_created_lazily() {
        clear_current_container();
        let current = current_container();
        assert!(Arc::ptr_eq(&current, &current_container()));
        clear_current_container();
    }

    #[test]
    fn scope_installs_and_clears() {
        clear_current_container();
        let mock = MockCollector::new();

        {
            let _scope = ControlScope::new(ControlContainer::with_collector(mock.clone()));
            current_container().controller().start().unwrap();
        }

        assert_eq!(mock.collect_call_count(), 1);

        // Outside the scope a fresh default container is created
        let after = current_container();
        after.controller().start().unwrap();
        assert_eq!(mock.collect_call_count(), 1);
        clear_current_container();
    }
}
