//! Free-function call surface over the thread-current controller.
//!
//! Mirrors the module-level API managed-language code expects (`GC.start`,
//! `GC.run`, `GC.stress=`, ...). Each function routes through the current
//! [`ControlContainer`](crate::di::ControlContainer); embedders that need
//! isolated state install their own container via
//! [`di::set_current_container`](crate::di::set_current_container) or a
//! [`ControlScope`](crate::di::ControlScope).

use crate::di::current_container;
use crate::error::GcResult;

/// Request an incremental collection pass. Equivalent to `run(false)`.
pub fn start() -> GcResult<()> {
    current_container().controller().start()
}

/// Request a collection pass, passing `force` through to the native
/// collector unchanged.
pub fn run(force: bool) -> GcResult<()> {
    current_container().controller().run(force)
}

/// Read the advisory stress-testing flag.
pub fn stress() -> bool {
    current_container().controller().stress()
}

/// Store the advisory stress-testing flag.
pub fn set_stress(flag: bool) {
    current_container().controller().set_stress(flag)
}

/// Set the nominal `enabled` flag and return its previous value.
pub fn enable() -> bool {
    current_container().controller().enable()
}

/// Clear the nominal `enabled` flag and return its previous value.
/// Disabling is recorded but not honored; collection requests still run.
pub fn disable() -> bool {
    current_container().controller().disable()
}
