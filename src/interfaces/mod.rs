// Interface modules for dependency injection and testability.
//
// The native collector is the facade's only external dependency; it is
// abstracted behind a trait here, with a production stand-in and a mock
// for tests.

pub mod collector;
pub mod mocks;

// Re-export commonly used traits and types
pub use collector::{NativeCollector, ProductionCollector, PRODUCTION_COLLECTOR};
pub use mocks::MockCollector;
