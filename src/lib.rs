//! Collection-control facade for a managed-language VM.
//!
//! This crate is not a collector. It is the small stateful shim between
//! managed code and the native collector: start/force-run requests, an
//! advisory stress flag, and enable/disable toggles that are tracked but
//! deliberately never enforced. The collector itself sits behind the
//! [`NativeCollector`] boundary and is opaque to this crate.

pub mod controller;
pub mod di;
pub mod error;
pub mod facade;
pub mod interfaces;

pub use controller::CollectionController;
pub use di::{ControlContainer, ControlScope};
pub use error::{GcError, GcResult};
pub use interfaces::{MockCollector, NativeCollector, ProductionCollector};
