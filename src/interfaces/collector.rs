// Native-collector boundary trait and its production stand-in.
//
// The controller never talks to the real collector directly; everything
// goes through `NativeCollector` so the flag bookkeeping and error
// propagation can be tested without a live VM.

use std::sync::Arc;

use once_cell::sync::Lazy;

/// The single opaque operation this crate depends on.
///
/// `collect_now` performs one collection pass. `force = true` asks the
/// collector for a more thorough (full/major) pass than `force = false`;
/// the facade does not interpret the flag, it is passed through unchanged.
/// The call is synchronous and may block for the duration of the
/// collector's work. On failure the implementation returns a short reason
/// string; the controller wraps it into the crate's error type.
pub trait NativeCollector: Send + Sync + 'static {
    fn collect_now(&self, force: bool) -> Result<(), &'static str>;
}

/// Zero-sized production boundary.
///
/// Embedders with a real VM register their own `NativeCollector`; until
/// then every pass trivially succeeds, which keeps the control surface
/// usable in hosts that delegate reclamation entirely to the process
/// allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductionCollector;

impl NativeCollector for ProductionCollector {
    fn collect_now(&self, _force: bool) -> Result<(), &'static str> {
        Ok(())
    }
}

/// Shared production collector instance used by default containers.
pub static PRODUCTION_COLLECTOR: Lazy<Arc<ProductionCollector>> =
    Lazy::new(|| Arc::new(ProductionCollector));
