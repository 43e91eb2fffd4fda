use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Shared "conversion in flight" flag.
///
/// Clones observe the same flag, so the request producer can drop triggers while the
/// orchestrator is busy.
#[derive(Clone, Debug, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Marks the flag busy, or returns `None` if it already was.
    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        if self.0.swap(true, Ordering::AcqRel) {
            return None;
        }
        Some(InFlightGuard(Arc::clone(&self.0)))
    }
}

#[must_use = "guard must be kept alive to prevent reentry"]
#[derive(Debug)]
pub struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
