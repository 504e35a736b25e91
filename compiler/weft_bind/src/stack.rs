//! Stack growth for the recursive description walk.
//!
//! Description trees are compiler output and normally shallow, but nesting
//! depth is unbounded, so each recursion step runs behind `stacker`.

/// Minimum stack space to keep available before descending into a child.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Stack space allocated each time the red zone is reached.
#[cfg(not(target_arch = "wasm32"))]
const GROWTH: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
