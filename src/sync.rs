//! Lock used for the engine's interior state.
//!
//! Backed by `std::sync::Mutex` with the `std` feature and by `spin::Mutex`
//! under `alloc` only. A poisoned std lock is recovered, since every engine
//! operation validates before it mutates.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Guard<'a, T> = spin::MutexGuard<'a, T>;

/// Mutual exclusion over one piece of engine state.
#[derive(Debug, Default)]
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    /// Wraps `value`.
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// Locks the value for the lifetime of the returned guard.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Locks the value for the lifetime of the returned guard.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0.lock()
    }
}
