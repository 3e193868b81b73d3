//! Coarse-grained locking for the otherwise single-threaded containers.
//!
//! None of the containers in this crate synchronize internally. For shared
//! use the policy is one exclusive lock per container instance: [`Locked`]
//! wraps any container behind a read-write spin lock and hands out access
//! through short closures. The containers have no natural sharding, so
//! nothing finer-grained is offered.
use core::fmt;

use crossbeam_utils::CachePadded;
use log::trace;
use spin::RwLock;


/// A container behind a per-instance read-write lock.
///
/// The lock is cache-padded so that two `Locked` instances sitting next to
/// each other in memory do not share a line.
///
/// # Examples
///
/// ```
/// use catena_collections::adt::stack::Stack;
/// use catena_collections::concurrent::Locked;
///
/// let stack = Locked::new(Stack::new());
/// stack.with_mut(|s| s.push(1));
/// assert_eq!(stack.with(|s| s.len()), 1);
/// ```
pub struct Locked<C> {
    inner: CachePadded<RwLock<C>>,
}

impl<C> Locked<C> {
    /// Wrap a container.
    pub const fn new(container: C) -> Self {
        Locked {
            inner: CachePadded::new(RwLock::new(container)),
        }
    }

    /// Run `f` with shared access to the container.
    ///
    /// The closure runs under the read lock and should complete quickly
    /// without sleeping.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&C) -> R,
    {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Run `f` with exclusive access to the container.
    ///
    /// The closure runs under the write lock and should complete quickly
    /// without sleeping.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut C) -> R,
    {
        trace!("taking exclusive container lock");
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Unwrap the container, consuming the lock.
    pub fn into_inner(self) -> C {
        self.inner.into_inner().into_inner()
    }
}

impl<C: Default> Default for Locked<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: fmt::Debug> fmt::Debug for Locked<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_read() {
            Some(guard) => f.debug_tuple("Locked").field(&*guard).finish(),
            None => f.write_str("Locked(<held>)"),
        }
    }
}
