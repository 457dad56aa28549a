#![forbid(unsafe_code)]

//! Scoped component lifetimes.
//!
//! Components that touch shared document state on mount must undo it on
//! unmount, on every exit path. [`Mounted`] pairs the two: constructing it
//! calls [`Lifecycle::mount`] and dropping it (normally or while unwinding)
//! calls [`Lifecycle::unmount`] exactly once.

use std::ops::{Deref, DerefMut};

/// Mount/unmount hooks.
pub trait Lifecycle {
    /// Called once, before the component is first rendered by its host.
    fn mount(&mut self);

    /// Called once, when the host releases the component.
    fn unmount(&mut self);
}

/// A component that is mounted for as long as this guard lives.
#[must_use = "the component is unmounted as soon as the guard is dropped"]
pub struct Mounted<T: Lifecycle> {
    component: T,
}

impl<T: Lifecycle> Mounted<T> {
    /// Mount `component`.
    pub fn new(mut component: T) -> Self {
        component.mount();
        Self { component }
    }

    /// Unmount now. Equivalent to dropping the guard.
    pub fn unmount(self) {}
}

impl<T: Lifecycle> Deref for Mounted<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.component
    }
}

impl<T: Lifecycle> DerefMut for Mounted<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.component
    }
}

impl<T: Lifecycle> Drop for Mounted<T> {
    fn drop(&mut self) {
        self.component.unmount();
    }
}

impl<T: Lifecycle + std::fmt::Debug> std::fmt::Debug for Mounted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Mounted").field(&self.component).finish()
    }
}
