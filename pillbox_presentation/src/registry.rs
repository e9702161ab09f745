// Copyright 2025 the Pillbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-presentation bookkeeping.
//!
//! The registry keeps every in-flight controller alive for the duration of
//! its presentation, so an indicator survives even when the caller drops its
//! own handle right after `present`. It also carries the double-presentation
//! guard: an id can be inserted only while absent.
//!
//! Entries are populated and drained exclusively by the controllers
//! themselves (insert on `present`, remove at the end of dismissal); callers
//! only construct the registry, hand it to controllers, and may observe it.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use hashbrown::HashMap;

use crate::controller::PresentationController;

/// A process-unique identifier for one presentation controller.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PresenterId(u64);

impl PresenterId {
    /// Returns a fresh id, distinct from every id handed out before.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the underlying value of this id.
    #[must_use]
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for PresenterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PresenterId").field(&self.0).finish()
    }
}

impl fmt::Display for PresenterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PresenterId({})", self.0)
    }
}

/// The process-scoped table of currently-presented controllers.
///
/// Cheap to clone; all clones share one table. Construct one per process (or
/// per UI scene) and pass it to every controller you create:
///
/// ```
/// use pillbox_presentation::PresenterRegistry;
///
/// let registry = PresenterRegistry::new();
/// assert!(registry.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct PresenterRegistry {
    inner: Rc<RefCell<HashMap<PresenterId, PresentationController>>>,
}

impl PresenterRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is currently presented.
    #[must_use]
    pub fn contains(&self, id: PresenterId) -> bool {
        self.inner.borrow().contains_key(&id)
    }

    /// Returns the number of currently-presented controllers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns `true` if nothing is presented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Inserts `controller` under `id` if the id is absent.
    ///
    /// Returns `false` (and leaves the table unchanged) when the id is
    /// already presented — the double-presentation guard.
    pub(crate) fn insert_if_absent(
        &self,
        id: PresenterId,
        controller: PresentationController,
    ) -> bool {
        let mut table = self.inner.borrow_mut();
        if table.contains_key(&id) {
            return false;
        }
        table.insert(id, controller);
        true
    }

    /// Removes the entry for `id`, if any.
    pub(crate) fn remove(&self, id: PresenterId) -> Option<PresentationController> {
        self.inner.borrow_mut().remove(&id)
    }
}

impl fmt::Debug for PresenterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.inner.borrow();
        f.debug_struct("PresenterRegistry")
            .field("count", &table.len())
            .field("ids", &table.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Configuration;
    use pillbox_content::{Content, Text};

    fn controller(registry: &PresenterRegistry) -> PresentationController {
        PresentationController::new(
            Content::new(Text::from("Title")),
            Configuration::default(),
            registry,
        )
    }

    #[test]
    fn ids_are_unique() {
        let a = PresenterId::next();
        let b = PresenterId::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }

    #[test]
    fn insert_if_absent_guards_duplicates() {
        let registry = PresenterRegistry::new();
        let controller = controller(&registry);
        let id = controller.id();

        assert!(registry.insert_if_absent(id, controller.clone()));
        assert!(!registry.insert_if_absent(id, controller));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(id));
    }

    #[test]
    fn remove_drains_the_entry() {
        let registry = PresenterRegistry::new();
        let controller = controller(&registry);
        let id = controller.id();

        registry.insert_if_absent(id, controller);
        assert!(registry.remove(id).is_some());
        assert!(registry.remove(id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn clones_share_one_table() {
        let registry = PresenterRegistry::new();
        let observer = registry.clone();
        let controller = controller(&registry);
        let id = controller.id();

        registry.insert_if_absent(id, controller);
        assert!(observer.contains(id));
        assert_eq!(observer.len(), 1);
    }

    #[test]
    fn registry_keeps_a_dropped_controller_alive() {
        let registry = PresenterRegistry::new();
        let id = {
            let controller = controller(&registry);
            let id = controller.id();
            registry.insert_if_absent(id, controller.clone());
            id
            // The caller's handle drops here.
        };
        // The registry's clone still holds the shared state.
        assert!(registry.contains(id));
        let revived = registry.remove(id).expect("entry must exist");
        assert_eq!(revived.id(), id);
    }
}
