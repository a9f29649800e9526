// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: Cell<u64>,
}

/// Shared state slice with change notifications.
/// Clones share both the value and the subscriber list.
pub struct ReactiveState<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Copy of the current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Read without cloning the whole slice
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.inner.value.borrow())
    }

    /// Replace the value and notify
    pub fn set(&self, new_value: T) {
        *self.inner.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Apply one transition and notify once
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.inner.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn clear_subscribers(&self) {
        self.inner.subscribers.borrow_mut().clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    // Callbacks run on a snapshot with no borrow held, so they may read the
    // state or subscribe/unsubscribe.
    fn notify(&self) {
        let callbacks: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        if callbacks.is_empty() {
            return;
        }
        let snapshot = self.get();
        for callback in callbacks {
            callback(&snapshot);
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone + Default> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
