//! Minimal observable state container for UI state.
//!
//! A `Store<T>` owns one value and a set of subscribers. Setters notify the
//! subscribers synchronously with a clone of the new value. Stores are cheap
//! handles (`Rc` inside), so components receive their store instances through
//! props instead of reaching into any ambient context; two handles compare
//! equal iff they point at the same store, which is exactly what Yew's prop
//! diffing needs.
//!
//! Single-threaded by construction (`Rc<RefCell<..>>`): this matches the
//! browser UI thread. There is no locking and no cross-thread story.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use yew::Callback;

struct Inner<T> {
    value: T,
    subscribers: HashMap<usize, Callback<T>>,
    next_id: usize,
}

pub struct Store<T: Clone + 'static> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + 'static> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> PartialEq for Store<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: initial,
                subscribers: HashMap::new(),
                next_id: 0,
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Mutates the value in place (a partial merge) and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        {
            let mut inner = self.inner.borrow_mut();
            f(&mut inner.value);
        }
        self.notify();
    }

    /// Registers a subscriber. Delivery stops when the returned
    /// `Subscription` is dropped or explicitly unsubscribed.
    pub fn subscribe(&self, callback: Callback<T>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.insert(id, callback);
            id
        };
        let weak = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.remove(&id);
                }
            })),
        }
    }

    fn notify(&self) {
        // The borrow is released before any callback runs, so a subscriber
        // may call back into the store.
        let (value, callbacks): (T, Vec<Callback<T>>) = {
            let inner = self.inner.borrow();
            (
                inner.value.clone(),
                inner.subscribers.values().cloned().collect(),
            )
        };
        for callback in callbacks {
            callback.emit(value.clone());
        }
    }
}

/// Handle to an active store subscription; dropping it unsubscribes.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<i32>>>, Callback<i32>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let callback = Callback::from(move |value| sink.borrow_mut().push(value));
        (seen, callback)
    }

    #[test]
    fn set_and_update_notify_synchronously() {
        let store = Store::new(0);
        let (seen, callback) = recorder();
        let _sub = store.subscribe(callback);

        store.set(1);
        store.update(|v| *v += 10);

        assert_eq!(*seen.borrow(), vec![1, 11]);
        assert_eq!(store.get(), 11);
    }

    #[test]
    fn dropping_the_subscription_stops_delivery() {
        let store = Store::new(0);
        let (seen, callback) = recorder();
        let sub = store.subscribe(callback);

        store.set(1);
        drop(sub);
        store.set(2);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn explicit_unsubscribe_behaves_like_drop() {
        let store = Store::new(0);
        let (seen, callback) = recorder();
        let sub = store.subscribe(callback);

        sub.unsubscribe();
        store.set(5);

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = Store::new(1);
        let b = a.clone();
        let c = Store::new(1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn subscribers_can_reenter_the_store() {
        let store = Store::new(0);
        let reader = store.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = store.subscribe(Callback::from(move |value: i32| {
            // get() while the notification is in flight must not panic
            sink.borrow_mut().push((value, reader.get()));
        }));

        store.set(3);
        assert_eq!(*seen.borrow(), vec![(3, 3)]);
    }
}
