//! Synchronous observable primitives: [`Signal`] and [`ReactiveValue`].
//!
//! Both are cheap-clone handles over shared state, so producers and
//! observers can hold them independently. Everything is single-threaded
//! and run-to-completion: `emit`/`set` invoke every registered handler
//! before returning.

use std::cell::RefCell;
use std::rc::Rc;

/// Identifies one registered callback. Returned by `subscribe`, consumed
/// by `unsubscribe`; unsubscribing removes only the matching callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Handler<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id: u64,
    handlers: Vec<(u64, Handler<T>)>,
}

impl<T> Registry<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// An observer registry: a subscriber list plus a synchronous publish
/// operation.
///
/// Handlers run in registration order. `emit` iterates a snapshot of the
/// list, so a handler may subscribe or unsubscribe callbacks (itself
/// included) without disturbing the in-flight notification; such changes
/// take effect from the next `emit`.
pub struct Signal<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Signal<T> {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Register `handler` and return its subscription token.
    ///
    /// Subscribing the same closure twice registers two independent
    /// callbacks with distinct tokens.
    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.handlers.push((id, Rc::new(RefCell::new(handler))));
        Subscription(id)
    }

    /// Remove the callback registered under `sub`, if any.
    pub fn unsubscribe(&self, sub: Subscription) {
        self.registry
            .borrow_mut()
            .handlers
            .retain(|(id, _)| *id != sub.0);
    }

    /// Invoke every currently registered handler with `value`, in
    /// registration order, before returning.
    pub fn emit(&self, value: &T) {
        // Snapshot so handlers can touch the registry mid-notification.
        let snapshot: Vec<Handler<T>> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in snapshot {
            (handler.borrow_mut())(value);
        }
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

// ---------------------------------------------------------------------------
// ReactiveValue
// ---------------------------------------------------------------------------

/// An observable holder of the latest value.
///
/// `set` stores the value and publishes it synchronously to all
/// subscribers — unconditionally, even when the new value equals the old,
/// so re-setting re-triggers downstream work. Setting the value from
/// inside one of its own change handlers is unsupported.
pub struct ReactiveValue<T> {
    value: Rc<RefCell<T>>,
    changed: Signal<T>,
}

impl<T> Clone for ReactiveValue<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            changed: self.changed.clone(),
        }
    }
}

impl<T: Default> Default for ReactiveValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> ReactiveValue<T> {
    /// Create a reactive value holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            changed: Signal::new(),
        }
    }

    /// The current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Store `value` and publish it to all subscribers.
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        *self.value.borrow_mut() = value.clone();
        self.changed.emit(&value);
    }

    /// Register a change handler.
    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        self.changed.subscribe(handler)
    }

    /// Remove a previously registered change handler.
    pub fn unsubscribe(&self, sub: Subscription) {
        self.changed.unsubscribe(sub)
    }

    /// A read-only handle onto the same value and subscriber list.
    pub fn reader(&self) -> ReactiveReader<T> {
        ReactiveReader {
            value: Rc::clone(&self.value),
            changed: self.changed.clone(),
        }
    }
}

/// Read-only view of a [`ReactiveValue`]: observers can read and
/// subscribe but not set.
pub struct ReactiveReader<T> {
    value: Rc<RefCell<T>>,
    changed: Signal<T>,
}

impl<T> Clone for ReactiveReader<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            changed: self.changed.clone(),
        }
    }
}

impl<T> ReactiveReader<T> {
    /// The current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Register a change handler.
    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        self.changed.subscribe(handler)
    }

    /// Remove a previously registered change handler.
    pub fn unsubscribe(&self, sub: Subscription) {
        self.changed.unsubscribe(sub)
    }
}
