use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use parking_lot::Mutex;

use crate::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A synchronous observer subject.
///
/// `fire` works on a snapshot of the subscribers taken when it starts, so
/// handlers may subscribe or unsubscribe while it runs. Subscriptions added
/// during a firing are only called from the next one.
pub struct Event<T> {
    handlers: Mutex<Vec<(SubscriptionId, Handler<T>)>>,
    next_id: AtomicUsize,
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self {
            handlers: Mutex::new(vec![]),
            next_id: AtomicUsize::new(0),
        }
    }
}

impl<T> Debug for Event<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.len())
            .finish()
    }
}

impl<T> Event<T> {
    pub fn subscribe(&self, handler: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.handlers.lock().push((id, Arc::new(handler)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.lock();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    pub fn fire(&self, value: &T) {
        let snapshot: Vec<Handler<T>> = self
            .handlers
            .lock()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in snapshot {
            handler(value);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.lock().is_empty()
    }
}

/// Notifications published by the window manager
#[derive(Debug, Default)]
pub struct Signals {
    /// The newly focused window, or `None` when nothing has focus
    pub focus_changed: Event<Option<Window>>,
    pub window_unmapped: Event<Window>,
    pub window_property_changed: Event<Window>,
}
