use std::fmt::Debug;
use std::sync::Arc;

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A reactive value that can be watched for changes.
///
/// Writers go through [`Property::update`]; watchers are notified only when
/// the stored value actually changes. Each watcher gets the
/// current value immediately when subscribing.
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: Arc<watch::Sender<T>>,
}

impl<T: Clone + Send + Sync + PartialEq + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Apply `updater` to the current value and store the result.
    ///
    /// The read and the write happen under the same lock, so concurrent
    /// updaters never observe each other's intermediate state.
    pub(crate) fn update<F>(&self, updater: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.tx.send_if_modified(|current| {
            let next = updater(current);
            if *current != next {
                *current = next;
                true
            } else {
                false
            }
        });
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Stream that yields the current value, then every change.
    pub fn watch(&self) -> impl Stream<Item = T> + Send + use<T> {
        WatchStream::new(self.tx.subscribe())
    }
}

impl<T: Clone + Send + Sync + PartialEq + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;

    #[tokio::test]
    async fn watchers_see_initial_value_then_changes() {
        let property = Property::new(1u32);
        let mut stream = Box::pin(property.watch());

        assert_eq!(stream.next().await, Some(1));

        property.update(|_| 2);
        assert_eq!(stream.next().await, Some(2));
    }

    #[test]
    fn update_reads_latest_value() {
        let property = Property::new(10u32);

        property.update(|v| v + 1);
        property.update(|v| v * 2);

        assert_eq!(property.get(), 22);
    }

    #[test]
    fn unchanged_update_does_not_mark_watchers() {
        let property = Property::new(5u32);
        let rx = property.tx.subscribe();

        property.update(|v| *v);
        assert!(!rx.has_changed().unwrap_or(true));

        property.update(|v| v + 1);
        assert!(rx.has_changed().unwrap_or(false));
    }
}
