use alloc::{sync::Arc, vec::Vec};

use portable_atomic::{AtomicUsize, Ordering};
use spin::Mutex as SpinMutex;

use crate::core::{ParallelSource, RailError, RailSubscriber, testing::TestRailSubscription};

/// How a scripted rail terminates after its elements are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RailTerminal {
  /// The rail completes normally.
  Complete,
  /// The rail fails with the given error.
  Fail(RailError),
  /// The rail stays open; tests drive the terminal event manually.
  Pending,
}

/// Scripted elements and terminal for one rail.
#[derive(Debug, Clone)]
pub struct RailScript<T> {
  elements: Vec<T>,
  terminal: RailTerminal,
}

impl<T> RailScript<T> {
  /// Creates a script that emits the elements and completes.
  #[must_use]
  pub const fn completing(elements: Vec<T>) -> Self {
    Self { elements, terminal: RailTerminal::Complete }
  }

  /// Creates a script that emits the elements and fails.
  #[must_use]
  pub const fn failing(elements: Vec<T>, error: RailError) -> Self {
    Self { elements, terminal: RailTerminal::Fail(error) }
  }

  /// Creates a script that emits the elements and stays open.
  #[must_use]
  pub const fn pending(elements: Vec<T>) -> Self {
    Self { elements, terminal: RailTerminal::Pending }
  }
}

/// Scripted parallel source recording the fan-out protocol.
///
/// Elements are delivered synchronously during `subscribe`, assuming the
/// subscriber requests unbounded demand in `on_subscribe` the way the reduce
/// rails do; rails that request nothing receive nothing. Rail subscribers
/// are retained so tests can drive late terminal events through
/// [`rail`](Self::rail).
pub struct TestRailSource<T> {
  scripts:         Vec<RailScript<T>>,
  subscribe_calls: AtomicUsize,
  subscriptions:   SpinMutex<Vec<Arc<TestRailSubscription>>>,
  rails:           SpinMutex<Vec<Arc<dyn RailSubscriber<T>>>>,
}

impl<T> TestRailSource<T> {
  /// Creates a source where every rail emits its elements and completes.
  #[must_use]
  pub fn new(rails: Vec<Vec<T>>) -> Self {
    Self::with_scripts(rails.into_iter().map(RailScript::completing).collect())
  }

  /// Creates a source from explicit per-rail scripts.
  #[must_use]
  pub fn with_scripts(scripts: Vec<RailScript<T>>) -> Self {
    Self {
      scripts,
      subscribe_calls: AtomicUsize::new(0),
      subscriptions: SpinMutex::new(Vec::new()),
      rails: SpinMutex::new(Vec::new()),
    }
  }

  /// Number of `subscribe` calls observed.
  #[must_use]
  pub fn subscribe_count(&self) -> usize {
    self.subscribe_calls.load(Ordering::Acquire)
  }

  /// Returns the subscription handle handed to rail `index`.
  #[must_use]
  pub fn subscription(&self, index: usize) -> Option<Arc<TestRailSubscription>> {
    self.subscriptions.lock().get(index).cloned()
  }

  /// Returns the subscriber attached to rail `index`.
  #[must_use]
  pub fn rail(&self, index: usize) -> Option<Arc<dyn RailSubscriber<T>>> {
    self.rails.lock().get(index).cloned()
  }
}

impl<T> ParallelSource<T> for TestRailSource<T>
where
  T: Clone + Send + Sync + 'static,
{
  fn parallelism(&self) -> usize {
    self.scripts.len()
  }

  fn subscribe(&self, subscribers: &[Arc<dyn RailSubscriber<T>>]) {
    self.subscribe_calls.fetch_add(1, Ordering::AcqRel);
    self.rails.lock().extend(subscribers.iter().cloned());

    for (script, subscriber) in self.scripts.iter().zip(subscribers) {
      let subscription = Arc::new(TestRailSubscription::new());
      self.subscriptions.lock().push(subscription.clone());
      subscriber.on_subscribe(subscription.clone());

      if subscription.is_cancelled() || !subscription.demand().is_some_and(|demand| demand.has_demand()) {
        continue;
      }
      for element in &script.elements {
        if subscription.is_cancelled() {
          break;
        }
        subscriber.on_next(element.clone());
      }
      if subscription.is_cancelled() {
        continue;
      }
      match &script.terminal {
        | RailTerminal::Complete => subscriber.on_complete(),
        | RailTerminal::Fail(error) => subscriber.on_error(error.clone()),
        | RailTerminal::Pending => {},
      }
    }
  }
}
