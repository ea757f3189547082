//! Invocation recorder

use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe log of calls, shareable between a test and the closures it
/// hands to wrappers
#[derive(Debug)]
pub struct CallLog<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> CallLog<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, call: T) {
        self.calls.lock().push(call);
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl<T: Clone> CallLog<T> {
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
