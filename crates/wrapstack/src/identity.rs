//! Wrapper identity
//!
//! Every factory call allocates a fresh [`WrapperId`]. The composer keys its
//! merge map on this id, so two helpers share a wrapper exactly when they came
//! out of the same factory call, however similar their closures look.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WRAPPER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique handle for one wrapper function
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WrapperId(u64);

impl WrapperId {
    /// Allocate the next id
    #[inline]
    #[must_use]
    pub(crate) fn next() -> Self {
        Self(NEXT_WRAPPER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WrapperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A wrapper id together with a name for diagnostics
///
/// Equality and hashing only look at the id; the name is for humans.
#[derive(Debug, Clone, Copy)]
pub struct WrapperRef {
    id: WrapperId,
    name: &'static str,
}

impl WrapperRef {
    /// Fresh reference named after the wrapper closure's type
    #[inline]
    #[must_use]
    pub(crate) fn new_for<F>() -> Self {
        Self {
            id: WrapperId::next(),
            name: std::any::type_name::<F>(),
        }
    }

    /// Same id, different name
    #[inline]
    #[must_use]
    pub(crate) fn renamed(self, name: &'static str) -> Self {
        Self { name, ..self }
    }

    /// Wrapper id
    #[inline]
    #[must_use]
    pub fn id(&self) -> WrapperId {
        self.id
    }

    /// Diagnostic name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for WrapperRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WrapperRef {}

impl std::hash::Hash for WrapperRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for WrapperRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
