//! Helper instances
//!
//! A [`HelperInstance`] is what a helper returns when called: the wrapper it
//! belongs to plus the captured arguments, not yet applied. Arguments are
//! type-erased at call time so instances of unrelated wrappers can sit in one
//! list handed to the composer.

use crate::identity::WrapperRef;
use crate::renderable::Renderable;
use std::any::Any;
use std::fmt;

/// Helper variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelperKind {
    /// One helper per wrapper, applied with its own args
    Simple,

    /// Several sibling helpers sharing one wrapper, one slot each
    Composite,
}

/// Deferred application of a simple wrapper to its captured args
pub(crate) type Apply<N> = Box<dyn FnOnce() -> Renderable<N> + Send>;

/// Allocates the all-empty slot state for a composite wrapper
pub(crate) type OpenSlots<N> = Box<dyn FnOnce() -> Box<dyn PendingComposite<N>> + Send>;

/// Writes one slot; `None` when the state has the wrong layout, otherwise
/// whether the slot already held a value
pub(crate) type FillSlot<N> = Box<dyn FnOnce(&mut dyn PendingComposite<N>) -> Option<bool> + Send>;

/// Slot state of a composite wrapper while the composer is merging
pub(crate) trait PendingComposite<N>: Send {
    /// For downcasting to the concrete slot tuple
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Invoke the wrapper with the collected slots
    fn finish(self: Box<Self>) -> Renderable<N>;
}

/// Captured call of a simple helper
pub struct SimpleInstance<N> {
    wrapper: WrapperRef,
    apply: Apply<N>,
}

impl<N> SimpleInstance<N> {
    #[inline]
    pub(crate) fn new(wrapper: WrapperRef, apply: Apply<N>) -> Self {
        Self { wrapper, apply }
    }

    /// The wrapper this instance applies
    #[inline]
    #[must_use]
    pub fn wrapper(&self) -> &WrapperRef {
        &self.wrapper
    }

    #[inline]
    pub(crate) fn into_apply(self) -> Apply<N> {
        self.apply
    }
}

/// Captured call of one composite helper
pub struct CompositeInstance<N> {
    wrapper: WrapperRef,
    helper_index: usize,
    arity: usize,
    open: OpenSlots<N>,
    fill: FillSlot<N>,
}

impl<N> CompositeInstance<N> {
    #[inline]
    pub(crate) fn new(
        wrapper: WrapperRef,
        helper_index: usize,
        arity: usize,
        open: OpenSlots<N>,
        fill: FillSlot<N>,
    ) -> Self {
        Self {
            wrapper,
            helper_index,
            arity,
            open,
            fill,
        }
    }

    /// The shared composite wrapper
    #[inline]
    #[must_use]
    pub fn wrapper(&self) -> &WrapperRef {
        &self.wrapper
    }

    /// Slot this instance fills
    #[inline]
    #[must_use]
    pub fn helper_index(&self) -> usize {
        self.helper_index
    }

    /// Number of slots of the wrapper
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (OpenSlots<N>, FillSlot<N>) {
        (self.open, self.fill)
    }
}

/// A helper call waiting to be composed
pub enum HelperInstance<N> {
    /// From a [`SimpleHelper`](crate::SimpleHelper)
    Simple(SimpleInstance<N>),

    /// From a [`CompositeHelper`](crate::CompositeHelper)
    Composite(CompositeInstance<N>),
}

impl<N> HelperInstance<N> {
    /// Variant tag
    #[inline]
    #[must_use]
    pub fn kind(&self) -> HelperKind {
        match self {
            Self::Simple(_) => HelperKind::Simple,
            Self::Composite(_) => HelperKind::Composite,
        }
    }

    /// The wrapper this instance refers to
    #[inline]
    #[must_use]
    pub fn wrapper(&self) -> &WrapperRef {
        match self {
            Self::Simple(instance) => instance.wrapper(),
            Self::Composite(instance) => instance.wrapper(),
        }
    }

    /// Slot index, for composite instances only
    #[inline]
    #[must_use]
    pub fn helper_index(&self) -> Option<usize> {
        match self {
            Self::Simple(_) => None,
            Self::Composite(instance) => Some(instance.helper_index()),
        }
    }
}

impl<N> fmt::Debug for HelperInstance<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("HelperInstance");
        s.field("kind", &self.kind()).field("wrapper", self.wrapper());
        if let Self::Composite(instance) = self {
            s.field("helper_index", &instance.helper_index)
                .field("arity", &instance.arity);
        }
        s.finish_non_exhaustive()
    }
}
