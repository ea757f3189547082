//! Error types for wrapper composition
//!
//! Every error here is a usage error in test setup code. They are returned
//! from [`compose`](crate::compose) before anything renders, so a failing test
//! points at the helper list rather than at the render tree.

use crate::identity::WrapperRef;

/// Composition error with the offending wrapper attached
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompositionError {
    /// A simple wrapper was requested more than once in one composition
    #[error("duplicate helper detected: {wrapper}")]
    DuplicateHelper {
        /// The repeated wrapper
        wrapper: WrapperRef,
    },

    /// A composite slot was filled twice while overwrites are rejected
    #[error("slot {index} of composite wrapper {wrapper} was supplied more than once")]
    SlotOverwritten {
        /// The composite wrapper
        wrapper: WrapperRef,
        /// The slot that was filled twice
        index: usize,
    },

    /// A helper instance does not fit the pending state of its wrapper
    #[error("helper instance for {wrapper} does not match its wrapper's slot layout")]
    SlotLayoutMismatch {
        /// The wrapper whose state could not be updated
        wrapper: WrapperRef,
    },
}

impl CompositionError {
    /// Create duplicate helper error
    #[inline]
    #[must_use]
    pub fn duplicate(wrapper: WrapperRef) -> Self {
        Self::DuplicateHelper { wrapper }
    }

    /// Create slot overwritten error
    #[inline]
    #[must_use]
    pub fn slot_overwritten(wrapper: WrapperRef, index: usize) -> Self {
        Self::SlotOverwritten { wrapper, index }
    }

    /// The wrapper this error is about
    #[inline]
    #[must_use]
    pub fn wrapper(&self) -> &WrapperRef {
        match self {
            Self::DuplicateHelper { wrapper }
            | Self::SlotOverwritten { wrapper, .. }
            | Self::SlotLayoutMismatch { wrapper } => wrapper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_wrapper() {
        let wrapper = WrapperRef::new_for::<fn()>().renamed("with_section");
        let err = CompositionError::duplicate(wrapper);

        assert!(err.to_string().starts_with("duplicate helper detected: with_section (#"));
        assert_eq!(err.wrapper(), &wrapper);
    }

    #[test]
    fn slot_overwritten_message_has_index() {
        let wrapper = WrapperRef::new_for::<fn()>().renamed("route");
        let err = CompositionError::slot_overwritten(wrapper, 2);

        assert!(err.to_string().starts_with("slot 2 of composite wrapper route"));
        assert!(matches!(err, CompositionError::SlotOverwritten { index: 2, .. }));
    }
}
