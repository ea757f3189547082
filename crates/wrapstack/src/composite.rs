//! Composite wrapper helpers
//!
//! A composite wrapper receives one argument slot per sibling helper and
//! mounts once no matter how many of its helpers a test uses. Slots are
//! `Option`s: a slot nobody supplied arrives as `None`.
//!
//! # Example
//! ```rust,ignore
//! let (with_title, with_votes) = create_composite_helpers(
//!     |(title, votes): (Option<String>, Option<u32>)| {
//!         Renderable::new(move |children| {
//!             title_and_votes_prefixer(title.as_deref().unwrap_or(""), votes.unwrap_or(0), children)
//!         })
//!     },
//! );
//!
//! // One wrapper application with both slots filled
//! let wrapper = compose([with_votes.call(50), with_title.call("Custom title".into())])?;
//! ```

use crate::identity::{WrapperId, WrapperRef};
use crate::instance::{
    CompositeInstance, FillSlot, HelperInstance, OpenSlots, PendingComposite,
};
use crate::renderable::Renderable;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Largest number of slots a composite wrapper may declare
pub const MAX_COMPOSITE_ARITY: usize = 6;

pub(crate) mod private {
    /// Sealed trait marker
    pub trait Sealed {}
}

/// Tuple of `Option` argument slots accepted by a composite wrapper
///
/// Implemented for `(Option<A0>,)` up to six slots. This trait is sealed.
pub trait SlotTuple: private::Sealed + Send + Sized + 'static {
    /// Number of slots
    const ARITY: usize;

    /// Every slot empty
    fn empty() -> Self;
}

/// Access to slot `I` of a slot tuple
pub trait Slot<const I: usize>: SlotTuple {
    /// Arguments accepted by the helper for this slot
    type Args: Send + 'static;

    /// Fill the slot, returning its previous value
    fn replace(&mut self, args: Self::Args) -> Option<Self::Args>;
}

/// Builds the tuple of sibling helpers for a slot tuple
pub trait IntoHelpers<N>: SlotTuple {
    /// One [`CompositeHelper`] per slot, in slot order
    type Helpers;

    /// Derive the helpers from the shared wrapper
    fn helpers(shared: Arc<SharedWrapper<Self, N>>) -> Self::Helpers;
}

/// Wrapper function shared by all siblings of one factory call
pub struct SharedWrapper<S, N> {
    wrapper: WrapperRef,
    wrapper_fn: Box<dyn Fn(S) -> Renderable<N> + Send + Sync>,
}

impl<S, N> fmt::Debug for SharedWrapper<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWrapper")
            .field("wrapper", &self.wrapper)
            .finish_non_exhaustive()
    }
}

/// Create one helper per slot of `wrapper_fn`
///
/// The slot tuple type is taken from the wrapper's parameter, so annotate it:
/// `|(a, b): (Option<A>, Option<B>)| ...`. Every helper in the returned
/// tuple refers to the same wrapper.
#[must_use]
pub fn create_composite_helpers<S, N, F>(wrapper_fn: F) -> S::Helpers
where
    S: IntoHelpers<N>,
    F: Fn(S) -> Renderable<N> + Send + Sync + 'static,
    N: 'static,
{
    let shared = Arc::new(SharedWrapper {
        wrapper: WrapperRef::new_for::<F>(),
        wrapper_fn: Box::new(wrapper_fn),
    });
    S::helpers(shared)
}

/// Reusable capture point for slot `I` of a composite wrapper
pub struct CompositeHelper<S, N, const I: usize> {
    wrapper: WrapperRef,
    shared: Arc<SharedWrapper<S, N>>,
}

impl<S, N, const I: usize> CompositeHelper<S, N, I> {
    fn new(shared: Arc<SharedWrapper<S, N>>) -> Self {
        Self {
            wrapper: shared.wrapper,
            shared,
        }
    }

    /// Use `name` in diagnostics for instances of this helper
    ///
    /// Siblings keep their own names; the identity stays shared.
    #[inline]
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.wrapper = self.wrapper.renamed(name);
        self
    }

    /// Identity of the shared wrapper
    #[inline]
    #[must_use]
    pub fn id(&self) -> WrapperId {
        self.wrapper.id()
    }

    /// Wrapper identity and name
    #[inline]
    #[must_use]
    pub fn wrapper(&self) -> &WrapperRef {
        &self.wrapper
    }

    /// Slot filled by this helper
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        I
    }
}

impl<S, N, const I: usize> CompositeHelper<S, N, I>
where
    S: Slot<I>,
    N: 'static,
{
    /// Number of slots of the shared wrapper
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        S::ARITY
    }

    /// Capture `args` for slot `I`
    #[must_use]
    pub fn call(&self, args: <S as Slot<I>>::Args) -> HelperInstance<N> {
        let shared = Arc::clone(&self.shared);
        let open: OpenSlots<N> = Box::new(move || {
            Box::new(PendingSlots {
                shared,
                slots: S::empty(),
            }) as Box<dyn PendingComposite<N>>
        });
        let fill: FillSlot<N> = Box::new(move |pending: &mut dyn PendingComposite<N>| {
            let pending = pending.as_any_mut().downcast_mut::<PendingSlots<S, N>>()?;
            Some(<S as Slot<I>>::replace(&mut pending.slots, args).is_some())
        });

        HelperInstance::Composite(CompositeInstance::new(
            self.wrapper,
            I,
            S::ARITY,
            open,
            fill,
        ))
    }
}

impl<S, N, const I: usize> Clone for CompositeHelper<S, N, I> {
    fn clone(&self) -> Self {
        Self {
            wrapper: self.wrapper,
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S, N, const I: usize> fmt::Debug for CompositeHelper<S, N, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeHelper")
            .field("wrapper", &self.wrapper)
            .field("index", &I)
            .finish_non_exhaustive()
    }
}

/// Slots collected so far for one composite wrapper
struct PendingSlots<S, N> {
    shared: Arc<SharedWrapper<S, N>>,
    slots: S,
}

impl<S, N> PendingComposite<N> for PendingSlots<S, N>
where
    S: SlotTuple,
    N: 'static,
{
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn finish(self: Box<Self>) -> Renderable<N> {
        let Self { shared, slots } = *self;
        (shared.wrapper_fn)(slots)
    }
}

macro_rules! slot_tuple {
    (@slots $all:tt; $($idx:tt => $A:ident),+) => {
        $( slot_tuple!(@slot $all; $idx => $A); )+
    };
    (@slot [$($All:ident),+]; $idx:tt => $A:ident) => {
        impl<$($All: Send + 'static),+> Slot<$idx> for ($(Option<$All>,)+) {
            type Args = $A;

            #[inline]
            fn replace(&mut self, args: $A) -> Option<$A> {
                self.$idx.replace(args)
            }
        }
    };
    ($arity:literal; $($idx:tt => $A:ident),+) => {
        impl<$($A: Send + 'static),+> private::Sealed for ($(Option<$A>,)+) {}

        impl<$($A: Send + 'static),+> SlotTuple for ($(Option<$A>,)+) {
            const ARITY: usize = $arity;

            #[inline]
            fn empty() -> Self {
                ($(None::<$A>,)+)
            }
        }

        impl<N: 'static, $($A: Send + 'static),+> IntoHelpers<N> for ($(Option<$A>,)+) {
            type Helpers = ($(CompositeHelper<Self, N, $idx>,)+);

            fn helpers(shared: Arc<SharedWrapper<Self, N>>) -> Self::Helpers {
                ($(CompositeHelper::<Self, N, $idx>::new(Arc::clone(&shared)),)+)
            }
        }

        slot_tuple!(@slots [$($A),+]; $($idx => $A),+);
    };
}

slot_tuple!(1; 0 => A0);
slot_tuple!(2; 0 => A0, 1 => A1);
slot_tuple!(3; 0 => A0, 1 => A1, 2 => A2);
slot_tuple!(4; 0 => A0, 1 => A1, 2 => A2, 3 => A3);
slot_tuple!(5; 0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4);
slot_tuple!(6; 0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5);
