//! Simple wrapper helpers
//!
//! One wrapper function, one helper. Calling the helper captures the
//! arguments; the wrapper runs only when the composer applies it.

use crate::identity::{WrapperId, WrapperRef};
use crate::instance::{HelperInstance, SimpleInstance};
use crate::renderable::Renderable;
use std::fmt;
use std::sync::Arc;

type SimpleWrapperFn<A, N> = dyn Fn(A) -> Renderable<N> + Send + Sync;

/// Reusable capture point for one simple wrapper
///
/// Clones share the wrapper and its identity.
pub struct SimpleHelper<A, N> {
    wrapper: WrapperRef,
    wrapper_fn: Arc<SimpleWrapperFn<A, N>>,
}

/// Create a helper for `wrapper_fn`
///
/// The wrapper receives whatever the helper is called with and returns the
/// component to wrap around the subject. Use a tuple for several arguments
/// and `()` for none.
///
/// # Example
/// ```rust,ignore
/// let with_section = create_simple_helper(|(): ()| {
///     Renderable::new(|children| Node::element("section", vec![children]))
/// });
///
/// let wrapper = compose([with_section.call(())])?;
/// ```
#[must_use]
pub fn create_simple_helper<A, N, F>(wrapper_fn: F) -> SimpleHelper<A, N>
where
    F: Fn(A) -> Renderable<N> + Send + Sync + 'static,
    A: Send + 'static,
    N: 'static,
{
    SimpleHelper {
        wrapper: WrapperRef::new_for::<F>(),
        wrapper_fn: Arc::new(wrapper_fn),
    }
}

impl<A, N> SimpleHelper<A, N>
where
    A: Send + 'static,
    N: 'static,
{
    /// Capture `args` for one composition
    #[must_use]
    pub fn call(&self, args: A) -> HelperInstance<N> {
        let wrapper_fn = Arc::clone(&self.wrapper_fn);
        HelperInstance::Simple(SimpleInstance::new(
            self.wrapper,
            Box::new(move || wrapper_fn(args)),
        ))
    }
}

impl<A, N> SimpleHelper<A, N> {
    /// Use `name` in diagnostics instead of the closure type name
    #[inline]
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.wrapper = self.wrapper.renamed(name);
        self
    }

    /// Wrapper identity
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
}

impl<A, N> Clone for SimpleHelper<A, N> {
    fn clone(&self) -> Self {
        Self {
            wrapper: self.wrapper,
            wrapper_fn: Arc::clone(&self.wrapper_fn),
        }
    }
}

impl<A, N> fmt::Debug for SimpleHelper<A, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleHelper")
            .field("wrapper", &self.wrapper)
            .finish_non_exhaustive()
    }
}
