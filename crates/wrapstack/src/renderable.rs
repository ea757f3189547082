//! Renderable components
//!
//! A [`Renderable`] takes a children value and returns a larger tree with the
//! children embedded somewhere inside. The library never inspects the node
//! type `N`; it only stores, clones, and nests these functions.

use std::fmt;
use std::sync::Arc;

type RenderFn<N> = dyn Fn(N) -> N + Send + Sync;

/// A component that wraps arbitrary child content
pub struct Renderable<N> {
    render: Arc<RenderFn<N>>,
}

impl<N> Renderable<N> {
    /// Create from a closure mapping children to the wrapped tree
    #[inline]
    #[must_use]
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(N) -> N + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    /// Wrapper that renders its children unchanged
    #[inline]
    #[must_use]
    pub fn passthrough() -> Self
    where
        N: 'static,
    {
        Self::new(|children| children)
    }

    /// Render `children` inside this component
    #[inline]
    pub fn render(&self, children: N) -> N {
        (self.render)(children)
    }

    /// Nest `layers` so the first one is outermost
    ///
    /// `[A, B, C]` renders as `A(B(C(children)))`. An empty list gives
    /// [`Renderable::passthrough`].
    #[must_use]
    pub fn nest(layers: Vec<Renderable<N>>) -> Self
    where
        N: 'static,
    {
        match layers.len() {
            0 => Self::passthrough(),
            1 => layers.into_iter().next().unwrap_or_else(Self::passthrough),
            _ => Self::new(move |children| {
                layers
                    .iter()
                    .rev()
                    .fold(children, |inner, layer| layer.render(inner))
            }),
        }
    }
}

impl<N> Clone for Renderable<N> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
        }
    }
}

impl<N> fmt::Debug for Renderable<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderable").finish_non_exhaustive()
    }
}
