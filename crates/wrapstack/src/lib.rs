//! wrapstack
//!
//! Compose independent wrapper providers (routing, dependency injection,
//! theming, ...) into one wrapper for component rendering tests.
//!
//! # Core Concepts
//!
//! - [`Renderable`]: a component that wraps child content
//! - [`SimpleHelper`]: captures arguments for one wrapper function
//! - [`CompositeHelper`]: captures arguments for one slot of a wrapper shared
//!   by several helpers
//! - [`HelperInstance`]: a helper call, waiting to be composed
//! - [`compose`] / [`Composer`]: merge instances, dedupe wrappers, nest them
//!
//! # Example
//!
//! ```rust,ignore
//! use wrapstack::prelude::*;
//!
//! let with_section = create_simple_helper(|(): ()| {
//!     Renderable::new(|children| Node::element("section", vec![children]))
//! });
//! let with_title = create_simple_helper(|title: String| {
//!     Renderable::new(move |children| title_prefixer(&title, children))
//! });
//!
//! // <section><h1>Hello</h1>{children}</section>
//! let wrapper = compose([with_section.call(()), with_title.call("Hello".into())])?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod composer;
mod composite;
mod config;
mod context;
mod error;
mod identity;
mod instance;
mod renderable;
mod simple;

// Re-exports
pub use composer::{compose, Composer};
pub use composite::{
    create_composite_helpers, CompositeHelper, IntoHelpers, Slot, SlotTuple, MAX_COMPOSITE_ARITY,
};
pub use config::{ComposerConfig, SlotOverwrite};
pub use context::create_context_helper;
pub use error::CompositionError;
pub use identity::{WrapperId, WrapperRef};
pub use instance::{CompositeInstance, HelperInstance, HelperKind, SimpleInstance};
pub use renderable::Renderable;
pub use simple::{create_simple_helper, SimpleHelper};

/// Types that appear in public signatures but are not meant to be named.
/// **Note:** This is only for internal use and may change.
#[doc(hidden)]
pub mod __private {
    pub use super::composite::SharedWrapper;
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for writing and composing helpers
    pub use crate::{
        compose, create_composite_helpers, create_context_helper, create_simple_helper,
        CompositionError, HelperInstance, Renderable,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
