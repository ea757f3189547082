//! Context provider helpers
//!
//! Convenience over [`create_simple_helper`] for the common case of a wrapper
//! that provides one value to its descendants. How the value reaches them is
//! up to the node type; the helper only decides which value to provide.

use crate::renderable::Renderable;
use crate::simple::{create_simple_helper, SimpleHelper};
use std::sync::Arc;

/// Create a helper that provides a context value through `provide`
///
/// The helper takes `Option<V>`. A value given when calling the helper wins,
/// otherwise `default` is used. With neither, the wrapper renders its
/// children unchanged so consumers see their own fallback.
///
/// # Example
/// ```rust,ignore
/// let with_user = create_context_helper(
///     |user: String, children| Node::provider("user", user, children),
///     Some("Cam".to_string()),
/// );
///
/// let wrapper = compose([with_user.call(None)])?;
/// ```
#[must_use]
pub fn create_context_helper<V, N, P>(provide: P, default: Option<V>) -> SimpleHelper<Option<V>, N>
where
    V: Clone + Send + Sync + 'static,
    N: 'static,
    P: Fn(V, N) -> N + Send + Sync + 'static,
{
    let provide = Arc::new(provide);

    create_simple_helper(move |value: Option<V>| match value.or_else(|| default.clone()) {
        Some(value) => {
            let provide = Arc::clone(&provide);
            Renderable::new(move |children| provide(value.clone(), children))
        }
        None => Renderable::passthrough(),
    })
    .named(std::any::type_name::<P>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;

    fn provide_user(user: String, children: String) -> String {
        format!("[user={user}]{children}")
    }

    #[test]
    fn value_at_creation() {
        let with_user = create_context_helper(provide_user, Some("Cam".to_string()));
        let wrapper = compose([with_user.call(None)]).unwrap();

        assert_eq!(wrapper.render("profile".to_string()), "[user=Cam]profile");
    }

    #[test]
    fn value_at_call_overrides_default() {
        let with_user = create_context_helper(provide_user, Some("Cam".to_string()));
        let wrapper = compose([with_user.call(Some("Ana".to_string()))]).unwrap();

        assert_eq!(wrapper.render("profile".to_string()), "[user=Ana]profile");
    }

    #[test]
    fn no_value_is_passthrough() {
        let with_user = create_context_helper(provide_user, None);
        let wrapper = compose([with_user.call(None)]).unwrap();

        assert_eq!(wrapper.render("profile".to_string()), "profile");
    }

    #[test]
    fn named_after_provider() {
        let with_user = create_context_helper(provide_user, None);
        assert!(with_user.wrapper().name().ends_with("provide_user"));
    }
}
