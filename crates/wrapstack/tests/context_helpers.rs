//! Functional tests for context provider helpers.
//!
//! The value can be fixed when the helper is created, supplied when it is
//! called, or missing; consumers must see the right value in each case.

use pretty_assertions::assert_eq;
use wrapstack::prelude::*;
use wrapstack_test_utils::{mount, Node};

fn user_profile() -> Node {
    Node::consumer("user", |user| match user {
        Some(name) => Node::element("span", vec![Node::text(format!("User: {name}"))]),
        None => Node::element("span", vec![Node::text("Not logged in")]),
    })
}

fn provide_user(name: String, children: Node) -> Node {
    Node::provider("user", name, children)
}

#[test]
fn value_given_at_creation() {
    let with_user = create_context_helper(provide_user, Some("Cam Jackson".to_string()));

    let wrapper = compose([with_user.call(None)]).unwrap();

    assert_eq!(mount(user_profile(), &wrapper), "<span>User: Cam Jackson</span>");
}

#[test]
fn value_given_when_wrapping() {
    let with_user = create_context_helper(provide_user, None);

    let wrapper = compose([with_user.call(Some("Cam Jackson".to_string()))]).unwrap();

    assert_eq!(mount(user_profile(), &wrapper), "<span>User: Cam Jackson</span>");
}

#[test]
fn wrapping_value_overrides_creation_value() {
    let with_user = create_context_helper(provide_user, Some("Default".to_string()));

    let wrapper = compose([with_user.call(Some("Override".to_string()))]).unwrap();

    assert_eq!(mount(user_profile(), &wrapper), "<span>User: Override</span>");
}

#[test]
fn no_value_leaves_consumer_on_its_fallback() {
    let with_user = create_context_helper(provide_user, None);

    let wrapper = compose([with_user.call(None)]).unwrap();

    assert_eq!(mount(user_profile(), &wrapper), "<span>Not logged in</span>");
}

/// A context helper is a simple helper, so it cannot be listed twice.
#[test]
fn context_helper_is_deduplicated() {
    let with_user = create_context_helper(provide_user, None);

    let err = compose([
        with_user.call(Some("a".to_string())),
        with_user.call(Some("b".to_string())),
    ])
    .unwrap_err();

    assert!(matches!(err, CompositionError::DuplicateHelper { .. }));
    assert!(err.to_string().contains("provide_user"));
}

#[test]
fn nested_contexts_resolve_innermost() {
    let outer = create_context_helper(provide_user, Some("outer".to_string()));
    let inner = create_context_helper(provide_user, Some("inner".to_string()));

    let wrapper = compose([outer.call(None), inner.call(None)]).unwrap();

    assert_eq!(mount(user_profile(), &wrapper), "<span>User: inner</span>");
}
