//! Node tree and HTML-ish renderer

use std::fmt;
use std::sync::Arc;
use wrapstack::Renderable;

type ConsumeFn = dyn Fn(Option<&str>) -> Node + Send + Sync;

/// Minimal element tree for rendering composed wrappers
#[derive(Clone)]
pub enum Node {
    /// Nothing
    Empty,
    /// Escaped text
    Text(String),
    /// `<tag>children</tag>`
    Element { tag: String, children: Vec<Node> },
    /// Children rendered back to back
    Fragment(Vec<Node>),
    /// Makes `value` visible to consumers of `key` below it
    Provider {
        key: &'static str,
        value: String,
        children: Box<Node>,
    },
    /// Renders from the nearest provided value for `key`
    Consumer {
        key: &'static str,
        render: Arc<ConsumeFn>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element {
            tag: tag.into(),
            children,
        }
    }

    pub fn fragment(children: Vec<Node>) -> Self {
        Self::Fragment(children)
    }

    pub fn provider(key: &'static str, value: impl Into<String>, children: Node) -> Self {
        Self::Provider {
            key,
            value: value.into(),
            children: Box::new(children),
        }
    }

    pub fn consumer<F>(key: &'static str, render: F) -> Self
    where
        F: Fn(Option<&str>) -> Node + Send + Sync + 'static,
    {
        Self::Consumer {
            key,
            render: Arc::new(render),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Element { tag, children } => f
                .debug_struct("Element")
                .field("tag", tag)
                .field("children", children)
                .finish(),
            Self::Fragment(children) => f.debug_tuple("Fragment").field(children).finish(),
            Self::Provider {
                key,
                value,
                children,
            } => f
                .debug_struct("Provider")
                .field("key", key)
                .field("value", value)
                .field("children", children)
                .finish(),
            Self::Consumer { key, .. } => f
                .debug_struct("Consumer")
                .field("key", key)
                .finish_non_exhaustive(),
        }
    }
}

/// Serialize `node` the way a DOM container's inner HTML would read
pub fn render_html(node: &Node) -> String {
    let mut out = String::new();
    let mut scope = Vec::new();
    write_node(node, &mut scope, &mut out);
    out
}

/// Render `subject` inside `wrapper` and serialize the result
pub fn mount(subject: Node, wrapper: &Renderable<Node>) -> String {
    render_html(&wrapper.render(subject))
}

fn write_node<'a>(node: &'a Node, scope: &mut Vec<(&'static str, &'a str)>, out: &mut String) {
    match node {
        Node::Empty => {}
        Node::Text(text) => escape_into(text, out),
        Node::Element { tag, children } => {
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for child in children {
                write_node(child, scope, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        Node::Fragment(children) => {
            for child in children {
                write_node(child, scope, out);
            }
        }
        Node::Provider {
            key,
            value,
            children,
        } => {
            scope.push((*key, value.as_str()));
            write_node(children, scope, out);
            scope.pop();
        }
        Node::Consumer { key, render } => {
            let value = scope
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| *v);
            let rendered = (**render)(value);
            write_consumed(&rendered, scope, out);
        }
    }
}

// Consumer output is owned by this frame, so it gets its own scope borrow.
fn write_consumed(node: &Node, scope: &[(&'static str, &str)], out: &mut String) {
    let mut inner: Vec<(&'static str, &str)> = scope.to_vec();
    write_node(node, &mut inner, out);
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_elements_and_text() {
        let node = Node::element("section", vec![Node::text("a < b")]);
        assert_eq!(render_html(&node), "<section>a &lt; b</section>");
    }

    #[test]
    fn fragment_has_no_markup() {
        let node = Node::fragment(vec![Node::text("a"), Node::Empty, Node::text("b")]);
        assert_eq!(render_html(&node), "ab");
    }

    #[test]
    fn consumer_reads_nearest_provider() {
        let consumer = Node::consumer("user", |user| Node::text(user.unwrap_or("nobody")));
        let node = Node::provider(
            "user",
            "outer",
            Node::fragment(vec![
                consumer.clone(),
                Node::provider("user", "inner", consumer.clone()),
            ]),
        );

        assert_eq!(render_html(&node), "outerinner");
        assert_eq!(render_html(&consumer), "nobody");
    }

    #[test]
    fn mount_applies_wrapper() {
        let wrapper = Renderable::new(|children| Node::element("div", vec![children]));
        assert_eq!(mount(Node::text("x"), &wrapper), "<div>x</div>");
    }
}
