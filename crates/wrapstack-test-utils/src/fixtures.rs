//! Fixture components

use crate::node::Node;

/// `<span>Oh hey!</span>`
pub fn test_component() -> Node {
    Node::element("span", vec![Node::text("Oh hey!")])
}

/// `<section>children</section>`
pub fn section(children: Node) -> Node {
    Node::element("section", vec![children])
}

/// `<h1>title</h1>` followed by the children
pub fn title_prefixer(title: &str, children: Node) -> Node {
    Node::fragment(vec![
        Node::element("h1", vec![Node::text(title)]),
        children,
    ])
}

/// Optional title heading and votes line, then the children
///
/// An empty title or zero votes leaves that line out.
pub fn title_and_votes_prefixer(title: &str, votes: u32, children: Node) -> Node {
    let mut nodes = Vec::with_capacity(3);
    if !title.is_empty() {
        nodes.push(Node::element("h1", vec![Node::text(title)]));
    }
    if votes != 0 {
        nodes.push(Node::element("h2", vec![Node::text(format!("{votes} votes"))]));
    }
    nodes.push(children);
    Node::fragment(nodes)
}
