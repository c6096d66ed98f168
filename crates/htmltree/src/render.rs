//! Markup serialization for the render tree.
//!
//! Rendering walks the tree depth-first, serializing each node and
//! concatenating the result into its parent's output. The walk is pure
//! string computation: no I/O, no escaping, no separators between
//! siblings.

use crate::node::{Attributes, BaseNode, LeafNode, Node, ParentNode};
use crate::{InvalidState, RenderError, Result};

impl Node {
    /// Render this node and its subtree to a markup string.
    ///
    /// Dispatches to the variant's own rendering; malformed nodes fail
    /// with [`RenderError`] and no partial output.
    pub fn render(&self) -> Result<String> {
        match self {
            Node::Base(node) => node.render(),
            Node::Leaf(node) => node.render(),
            Node::Parent(node) => node.render(),
        }
    }

    /// Render only the attribute portion of the opening tag.
    pub fn render_attributes(&self) -> String {
        match self {
            Node::Base(node) => node.render_attributes(),
            Node::Leaf(node) => node.render_attributes(),
            Node::Parent(node) => node.render_attributes(),
        }
    }
}

impl BaseNode {
    /// A base node has no rendering of its own; always fails with
    /// [`RenderError::NotImplemented`].
    pub fn render(&self) -> Result<String> {
        Err(RenderError::NotImplemented)
    }

    /// Render only the attribute portion of the opening tag.
    pub fn render_attributes(&self) -> String {
        render_attributes(self.attributes.as_ref())
    }
}

impl LeafNode {
    /// Render the literal text, wrapped in the tag if one is set.
    pub fn render(&self) -> Result<String> {
        let value = self.value.as_deref().ok_or(InvalidState::MissingValue)?;

        match self.tag.as_deref() {
            None => Ok(value.to_string()),
            Some(tag) => Ok(format!(
                "<{}{}>{}</{}>",
                tag,
                self.render_attributes(),
                value,
                tag
            )),
        }
    }

    /// Render only the attribute portion of the opening tag.
    pub fn render_attributes(&self) -> String {
        render_attributes(self.attributes.as_ref())
    }
}

impl ParentNode {
    /// Render the tag wrapping the concatenation of the children's
    /// renderings, in order.
    ///
    /// An empty children sequence renders as an empty inner body; an
    /// absent one is an error. Recursion depth equals tree depth, so
    /// the practical nesting bound is the thread stack.
    pub fn render(&self) -> Result<String> {
        let tag = self.tag.as_deref().ok_or(InvalidState::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .ok_or(InvalidState::MissingChildren)?;

        let mut inner = String::new();
        for child in children {
            inner.push_str(&child.render()?);
        }

        Ok(format!(
            "<{}{}>{}</{}>",
            tag,
            self.render_attributes(),
            inner,
            tag
        ))
    }

    /// Render only the attribute portion of the opening tag.
    pub fn render_attributes(&self) -> String {
        render_attributes(self.attributes.as_ref())
    }
}

/// Serialize an attribute map to ` name="value"` pairs in insertion
/// order. Values are inserted verbatim; an absent map yields the empty
/// string.
fn render_attributes(attributes: Option<&Attributes>) -> String {
    let Some(attributes) = attributes else {
        return String::new();
    };

    let mut out = String::new();
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_attributes() {
        let node = BaseNode::new(
            Some("div".to_string()),
            Some("Hello, world!".to_string()),
            None,
            Some(Attributes::from([
                ("class".to_string(), "greeting".to_string()),
                ("id".to_string(), "main".to_string()),
            ])),
        );

        assert_eq!(node.render_attributes(), " class=\"greeting\" id=\"main\"");
    }

    #[test]
    fn test_render_attributes_insertion_order() {
        let node = LeafNode::new("div", "x")
            .with_attributes(vec![("z-index", "9"), ("class", "primary")]);

        assert_eq!(node.render_attributes(), " z-index=\"9\" class=\"primary\"");
    }

    #[test]
    fn test_render_attributes_absent_or_empty() {
        assert_eq!(LeafNode::text("x").render_attributes(), "");
        assert_eq!(BaseNode::default().render_attributes(), "");
        assert_eq!(
            LeafNode::new("div", "x")
                .with_attributes(Vec::new())
                .render_attributes(),
            ""
        );
    }

    #[test]
    fn test_base_render_not_implemented() {
        let node = BaseNode::default();
        assert_eq!(node.render(), Err(RenderError::NotImplemented));
        assert_eq!(
            Node::from(BaseNode::default()).render(),
            Err(RenderError::NotImplemented)
        );
    }

    #[test]
    fn test_leaf_render_tagged() {
        let node = LeafNode::new("p", "Hello, world!");
        assert_eq!(node.render().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_leaf_render_with_attributes() {
        let node =
            LeafNode::new("div", "this is the end").with_attributes(vec![("class", "primary")]);
        assert_eq!(
            node.render().unwrap(),
            "<div class=\"primary\">this is the end</div>"
        );
    }

    #[test]
    fn test_leaf_render_without_tag() {
        let node = LeafNode::text("this is the end");
        assert_eq!(node.render().unwrap(), "this is the end");
    }

    #[test]
    fn test_leaf_render_missing_value() {
        let node = LeafNode {
            tag: Some("p".to_string()),
            value: None,
            attributes: None,
        };

        assert_eq!(
            node.render(),
            Err(RenderError::InvalidState(InvalidState::MissingValue))
        );
    }

    #[test]
    fn test_parent_render_mixed_children() {
        let node = ParentNode::new(
            "div",
            vec![
                Node::from(LeafNode::text("a")),
                Node::from(LeafNode::new("b", "b")),
                Node::from(LeafNode::text("c")),
            ],
        );

        assert_eq!(node.render().unwrap(), "<div>a<b>b</b>c</div>");
    }

    #[test]
    fn test_parent_render_nested() {
        let node = ParentNode::new(
            "div",
            vec![Node::from(ParentNode::new(
                "p",
                vec![Node::from(ParentNode::new(
                    "b",
                    vec![Node::from(LeafNode::text("test"))],
                ))],
            ))],
        );

        assert_eq!(node.render().unwrap(), "<div><p><b>test</b></p></div>");
    }

    #[test]
    fn test_parent_render_empty_children() {
        let node = ParentNode::new("div", Vec::new());
        assert_eq!(node.render().unwrap(), "<div></div>");
    }

    #[test]
    fn test_parent_render_with_attributes() {
        let node = ParentNode::new("div", vec![Node::from(LeafNode::new("span", "x"))])
            .with_attributes(vec![("class", "wrap"), ("id", "main")]);

        assert_eq!(
            node.render().unwrap(),
            "<div class=\"wrap\" id=\"main\"><span>x</span></div>"
        );
    }

    #[test]
    fn test_parent_render_missing_tag() {
        let node = ParentNode {
            tag: None,
            children: Some(Vec::new()),
            attributes: None,
        };

        assert_eq!(
            node.render(),
            Err(RenderError::InvalidState(InvalidState::MissingTag))
        );
    }

    #[test]
    fn test_parent_render_missing_children() {
        let node = ParentNode {
            tag: Some("div".to_string()),
            children: None,
            attributes: None,
        };

        assert_eq!(
            node.render(),
            Err(RenderError::InvalidState(InvalidState::MissingChildren))
        );
    }

    #[test]
    fn test_child_error_propagates() {
        let bad = LeafNode {
            tag: Some("b".to_string()),
            value: None,
            attributes: None,
        };
        let node = ParentNode::new(
            "div",
            vec![
                Node::from(LeafNode::text("ok")),
                Node::from(ParentNode::new("p", vec![Node::from(bad)])),
            ],
        );

        assert_eq!(
            node.render(),
            Err(RenderError::InvalidState(InvalidState::MissingValue))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RenderError::NotImplemented.to_string(),
            "render is not implemented for a base node"
        );
        assert_eq!(
            RenderError::from(InvalidState::MissingValue).to_string(),
            "invalid node state: leaf node has no value"
        );
        assert_eq!(
            RenderError::from(InvalidState::MissingTag).to_string(),
            "invalid node state: parent node has no tag"
        );
        assert_eq!(
            RenderError::from(InvalidState::MissingChildren).to_string(),
            "invalid node state: parent node has no children"
        );
    }
}
