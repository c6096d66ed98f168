//! Render-tree node structures.
//!
//! A tree is assembled bottom-up from three node kinds sharing the same
//! field vocabulary: tag, value, children, attributes. Leaves carry text
//! and never children, parents carry children and never text, and the
//! base form carries every field but renders nothing on its own.

use std::fmt;

use indexmap::IndexMap;

/// Ordered attribute map for an opening tag.
///
/// Keys are attribute names, values are the verbatim attribute text.
/// Iteration order is insertion order, which is also serialization order.
pub type Attributes = IndexMap<String, String>;

/// A node in the render tree.
///
/// The hierarchy is closed: a node is either an unspecialized
/// [`BaseNode`], a [`LeafNode`] holding literal text, or a
/// [`ParentNode`] wrapping an ordered sequence of children.
#[derive(Clone, PartialEq, Eq)]
pub enum Node {
    /// Unspecialized node carrying only the shared fields
    Base(BaseNode),
    /// Literal text, optionally wrapped in a single tag
    Leaf(LeafNode),
    /// A tag wrapping an ordered sequence of child nodes
    Parent(ParentNode),
}

/// The unspecialized node form.
///
/// Holds all four shared fields but has no rendering of its own; it
/// exists to be specialized by [`LeafNode`] and [`ParentNode`].
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BaseNode {
    /// Wrapping tag name (e.g. "p"), absent for no tag
    pub tag: Option<String>,
    /// Literal text content
    pub value: Option<String>,
    /// Ordered child nodes
    pub children: Option<Vec<Node>>,
    /// Attributes of the opening tag
    pub attributes: Option<Attributes>,
}

/// A node holding literal text, optionally wrapped in a single tag.
///
/// A leaf never has children; the field does not exist on this type.
#[derive(Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// Wrapping tag name, absent for bare text
    pub tag: Option<String>,
    /// Literal text content, set by every constructor
    pub value: Option<String>,
    /// Attributes of the opening tag
    pub attributes: Option<Attributes>,
}

/// A node wrapping an ordered sequence of children in a tag.
///
/// A parent never has text of its own; the field does not exist on
/// this type. An empty children sequence is valid and distinct from an
/// absent one.
#[derive(Clone, PartialEq, Eq)]
pub struct ParentNode {
    /// Wrapping tag name
    pub tag: Option<String>,
    /// Ordered child nodes
    pub children: Option<Vec<Node>>,
    /// Attributes of the opening tag
    pub attributes: Option<Attributes>,
}

impl BaseNode {
    /// Create an unspecialized node from the four shared fields.
    pub fn new(
        tag: Option<String>,
        value: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag,
            value,
            children,
            attributes,
        }
    }
}

impl LeafNode {
    /// Create a leaf wrapping `value` in `tag`.
    pub fn new(tag: &str, value: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            attributes: None,
        }
    }

    /// Create a bare text leaf with no wrapping tag.
    pub fn text(value: &str) -> Self {
        Self {
            tag: None,
            value: Some(value.to_string()),
            attributes: None,
        }
    }

    /// Attach attributes, replacing any already set.
    pub fn with_attributes(mut self, attributes: Vec<(&str, &str)>) -> Self {
        self.attributes = Some(to_attributes(attributes));
        self
    }
}

impl ParentNode {
    /// Create a parent wrapping `children` in `tag`.
    ///
    /// `children` may be empty; an empty parent renders as `<tag></tag>`.
    pub fn new(tag: &str, children: Vec<Node>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: None,
        }
    }

    /// Attach attributes, replacing any already set.
    pub fn with_attributes(mut self, attributes: Vec<(&str, &str)>) -> Self {
        self.attributes = Some(to_attributes(attributes));
        self
    }
}

impl Node {
    /// Check if this is an unspecialized base node
    pub fn is_base(&self) -> bool {
        matches!(self, Node::Base(_))
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Check if this is a parent node
    pub fn is_parent(&self) -> bool {
        matches!(self, Node::Parent(_))
    }

    /// Get the wrapping tag name, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Base(node) => node.tag.as_deref(),
            Node::Leaf(node) => node.tag.as_deref(),
            Node::Parent(node) => node.tag.as_deref(),
        }
    }

    /// Get the attribute map, if any
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Base(node) => node.attributes.as_ref(),
            Node::Leaf(node) => node.attributes.as_ref(),
            Node::Parent(node) => node.attributes.as_ref(),
        }
    }
}

impl From<BaseNode> for Node {
    fn from(node: BaseNode) -> Self {
        Node::Base(node)
    }
}

impl From<LeafNode> for Node {
    fn from(node: LeafNode) -> Self {
        Node::Leaf(node)
    }
}

impl From<ParentNode> for Node {
    fn from(node: ParentNode) -> Self {
        Node::Parent(node)
    }
}

/// Build an ordered attribute map from name/value pairs.
fn to_attributes(pairs: Vec<(&str, &str)>) -> Attributes {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

// The debug form is a fixed contract: `Kind(tag, value, children: ..., attrs)`
// with `None` for absent fields. Tests assert on the exact strings.

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Base(node) => node.fmt(f),
            Node::Leaf(node) => node.fmt(f),
            Node::Parent(node) => node.fmt(f),
        }
    }
}

impl fmt::Debug for BaseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BaseNode({}, {}, children: ",
            opt_str(&self.tag),
            opt_str(&self.value)
        )?;
        fmt_children(f, self.children.as_deref())?;
        f.write_str(", ")?;
        fmt_attributes(f, self.attributes.as_ref())?;
        f.write_str(")")
    }
}

impl fmt::Debug for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeafNode({}, {}, children: None, ",
            opt_str(&self.tag),
            opt_str(&self.value)
        )?;
        fmt_attributes(f, self.attributes.as_ref())?;
        f.write_str(")")
    }
}

impl fmt::Debug for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParentNode({}, None, children: ", opt_str(&self.tag))?;
        fmt_children(f, self.children.as_deref())?;
        f.write_str(", ")?;
        fmt_attributes(f, self.attributes.as_ref())?;
        f.write_str(")")
    }
}

fn opt_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

fn fmt_children(f: &mut fmt::Formatter<'_>, children: Option<&[Node]>) -> fmt::Result {
    match children {
        Some(children) => f.debug_list().entries(children).finish(),
        None => f.write_str("None"),
    }
}

fn fmt_attributes(f: &mut fmt::Formatter<'_>, attributes: Option<&Attributes>) -> fmt::Result {
    match attributes {
        Some(attributes) => write!(f, "{:?}", attributes),
        None => f.write_str("None"),
    }
}
