//! # htmltree
//!
//! Build HTML node trees in memory and render them to markup strings.
//!
//! A tree is assembled bottom-up from three node kinds: [`LeafNode`]
//! for literal text (optionally wrapped in a single tag),
//! [`ParentNode`] for a tag wrapping an ordered sequence of children,
//! and [`BaseNode`], the unspecialized form that carries the shared
//! fields but has no rendering of its own. Rendering walks the tree
//! depth-first and concatenates each node's markup into its parent's:
//!
//! ```text
//! Node Tree ──render──▶ HTML String
//! ```
//!
//! Nodes are write-once: constructed fully formed, then rendered any
//! number of times. Independent trees can be rendered from multiple
//! threads without coordination.
//!
//! ## Example
//!
//! ```rust
//! use htmltree::{LeafNode, Node, ParentNode};
//!
//! let page = ParentNode::new(
//!     "div",
//!     vec![
//!         Node::from(LeafNode::text("Hello, ")),
//!         Node::from(LeafNode::new("b", "world")),
//!     ],
//! )
//! .with_attributes(vec![("class", "greeting")]);
//!
//! assert_eq!(
//!     page.render().unwrap(),
//!     "<div class=\"greeting\">Hello, <b>world</b></div>"
//! );
//! ```
//!
//! ## Escaping
//!
//! Neither text content nor attribute values are escaped: nodes render
//! exactly the strings they were built with. Callers embedding
//! untrusted input must escape it before constructing the tree.

mod node;
mod render;

pub use node::{Attributes, BaseNode, LeafNode, Node, ParentNode};

/// Error type for render operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// `render` was invoked on an unspecialized base node
    #[error("render is not implemented for a base node")]
    NotImplemented,

    /// A node reached `render` in violation of its construction contract
    #[error("invalid node state: {0}")]
    InvalidState(#[from] InvalidState),
}

/// Precondition violations surfaced at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidState {
    /// A leaf node has no text value
    #[error("leaf node has no value")]
    MissingValue,

    /// A parent node has no tag
    #[error("parent node has no tag")]
    MissingTag,

    /// A parent node's children sequence is absent (not merely empty)
    #[error("parent node has no children")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, RenderError>;
