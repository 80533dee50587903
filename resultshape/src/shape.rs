use alloc::vec::Vec;

use resultshape_core::TypeDesc;

use crate::flatten;
use crate::node::{Node, NodeId, NodeRef};
use crate::{FillStrategy, ShapeError};

/// An immutable shape, produced by [`ShapeBuilder::freeze`](crate::ShapeBuilder::freeze).
///
/// A `Shape` is cheap to query (slot counts and slot types are computed when
/// freezing), and [`pack`](Self::pack) only needs `&self`, so a single shape
/// can be shared between threads and used for any number of tuples.
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) arg_lengths: Vec<usize>,
    composite_types: Vec<&'static TypeDesc>,
}

impl Shape {
    pub(crate) fn new(nodes: Vec<Node>, root: NodeId, arg_lengths: Vec<usize>) -> Self {
        let mut composite_types = Vec::with_capacity(arg_lengths[root.index()]);
        flatten::composite_types(&nodes, root, &mut composite_types);
        Self {
            nodes,
            root,
            arg_lengths,
            composite_types,
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            nodes: &self.nodes,
            id: self.root,
            arg_lengths: Some(&self.arg_lengths),
        }
    }

    /// Any node of this shape. Ids are renumbered when freezing: walk down
    /// from [`root`](Self::root) to find them.
    pub fn node(&self, id: NodeId) -> Result<NodeRef<'_>, ShapeError> {
        if id.index() >= self.nodes.len() {
            return Err(ShapeError::UnknownNode { node: id });
        }
        Ok(NodeRef { id, ..self.root() })
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a shape has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of flat slots a tuple must have.
    pub fn arg_length(&self) -> usize {
        self.arg_lengths[self.root.index()]
    }

    /// Number of elements of the root.
    pub fn length(&self) -> usize {
        self.root().length()
    }

    /// The type of every flat slot, in the order [`pack`](Self::pack)
    /// consumes them.
    pub fn composite_types(&self) -> &[&'static TypeDesc] {
        &self.composite_types
    }

    /// The declared type of every element of the root.
    pub fn types(&self) -> Vec<&'static TypeDesc> {
        self.root().types()
    }

    /// The type of the root.
    pub fn ty(&self) -> &'static TypeDesc {
        self.root().ty()
    }

    /// The strategy of the root.
    pub fn strategy(&self) -> FillStrategy {
        self.root().strategy()
    }

    /// The alias of the root.
    pub fn alias(&self) -> Option<&str> {
        self.root().alias()
    }

    /// Whether the root nests other shapes.
    pub fn is_nesting(&self) -> bool {
        self.root().is_nesting()
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.root(), f)
    }
}
