//! Nodes of a shape tree, and read-only views on them

use alloc::string::String;
use alloc::vec::Vec;

use resultshape_core::TypeDesc;

use crate::FillStrategy;

/// Identifies a node inside a [`ShapeBuilder`](crate::ShapeBuilder) or a
/// [`Shape`](crate::Shape).
///
/// Ids are only meaningful for the arena that handed them out.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(index) => NodeId(index),
            Err(_) => panic!("shape arena overflow: more than u32::MAX nodes"),
        }
    }

    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl core::fmt::Debug for NodeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of a compound node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// A single slot of the declared type, taken as is.
    Leaf(&'static TypeDesc),

    /// A nested shape, taking as many slots as it needs.
    Child(NodeId),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) ty: &'static TypeDesc,
    pub(crate) primitive: bool,
    pub(crate) strategy: FillStrategy,
    pub(crate) elements: Vec<Element>,
    pub(crate) alias: Option<String>,
}

impl Node {
    pub(crate) fn new(ty: &'static TypeDesc, primitive: bool, strategy: FillStrategy) -> Self {
        Self {
            ty,
            primitive,
            strategy,
            elements: Vec::new(),
            alias: None,
        }
    }
}

/// A read-only view on one node and everything below it.
///
/// Obtained from [`ShapeBuilder::get`](crate::ShapeBuilder::get) or
/// [`Shape::node`](crate::Shape::node).
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    pub(crate) nodes: &'a [Node],
    pub(crate) id: NodeId,
    // per-node slot counts, when the arena is frozen
    pub(crate) arg_lengths: Option<&'a [usize]>,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn node(&self) -> &'a Node {
        &self.nodes[self.id.index()]
    }

    pub(crate) fn at(&self, id: NodeId) -> NodeRef<'a> {
        NodeRef { id, ..*self }
    }

    /// Id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The type this node materializes.
    pub fn ty(&self) -> &'static TypeDesc {
        self.node().ty
    }

    /// How this node assembles its result.
    pub fn strategy(&self) -> FillStrategy {
        self.node().strategy
    }

    /// The label attached with [`ShapeBuilder::set_alias`](crate::ShapeBuilder::set_alias).
    pub fn alias(&self) -> Option<&'a str> {
        self.node().alias.as_deref()
    }

    /// Whether this is a leaf node that can never gain elements.
    pub fn is_primitive(&self) -> bool {
        self.node().primitive
    }

    /// Opposite of [`is_primitive`](Self::is_primitive).
    pub fn is_compound(&self) -> bool {
        !self.is_primitive()
    }

    /// Whether at least one element is a nested shape.
    pub fn is_nesting(&self) -> bool {
        self.elements()
            .iter()
            .any(|element| matches!(element, Element::Child(_)))
    }

    /// Leaves and children, in declaration order.
    pub fn elements(&self) -> &'a [Element] {
        &self.node().elements
    }

    /// The nested shapes only, in declaration order.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        self.elements().iter().filter_map(move |element| match element {
            Element::Child(id) => Some(self.at(*id)),
            Element::Leaf(_) => None,
        })
    }

    /// Number of immediate elements; a child counts once, whatever its size.
    pub fn length(&self) -> usize {
        self.elements().len()
    }

    /// Number of flat slots this node consumes.
    pub fn arg_length(&self) -> usize {
        match self.arg_lengths {
            Some(lengths) => lengths[self.id.index()],
            None => crate::flatten::arg_length(self.nodes, self.id),
        }
    }

    /// The type of every flat slot this node consumes, in consumption order.
    pub fn composite_types(&self) -> Vec<&'static TypeDesc> {
        let mut types = Vec::with_capacity(self.arg_length());
        crate::flatten::composite_types(self.nodes, self.id, &mut types);
        types
    }

    /// The declared type of every immediate element: a leaf's type, or a
    /// child's own type however many slots it takes.
    pub fn types(&self) -> Vec<&'static TypeDesc> {
        self.elements()
            .iter()
            .map(|element| match element {
                Element::Leaf(ty) => *ty,
                Element::Child(id) => self.at(*id).ty(),
            })
            .collect()
    }
}

impl core::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("shape", &format_args!("{self}"))
            .field("strategy", &self.strategy())
            .field("alias", &self.alias())
            .finish()
    }
}
