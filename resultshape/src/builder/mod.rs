//! Building shapes

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use log::trace;
use owo_colors::OwoColorize;
use resultshape_core::TypeDesc;

use crate::flatten;
use crate::node::{Element, Node, NodeId, NodeRef};
use crate::{FillStrategy, Shape, ShapeError};


/// A mutable arena of shape nodes.
///
/// Nodes are created with [`leaf`](Self::leaf), [`compound`](Self::compound)
/// or [`node`](Self::node), extended with [`add`](Self::add) and
/// [`nest`](Self::nest), and finally turned into an immutable [`Shape`] with
/// [`freeze`](Self::freeze).
///
/// Nesting the same node under several parents is allowed; nesting that would
/// make a node contain itself is not.
#[derive(Debug, Default, Clone)]
pub struct ShapeBuilder {
    nodes: Vec<Node>,
}

impl ShapeBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Creates a primitive node: a single slot of type `ty`, which can never
    /// gain elements.
    pub fn leaf(&mut self, ty: &'static TypeDesc) -> NodeId {
        self.push(Node::new(ty, true, FillStrategy::Assign))
    }

    /// Creates a compound node filled with `strategy`.
    pub fn compound(&mut self, ty: &'static TypeDesc, strategy: FillStrategy) -> NodeId {
        self.push(Node::new(ty, false, strategy))
    }

    /// Creates a compound node with the default strategy for `ty`, see
    /// [`FillStrategy::default_for`].
    pub fn node(&mut self, ty: &'static TypeDesc) -> NodeId {
        self.compound(ty, FillStrategy::default_for(ty))
    }

    /// Read-only view on a node.
    pub fn get(&self, id: NodeId) -> Result<NodeRef<'_>, ShapeError> {
        self.check(id)?;
        Ok(NodeRef {
            nodes: &self.nodes,
            id,
            arg_lengths: None,
        })
    }

    fn check(&self, id: NodeId) -> Result<(), ShapeError> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(ShapeError::UnknownNode { node: id })
        }
    }

    fn compound_mut(&mut self, id: NodeId) -> Result<&mut Node, ShapeError> {
        self.check(id)?;
        let node = &mut self.nodes[id.index()];
        if node.primitive {
            return Err(ShapeError::PrimitiveShape { shape: node.ty });
        }
        Ok(node)
    }

    /// Appends one leaf per type to `node`, in order.
    pub fn add(&mut self, node: NodeId, types: &[&'static TypeDesc]) -> Result<&mut Self, ShapeError> {
        let target = self.compound_mut(node)?;
        target.elements.extend(types.iter().copied().map(Element::Leaf));
        Ok(self)
    }

    /// Appends `child` to the elements of `parent`.
    ///
    /// Fails if `parent` is primitive, or if `parent` is `child` or is
    /// already nested somewhere below `child`.
    pub fn nest(&mut self, parent: NodeId, child: NodeId) -> Result<&mut Self, ShapeError> {
        self.check(child)?;
        self.compound_mut(parent)?;

        if flatten::reaches(&self.nodes, child, parent) {
            return Err(ShapeError::RecursiveNesting {
                parent: self.render(parent),
                child: self.render(child),
            });
        }

        self.nodes[parent.index()].elements.push(Element::Child(child));
        Ok(self)
    }

    /// Creates a compound node of type `ty` holding `leaves`, and nests it
    /// into `parent`.
    pub fn nest_new(
        &mut self,
        parent: NodeId,
        ty: &'static TypeDesc,
        strategy: FillStrategy,
        leaves: &[&'static TypeDesc],
    ) -> Result<NodeId, ShapeError> {
        self.compound_mut(parent)?;
        let child = self.compound(ty, strategy);
        self.add(child, leaves)?;
        self.nest(parent, child)?;
        Ok(child)
    }

    /// Labels a node. The engine only reads aliases to key the entries of a
    /// [`FillStrategy::Map`] node.
    pub fn set_alias(&mut self, node: NodeId, alias: impl Into<String>) -> Result<&mut Self, ShapeError> {
        self.check(node)?;
        self.nodes[node.index()].alias = Some(alias.into());
        Ok(self)
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node was created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn render(&self, id: NodeId) -> String {
        NodeRef {
            nodes: &self.nodes,
            id,
            arg_lengths: None,
        }
        .to_string()
    }

    /// Produces an immutable [`Shape`] of everything reachable from `root`.
    ///
    /// Every node is checked against its strategy (see [`FillStrategy`]). Nodes
    /// nested under several parents stay shared. The builder is left as is and
    /// can be frozen again after further changes.
    pub fn freeze(&self, root: NodeId) -> Result<Shape, ShapeError> {
        self.check(root)?;

        // post-order, so that children come before their parents
        let mut order = Vec::new();
        let mut remap: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if remap[id.index()].is_some() {
                continue;
            }
            if expanded {
                remap[id.index()] = Some(NodeId::new(order.len()));
                order.push(id);
                continue;
            }
            stack.push((id, true));
            for element in self.nodes[id.index()].elements.iter().rev() {
                if let Element::Child(child) = element {
                    if remap[child.index()].is_none() {
                        stack.push((*child, false));
                    }
                }
            }
        }

        let mut nodes = Vec::with_capacity(order.len());
        let mut arg_lengths: Vec<usize> = Vec::with_capacity(order.len());
        for id in &order {
            let source = &self.nodes[id.index()];
            source
                .strategy
                .validate(source.ty, source.elements.len())
                .map_err(|reason| ShapeError::InvalidStrategy {
                    shape: source.ty,
                    strategy: source.strategy.name(),
                    reason,
                })?;

            let mut node = source.clone();
            let mut length = 0;
            for element in &mut node.elements {
                match element {
                    Element::Leaf(_) => length += 1,
                    Element::Child(child) => {
                        let Some(frozen) = remap[child.index()] else {
                            unreachable!("children are frozen before their parents");
                        };
                        *child = frozen;
                        length += arg_lengths[frozen.index()];
                    }
                }
            }
            arg_lengths.push(length.max(1));
            nodes.push(node);
        }

        let Some(root) = remap[root.index()] else {
            unreachable!("the root is always frozen");
        };
        let shape = Shape::new(nodes, root, arg_lengths);
        trace!(
            "Froze {} ({} nodes, {} slots)",
            shape.blue(),
            shape.len().yellow(),
            shape.arg_length().yellow()
        );
        Ok(shape)
    }
}
