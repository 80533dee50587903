//! Slot counting and flattening over the node arena.
//!
//! [`arg_length`] and [`composite_types`] walk the tree the same way `pack`
//! does, so that a shape always consumes exactly the slots it announces.

use alloc::vec;
use alloc::vec::Vec;

use resultshape_core::TypeDesc;

use crate::node::{Element, Node, NodeId};

/// Slots consumed by `id`: one per leaf, the sum over children, and one for a
/// node without elements.
pub(crate) fn arg_length(nodes: &[Node], id: NodeId) -> usize {
    let elements = &nodes[id.index()].elements;
    if elements.is_empty() {
        return 1;
    }
    elements
        .iter()
        .map(|element| match element {
            Element::Leaf(_) => 1,
            Element::Child(child) => arg_length(nodes, *child),
        })
        .sum()
}

/// Appends the slot types of `id` to `out`, depth first, left to right.
pub(crate) fn composite_types(nodes: &[Node], id: NodeId, out: &mut Vec<&'static TypeDesc>) {
    let node = &nodes[id.index()];
    if node.elements.is_empty() {
        out.push(node.ty);
        return;
    }
    for element in &node.elements {
        match element {
            Element::Leaf(ty) => out.push(*ty),
            Element::Child(child) => composite_types(nodes, *child, out),
        }
    }
}

/// Whether `target` can be reached from `from` by following child edges.
/// A node reaches itself.
pub(crate) fn reaches(nodes: &[Node], from: NodeId, target: NodeId) -> bool {
    let mut visited = vec![false; nodes.len()];
    let mut stack = vec![from];

    while let Some(id) = stack.pop() {
        if id == target {
            return true;
        }
        if core::mem::replace(&mut visited[id.index()], true) {
            continue;
        }
        stack.extend(nodes[id.index()].elements.iter().filter_map(|element| match element {
            Element::Child(child) => Some(*child),
            Element::Leaf(_) => None,
        }));
    }

    false
}
