use alloc::string::String;

use owo_colors::OwoColorize;
use resultshape_core::{CoerceError, InvokeError, TypeDesc};

use crate::NodeId;

/// Errors that can occur while building or freezing a shape.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ShapeError {
    /// Tried to add leaves or nest a shape into a primitive node.
    PrimitiveShape {
        /// Type of the primitive node.
        shape: &'static TypeDesc,
    },

    /// Nesting would make a node contain itself.
    RecursiveNesting {
        /// Rendering of the would-be parent, at the time of the call.
        parent: String,
        /// Rendering of the would-be child, at the time of the call.
        child: String,
    },

    /// The id does not belong to this builder.
    UnknownNode {
        /// The id that was passed.
        node: NodeId,
    },

    /// A node's strategy can not fill it.
    InvalidStrategy {
        /// Type of the node.
        shape: &'static TypeDesc,
        /// Name of the strategy.
        strategy: &'static str,
        /// Why it does not fit.
        reason: &'static str,
    },
}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShapeError::PrimitiveShape { shape } => {
                write!(f, "Can not add/nest shape to primitive shape {shape}")
            }
            ShapeError::RecursiveNesting { parent, child } => {
                write!(f, "{parent} can not nest recursive {child}")
            }
            ShapeError::UnknownNode { node } => {
                write!(f, "Node {node:?} does not belong to this builder")
            }
            ShapeError::InvalidStrategy {
                shape,
                strategy,
                reason,
            } => write!(
                f,
                "Strategy {} can not fill {}: it {}",
                strategy.yellow(),
                shape.blue(),
                reason
            ),
        }
    }
}

impl core::error::Error for ShapeError {}

/// Errors that can occur while packing a tuple. Packing stops at the first
/// one; nothing is returned for the tuple.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PackError {
    /// The three input sequences do not have one entry per slot.
    ArgumentCount {
        /// Slots the shape consumes.
        expected: usize,
        /// Number of values given.
        values: usize,
        /// Number of types given.
        types: usize,
        /// Number of aliases given.
        aliases: usize,
    },

    /// The declared type of a slot is not the one the shape consumes there.
    SlotType {
        /// Position of the slot.
        slot: usize,
        /// The type the shape consumes.
        expected: &'static TypeDesc,
        /// The type the caller declared.
        actual: &'static TypeDesc,
    },

    /// A slot value does not fit its declared type.
    Coerce {
        /// Position of the slot.
        slot: usize,
        /// Why it does not fit.
        inner: CoerceError,
    },

    /// A sub-result does not fit where its parent puts it.
    Element {
        /// Type of the parent node.
        shape: &'static TypeDesc,
        /// Position of the element in the parent.
        index: usize,
        /// Why it does not fit.
        inner: CoerceError,
    },

    /// A constructor handle returned something that is not the node's type.
    Produced {
        /// Type of the node.
        shape: &'static TypeDesc,
        /// Why it does not fit.
        inner: CoerceError,
    },

    /// The node's type has no default initializer.
    MissingDefault {
        /// Type of the node.
        shape: &'static TypeDesc,
    },

    /// A construction or insertion handle failed.
    Invoke {
        /// Type of the node.
        shape: &'static TypeDesc,
        /// What was being done: `construct` or `insert`.
        operation: &'static str,
        /// What the handle reported.
        inner: InvokeError,
    },

    /// The input ran out although the slot count matched. Indicates a bug in
    /// the engine.
    InvariantViolation {
        /// The invariant that was violated.
        invariant: &'static str,
    },
}

impl core::fmt::Display for PackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PackError::ArgumentCount {
                expected,
                values,
                types,
                aliases,
            } => write!(
                f,
                "Expected {} slots, but got {} values, {} types and {} aliases",
                expected.green(),
                values.red(),
                types.red(),
                aliases.red()
            ),
            PackError::SlotType {
                slot,
                expected,
                actual,
            } => write!(
                f,
                "Slot {} is declared as {}, but the shape takes a {} there",
                slot.yellow(),
                actual.red(),
                expected.green()
            ),
            PackError::Coerce { slot, inner } => {
                write!(f, "Slot {}: {}", slot.yellow(), inner)
            }
            PackError::Element {
                shape,
                index,
                inner,
            } => write!(f, "Element {} of {}: {}", index.yellow(), shape.blue(), inner),
            PackError::Produced { shape, inner } => {
                write!(f, "Constructor of {} returned a mismatch: {}", shape.blue(), inner)
            }
            PackError::MissingDefault { shape } => {
                write!(f, "{} has no default initializer", shape.blue())
            }
            PackError::Invoke {
                shape,
                operation,
                inner,
            } => write!(
                f,
                "Operation '{}' failed for {}: {}",
                operation.yellow(),
                shape.blue(),
                inner
            ),
            PackError::InvariantViolation { invariant } => {
                write!(f, "Invariant violation: {}", invariant.red())
            }
        }
    }
}

impl core::error::Error for PackError {}
