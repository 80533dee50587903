//! Turning a flat tuple into the value a shape describes

use alloc::vec;
use alloc::vec::Vec;

use log::trace;
use owo_colors::OwoColorize;
use resultshape_core::{Args, TypeDesc, Value};

use crate::node::{Element, NodeRef};
use crate::{FillStrategy, PackError, Shape};

/// Read position over the flat tuple, shared by the whole walk.
struct Cursor<'a> {
    values: vec::IntoIter<Value>,
    aliases: &'a [Option<&'a str>],
    slot: usize,
}

impl<'a> Cursor<'a> {
    fn next(&mut self) -> Result<(usize, Value), PackError> {
        let value = self.values.next().ok_or(PackError::InvariantViolation {
            invariant: "tuple exhausted before the shape was",
        })?;
        let slot = self.slot;
        self.slot += 1;
        Ok((slot, value))
    }

    fn alias(&self, slot: usize) -> Option<&'a str> {
        self.aliases.get(slot).copied().flatten()
    }
}

impl Shape {
    /// Builds the value this shape describes out of one flat tuple.
    ///
    /// `values`, `types` and `aliases` are parallel: one entry per slot, in
    /// the order of [`composite_types`](Self::composite_types), and `types`
    /// must be exactly that sequence. Each slot value is coerced to its
    /// declared type; nested shapes are assembled with their
    /// [`FillStrategy`]. Aliases key the entries of map nodes.
    ///
    /// The first failure aborts the whole tuple.
    pub fn pack(
        &self,
        values: Vec<Value>,
        types: &[&'static TypeDesc],
        aliases: &[Option<&str>],
    ) -> Result<Value, PackError> {
        let expected = self.arg_length();
        if values.len() != expected || types.len() != expected || aliases.len() != expected {
            return Err(PackError::ArgumentCount {
                expected,
                values: values.len(),
                types: types.len(),
                aliases: aliases.len(),
            });
        }

        for (slot, (declared, consumed)) in types.iter().zip(self.composite_types()).enumerate() {
            if declared != consumed {
                return Err(PackError::SlotType {
                    slot,
                    expected: *consumed,
                    actual: *declared,
                });
            }
        }

        let mut cursor = Cursor {
            values: values.into_iter(),
            aliases,
            slot: 0,
        };
        pack_node(self.root(), &mut cursor)
    }
}

fn pack_node(node: NodeRef<'_>, cursor: &mut Cursor<'_>) -> Result<Value, PackError> {
    let ty = node.ty();
    let strategy = node.strategy();

    // no elements: one opaque slot
    if node.elements().is_empty() {
        let (slot, value) = cursor.next()?;
        if let FillStrategy::NewInstance = strategy {
            return instantiate(ty);
        }
        return value
            .coerce_to(ty)
            .map_err(|inner| PackError::Coerce { slot, inner });
    }

    let is_map = matches!(strategy, FillStrategy::Map(_));
    let mut parts = Vec::with_capacity(node.length());
    let mut keys = Vec::new();

    for element in node.elements() {
        let first_slot = cursor.slot;
        let (part, alias) = match element {
            Element::Leaf(leaf) => {
                let (slot, value) = cursor.next()?;
                let part = value
                    .coerce_to(*leaf)
                    .map_err(|inner| PackError::Coerce { slot, inner })?;
                (part, None)
            }
            Element::Child(child) => {
                let child = node.at(*child);
                (pack_node(child, cursor)?, child.alias())
            }
        };

        if is_map {
            keys.push(match alias.or_else(|| cursor.alias(first_slot)) {
                Some(alias) => Value::from(alias),
                None => Value::Null,
            });
        }
        parts.push(part);
    }

    trace!(
        "Packing {} from {} parts with {:?}",
        ty.blue(),
        parts.len().yellow(),
        strategy
    );
    fill(ty, strategy, parts, keys)
}

fn fill(
    ty: &'static TypeDesc,
    strategy: FillStrategy,
    parts: Vec<Value>,
    keys: Vec<Value>,
) -> Result<Value, PackError> {
    match strategy {
        FillStrategy::Assign => {
            let mut parts = parts.into_iter();
            match (parts.next(), parts.next()) {
                (Some(part), None) => part.coerce_to(ty).map_err(|inner| PackError::Element {
                    shape: ty,
                    index: 0,
                    inner,
                }),
                _ => Err(PackError::InvariantViolation {
                    invariant: "assigning node with more than one element",
                }),
            }
        }
        FillStrategy::NewInstance => instantiate(ty),
        FillStrategy::Constructor(construct) => {
            let produced = construct(Args::new(parts)).map_err(|inner| PackError::Invoke {
                shape: ty,
                operation: "construct",
                inner,
            })?;
            produced
                .coerce_to(ty)
                .map_err(|inner| PackError::Produced { shape: ty, inner })
        }
        FillStrategy::Map(insert) => {
            let mut target = instantiate(ty)?;
            for (key, part) in keys.into_iter().zip(parts) {
                insert(&mut target, key, part).map_err(|inner| PackError::Invoke {
                    shape: ty,
                    operation: "insert",
                    inner,
                })?;
            }
            Ok(target)
        }
        FillStrategy::Array => {
            let component = ty.array_component().ok_or(PackError::InvariantViolation {
                invariant: "array node over a non-array type",
            })?;
            parts
                .into_iter()
                .enumerate()
                .map(|(index, part)| {
                    part.coerce_to(component)
                        .map_err(|inner| PackError::Element {
                            shape: ty,
                            index,
                            inner,
                        })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
    }
}

fn instantiate(ty: &'static TypeDesc) -> Result<Value, PackError> {
    ty.default_value()
        .ok_or(PackError::MissingDefault { shape: ty })
}
