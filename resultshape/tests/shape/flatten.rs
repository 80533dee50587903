use resultshape::{FillStrategy, NodeId, Reflect, ShapeBuilder, TypeDesc, Value};
use resultshape_testhelpers::test;

use crate::fixtures::{Bar, Foo, bar_from_id, foo_from_parts};

/// `Value[]{Foo, Value, Foo{i16, Bar{i32}}, Bar}`
pub fn reference_tree(builder: &mut ShapeBuilder) -> Result<NodeId, resultshape::ShapeError> {
    let root = builder.node(<Vec<Value>>::DESC);
    builder.add(root, &[Foo::DESC, Value::DESC])?;

    let foo = builder.compound(Foo::DESC, FillStrategy::Constructor(foo_from_parts));
    builder.add(foo, &[i16::DESC])?;
    builder.nest_new(
        foo,
        Bar::DESC,
        FillStrategy::Constructor(bar_from_id),
        &[i32::DESC],
    )?;
    builder.nest(root, foo)?;

    let bar = builder.node(Bar::DESC);
    builder.nest(root, bar)?;
    Ok(root)
}

fn names(types: &[&'static TypeDesc]) -> Vec<String> {
    types.iter().map(|ty| ty.to_string()).collect()
}

#[test]
fn reference_tree_flattens() {
    let mut builder = ShapeBuilder::new();
    let root = reference_tree(&mut builder)?;
    let node = builder.get(root)?;

    assert_eq!(
        names(&node.composite_types()),
        ["Foo", "Value", "i16", "i32", "Bar"]
    );
    assert_eq!(names(&node.types()), ["Foo", "Value", "Foo", "Bar"]);
    assert_eq!(node.arg_length(), 5);
    assert_eq!(node.length(), 4);
}

#[test]
fn frozen_shape_agrees_with_the_builder() {
    let mut builder = ShapeBuilder::new();
    let root = reference_tree(&mut builder)?;
    let shape = builder.freeze(root)?;
    let node = builder.get(root)?;

    assert_eq!(shape.composite_types(), node.composite_types().as_slice());
    assert_eq!(shape.types(), node.types());
    assert_eq!(shape.arg_length(), node.arg_length());
    assert_eq!(shape.length(), node.length());
    assert_eq!(shape.root().composite_types(), node.composite_types());
}

#[test]
fn slot_count_matches_slot_types_at_every_node() {
    let mut builder = ShapeBuilder::new();
    let root = reference_tree(&mut builder)?;
    let shape = builder.freeze(root)?;

    let mut pending = vec![shape.root()];
    while let Some(node) = pending.pop() {
        assert_eq!(node.composite_types().len(), node.arg_length(), "{node}");
        pending.extend(node.children());
    }
}

#[test]
fn empty_nodes_take_one_opaque_slot() {
    let mut builder = ShapeBuilder::new();
    let leaf = builder.leaf(i64::DESC);
    let empty = builder.node(Bar::DESC);
    let empty_array = builder.node(<Vec<i32>>::DESC);

    for id in [leaf, empty, empty_array] {
        let node = builder.get(id)?;
        assert_eq!(node.arg_length(), 1);
        assert_eq!(node.length(), 0);
        assert_eq!(node.composite_types(), vec![node.ty()]);
        assert!(node.types().is_empty());
    }
}

#[test]
fn a_child_counts_once_in_length_but_fully_in_arg_length() {
    let mut builder = ShapeBuilder::new();
    let root = builder.node(<Vec<Value>>::DESC);
    let inner = builder.node(<Vec<i8>>::DESC);
    builder.add(inner, &[i8::DESC, i8::DESC, i8::DESC])?;
    builder.nest(root, inner)?;
    builder.add(root, &[bool::DESC])?;

    let node = builder.get(root)?;
    assert_eq!(node.length(), 2);
    assert_eq!(node.arg_length(), 4);
    assert_eq!(names(&node.types()), ["i8[]", "bool"]);
    assert_eq!(names(&node.composite_types()), ["i8", "i8", "i8", "bool"]);
}
