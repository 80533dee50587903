use insta::assert_snapshot;
use resultshape::{Element, FillStrategy, Reflect, ShapeBuilder, ShapeError, Value};
use resultshape_testhelpers::test;

use crate::fixtures::{Bar, Foo, bar_from_id};

#[test]
fn primitive_nodes_never_gain_elements() {
    let mut builder = ShapeBuilder::new();
    let primitive = builder.leaf(i16::DESC);
    let other = builder.node(Bar::DESC);

    let node = builder.get(primitive)?;
    assert!(node.is_primitive());
    assert!(!node.is_compound());
    assert_eq!(node.strategy(), FillStrategy::Assign);

    let err = builder.add(primitive, &[i32::DESC]).unwrap_err();
    assert_snapshot!(err, @"Can not add/nest shape to primitive shape i16");

    let err = builder.nest(primitive, other).unwrap_err();
    assert_eq!(err, ShapeError::PrimitiveShape { shape: i16::DESC });

    let err = builder
        .nest_new(primitive, Bar::DESC, FillStrategy::Assign, &[])
        .unwrap_err();
    assert_eq!(err, ShapeError::PrimitiveShape { shape: i16::DESC });

    assert_eq!(builder.get(primitive)?.length(), 0);
}

#[test]
fn compound_nodes_pick_a_default_strategy() {
    let mut builder = ShapeBuilder::new();
    let array = builder.node(<Vec<Value>>::DESC);
    let object = builder.node(Foo::DESC);

    assert_eq!(builder.get(array)?.strategy(), FillStrategy::Array);
    assert_eq!(builder.get(object)?.strategy(), FillStrategy::Assign);
    assert!(builder.get(object)?.is_compound());
}

#[test]
fn nesting_in_one_direction_forbids_the_other() {
    let mut builder = ShapeBuilder::new();
    let a = builder.node(<Vec<Value>>::DESC);
    let b = builder.node(<Vec<i32>>::DESC);

    builder.nest(b, a)?;
    let err = builder.nest(a, b).unwrap_err();
    assert_snapshot!(err, @"Value[] can not nest recursive i32[]{Value[]}");

    let mut builder = ShapeBuilder::new();
    let a = builder.node(<Vec<Value>>::DESC);
    let b = builder.node(<Vec<i32>>::DESC);

    builder.nest(a, b)?;
    let err = builder.nest(b, a).unwrap_err();
    assert_snapshot!(err, @"i32[] can not nest recursive Value[]{i32[]}");
}

#[test]
fn nesting_rejects_self_and_deep_cycles() {
    let mut builder = ShapeBuilder::new();
    let a = builder.node(<Vec<Value>>::DESC);
    builder.add(a, &[i32::DESC])?;

    let err = builder.nest(a, a).unwrap_err();
    assert_snapshot!(err, @"Value[]{i32} can not nest recursive Value[]{i32}");

    let b = builder.node(<Vec<Value>>::DESC);
    let c = builder.node(<Vec<Value>>::DESC);
    builder.nest(a, b)?.nest(b, c)?;

    let err = builder.nest(c, a).unwrap_err();
    assert!(matches!(err, ShapeError::RecursiveNesting { .. }));
    assert_snapshot!(err, @"Value[] can not nest recursive Value[]{i32, Value[]{Value[]}}");
}

#[test]
fn the_same_child_can_be_nested_twice() {
    let mut builder = ShapeBuilder::new();
    let root = builder.node(<Vec<Value>>::DESC);
    let bar = builder.compound(Bar::DESC, FillStrategy::Constructor(bar_from_id));
    builder.add(bar, &[i32::DESC])?;

    builder.nest(root, bar)?.nest(root, bar)?;
    let node = builder.get(root)?;
    assert_eq!(node.length(), 2);
    assert_eq!(node.arg_length(), 2);
    assert_snapshot!(node, @"Value[]{Bar{i32}, Bar{i32}}");
}

#[test]
fn children_are_only_the_nested_shapes() {
    let mut builder = ShapeBuilder::new();
    let root = builder.node(<Vec<Value>>::DESC);
    builder.add(root, &[i16::DESC, i32::DESC])?;

    let node = builder.get(root)?;
    assert_eq!(node.length(), 2);
    assert_eq!(node.children().count(), 0);
    assert!(!node.is_nesting());

    let child = builder.nest_new(
        root,
        Bar::DESC,
        FillStrategy::Constructor(bar_from_id),
        &[i32::DESC],
    )?;
    let node = builder.get(root)?;
    assert!(node.is_nesting());
    assert_eq!(node.elements()[2], Element::Child(child));

    let children: Vec<_> = node.children().map(|c| c.id()).collect();
    assert_eq!(children, vec![child]);
}

#[test]
fn aliases_are_plain_labels() {
    let mut builder = ShapeBuilder::new();
    let root = builder.node(Foo::DESC);
    assert_eq!(builder.get(root)?.alias(), None);

    builder.set_alias(root, "f")?;
    assert_eq!(builder.get(root)?.alias(), Some("f"));

    builder.set_alias(root, String::from("foo"))?;
    let shape = builder.freeze(root)?;
    assert_eq!(shape.alias(), Some("foo"));
}
