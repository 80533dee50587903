use insta::assert_snapshot;
use resultshape::{FillStrategy, Reflect, ShapeBuilder};
use resultshape_testhelpers::test;

use crate::fixtures::{Bar, Foo, bar_from_name, foo_from_parts};
use crate::flatten::reference_tree;

#[test]
fn reference_tree_renders() {
    let mut builder = ShapeBuilder::new();
    let root = reference_tree(&mut builder)?;

    assert_snapshot!(builder.get(root)?, @"Value[]{Foo, Value, Foo{i16, Bar{i32}}, Bar}");
    assert_snapshot!(builder.freeze(root)?, @"Value[]{Foo, Value, Foo{i16, Bar{i32}}, Bar}");
}

#[test]
fn nodes_without_elements_render_bare() {
    let mut builder = ShapeBuilder::new();
    let leaf = builder.leaf(f64::DESC);
    let empty = builder.compound(Foo::DESC, FillStrategy::NewInstance);
    let array = builder.node(<Vec<String>>::DESC);

    assert_snapshot!(builder.get(leaf)?, @"f64");
    assert_snapshot!(builder.get(empty)?, @"Foo");
    assert_snapshot!(builder.get(array)?, @"String[]");
}

#[test]
fn rendering_only_changes_with_the_tree() {
    let mut builder = ShapeBuilder::new();
    let foo = builder.compound(Foo::DESC, FillStrategy::Constructor(foo_from_parts));
    builder.add(foo, &[i16::DESC])?;

    let first = builder.get(foo)?.to_string();
    let second = builder.get(foo)?.to_string();
    assert_eq!(first, second);

    builder.set_alias(foo, "f")?;
    assert_eq!(builder.get(foo)?.to_string(), first);

    builder.nest_new(
        foo,
        Bar::DESC,
        FillStrategy::Constructor(bar_from_name),
        &[String::DESC, f64::DESC],
    )?;
    assert_ne!(builder.get(foo)?.to_string(), first);
    assert_snapshot!(builder.get(foo)?, @"Foo{i16, Bar{String, f64}}");
}

#[test]
fn nested_arrays_render_their_component() {
    let mut builder = ShapeBuilder::new();
    let root = builder.node(<Vec<Vec<i32>>>::DESC);
    builder.nest_new(
        root,
        <Vec<i32>>::DESC,
        FillStrategy::Array,
        &[i32::DESC, i32::DESC],
    )?;
    builder.nest_new(root, <Vec<i32>>::DESC, FillStrategy::Array, &[])?;

    assert_snapshot!(builder.get(root)?, @"i32[][]{i32[]{i32, i32}, i32[]}");
    assert_eq!(builder.get(root)?.types(), [<Vec<i32>>::DESC; 2]);
}
