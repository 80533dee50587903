use resultshape::{FillStrategy, Reflect, ShapeBuilder, Value};
use resultshape_testhelpers::test;

use crate::fixtures::{Bar, Foo, bar_from_id, foo_from_parts};

#[derive(Debug, PartialEq)]
struct Marker(&'static str);

resultshape::impl_reflect!(Marker);

#[test]
fn array_of_assigned_and_constructed_values() {
    let mut builder = ShapeBuilder::new();
    let root = builder.node(<Vec<Value>>::DESC);
    builder.add(root, &[Foo::DESC, Value::DESC])?;

    let foo_bar = builder.compound(Foo::DESC, FillStrategy::Constructor(foo_from_parts));
    builder.add(foo_bar, &[i16::DESC])?;
    builder.nest_new(
        foo_bar,
        Bar::DESC,
        FillStrategy::Constructor(bar_from_id),
        &[i32::DESC],
    )?;
    builder.nest(root, foo_bar)?;

    let bar = builder.node(Bar::DESC);
    builder.nest(root, bar)?;

    let shape = builder.freeze(root)?;
    let types = [Foo::DESC, Value::DESC, i16::DESC, i32::DESC, Bar::DESC];
    assert_eq!(shape.composite_types(), &types);

    let given_foo = Foo {
        code: 1,
        ..Foo::default()
    };
    let given_bar = Bar {
        id: 2,
        name: "given".into(),
        amount: 0.5,
    };
    let packed = shape.pack(
        vec![
            Value::new(given_foo),
            Value::new(Marker("anything")),
            Value::I16(200),
            Value::I32(99),
            Value::new(given_bar),
        ],
        &types,
        &[Some("f"), Some("o"), Some("code"), Some("id"), Some("b")],
    )?;

    let items = packed
        .into_reflect::<Vec<Value>>()
        .map_err(|v| eyre::eyre!("not an array: {v:?}"))?;
    assert_eq!(items.len(), 4);

    assert_eq!(
        items[0].downcast_ref::<Foo>(),
        Some(&Foo {
            code: 1,
            ..Foo::default()
        })
    );
    assert_eq!(items[1].downcast_ref::<Marker>(), Some(&Marker("anything")));
    assert_eq!(
        items[2].downcast_ref::<Foo>(),
        Some(&Foo {
            code: 200,
            bar: Bar {
                id: 99,
                ..Bar::default()
            },
        })
    );
    assert_eq!(
        items[3].downcast_ref::<Bar>(),
        Some(&Bar {
            id: 2,
            name: "given".into(),
            amount: 0.5,
        })
    );
}

#[test]
fn the_same_shape_packs_many_tuples() {
    let mut builder = ShapeBuilder::new();
    let root = builder.compound(Bar::DESC, FillStrategy::Constructor(bar_from_id));
    builder.add(root, &[i32::DESC])?;
    let shape = builder.freeze(root)?;

    for id in 0..10 {
        let packed = shape.pack(vec![Value::I32(id)], &[i32::DESC], &[None])?;
        assert_eq!(packed.downcast_ref::<Bar>().map(|bar| bar.id), Some(id));
    }

    // the builder can keep going, the frozen shape does not change
    builder.add(root, &[String::DESC])?;
    assert_eq!(shape.arg_length(), 1);
    assert_eq!(builder.get(root)?.arg_length(), 2);
}
