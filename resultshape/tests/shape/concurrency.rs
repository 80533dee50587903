use std::thread;

use resultshape::{FillStrategy, Reflect, Shape, ShapeBuilder, Value};
use resultshape_testhelpers::test;

use crate::fixtures::{Bar, Foo, bar_from_name, foo_from_parts};

static_assertions::assert_impl_all!(Shape: Send, Sync, Clone);

#[test]
fn one_shape_packs_from_several_threads() {
    let mut builder = ShapeBuilder::new();
    let foo = builder.compound(Foo::DESC, FillStrategy::Constructor(foo_from_parts));
    builder.add(foo, &[i16::DESC])?;
    builder.nest_new(
        foo,
        Bar::DESC,
        FillStrategy::Constructor(bar_from_name),
        &[String::DESC, f64::DESC],
    )?;
    let shape = builder.freeze(foo)?;
    let shape = &shape;

    thread::scope(|scope| -> eyre::Result<()> {
        let workers: Vec<_> = (0..8i16)
            .map(|n| {
                scope.spawn(move || {
                    (0..50i16)
                        .map(|i| {
                            let code = n * 100 + i;
                            shape.pack(
                                vec![
                                    Value::I16(code),
                                    Value::from(format!("bar{code}")),
                                    Value::F64(f64::from(code)),
                                ],
                                shape.composite_types(),
                                &[None, None, None],
                            )
                        })
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();

        for (n, worker) in (0..8i16).zip(workers) {
            let Ok(packed) = worker.join() else {
                eyre::bail!("worker {n} panicked");
            };
            for (i, value) in (0..50i16).zip(packed?) {
                let code = n * 100 + i;
                let Some(foo) = value.downcast_ref::<Foo>() else {
                    eyre::bail!("not a Foo: {value:?}");
                };
                assert_eq!(foo.code, code);
                assert_eq!(foo.bar.name, format!("bar{code}"));
                assert_eq!(foo.bar.amount, f64::from(code));
            }
        }
        Ok(())
    })?;
}
