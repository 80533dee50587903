#![allow(dead_code)]

use resultshape::{Args, InvokeError, Value, impl_reflect};

#[derive(Debug, PartialEq, Default)]
pub struct Foo {
    pub code: i16,
    pub bar: Bar,
}

impl_reflect!(Foo, default);

#[derive(Debug, PartialEq, Default)]
pub struct Bar {
    pub id: i32,
    pub name: String,
    pub amount: f64,
}

impl_reflect!(Bar, default);

/// Something without a default initializer.
#[derive(Debug, PartialEq)]
pub struct Opaque(pub u8);

impl_reflect!(Opaque);

/// `Foo(code, bar)`
pub fn foo_from_parts(mut args: Args) -> Result<Value, InvokeError> {
    let code = args.take::<i16>()?;
    let bar = args.take::<Bar>()?;
    args.finish()?;
    Ok(Value::new(Foo { code, bar }))
}

/// `Bar(id)`
pub fn bar_from_id(mut args: Args) -> Result<Value, InvokeError> {
    let id = args.take::<i32>()?;
    args.finish()?;
    Ok(Value::new(Bar {
        id,
        ..Bar::default()
    }))
}

/// `Bar(name, amount)`
pub fn bar_from_name(mut args: Args) -> Result<Value, InvokeError> {
    let name = args.take::<String>()?;
    let amount = args.take::<f64>()?;
    args.finish()?;
    Ok(Value::new(Bar {
        name,
        amount,
        ..Bar::default()
    }))
}

/// Returns a `Bar` whatever it is asked for.
pub fn always_bar(_args: Args) -> Result<Value, InvokeError> {
    Ok(Value::new(Bar::default()))
}

/// Fails whatever it is asked for.
pub fn refuse(_args: Args) -> Result<Value, InvokeError> {
    Err(InvokeError::failed("not today"))
}
