#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
//! Core types for the resultshape engine.
//!
//! This crate holds everything the engine needs to know about the *values* it
//! moves around, without knowing anything about shapes:
//!
//! - [`TypeDesc`]: a `'static` runtime descriptor for a type (its simple name,
//!   its [`Def`], whether it accepts null, its default initializer),
//! - [`Reflect`]: implemented by every type that has a descriptor,
//! - [`Value`] and [`Object`]: the dynamic values flowing through a projection,
//! - coercion of a [`Value`] into a slot of a given [`TypeDesc`],
//! - the invocation handles ([`ConstructFn`], [`InsertFn`]) that construct
//!   instances on behalf of the engine.

extern crate alloc;

mod macros;

mod types;
pub use types::*;

mod value;
pub use value::*;

mod coerce;
pub use coerce::*;

mod invoke;
pub use invoke::*;

// Descriptors for `core::` types
mod impls_core;

// Descriptors for `alloc::` types
mod impls_alloc;

// Descriptors for `std::` types (that aren't in `alloc`)
#[cfg(feature = "std")]
mod impls_std;

/// A type that has a runtime [`TypeDesc`] and can move in and out of a
/// [`Value`].
///
/// Scalars, `String`, [`Value`] itself, `Vec<T>` and the map types come with
/// implementations. User types usually get one from [`impl_reflect!`], which
/// stores them as an [`Object`].
pub trait Reflect: core::fmt::Debug + PartialEq + Send + Sync + Sized + 'static {
    /// The descriptor of this type.
    const DESC: &'static TypeDesc;

    /// Moves `self` into a dynamic value.
    fn into_value(self) -> Value {
        Value::Object(Object::new(self))
    }

    /// Takes a value of this type back out of a dynamic value, handing the
    /// value back untouched when it holds something else.
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(object) => object.downcast::<Self>().map_err(Value::Object),
            other => Err(other),
        }
    }
}
