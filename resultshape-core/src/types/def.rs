use core::fmt;

use super::TypeDesc;
use crate::InsertFn;

/// The semantic definition of a type: is it a scalar, a user object, an array?
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum Def {
    /// Scalar: not composed of other things.
    ///
    /// e.g. `i16`, `f64`, `String`
    Scalar(ScalarType),

    /// Accepts any value at all, the catch-all slot type.
    ///
    /// e.g. [`Value`](crate::Value)
    Dynamic,

    /// Opaque user type, carried in [`Value::Object`](crate::Value::Object).
    Object,

    /// Homogeneous sequence, carried in [`Value::Array`](crate::Value::Array).
    ///
    /// e.g. `Vec<T>`
    Array(ArrayDef),

    /// Keyed collection, carried in [`Value::Object`](crate::Value::Object).
    ///
    /// e.g. `HashMap<K, V>`
    Map(MapDef),
}

/// The scalar types a slot can declare
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// `bool`
    Bool,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `char`
    Char,
    /// `String`
    String,
}

impl ScalarType {
    /// Whether this is one of the integer types.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }
}

/// Fields for array types
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct ArrayDef {
    /// descriptor of the items in the array
    pub t: &'static TypeDesc,
}

impl ArrayDef {
    /// Creates an array definition over `t`.
    pub const fn new(t: &'static TypeDesc) -> Self {
        Self { t }
    }
}

/// Fields for map types
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct MapDef {
    /// descriptor of the keys in the map
    pub k: &'static TypeDesc,

    /// descriptor of the values in the map
    pub v: &'static TypeDesc,

    /// stock insertion handle for this map type
    pub insert: InsertFn,
}

impl MapDef {
    /// Creates a map definition.
    pub const fn new(k: &'static TypeDesc, v: &'static TypeDesc, insert: InsertFn) -> Self {
        Self { k, v, insert }
    }
}

impl fmt::Debug for MapDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapDef")
            .field("k", &format_args!("{}", self.k))
            .field("v", &format_args!("{}", self.v))
            .finish_non_exhaustive()
    }
}
