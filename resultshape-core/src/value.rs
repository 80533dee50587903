//! Dynamic values

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use crate::{Reflect, TypeDesc};

/// A value travelling through a projection: one slot of a flat input tuple,
/// or anything assembled from such slots.
#[derive(Debug, PartialEq)]
pub enum Value {
    /// The absent value.
    Null,
    /// `bool`
    Bool(bool),
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
    /// `char`
    Char(char),
    /// `String`
    String(String),
    /// A sequence of values.
    Array(Vec<Value>),
    /// Any other reflected value, see [`Object`].
    Object(Object),
}

impl Value {
    /// Moves a reflected value into a dynamic value.
    pub fn new<T: Reflect>(value: T) -> Self {
        value.into_value()
    }

    /// Takes a reflected value back out, see [`Reflect::from_value`].
    pub fn into_reflect<T: Reflect>(self) -> Result<T, Self> {
        T::from_value(self)
    }

    /// Runtime descriptor of this value, `None` for [`Value::Null`].
    ///
    /// Arrays report `Value[]`, whatever their items are.
    pub fn desc(&self) -> Option<&'static TypeDesc> {
        Some(match self {
            Value::Null => return None,
            Value::Bool(_) => bool::DESC,
            Value::I8(_) => i8::DESC,
            Value::I16(_) => i16::DESC,
            Value::I32(_) => i32::DESC,
            Value::I64(_) => i64::DESC,
            Value::F32(_) => f32::DESC,
            Value::F64(_) => f64::DESC,
            Value::Char(_) => char::DESC,
            Value::String(_) => String::DESC,
            Value::Array(_) => <Vec<Value>>::DESC,
            Value::Object(object) => object.desc(),
        })
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Widens any integer variant to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::I8(v) => Some(i64::from(v)),
            Value::I16(v) => Some(i64::from(v)),
            Value::I32(v) => Some(i64::from(v)),
            Value::I64(v) => Some(v),
            _ => None,
        }
    }

    /// The items, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The string, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrows the object inside, if it is a `T`.
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        match self {
            Value::Object(object) => object.downcast_ref(),
            _ => None,
        }
    }

    /// Mutably borrows the object inside, if it is a `T`.
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        match self {
            Value::Object(object) => object.downcast_mut(),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

trait ObjectData: Any + Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl<T: Reflect> ObjectData for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// A boxed reflected value, tagged with its descriptor.
pub struct Object {
    desc: &'static TypeDesc,
    data: Box<dyn ObjectData>,
}

impl Object {
    /// Boxes `value`.
    pub fn new<T: Reflect>(value: T) -> Self {
        Self {
            desc: T::DESC,
            data: Box::new(value),
        }
    }

    /// Descriptor of the boxed value.
    pub fn desc(&self) -> &'static TypeDesc {
        self.desc
    }

    /// Whether the boxed value is a `T`.
    pub fn is<T: Reflect>(&self) -> bool {
        self.data.as_any().is::<T>()
    }

    /// Borrows the boxed value as a `T`.
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.data.as_any().downcast_ref()
    }

    /// Mutably borrows the boxed value as a `T`.
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.data.as_any_mut().downcast_mut()
    }

    /// Unboxes the value as a `T`, handing the object back if it is not one.
    pub fn downcast<T: Reflect>(self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.data.into_any().downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => unreachable!("object type was checked before unboxing"),
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.desc == other.desc && self.data.dyn_eq(other.data.as_any())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.data, f)
    }
}
