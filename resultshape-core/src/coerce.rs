//! Placing a [`Value`] into a slot of a declared type

use alloc::boxed::Box;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use owo_colors::OwoColorize;

use crate::{Def, ScalarType, TypeDesc, Value};

/// Error returned when a value can not be placed into a slot of a declared type.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoerceError {
    /// `null` was given for a type that does not accept it.
    Null {
        /// The declared type of the slot.
        expected: &'static TypeDesc,
    },

    /// The value is of a type that does not convert to the declared type.
    Incompatible {
        /// The declared type of the slot.
        expected: &'static TypeDesc,
        /// The runtime type of the value.
        actual: &'static TypeDesc,
    },

    /// The value is of a compatible type, but does not fit.
    OutOfRange {
        /// The declared type of the slot.
        expected: &'static TypeDesc,
        /// The offending value, rendered.
        value: String,
    },

    /// An item of an array could not be placed.
    Item {
        /// Position of the item in the array.
        index: usize,
        /// What went wrong with it.
        inner: Box<CoerceError>,
    },
}

impl core::fmt::Display for CoerceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CoerceError::Null { expected } => {
                write!(f, "Can not place null into a {}", expected.blue())
            }
            CoerceError::Incompatible { expected, actual } => {
                write!(
                    f,
                    "Wrong type: expected {}, but got {}",
                    expected.green(),
                    actual.red()
                )
            }
            CoerceError::OutOfRange { expected, value } => {
                write!(f, "Value {} does not fit in a {}", value.red(), expected.blue())
            }
            CoerceError::Item { index, inner } => {
                write!(f, "Array item {}: {}", index.yellow(), inner)
            }
        }
    }
}

impl core::error::Error for CoerceError {}

impl Value {
    /// Converts this value so that it can be stored in a slot declared as
    /// `target`.
    ///
    /// Integers convert to any integer type they fit in, and to floats; `f32`
    /// widens to `f64` and `f64` narrows to `f32` when it does not overflow.
    /// Objects and maps only go into slots of their own type. Arrays go into
    /// array slots item by item. [`Def::Dynamic`] slots take anything.
    pub fn coerce_to(self, target: &'static TypeDesc) -> Result<Value, CoerceError> {
        match target.def {
            Def::Dynamic => Ok(self),
            _ if self.is_null() => {
                if target.is_nullable() {
                    Ok(Value::Null)
                } else {
                    Err(CoerceError::Null { expected: target })
                }
            }
            Def::Scalar(scalar) => coerce_scalar(self, scalar, target),
            Def::Array(array) => match self {
                Value::Array(items) => items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        item.coerce_to(array.t).map_err(|inner| CoerceError::Item {
                            index,
                            inner: Box::new(inner),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array),
                other => Err(incompatible(target, &other)),
            },
            Def::Object | Def::Map(_) => {
                if matches!(&self, Value::Object(object) if object.desc() == target) {
                    Ok(self)
                } else {
                    Err(incompatible(target, &self))
                }
            }
        }
    }
}

fn incompatible(expected: &'static TypeDesc, value: &Value) -> CoerceError {
    match value.desc() {
        Some(actual) => CoerceError::Incompatible { expected, actual },
        None => CoerceError::Null { expected },
    }
}

fn coerce_scalar(
    value: Value,
    scalar: ScalarType,
    target: &'static TypeDesc,
) -> Result<Value, CoerceError> {
    match (scalar, value) {
        (ScalarType::Bool, v @ Value::Bool(_))
        | (ScalarType::Char, v @ Value::Char(_))
        | (ScalarType::String, v @ Value::String(_))
        | (ScalarType::F32, v @ Value::F32(_))
        | (ScalarType::F64, v @ Value::F64(_)) => Ok(v),
        (ScalarType::F64, Value::F32(v)) => Ok(Value::F64(f64::from(v))),
        (ScalarType::F32, Value::F64(v)) => {
            #[allow(clippy::cast_possible_truncation)]
            let narrowed = v as f32;
            if narrowed.is_infinite() && v.is_finite() {
                Err(CoerceError::OutOfRange {
                    expected: target,
                    value: format!("{v}"),
                })
            } else {
                Ok(Value::F32(narrowed))
            }
        }
        (scalar, value) => match value.as_i64() {
            Some(n) if scalar.is_integer() => integer_into(n, scalar, target),
            #[allow(clippy::cast_precision_loss)]
            Some(n) if scalar == ScalarType::F32 => Ok(Value::F32(n as f32)),
            #[allow(clippy::cast_precision_loss)]
            Some(n) if scalar == ScalarType::F64 => Ok(Value::F64(n as f64)),
            _ => Err(incompatible(target, &value)),
        },
    }
}

fn integer_into(n: i64, scalar: ScalarType, target: &'static TypeDesc) -> Result<Value, CoerceError> {
    let narrowed = match scalar {
        ScalarType::I8 => i8::try_from(n).ok().map(Value::I8),
        ScalarType::I16 => i16::try_from(n).ok().map(Value::I16),
        ScalarType::I32 => i32::try_from(n).ok().map(Value::I32),
        _ => Some(Value::I64(n)),
    };
    narrowed.ok_or_else(|| CoerceError::OutOfRange {
        expected: target,
        value: n.to_string(),
    })
}
