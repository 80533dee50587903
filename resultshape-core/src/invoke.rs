//! Invocation handles: how instances get constructed on the engine's behalf

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use owo_colors::OwoColorize;

use crate::{Reflect, TypeDesc, Value};

/// Constructs an instance from positional arguments.
///
/// The arguments come in declaration order; see [`Args`] for typed access.
pub type ConstructFn = fn(args: Args) -> Result<Value, InvokeError>;

/// Inserts a `(key, value)` pair into an existing instance.
pub type InsertFn = fn(target: &mut Value, key: Value, value: Value) -> Result<(), InvokeError>;

/// Positional arguments handed to a [`ConstructFn`].
#[derive(Debug)]
pub struct Args {
    items: vec::IntoIter<Value>,
    index: usize,
}

impl Args {
    /// Wraps positional arguments.
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            items: values.into_iter(),
            index: 0,
        }
    }

    /// Number of arguments not taken yet.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether every argument was taken.
    pub fn is_empty(&self) -> bool {
        self.items.len() == 0
    }

    /// Takes the next argument as it is.
    pub fn take_value(&mut self) -> Result<Value, InvokeError> {
        let value = self
            .items
            .next()
            .ok_or(InvokeError::MissingArgument { index: self.index })?;
        self.index += 1;
        Ok(value)
    }

    /// Takes the next argument as a `T`.
    pub fn take<T: Reflect>(&mut self) -> Result<T, InvokeError> {
        let index = self.index;
        let value = self.take_value()?;
        T::from_value(value).map_err(|value| InvokeError::WrongArgument {
            index,
            expected: T::DESC,
            actual: value.desc(),
        })
    }

    /// Fails if arguments are left over.
    pub fn finish(self) -> Result<(), InvokeError> {
        match self.items.len() {
            0 => Ok(()),
            count => Err(InvokeError::UnexpectedArguments { count }),
        }
    }
}

/// Errors reported by invocation handles.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InvokeError {
    /// Fewer arguments than the handle takes.
    MissingArgument {
        /// Position of the first missing argument.
        index: usize,
    },

    /// More arguments than the handle takes.
    UnexpectedArguments {
        /// How many were left over.
        count: usize,
    },

    /// An argument is not of the type the handle takes.
    WrongArgument {
        /// Position of the argument.
        index: usize,
        /// The type the handle takes at that position.
        expected: &'static TypeDesc,
        /// The type that was passed, `None` for null.
        actual: Option<&'static TypeDesc>,
    },

    /// The instance a handle was invoked on is not of the type it works on.
    WrongTarget {
        /// The type the handle works on.
        expected: &'static TypeDesc,
        /// The type of the instance, `None` for null.
        actual: Option<&'static TypeDesc>,
    },

    /// The handle failed for its own reasons.
    Failed(String),
}

impl InvokeError {
    /// A handle-specific failure.
    pub fn failed(message: impl Into<String>) -> Self {
        InvokeError::Failed(message.into())
    }
}

struct OrNull(Option<&'static TypeDesc>);

impl core::fmt::Display for OrNull {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(desc) => write!(f, "{desc}"),
            None => f.write_str("null"),
        }
    }
}

impl core::fmt::Display for InvokeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvokeError::MissingArgument { index } => {
                write!(f, "Missing argument at position {}", index.yellow())
            }
            InvokeError::UnexpectedArguments { count } => {
                write!(f, "{} unexpected argument(s) left over", count.yellow())
            }
            InvokeError::WrongArgument {
                index,
                expected,
                actual,
            } => write!(
                f,
                "Argument {}: expected {}, but got {}",
                index.yellow(),
                expected.green(),
                OrNull(*actual).red()
            ),
            InvokeError::WrongTarget { expected, actual } => write!(
                f,
                "Invoked on a {} instead of a {}",
                OrNull(*actual).red(),
                expected.green()
            ),
            InvokeError::Failed(message) => write!(f, "Invocation failed: {message}"),
        }
    }
}

impl core::error::Error for InvokeError {}
