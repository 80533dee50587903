use core::fmt;

use crate::Value;

/// Function to build a fresh default instance of a type
pub type DefaultFn = fn() -> Value;

/// Virtual table of operations on values of a type.
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct ValueVTable {
    /// cf. [`DefaultFn`]: the default (no-argument) initializer
    pub default: Option<DefaultFn>,
}

impl ValueVTable {
    /// An empty vtable.
    pub const fn new() -> Self {
        Self { default: None }
    }
}

impl Default for ValueVTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValueVTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueVTable")
            .field("default", &self.default.is_some())
            .finish()
    }
}
