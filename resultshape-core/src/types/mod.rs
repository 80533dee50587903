//! Type descriptors

use core::any::TypeId;
use core::fmt;

use bitflags::bitflags;

mod def;
pub use def::*;

mod vtable;
pub use vtable::*;

use crate::{Reflect, Value};

bitflags! {
    /// Properties of a type that matter when a value is placed into it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u8 {
        /// The type accepts [`Value::Null`].
        const NULLABLE = 1 << 0;

        /// The type has a default (no-argument) initializer, see
        /// [`ValueVTable::default`].
        const DEFAULT = 1 << 1;
    }
}

/// Runtime descriptor of a type.
///
/// Descriptors live in static memory and are built in const context with
/// [`TypeDesc::builder_for`]. Two descriptors are equal when they describe the
/// same Rust type.
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct TypeDesc {
    /// Unique type identifier, provided by the compiler.
    pub id: fn() -> TypeId,

    /// The type's simple name, without generic parameters or module path:
    /// `i16`, `String`, `Foo`, `Vec`.
    pub type_identifier: &'static str,

    /// What kind of value this is: scalar, user object, array, map...
    pub def: Def,

    /// See [`TypeFlags`].
    pub flags: TypeFlags,

    /// Function pointers for operations on values of this type.
    pub vtable: ValueVTable,
}

impl TypeDesc {
    /// Returns a builder for the descriptor of `T`.
    pub const fn builder_for<T: 'static>() -> TypeDescBuilder {
        TypeDescBuilder::new(TypeId::of::<T>)
    }

    /// Check if this descriptor describes `T`.
    pub fn is_type<T: Reflect>(&self) -> bool {
        self == T::DESC
    }

    /// Whether [`Value::Null`] may be stored in a slot of this type.
    pub fn is_nullable(&self) -> bool {
        self.flags.contains(TypeFlags::NULLABLE)
    }

    /// Whether this type has a default initializer.
    pub fn has_default(&self) -> bool {
        self.flags.contains(TypeFlags::DEFAULT)
    }

    /// Builds a fresh default instance, if the type has a default initializer.
    pub fn default_value(&self) -> Option<Value> {
        self.vtable.default.map(|default| default())
    }

    /// The component type, if this is an array type.
    pub fn array_component(&self) -> Option<&'static TypeDesc> {
        match self.def {
            Def::Array(array) => Some(array.t),
            _ => None,
        }
    }

    /// Whether this is an array type.
    pub fn is_array(&self) -> bool {
        matches!(self.def, Def::Array(_))
    }
}

/// Builder for [`TypeDesc`]
pub struct TypeDescBuilder {
    id: fn() -> TypeId,
    type_identifier: Option<&'static str>,
    def: Def,
    flags: TypeFlags,
    vtable: ValueVTable,
}

impl TypeDescBuilder {
    /// Creates a new builder for the type identified by `id`.
    pub const fn new(id: fn() -> TypeId) -> Self {
        Self {
            id,
            type_identifier: None,
            def: Def::Object,
            flags: TypeFlags::empty(),
            vtable: ValueVTable::new(),
        }
    }

    /// Sets the `type_identifier` field of the `TypeDescBuilder`.
    #[inline]
    pub const fn type_identifier(mut self, type_identifier: &'static str) -> Self {
        self.type_identifier = Some(type_identifier);
        self
    }

    /// Sets the `def` field of the `TypeDescBuilder`. Defaults to [`Def::Object`].
    #[inline]
    pub const fn def(mut self, def: Def) -> Self {
        self.def = def;
        self
    }

    /// Marks the type as accepting [`Value::Null`].
    #[inline]
    pub const fn nullable(mut self) -> Self {
        self.flags = self.flags.union(TypeFlags::NULLABLE);
        self
    }

    /// Sets the default initializer.
    #[inline]
    pub const fn default_value(mut self, default: DefaultFn) -> Self {
        self.vtable.default = Some(default);
        self.flags = self.flags.union(TypeFlags::DEFAULT);
        self
    }

    /// Builds a `TypeDesc` from the `TypeDescBuilder`.
    ///
    /// # Panics
    ///
    /// This method will panic if `type_identifier` was never set.
    #[inline]
    pub const fn build(self) -> TypeDesc {
        TypeDesc {
            id: self.id,
            type_identifier: self.type_identifier.unwrap(),
            def: self.def,
            flags: self.flags,
            vtable: self.vtable,
        }
    }
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        (self.id)() == (other.id)()
    }
}

impl Eq for TypeDesc {}

impl core::hash::Hash for TypeDesc {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        (self.id)().hash(state);
    }
}

// Simple name; arrays render as `<component>[]`
impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.def {
            Def::Array(array) => write!(f, "{}[]", array.t),
            _ => f.write_str(self.type_identifier),
        }
    }
}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug_struct = f.debug_struct("TypeDesc");

        debug_struct.field("type", &format_args!("{}", self));

        if !matches!(self.def, Def::Object) {
            debug_struct.field("def", &self.def);
        }

        if !self.flags.is_empty() {
            debug_struct.field("flags", &self.flags);
        }

        debug_struct.finish()
    }
}
