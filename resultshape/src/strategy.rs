use resultshape_core::{ConstructFn, Def, InsertFn, TypeDesc};

/// How a compound node turns the results of its elements into its own result.
///
/// The strategy never changes how many slots a node consumes, only how the
/// consumed sub-results are assembled.
#[derive(Clone, Copy)]
#[non_exhaustive]
pub enum FillStrategy {
    /// The single consumed value is the result, coerced to the node's type.
    Assign,

    /// The result is a fresh instance from the type's default initializer.
    ///
    /// Such a node can not declare elements.
    NewInstance,

    /// The result is returned by the handle, called with the sub-results as
    /// positional arguments in declaration order.
    Constructor(ConstructFn),

    /// The result starts out as a default instance; the handle is then called
    /// once per element with `(key, sub-result)`, the key being the element's
    /// alias.
    Map(InsertFn),

    /// The result is an array holding one sub-result per element, each
    /// coerced to the component type.
    Array,
}

impl FillStrategy {
    /// The strategy a compound node gets when none is given: [`Array`] for
    /// array types, [`Assign`] otherwise.
    ///
    /// [`Array`]: FillStrategy::Array
    /// [`Assign`]: FillStrategy::Assign
    pub fn default_for(ty: &TypeDesc) -> Self {
        if ty.is_array() {
            FillStrategy::Array
        } else {
            FillStrategy::Assign
        }
    }

    /// A [`Map`](FillStrategy::Map) strategy using the stock insertion handle
    /// of a map type, `None` if `ty` is not a map.
    pub fn map_for(ty: &TypeDesc) -> Option<Self> {
        match ty.def {
            Def::Map(map) => Some(FillStrategy::Map(map.insert)),
            _ => None,
        }
    }

    /// Short name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            FillStrategy::Assign => "Assign",
            FillStrategy::NewInstance => "NewInstance",
            FillStrategy::Constructor(_) => "Constructor",
            FillStrategy::Map(_) => "Map",
            FillStrategy::Array => "Array",
        }
    }

    /// Checks that a node of type `ty` with `element_count` elements can be
    /// filled with this strategy, returning the reason it can not.
    pub(crate) fn validate(&self, ty: &TypeDesc, element_count: usize) -> Result<(), &'static str> {
        match self {
            FillStrategy::Assign if element_count > 1 => {
                Err("assigns a single value, but the node has several elements")
            }
            FillStrategy::NewInstance if element_count > 0 => {
                Err("builds a default instance and can not take elements")
            }
            FillStrategy::NewInstance | FillStrategy::Map(_) if !ty.has_default() => {
                Err("needs a type with a default initializer")
            }
            FillStrategy::Array if !ty.is_array() => Err("needs an array type"),
            _ => Ok(()),
        }
    }
}

impl core::fmt::Debug for FillStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl PartialEq for FillStrategy {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FillStrategy::Constructor(a), FillStrategy::Constructor(b)) => {
                core::ptr::fn_addr_eq(*a, *b)
            }
            (FillStrategy::Map(a), FillStrategy::Map(b)) => core::ptr::fn_addr_eq(*a, *b),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}
