use crate::{Def, Reflect, ScalarType, TypeDesc, Value};

macro_rules! impl_scalar {
    ($type_name:ty, $variant:ident) => {
        impl Reflect for $type_name {
            const DESC: &'static TypeDesc = &const {
                TypeDesc::builder_for::<$type_name>()
                    .type_identifier(stringify!($type_name))
                    .def(Def::Scalar(ScalarType::$variant))
                    .default_value(|| Value::$variant(<$type_name>::default()))
                    .build()
            };

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }
        }

        impl From<$type_name> for Value {
            fn from(value: $type_name) -> Self {
                Value::$variant(value)
            }
        }
    };
}

impl_scalar!(bool, Bool);
impl_scalar!(i8, I8);
impl_scalar!(i16, I16);
impl_scalar!(i32, I32);
impl_scalar!(i64, I64);
impl_scalar!(f32, F32);
impl_scalar!(f64, F64);
impl_scalar!(char, Char);

impl Reflect for Value {
    const DESC: &'static TypeDesc = &const {
        TypeDesc::builder_for::<Value>()
            .type_identifier("Value")
            .def(Def::Dynamic)
            .nullable()
            .build()
    };

    fn into_value(self) -> Value {
        self
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(value)
    }
}
