use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{ArrayDef, Def, InvokeError, MapDef, Reflect, ScalarType, TypeDesc, Value};

impl Reflect for String {
    const DESC: &'static TypeDesc = &const {
        TypeDesc::builder_for::<String>()
            .type_identifier("String")
            .def(Def::Scalar(ScalarType::String))
            .nullable()
            .default_value(|| Value::String(String::new()))
            .build()
    };

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    const DESC: &'static TypeDesc = &const {
        TypeDesc::builder_for::<Vec<T>>()
            .type_identifier("Vec")
            .def(Def::Array(ArrayDef::new(T::DESC)))
            .nullable()
            .default_value(|| Value::Array(Vec::new()))
            .build()
    };

    fn into_value(self) -> Value {
        Value::Array(self.into_iter().map(T::into_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        let items = match value {
            Value::Array(items) => items,
            other => return Err(other),
        };

        let mut out = Vec::with_capacity(items.len());
        let mut items = items.into_iter();
        while let Some(item) = items.next() {
            match T::from_value(item) {
                Ok(item) => out.push(item),
                Err(item) => {
                    // put everything back the way it was
                    let mut restored: Vec<Value> = out.into_iter().map(T::into_value).collect();
                    restored.push(item);
                    restored.extend(items);
                    return Err(Value::Array(restored));
                }
            }
        }
        Ok(out)
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: Reflect + Ord,
    V: Reflect,
{
    const DESC: &'static TypeDesc = &const {
        TypeDesc::builder_for::<BTreeMap<K, V>>()
            .type_identifier("BTreeMap")
            .def(Def::Map(MapDef::new(K::DESC, V::DESC, btreemap_insert::<K, V>)))
            .nullable()
            .default_value(|| Value::new(BTreeMap::<K, V>::new()))
            .build()
    };
}

fn btreemap_insert<K, V>(target: &mut Value, key: Value, value: Value) -> Result<(), InvokeError>
where
    K: Reflect + Ord,
    V: Reflect,
{
    let (key, value) = map_entry::<K, V>(key, value)?;
    let actual = target.desc();
    let map = target
        .downcast_mut::<BTreeMap<K, V>>()
        .ok_or(InvokeError::WrongTarget {
            expected: <BTreeMap<K, V>>::DESC,
            actual,
        })?;
    map.insert(key, value);
    Ok(())
}

/// Converts an untyped `(key, value)` pair into the map's own key and value
/// types, coercing where needed.
pub(crate) fn map_entry<K: Reflect, V: Reflect>(
    key: Value,
    value: Value,
) -> Result<(K, V), InvokeError> {
    Ok((typed_argument(0, key)?, typed_argument(1, value)?))
}

fn typed_argument<T: Reflect>(index: usize, value: Value) -> Result<T, InvokeError> {
    let actual = value.desc();
    let wrong = || InvokeError::WrongArgument {
        index,
        expected: T::DESC,
        actual,
    };
    let value = value.coerce_to(T::DESC).map_err(|_| wrong())?;
    T::from_value(value).map_err(|_| wrong())
}
