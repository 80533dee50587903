use core::hash::Hash;
use std::collections::HashMap;

use crate::impls_alloc::map_entry;
use crate::{Def, InvokeError, MapDef, Reflect, TypeDesc, Value};

impl<K, V> Reflect for HashMap<K, V>
where
    K: Reflect + Eq + Hash,
    V: Reflect,
{
    const DESC: &'static TypeDesc = &const {
        TypeDesc::builder_for::<HashMap<K, V>>()
            .type_identifier("HashMap")
            .def(Def::Map(MapDef::new(K::DESC, V::DESC, hashmap_insert::<K, V>)))
            .nullable()
            .default_value(|| Value::new(HashMap::<K, V>::new()))
            .build()
    };
}

fn hashmap_insert<K, V>(target: &mut Value, key: Value, value: Value) -> Result<(), InvokeError>
where
    K: Reflect + Eq + Hash,
    V: Reflect,
{
    let (key, value) = map_entry::<K, V>(key, value)?;
    let actual = target.desc();
    let map = target
        .downcast_mut::<HashMap<K, V>>()
        .ok_or(InvokeError::WrongTarget {
            expected: <HashMap<K, V>>::DESC,
            actual,
        })?;
    map.insert(key, value);
    Ok(())
}
