/// Implements [`Reflect`](crate::Reflect) for a user type, which is then
/// carried in [`Value::Object`](crate::Value::Object).
///
/// The type must implement `Debug`, `PartialEq`, `Send` and `Sync`. Its
/// descriptor is nullable and named after the type.
///
/// Pass `default` to register `Default::default` as the type's default
/// initializer, which the new-instance and map fill strategies need.
///
/// # Example
///
/// ```
/// use resultshape_core::{Reflect, impl_reflect};
///
/// #[derive(Debug, PartialEq, Default)]
/// struct Account {
///     id: i64,
/// }
///
/// impl_reflect!(Account, default);
///
/// assert_eq!(Account::DESC.to_string(), "Account");
/// assert!(Account::DESC.has_default());
/// ```
#[macro_export]
macro_rules! impl_reflect {
    ($type_name:ident) => {
        impl $crate::Reflect for $type_name {
            const DESC: &'static $crate::TypeDesc = &const {
                $crate::TypeDesc::builder_for::<$type_name>()
                    .type_identifier(::core::stringify!($type_name))
                    .def($crate::Def::Object)
                    .nullable()
                    .build()
            };
        }
    };
    ($type_name:ident, default) => {
        impl $crate::Reflect for $type_name {
            const DESC: &'static $crate::TypeDesc = &const {
                $crate::TypeDesc::builder_for::<$type_name>()
                    .type_identifier(::core::stringify!($type_name))
                    .def($crate::Def::Object)
                    .nullable()
                    .default_value(|| {
                        $crate::Value::new(<$type_name as ::core::default::Default>::default())
                    })
                    .build()
            };
        }
    };
}
