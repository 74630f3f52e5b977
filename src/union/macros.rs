//! Declaration macro for typed union fields

/// Declare a typed union field: an identifier string or one of several records.
///
/// The first variant holds the bare identifier; the remaining variants wrap
/// types implementing [`Record`](crate::models::Record), tried in the order
/// written. Generates the enum, its [`UnionField`](crate::union::UnionField)
/// alternative table, and serde impls that go through the union decoder.
/// Serializing an expanded record re-emits its additional properties.
///
/// ```rust,ignore
/// union_field! {
///     /// Accounting period reference
///     pub enum AccountingPeriodRef("accounting_period") {
///         Id(String),
///         AccountingPeriod(AccountingPeriod),
///     }
/// }
/// ```
#[macro_export]
macro_rules! union_field {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($field:literal) {
            $id:ident(String),
            $($variant:ident($record:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            /// Bare identifier of the referenced object
            $id(String),
            $(
                #[doc = concat!("Expanded `", stringify!($record), "` object")]
                $variant($record),
            )+
        }

        impl $crate::union::UnionField for $name {
            const FIELD: &'static str = $field;

            fn alternatives() -> &'static [$crate::union::Variant<Self>] {
                static ALTERNATIVES: &[$crate::union::Variant<$name>] = &[
                    $crate::union::Variant::scalar(
                        $crate::schema::JsonType::String,
                        |raw| $crate::union::string_value(raw).map($name::$id),
                        |value| matches!(value, $name::$id(_)),
                    ),
                    $(
                        $crate::union::Variant::record(
                            <$record as $crate::models::Record>::SCHEMA,
                            |raw| {
                                <$record as $crate::models::Record>::from_json(raw)
                                    .map($name::$variant)
                            },
                            |value| match value {
                                $name::$variant(record) => {
                                    $crate::models::Record::conforms(record)
                                }
                                _ => false,
                            },
                        ),
                    )+
                ];
                ALTERNATIVES
            }
        }

        impl $name {
            /// Identifier, when the field arrived in its short form
            pub fn as_id(&self) -> Option<&str> {
                match self {
                    $name::$id(id) => Some(id),
                    _ => None,
                }
            }

            /// Whether the field arrived as an expanded object
            pub fn is_expanded(&self) -> bool {
                !matches!(self, $name::$id(_))
            }

            /// Label of the alternative this value belongs to
            pub fn alternative(&self) -> $crate::error::Result<&'static str> {
                $crate::union::validate(self)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $name::$id(id) => serializer.serialize_str(id),
                    $(
                        $name::$variant(record) => ::serde::Serialize::serialize(
                            &$crate::models::Record::to_json(record),
                            serializer,
                        ),
                    )+
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $crate::union::decode(&raw).map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}
