//! Enum tables
//!
//! Closed mappings from symbolic names to the API's fixed wire codes.

use crate::error::{Error, Result};
use crate::schema::FieldKind;

/// A closed set of wire codes
pub trait EnumTable: Sized + Copy + 'static {
    /// Type name, used in errors
    const NAME: &'static str;

    /// All members, in declaration order
    const VARIANTS: &'static [Self];

    /// Wire codes, parallel to [`EnumTable::VARIANTS`]
    const CODES: &'static [&'static str];

    /// Shape-check kind for a field of this enum
    const FIELD_KIND: FieldKind = FieldKind::Enum {
        name: Self::NAME,
        codes: Self::CODES,
    };

    /// Wire code of this member
    fn as_str(&self) -> &'static str;

    /// Look up a member by wire code
    fn from_code(code: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == code)
    }

    /// Look up a member by wire code, failing on unknown codes
    fn parse_code(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| Error::unknown_enum(Self::NAME, code))
    }
}

macro_rules! enum_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl EnumTable for $name {
            const NAME: &'static str = stringify!($name);
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];
            const CODES: &'static [&'static str] = &[$($code),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_code(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let code = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse_code(&code).map_err(serde::de::Error::custom)
            }
        }
    };
}

enum_table! {
    /// Status of an accounting period
    pub enum AccountingPeriodStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

enum_table! {
    /// Status of a tracking category
    pub enum TrackingCategoryStatus {
        Active => "ACTIVE",
        Archived => "ARCHIVED",
    }
}

enum_table! {
    /// Kind of tracking category
    pub enum CategoryType {
        Class => "CLASS",
        Department => "DEPARTMENT",
    }
}

enum_table! {
    /// Status of a contact
    pub enum ContactStatus {
        Active => "ACTIVE",
        Archived => "ARCHIVED",
    }
}

enum_table! {
    /// Lifecycle state of a purchase order
    pub enum PurchaseOrderStatus {
        Draft => "DRAFT",
        Submitted => "SUBMITTED",
        Authorized => "AUTHORIZED",
        Billed => "BILLED",
        Deleted => "DELETED",
    }
}
