//! Nullable scalar wrappers and the civil date type.
//!
//! Each wrapper is recognised by name when resolving column types, so a
//! field declared as `NullInt64` becomes a nullable `INT64` column without
//! any tag. They serialize transparently as their inner value.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::reflect::{FieldType, TypeInfo};

macro_rules! null_wrapper {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Option<$inner>);

        impl $name {
            pub fn new(value: $inner) -> Self {
                Self(Some(value))
            }

            pub fn null() -> Self {
                Self(None)
            }

            pub fn is_null(&self) -> bool {
                self.0.is_none()
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(Some(value))
            }
        }

        impl From<Option<$inner>> for $name {
            fn from(value: Option<$inner>) -> Self {
                Self(value)
            }
        }

        impl FieldType for $name {
            fn type_info() -> TypeInfo {
                TypeInfo::Named(stringify!($name))
            }
        }
    };
}

null_wrapper!(
    /// Nullable `BOOL`.
    NullBool(bool)
);
null_wrapper!(
    /// Nullable `INT64`.
    NullInt64(i64)
);
null_wrapper!(
    /// Nullable `FLOAT64`.
    NullFloat64(f64)
);
null_wrapper!(
    /// Nullable `STRING`; honours the `size` modifier.
    NullString(String)
);
null_wrapper!(
    /// Nullable `TIMESTAMP`.
    NullTime(DateTime<Utc>)
);
null_wrapper!(
    /// Nullable `DATE`.
    NullDate(NaiveDate)
);

/// A civil date. Maps to a nullable `DATE` column like [`NullDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(pub NaiveDate);

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FieldType for Date {
    fn type_info() -> TypeInfo {
        TypeInfo::Named("Date")
    }
}
