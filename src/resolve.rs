//! Mapping from field types onto Cloud Spanner column types.

use crate::reflect::TypeInfo;

/// Largest length accepted by `STRING(n)` (2.5 Mi characters).
pub const MAX_STRING_LENGTH: i64 = 2_621_440;
/// Largest length accepted by `BYTES(n)` (10 MiB).
pub const MAX_BYTES_LENGTH: i64 = 10_485_760;

/// A resolved column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlType {
    pub sql: String,
    /// Whether the type itself admits NULL, independent of any tag.
    pub nullable: bool,
}

impl SqlType {
    fn new(sql: impl Into<String>, nullable: bool) -> Self {
        Self {
            sql: sql.into(),
            nullable,
        }
    }
}

/// Resolve a field type and its declared size to a column type.
///
/// Sizes outside `1..=max` (including no size at all) render the unbounded
/// `MAX` form. The size applies to `STRING`/`BYTES`, element types of arrays
/// included, and is ignored elsewhere.
pub fn resolve(ty: &TypeInfo, size: Option<i64>) -> SqlType {
    match ty {
        TypeInfo::Pointer(pointee) => resolve(pointee, size),
        TypeInfo::Optional(inner) => SqlType::new(resolve(inner, size).sql, true),
        TypeInfo::Bool => SqlType::new("BOOL", false),
        TypeInfo::Int { .. } => SqlType::new("INT64", false),
        TypeInfo::Float { .. } => SqlType::new("FLOAT64", false),
        TypeInfo::Sequence(elem) if elem.is_byte() => {
            SqlType::new(sized("BYTES", size, MAX_BYTES_LENGTH), false)
        }
        TypeInfo::Sequence(elem) => {
            let elem = resolve(elem, size);
            SqlType::new(format!("ARRAY<{}>", elem.sql), elem.nullable)
        }
        TypeInfo::Named(name) => match named(name) {
            Some(resolved) => resolved,
            None => string(*name == "NullString", size),
        },
        TypeInfo::String | TypeInfo::Record(_) => string(false, size),
    }
}

fn named(name: &str) -> Option<SqlType> {
    let (sql, nullable) = match name {
        "Time" => ("TIMESTAMP", false),
        "NullBool" => ("BOOL", true),
        "NullDate" | "Date" => ("DATE", true),
        "NullFloat64" => ("FLOAT64", true),
        "NullInt64" => ("INT64", true),
        "NullTime" => ("TIMESTAMP", true),
        _ => return None,
    };
    Some(SqlType::new(sql, nullable))
}

fn string(nullable: bool, size: Option<i64>) -> SqlType {
    SqlType::new(sized("STRING", size, MAX_STRING_LENGTH), nullable)
}

fn sized(kind: &str, size: Option<i64>, max: i64) -> String {
    match size {
        Some(n) if (1..=max).contains(&n) => format!("{kind}({n})"),
        _ => format!("{kind}(MAX)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::FieldType;
    use crate::types::{Date, NullBool, NullDate, NullFloat64, NullInt64, NullString, NullTime};
    use chrono::{DateTime, NaiveDate, Utc};

    fn check<T: FieldType>(size: Option<i64>, sql: &str, nullable: bool) {
        let got = resolve(&T::type_info(), size);
        assert_eq!(got, SqlType::new(sql, nullable), "{}", std::any::type_name::<T>());
    }

    #[test]
    fn test_scalars() {
        check::<bool>(None, "BOOL", false);
        check::<Box<bool>>(None, "BOOL", false);
        check::<i8>(None, "INT64", false);
        check::<i16>(None, "INT64", false);
        check::<i32>(None, "INT64", false);
        check::<i64>(None, "INT64", false);
        check::<isize>(None, "INT64", false);
        check::<u8>(None, "INT64", false);
        check::<u16>(None, "INT64", false);
        check::<u32>(None, "INT64", false);
        check::<u64>(None, "INT64", false);
        check::<usize>(None, "INT64", false);
        check::<f32>(None, "FLOAT64", false);
        check::<f64>(None, "FLOAT64", false);
    }

    #[test]
    fn test_pointers_do_not_imply_null() {
        check::<Box<i64>>(None, "INT64", false);
        check::<std::sync::Arc<String>>(Some(12), "STRING(12)", false);
        check::<Box<NullFloat64>>(None, "FLOAT64", true);
    }

    #[test]
    fn test_option_is_nullable() {
        check::<Option<i64>>(None, "INT64", true);
        check::<Option<String>>(Some(20), "STRING(20)", true);
        check::<Option<Vec<u8>>>(None, "BYTES(MAX)", true);
    }

    #[test]
    fn test_named_wrappers() {
        check::<DateTime<Utc>>(None, "TIMESTAMP", false);
        check::<chrono::NaiveDateTime>(None, "TIMESTAMP", false);
        check::<NullBool>(None, "BOOL", true);
        check::<NullDate>(None, "DATE", true);
        check::<Date>(None, "DATE", true);
        check::<NaiveDate>(None, "DATE", true);
        check::<NullFloat64>(None, "FLOAT64", true);
        check::<NullInt64>(None, "INT64", true);
        check::<NullTime>(None, "TIMESTAMP", true);
    }

    #[test]
    fn test_bytes() {
        check::<Vec<u8>>(None, "BYTES(MAX)", false);
        check::<Vec<u8>>(Some(0), "BYTES(MAX)", false);
        check::<Vec<u8>>(Some(1), "BYTES(1)", false);
        check::<Vec<u8>>(Some(1_048_576), "BYTES(1048576)", false);
        check::<[u8; 16]>(None, "BYTES(MAX)", false);
        check::<Vec<u8>>(Some(MAX_BYTES_LENGTH), "BYTES(10485760)", false);
        check::<Vec<u8>>(Some(MAX_BYTES_LENGTH + 1), "BYTES(MAX)", false);
        check::<Vec<u8>>(Some(-1), "BYTES(MAX)", false);
    }

    #[test]
    fn test_strings() {
        check::<String>(None, "STRING(MAX)", false);
        check::<String>(Some(1), "STRING(1)", false);
        check::<String>(Some(MAX_STRING_LENGTH), "STRING(2621440)", false);
        check::<String>(Some(MAX_STRING_LENGTH + 1), "STRING(MAX)", false);
        check::<String>(Some(-5), "STRING(MAX)", false);
        check::<char>(None, "STRING(MAX)", false);
        check::<uuid::Uuid>(Some(36), "STRING(36)", false);
        check::<NullString>(None, "STRING(MAX)", true);
        check::<NullString>(Some(1), "STRING(1)", true);
        check::<NullString>(Some(MAX_STRING_LENGTH), "STRING(2621440)", true);
    }

    #[test]
    fn test_arrays() {
        check::<Vec<bool>>(None, "ARRAY<BOOL>", false);
        check::<Vec<i8>>(None, "ARRAY<INT64>", false);
        check::<Vec<u64>>(None, "ARRAY<INT64>", false);
        check::<Vec<f32>>(None, "ARRAY<FLOAT64>", false);
        check::<Vec<NullInt64>>(None, "ARRAY<INT64>", true);
        check::<Vec<Box<NullInt64>>>(None, "ARRAY<INT64>", true);
        check::<Vec<NullFloat64>>(None, "ARRAY<FLOAT64>", true);
        check::<Vec<Vec<u8>>>(None, "ARRAY<BYTES(MAX)>", false);
        check::<Vec<DateTime<Utc>>>(None, "ARRAY<TIMESTAMP>", false);
        check::<Vec<NullTime>>(None, "ARRAY<TIMESTAMP>", true);
        check::<Vec<String>>(None, "ARRAY<STRING(MAX)>", false);
        check::<Vec<String>>(Some(1), "ARRAY<STRING(1)>", false);
        check::<Vec<String>>(Some(MAX_STRING_LENGTH), "ARRAY<STRING(2621440)>", false);
        check::<Vec<NullString>>(Some(1), "ARRAY<STRING(1)>", true);
        check::<Vec<Option<i64>>>(None, "ARRAY<INT64>", true);
    }

    #[test]
    fn test_resolve_is_pure() {
        let ty = Vec::<NullString>::type_info();
        assert_eq!(resolve(&ty, Some(64)), resolve(&ty, Some(64)));
    }
}
