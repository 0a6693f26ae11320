//! Field metadata a record exposes to the struct walker.
//!
//! Rust has no runtime reflection, so records describe themselves through
//! [`Record`] (usually via `#[derive(Record)]`) and every field type through
//! [`FieldType`]. The resulting [`TypeInfo`] tree is what the type resolver
//! maps onto column types.

use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Shape of a field's type, as seen by the type resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeInfo {
    Bool,
    Int { bits: u8, signed: bool },
    Float { bits: u8 },
    String,
    /// Arrays, slices and vectors.
    Sequence(Box<TypeInfo>),
    /// Owning or borrowing pointers. Never implies nullability.
    Pointer(Box<TypeInfo>),
    /// `Option<T>`: resolves like `T`, always nullable.
    Optional(Box<TypeInfo>),
    /// A type recognised by name (`Time`, `NullInt64`, ...).
    Named(&'static str),
    /// A nested record.
    Record(RecordShape),
}

impl TypeInfo {
    pub fn sequence(elem: TypeInfo) -> Self {
        TypeInfo::Sequence(Box::new(elem))
    }

    pub fn pointer(pointee: TypeInfo) -> Self {
        TypeInfo::Pointer(Box::new(pointee))
    }

    pub fn optional(inner: TypeInfo) -> Self {
        TypeInfo::Optional(Box::new(inner))
    }

    /// True for `u8`, the element type of byte sequences.
    pub fn is_byte(&self) -> bool {
        matches!(self, TypeInfo::Int { bits: 8, signed: false })
    }

    /// The nested record behind a pointer, if this is one.
    pub fn embedded_record(&self) -> Option<&RecordShape> {
        match self {
            TypeInfo::Pointer(pointee) => match pointee.as_ref() {
                TypeInfo::Record(shape) => Some(shape),
                _ => None,
            },
            _ => None,
        }
    }
}

/// One declared field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldInfo {
    /// Column name the field maps onto.
    pub name: &'static str,
    /// Raw tag strings keyed by namespace, in declaration order.
    pub tags: &'static [(&'static str, &'static str)],
    pub type_info: TypeInfo,
}

impl FieldInfo {
    pub fn new(
        name: &'static str,
        tags: &'static [(&'static str, &'static str)],
        type_info: TypeInfo,
    ) -> Self {
        Self {
            name,
            tags,
            type_info,
        }
    }

    /// Raw tag string under `namespace`; the first occurrence wins.
    pub fn tag(&self, namespace: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(key, _)| *key == namespace)
            .map(|(_, raw)| *raw)
    }
}

/// Lazily evaluated field list of a record type.
///
/// Fields are produced on demand so self-referential records can describe
/// themselves without infinite recursion at construction time.
#[derive(Clone, Copy)]
pub struct RecordShape {
    name: &'static str,
    fields: fn() -> Vec<FieldInfo>,
}

impl RecordShape {
    pub const fn new(name: &'static str, fields: fn() -> Vec<FieldInfo>) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> Vec<FieldInfo> {
        (self.fields)()
    }
}

impl fmt::Debug for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordShape")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// Shapes compare by record name; function pointers carry no stable identity.
impl PartialEq for RecordShape {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A record type whose fields become columns.
///
/// Implemented by `#[derive(Record)]`.
pub trait Record {
    const NAME: &'static str;

    fn fields() -> Vec<FieldInfo>;

    fn shape() -> RecordShape
    where
        Self: Sized,
    {
        RecordShape::new(Self::NAME, Self::fields)
    }
}

/// Record shape of a value, object-safe counterpart of [`Record`].
pub trait Reflect {
    fn record_shape(&self) -> RecordShape;
}

impl<T: Record> Reflect for T {
    fn record_shape(&self) -> RecordShape {
        T::shape()
    }
}

/// A type that can appear as a record field.
pub trait FieldType {
    fn type_info() -> TypeInfo;
}

macro_rules! impl_int {
    ($($ty:ty => $bits:expr, $signed:expr);* $(;)?) => {
        $(
            impl FieldType for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::Int { bits: $bits, signed: $signed }
                }
            }
        )*
    };
}

impl_int! {
    i8 => 8, true;
    i16 => 16, true;
    i32 => 32, true;
    i64 => 64, true;
    isize => 64, true;
    u8 => 8, false;
    u16 => 16, false;
    u32 => 32, false;
    u64 => 64, false;
    usize => 64, false;
}

impl FieldType for bool {
    fn type_info() -> TypeInfo {
        TypeInfo::Bool
    }
}

impl FieldType for f32 {
    fn type_info() -> TypeInfo {
        TypeInfo::Float { bits: 32 }
    }
}

impl FieldType for f64 {
    fn type_info() -> TypeInfo {
        TypeInfo::Float { bits: 64 }
    }
}

impl FieldType for String {
    fn type_info() -> TypeInfo {
        TypeInfo::String
    }
}

impl FieldType for &str {
    fn type_info() -> TypeInfo {
        TypeInfo::String
    }
}

impl FieldType for char {
    fn type_info() -> TypeInfo {
        TypeInfo::String
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::sequence(T::type_info())
    }
}

impl<T: FieldType> FieldType for VecDeque<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::sequence(T::type_info())
    }
}

impl<T: FieldType, const N: usize> FieldType for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::sequence(T::type_info())
    }
}

impl<T: FieldType> FieldType for &[T] {
    fn type_info() -> TypeInfo {
        TypeInfo::sequence(T::type_info())
    }
}

impl<T: FieldType> FieldType for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::optional(T::type_info())
    }
}

macro_rules! impl_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: FieldType> FieldType for $ptr<T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::pointer(T::type_info())
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

impl<T: FieldType> FieldType for &T {
    fn type_info() -> TypeInfo {
        TypeInfo::pointer(T::type_info())
    }
}

impl<Tz: chrono::TimeZone> FieldType for chrono::DateTime<Tz> {
    fn type_info() -> TypeInfo {
        TypeInfo::Named("Time")
    }
}

impl FieldType for chrono::NaiveDateTime {
    fn type_info() -> TypeInfo {
        TypeInfo::Named("Time")
    }
}

impl FieldType for chrono::NaiveDate {
    fn type_info() -> TypeInfo {
        TypeInfo::Named("Date")
    }
}

impl FieldType for uuid::Uuid {
    fn type_info() -> TypeInfo {
        TypeInfo::Named("Uuid")
    }
}
