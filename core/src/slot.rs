//! Field slots: borrowed, typed access to one field of a record instance.

use std::collections::HashMap;

use crate::{Kind, MapError, MapResult, Value};

/// A reference to a single field inside a record.
///
/// Every variant except `View` holds a mutable borrow and can be overwritten in
/// place. `View` carries a snapshot of a computed field: it can be encoded but
/// never assigned.
#[derive(Debug)]
pub enum Slot<'a> {
    Bytes(&'a mut Vec<u8>),
    Text(&'a mut String),
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Map(&'a mut HashMap<String, String>),
    View(Value),
}

impl<'a> Slot<'a> {
    /// Create a read-only slot from a computed value.
    pub fn view(value: impl Into<Value>) -> Self {
        Slot::View(value.into())
    }

    /// Returns the kind of the underlying field.
    pub fn kind(&self) -> Kind {
        match self {
            Slot::Bytes(_) => Kind::Bytes,
            Slot::Text(_) => Kind::Text,
            Slot::Bool(_) => Kind::Bool,
            Slot::I8(_) => Kind::I8,
            Slot::I16(_) => Kind::I16,
            Slot::I32(_) => Kind::I32,
            Slot::I64(_) => Kind::I64,
            Slot::Isize(_) => Kind::Isize,
            Slot::U8(_) => Kind::U8,
            Slot::U16(_) => Kind::U16,
            Slot::U32(_) => Kind::U32,
            Slot::U64(_) => Kind::U64,
            Slot::Usize(_) => Kind::Usize,
            Slot::F32(_) => Kind::F32,
            Slot::F64(_) => Kind::F64,
            Slot::Map(_) => Kind::Map,
            Slot::View(v) => v.kind(),
        }
    }

    /// Returns true if the slot can be overwritten.
    pub fn is_settable(&self) -> bool {
        !matches!(self, Slot::View(_))
    }

    /// Returns true if the field currently holds the zero value of its kind.
    pub fn is_zero(&self) -> bool {
        match self {
            Slot::Bytes(b) => b.is_empty(),
            Slot::Text(s) => s.is_empty(),
            Slot::Bool(b) => !**b,
            Slot::I8(v) => **v == 0,
            Slot::I16(v) => **v == 0,
            Slot::I32(v) => **v == 0,
            Slot::I64(v) => **v == 0,
            Slot::Isize(v) => **v == 0,
            Slot::U8(v) => **v == 0,
            Slot::U16(v) => **v == 0,
            Slot::U32(v) => **v == 0,
            Slot::U64(v) => **v == 0,
            Slot::Usize(v) => **v == 0,
            Slot::F32(v) => v.to_bits() == 0,
            Slot::F64(v) => v.to_bits() == 0,
            Slot::Map(m) => m.is_empty(),
            Slot::View(v) => v.is_zero(),
        }
    }

    /// Overwrite the field with `value`.
    ///
    /// The value's kind must equal the slot's kind. On error the field is left
    /// untouched.
    pub fn set(&mut self, value: Value) -> MapResult<()> {
        match (self, value) {
            (Slot::Bytes(dst), Value::Bytes(v)) => **dst = v,
            (Slot::Text(dst), Value::Text(v)) => **dst = v,
            (Slot::Bool(dst), Value::Bool(v)) => **dst = v,
            (Slot::I8(dst), Value::I8(v)) => **dst = v,
            (Slot::I16(dst), Value::I16(v)) => **dst = v,
            (Slot::I32(dst), Value::I32(v)) => **dst = v,
            (Slot::I64(dst), Value::I64(v)) => **dst = v,
            (Slot::Isize(dst), Value::Isize(v)) => **dst = v,
            (Slot::U8(dst), Value::U8(v)) => **dst = v,
            (Slot::U16(dst), Value::U16(v)) => **dst = v,
            (Slot::U32(dst), Value::U32(v)) => **dst = v,
            (Slot::U64(dst), Value::U64(v)) => **dst = v,
            (Slot::Usize(dst), Value::Usize(v)) => **dst = v,
            (Slot::F32(dst), Value::F32(v)) => **dst = v,
            (Slot::F64(dst), Value::F64(v)) => **dst = v,
            (Slot::Map(dst), Value::Map(v)) => **dst = v,
            (Slot::View(current), _) => return Err(MapError::not_settable(current.kind())),
            (dst, value) => return Err(MapError::type_mismatch(dst.kind(), value.kind())),
        }
        Ok(())
    }
}

macro_rules! slot_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Slot<'a> {
                fn from(field: &'a mut $ty) -> Self {
                    Slot::$variant(field)
                }
            }
        )+
    };
}

slot_from! {
    Vec<u8> => Bytes,
    String => Text,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    HashMap<String, String> => Map,
}
