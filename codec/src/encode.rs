//! Canonical byte encoding.
//!
//! Numbers are fixed-width big-endian; `isize`/`usize` always take 8 bytes.

use cellmap_core::{Kind, MapError, MapResult, Slot, Value};

/// Encode the current value of a field slot.
pub fn encode(slot: &Slot<'_>) -> MapResult<Vec<u8>> {
    let bytes = match slot {
        Slot::Bytes(b) => b.to_vec(),
        Slot::Text(s) => s.as_bytes().to_vec(),
        Slot::Bool(b) => vec![u8::from(**b)],
        Slot::I8(v) => v.to_be_bytes().to_vec(),
        Slot::I16(v) => v.to_be_bytes().to_vec(),
        Slot::I32(v) => v.to_be_bytes().to_vec(),
        Slot::I64(v) => v.to_be_bytes().to_vec(),
        Slot::Isize(v) => (**v as i64).to_be_bytes().to_vec(),
        Slot::U8(v) => v.to_be_bytes().to_vec(),
        Slot::U16(v) => v.to_be_bytes().to_vec(),
        Slot::U32(v) => v.to_be_bytes().to_vec(),
        Slot::U64(v) => v.to_be_bytes().to_vec(),
        Slot::Usize(v) => (**v as u64).to_be_bytes().to_vec(),
        Slot::F32(v) => v.to_be_bytes().to_vec(),
        Slot::F64(v) => v.to_be_bytes().to_vec(),
        Slot::Map(_) => return Err(MapError::unsupported_type(Kind::Map.type_name())),
        Slot::View(value) => return encode_value(value),
    };
    Ok(bytes)
}

/// Encode an owned value.
pub fn encode_value(value: &Value) -> MapResult<Vec<u8>> {
    let bytes = match value {
        Value::Bytes(b) => b.clone(),
        Value::Text(s) => s.as_bytes().to_vec(),
        Value::Bool(b) => vec![u8::from(*b)],
        Value::I8(v) => v.to_be_bytes().to_vec(),
        Value::I16(v) => v.to_be_bytes().to_vec(),
        Value::I32(v) => v.to_be_bytes().to_vec(),
        Value::I64(v) => v.to_be_bytes().to_vec(),
        Value::Isize(v) => (*v as i64).to_be_bytes().to_vec(),
        Value::U8(v) => v.to_be_bytes().to_vec(),
        Value::U16(v) => v.to_be_bytes().to_vec(),
        Value::U32(v) => v.to_be_bytes().to_vec(),
        Value::U64(v) => v.to_be_bytes().to_vec(),
        Value::Usize(v) => (*v as u64).to_be_bytes().to_vec(),
        Value::F32(v) => v.to_be_bytes().to_vec(),
        Value::F64(v) => v.to_be_bytes().to_vec(),
        Value::Map(_) => return Err(MapError::unsupported_type(Kind::Map.type_name())),
    };
    Ok(bytes)
}
