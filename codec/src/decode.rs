//! Canonical byte decoding.
//!
//! Fixed-width kinds read exactly their width from the front of the input;
//! trailing bytes are ignored. Decoding always parses into an owned [`Value`]
//! before touching the slot, so a failed decode leaves the field unchanged.

use std::collections::HashMap;

use cellmap_core::{Kind, MapError, MapResult, Slot, Value};

/// Decode `bytes` into the field behind `slot`.
pub fn decode(slot: &mut Slot<'_>, bytes: &[u8]) -> MapResult<()> {
    if !slot.is_settable() {
        return Err(MapError::not_settable(slot.kind()));
    }
    let value = decode_as(slot.kind(), bytes)?;
    slot.set(value)
}

/// Decode `bytes` as a value of `kind`.
pub fn decode_as(kind: Kind, bytes: &[u8]) -> MapResult<Value> {
    let value = match kind {
        Kind::Bytes => Value::Bytes(bytes.to_vec()),
        Kind::Text => Value::Text(decode_text(bytes)?),
        Kind::Bool => {
            let first = bytes.first().ok_or_else(|| MapError::truncated(kind, 1, 0))?;
            Value::Bool(*first == 1)
        }
        Kind::I8 => Value::I8(i8::from_be_bytes(fixed(kind, bytes)?)),
        Kind::I16 => Value::I16(i16::from_be_bytes(fixed(kind, bytes)?)),
        Kind::I32 => Value::I32(i32::from_be_bytes(fixed(kind, bytes)?)),
        Kind::I64 => Value::I64(i64::from_be_bytes(fixed(kind, bytes)?)),
        Kind::Isize => {
            let n = i64::from_be_bytes(fixed(kind, bytes)?);
            Value::Isize(isize::try_from(n).map_err(|_| MapError::overflow(kind, n))?)
        }
        Kind::U8 => Value::U8(u8::from_be_bytes(fixed(kind, bytes)?)),
        Kind::U16 => Value::U16(u16::from_be_bytes(fixed(kind, bytes)?)),
        Kind::U32 => Value::U32(u32::from_be_bytes(fixed(kind, bytes)?)),
        Kind::U64 => Value::U64(u64::from_be_bytes(fixed(kind, bytes)?)),
        Kind::Usize => {
            let n = u64::from_be_bytes(fixed(kind, bytes)?);
            Value::Usize(usize::try_from(n).map_err(|_| MapError::overflow(kind, n))?)
        }
        Kind::F32 => Value::F32(f32::from_be_bytes(fixed(kind, bytes)?)),
        Kind::F64 => Value::F64(f64::from_be_bytes(fixed(kind, bytes)?)),
        // A single cell never decodes into a whole family.
        Kind::Map => return Err(MapError::type_mismatch(Kind::Map, Kind::Bytes)),
    };
    Ok(value)
}

/// Interpret raw cell bytes as text.
pub fn decode_text(bytes: &[u8]) -> MapResult<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| MapError::invalid_text(e.to_string()))
}

/// Replace a map slot with the given `(qualifier, value)` cells.
///
/// Any previous content of the map is discarded.
pub fn decode_map<'c>(
    slot: &mut Slot<'_>,
    cells: impl IntoIterator<Item = (&'c str, &'c [u8])>,
) -> MapResult<()> {
    if !slot.is_settable() {
        return Err(MapError::not_settable(slot.kind()));
    }
    if slot.kind() != Kind::Map {
        return Err(MapError::type_mismatch(slot.kind(), Kind::Map));
    }
    let mut map = HashMap::new();
    for (qualifier, value) in cells {
        map.insert(qualifier.to_string(), decode_text(value)?);
    }
    slot.set(Value::Map(map))
}

fn fixed<const N: usize>(kind: Kind, bytes: &[u8]) -> MapResult<[u8; N]> {
    let raw = bytes
        .get(..N)
        .ok_or_else(|| MapError::truncated(kind, N, bytes.len()))?;
    let mut array = [0u8; N];
    array.copy_from_slice(raw);
    Ok(array)
}
