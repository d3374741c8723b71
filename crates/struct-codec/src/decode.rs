//! Tolerant decoder.
//!
//! Known keys are converted into their fields, unknown keys are captured
//! verbatim into [`Extras`]. A failed decode never yields a partial value.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::descriptor::{Record, SlotDecodeError, TypeDescriptor};
use crate::error::{format_pointer, DecodeError};
use crate::extras::Extras;
use crate::value::{json_type_name, RawValue};

impl<T: Default> TypeDescriptor<T> {
    /// Decodes a top-level JSON object, returning the value and its extras.
    pub fn decode_value(&self, value: RawValue) -> Result<(T, Extras), DecodeError> {
        let Value::Object(map) = value else {
            let err = DecodeError::NotAnObject {
                found: json_type_name(&value),
            };
            debug!(type_name = self.name(), error = %err, "decode failed");
            return Err(err);
        };
        self.decode_object(map).inspect_err(|err| {
            debug!(type_name = self.name(), error = %err, "decode failed");
        })
    }

    pub fn decode_slice(&self, bytes: &[u8]) -> Result<(T, Extras), DecodeError> {
        let value: RawValue = serde_json::from_slice(bytes)?;
        self.decode_value(value)
    }

    pub fn decode_str(&self, text: &str) -> Result<(T, Extras), DecodeError> {
        let value: RawValue = serde_json::from_str(text)?;
        self.decode_value(value)
    }

    pub(crate) fn decode_object(
        &self,
        map: Map<String, Value>,
    ) -> Result<(T, Extras), DecodeError> {
        let mut target = T::default();
        let mut extras = Extras::new();

        for (key, value) in map {
            let Some(field) = self.field(&key) else {
                trace!(type_name = self.name(), wire_key = %key, "unknown key kept in extras");
                extras.insert(key, value);
                continue;
            };
            if value.is_null() {
                continue;
            }
            match field.slot.decode(&mut target, value) {
                Ok(()) => {}
                Err(SlotDecodeError::Mismatch(mismatch)) => {
                    let mut path = Vec::with_capacity(mismatch.path.len() + 1);
                    path.push(key);
                    path.extend(mismatch.path);
                    return Err(DecodeError::TypeMismatch {
                        type_name: self.name(),
                        field: field.name(),
                        wire_key: field.wire_key(),
                        expected: field.kind(),
                        found: mismatch.found,
                        pointer: format_pointer(&path),
                    });
                }
                Err(SlotDecodeError::Nested(err)) => return Err(err.nested_under(&key)),
            }
        }

        Ok((target, extras))
    }
}

/// Decodes a nested object into a record, storing its own extras.
pub(crate) fn decode_nested<R: Record>(map: Map<String, Value>) -> Result<R, DecodeError> {
    let (mut record, extras) = R::descriptor().decode_object(map)?;
    *record.extras_mut() = extras;
    Ok(record)
}

/// Decodes JSON bytes into a record.
pub fn decode<R: Record>(bytes: &[u8]) -> Result<R, DecodeError> {
    let value: RawValue = serde_json::from_slice(bytes)?;
    decode_value(value)
}

pub fn decode_str<R: Record>(text: &str) -> Result<R, DecodeError> {
    let value: RawValue = serde_json::from_str(text)?;
    decode_value(value)
}

pub fn decode_value<R: Record>(value: RawValue) -> Result<R, DecodeError> {
    let (mut record, extras) = R::descriptor().decode_value(value)?;
    *record.extras_mut() = extras;
    Ok(record)
}
